pub mod builder;
pub mod lunar;
pub mod types;

pub use builder::{assemble_chart, classify_body, compute_chart, sample_bodies, sample_body, BodySample};
pub use types::{CelestialBody, Chart, ChartAngle, Lot, LotKind, MoonPhase};
