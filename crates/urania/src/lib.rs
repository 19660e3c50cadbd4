//! Sidereal chart engine.
//!
//! Turns raw body positions into a classified chart and derives aspects,
//! geometric patterns, day-over-day motion and a bounded composite index.
//! Positions come from any [`PositionResolver`]; everything downstream is
//! pure and deterministic.

pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod coords;
pub mod cycles;
pub mod engine;
pub mod ephemeris;
pub mod error;
pub mod forecast;
pub mod patterns;
pub mod profile;
pub mod sentiment;
pub mod zodiac;

pub use aspects::{Aspect, AspectKind, AspectTable};
pub use bodies::{Body, BodyClass, BodySet};
pub use chart::{CelestialBody, Chart, ChartAngle, Lot, LotKind, MoonPhase};
pub use cycles::{CyclePhase, CycleState, Resonance};
pub use engine::{Snapshot, Urania};
pub use ephemeris::{GeoLocation, PositionResolver, PositionTable, RawPosition, ShadowPointResolver};
pub use error::{ConfigurationError, ResolutionError, Result, UraniaError};
pub use forecast::{Forecast, Horizon};
pub use patterns::{Pattern, PatternKind};
pub use profile::{AnalysisProfile, Ayanamsa};
pub use sentiment::{CompositeIndex, CompositeReport, IndexBucket};
pub use zodiac::{Dignity, HouseAnchor, ZodiacSign};

#[cfg(feature = "swisseph")]
pub use ephemeris::SwissEphemerisResolver;
