pub mod calculator;
pub mod types;

pub use calculator::{compute_aspects, AspectCalculator, AspectMatch};
pub use types::{Aspect, AspectDefinition, AspectKind, AspectTable, PRESET_NAMES};
