pub mod synthesizer;
pub mod trend;
pub mod types;

pub use synthesizer::{body_index, compute_composite_index, retrograde_factor, velocity_factor};
pub use trend::{trend_status, Quadrant, TrendDirection, TrendStatus};
pub use types::{BodyIndex, CompositeIndex, CompositeReport, IndexBucket, IndexTerms};
