pub mod extractor;
pub mod types;

pub use extractor::compute_patterns;
pub use types::{Pattern, PatternKind};
