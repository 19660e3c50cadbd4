pub mod resolver;
pub mod shadow;
pub mod table;
pub mod types;

#[cfg(feature = "swisseph")]
pub mod swiss;

pub use resolver::PositionResolver;
pub use shadow::{mean_element, shadow_longitude, MeanElement, ShadowPointResolver};
pub use table::{sample_instants, PositionTable};
pub use types::{GeoLocation, RawPosition};

#[cfg(feature = "swisseph")]
pub use swiss::SwissEphemerisResolver;
