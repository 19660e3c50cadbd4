pub mod dignity;
pub mod houses;
pub mod nakshatra;
pub mod signs;

pub use dignity::{dignity_entry, dignity_of, Dignity, DignityEntry};
pub use houses::{house_anchor_degree, house_cusps, house_number, HouseAnchor};
pub use nakshatra::{nakshatra_for_longitude, NakshatraPlacement, NAKSHATRA_WIDTH_DEG};
pub use signs::{Element, Modality, Polarity, ZodiacSign};
