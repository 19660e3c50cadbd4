pub mod angles;
pub mod time;
pub mod transform;

pub use angles::{normalize_degrees, separation, signed_delta};
pub use time::{earth_rotation_angle, gmst_deg, julian_day, local_sidereal_time_deg, J2000_JD};
pub use transform::{
    ascendant_longitude, ecliptic_to_equatorial, midheaven_longitude, sidereal_longitude,
    AngleEstimate, Confidence, DEFAULT_OBLIQUITY_DEG,
};
