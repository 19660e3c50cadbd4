use crate::bodies::Body;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Below this |velocity| (°/day) a body is treated as stationary.
pub const STATIONARY_EPSILON: f64 = 1e-4;

/// Where a body sits within its current cycle through the sidereal circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CyclePhase {
    /// Fraction of the circle traversed, `longitude / 360`
    pub progress: f64,
    pub days_since_start: f64,
    pub days_to_end: f64,
    pub start_longitude: f64,
    /// Start + 180°
    pub midpoint_longitude: f64,
    pub percent_from_start: f64,
    pub percent_to_midpoint: f64,
    /// `None` if the offset falls outside chrono's range
    pub started_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleState {
    pub body: Body,
    /// Sidereal longitude at the analysed instant
    pub longitude: f64,
    /// Degrees per day, negative when retrograde
    pub velocity: f64,
    /// Days per full circle; `f64::INFINITY` when stationary
    pub cycle_length: f64,
    pub retrograde: bool,
    /// [-1, 1]
    pub frequency: f64,
    /// `None` when the cycle is infinite
    pub phase: Option<CyclePhase>,
}

impl CycleState {
    pub fn is_stationary(&self) -> bool {
        self.cycle_length.is_infinite()
    }
}

/// Pair of bodies whose cycles resonate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resonance {
    pub first: Body,
    pub second: Body,
    pub separation: f64,
    /// min(f1/f2, f2/f1), or 1 if either frequency is 0
    pub frequency_ratio: f64,
    pub resonance: f64,
}
