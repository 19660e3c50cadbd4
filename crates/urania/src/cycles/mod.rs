pub mod analyzer;
pub mod resonance;
pub mod types;

pub use analyzer::{
    compute_cycles, cycle_length, cycle_phase, cycles_for_chart, cycles_from_motion,
    reference_longitude, MotionSample,
};
pub use resonance::harmonic_resonance;
pub use types::{CyclePhase, CycleState, Resonance, STATIONARY_EPSILON};
