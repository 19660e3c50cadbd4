//! Forecast horizons.
//!
//! A forecast re-runs the whole pipeline at evenly spaced instants from a
//! start time and averages the aggregate index.

use crate::sentiment::CompositeIndex;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    /// A single sample at the start
    Hourly,
    /// 24 hourly samples
    Daily,
    /// 7 daily samples
    Weekly,
    /// 30 daily samples
    Monthly,
    /// A sample every 10 days across 365 days
    Yearly,
}

impl Horizon {
    pub const ALL: [Horizon; 5] = [
        Horizon::Hourly,
        Horizon::Daily,
        Horizon::Weekly,
        Horizon::Monthly,
        Horizon::Yearly,
    ];

    fn step_and_count(self) -> (Duration, i64) {
        match self {
            Horizon::Hourly => (Duration::hours(1), 1),
            Horizon::Daily => (Duration::hours(1), 24),
            Horizon::Weekly => (Duration::days(1), 7),
            Horizon::Monthly => (Duration::days(1), 30),
            Horizon::Yearly => (Duration::days(10), 37),
        }
    }

    /// Sample instants, starting at `start`. `None` when the last sample
    /// falls outside the representable range.
    pub fn sample_instants(self, start: DateTime<Utc>) -> Option<Vec<DateTime<Utc>>> {
        let (step, count) = self.step_and_count();
        (0..count)
            .map(|i| start.checked_add_signed(Duration::milliseconds(step.num_milliseconds() * i)))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::Hourly => "hourly",
            Horizon::Daily => "daily",
            Horizon::Weekly => "weekly",
            Horizon::Monthly => "monthly",
            Horizon::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastSample {
    pub instant: DateTime<Utc>,
    pub aggregate: CompositeIndex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub horizon: Horizon,
    pub start: DateTime<Utc>,
    pub samples: Vec<ForecastSample>,
    /// Arithmetic mean of the sample aggregates
    pub mean: CompositeIndex,
}

impl Forecast {
    pub fn from_samples(horizon: Horizon, start: DateTime<Utc>, samples: Vec<ForecastSample>) -> Self {
        let mean = if samples.is_empty() {
            0.0
        } else {
            samples.iter().map(|s| s.aggregate.value).sum::<f64>() / samples.len() as f64
        };
        Self {
            horizon,
            start,
            samples,
            mean: CompositeIndex::new(mean),
        }
    }
}
