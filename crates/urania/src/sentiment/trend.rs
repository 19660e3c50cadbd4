//! Trend of a single body's index.
//!
//! Direction comes from the sign of the body's velocity. The index range is
//! cut into four quadrants whose labels depend on direction, so a body
//! climbing out of the bottom half reads Q4 to Q3 and one falling through the
//! top half reads Q3 to Q4.

use crate::bodies::Body;
use crate::sentiment::types::IndexBucket;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Upward,
    Downward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    Q1,
    Q2,
    Q3,
    Q4,
}

const UPWARD_ORDER: [Quadrant; 4] = [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];
const DOWNWARD_ORDER: [Quadrant; 4] = [Quadrant::Q4, Quadrant::Q3, Quadrant::Q2, Quadrant::Q1];

// (threshold, bucket below, bucket above)
const THRESHOLDS: [(f64, IndexBucket, IndexBucket); 4] = [
    (-0.5, IndexBucket::ExtremeFear, IndexBucket::Fear),
    (-0.1, IndexBucket::Fear, IndexBucket::Neutral),
    (0.1, IndexBucket::Neutral, IndexBucket::Greed),
    (0.5, IndexBucket::Greed, IndexBucket::ExtremeGreed),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendStatus {
    pub body: Body,
    pub index: f64,
    pub direction: TrendDirection,
    pub quadrant: Quadrant,
    pub previous_quadrant: Quadrant,
    pub next_quadrant: Quadrant,
    /// How far through the index range the body is, in the direction of travel
    pub percent_through: f64,
    /// Next bucket boundary in the direction of travel, if any remains
    pub next_threshold: Option<f64>,
    pub next_bucket: Option<IndexBucket>,
}

fn quadrant_for(index: f64, direction: TrendDirection) -> Quadrant {
    let band = if index < -0.5 {
        0
    } else if index < 0.0 {
        1
    } else if index < 0.5 {
        2
    } else {
        3
    };
    let labels = match direction {
        TrendDirection::Upward => [Quadrant::Q4, Quadrant::Q3, Quadrant::Q1, Quadrant::Q2],
        TrendDirection::Downward => [Quadrant::Q1, Quadrant::Q2, Quadrant::Q4, Quadrant::Q3],
    };
    labels[band]
}

/// Trend of `body` with composite index `index` moving at `velocity`.
pub fn trend_status(body: Body, index: f64, velocity: f64) -> TrendStatus {
    let index = index.clamp(-1.0, 1.0);
    let direction = if velocity > 0.0 {
        TrendDirection::Upward
    } else {
        TrendDirection::Downward
    };
    let quadrant = quadrant_for(index, direction);
    let order = match direction {
        TrendDirection::Upward => UPWARD_ORDER,
        TrendDirection::Downward => DOWNWARD_ORDER,
    };
    let position = order.iter().position(|q| *q == quadrant).unwrap_or(0);

    let bucket = IndexBucket::from_value(index);
    let (percent_through, next) = match direction {
        TrendDirection::Upward => (
            (index + 1.0) / 2.0 * 100.0,
            THRESHOLDS
                .iter()
                .find(|(_, _, above)| *above > bucket)
                .map(|(t, _, above)| (*t, *above)),
        ),
        TrendDirection::Downward => (
            (1.0 - index) / 2.0 * 100.0,
            THRESHOLDS
                .iter()
                .rev()
                .find(|(_, below, _)| *below < bucket)
                .map(|(t, below, _)| (*t, *below)),
        ),
    };

    TrendStatus {
        body,
        index,
        direction,
        quadrant,
        previous_quadrant: order[(position + 3) % 4],
        next_quadrant: order[(position + 1) % 4],
        percent_through,
        next_threshold: next.map(|(t, _)| t),
        next_bucket: next.map(|(_, b)| b),
    }
}
