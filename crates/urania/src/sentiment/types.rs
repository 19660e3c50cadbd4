use crate::bodies::Body;
use crate::sentiment::trend::TrendStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Five ordered bands over [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexBucket {
    /// [-1, -0.5]
    ExtremeFear,
    /// (-0.5, -0.1]
    Fear,
    /// (-0.1, 0.1)
    Neutral,
    /// [0.1, 0.5)
    Greed,
    /// [0.5, 1]
    ExtremeGreed,
}

impl IndexBucket {
    pub fn from_value(value: f64) -> Self {
        if value <= -0.5 {
            IndexBucket::ExtremeFear
        } else if value <= -0.1 {
            IndexBucket::Fear
        } else if value < 0.1 {
            IndexBucket::Neutral
        } else if value < 0.5 {
            IndexBucket::Greed
        } else {
            IndexBucket::ExtremeGreed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IndexBucket::ExtremeFear => "Extreme Fear",
            IndexBucket::Fear => "Fear",
            IndexBucket::Neutral => "Neutral",
            IndexBucket::Greed => "Greed",
            IndexBucket::ExtremeGreed => "Extreme Greed",
        }
    }
}

impl fmt::Display for IndexBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bounded scalar with its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeIndex {
    /// [-1, 1]
    pub value: f64,
    pub bucket: IndexBucket,
}

impl CompositeIndex {
    /// Clamp into [-1, 1] and classify. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() { 0.0 } else { value.clamp(-1.0, 1.0) };
        Self {
            value,
            bucket: IndexBucket::from_value(value),
        }
    }
}

/// Per-body contributions, each already clamped to [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexTerms {
    pub aspect_score: f64,
    pub element_modifier: f64,
    pub velocity_factor: f64,
    pub retrograde_factor: f64,
    pub degree_score: f64,
}

impl IndexTerms {
    pub fn sum(&self) -> f64 {
        self.aspect_score
            + self.element_modifier
            + self.velocity_factor
            + self.retrograde_factor
            + self.degree_score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyIndex {
    pub body: Body,
    pub index: CompositeIndex,
    pub terms: IndexTerms,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeReport {
    pub bodies: Vec<BodyIndex>,
    /// Importance-weighted mean of the per-body indices
    pub aggregate: CompositeIndex,
    /// Importance-weighted mean of `sin(longitude)`
    pub sidereal: CompositeIndex,
    /// Trend of the focus body, when it is in the chart
    pub trend: Option<TrendStatus>,
}

impl CompositeReport {
    pub fn body(&self, body: Body) -> Option<&BodyIndex> {
        self.bodies.iter().find(|b| b.body == body)
    }
}
