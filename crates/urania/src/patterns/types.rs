use crate::bodies::Body;
use serde::{Deserialize, Serialize};

/// Declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// A pair in Opposition
    Duality,
    /// Three bodies pairwise in Trine
    Triad,
    /// Four bodies with at least four pairwise Squares
    Square,
    /// A pair in Quintile
    Pentagram,
    /// A pair in Sextile
    Hexagon,
    /// A pair within the symmetry window of 180°
    Symmetry,
    /// A pair in opposite signs
    Polarity,
}

/// A geometric configuration. `bodies` is sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub bodies: Vec<Body>,
}

impl Pattern {
    pub fn new(kind: PatternKind, mut bodies: Vec<Body>) -> Self {
        bodies.sort();
        bodies.dedup();
        Self { kind, bodies }
    }

    pub fn contains(&self, body: Body) -> bool {
        self.bodies.contains(&body)
    }
}
