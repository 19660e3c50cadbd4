//! The closed set of bodies the engine knows how to analyse.
//!
//! Physical bodies come from a [`crate::ephemeris::PositionResolver`]; the
//! shadow points (Lilith variants and the lunar nodes) are derived from
//! mean-motion elements by [`crate::ephemeris::ShadowPointResolver`].

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Mean lunar apogee.
    BlackMoonLilith,
    DarkMoonLilith,
    AsteroidLilith,
    /// North lunar node.
    Rahu,
    /// South lunar node, always opposite Rahu.
    Ketu,
}

/// Importance class of a body, used for default aggregate weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyClass {
    Luminary,
    Classical,
    Outer,
    Derived,
}

impl BodyClass {
    /// Default weight in the aggregate composite index.
    pub fn default_importance(self) -> f64 {
        match self {
            BodyClass::Luminary => 2.0,
            BodyClass::Classical => 1.0,
            BodyClass::Outer | BodyClass::Derived => 0.5,
        }
    }
}

// (body, id, display name)
const BODY_TABLE: &[(Body, &str, &str)] = &[
    (Body::Sun, "sun", "Sun"),
    (Body::Moon, "moon", "Moon"),
    (Body::Mercury, "mercury", "Mercury"),
    (Body::Venus, "venus", "Venus"),
    (Body::Mars, "mars", "Mars"),
    (Body::Jupiter, "jupiter", "Jupiter"),
    (Body::Saturn, "saturn", "Saturn"),
    (Body::Uranus, "uranus", "Uranus"),
    (Body::Neptune, "neptune", "Neptune"),
    (Body::Pluto, "pluto", "Pluto"),
    (Body::BlackMoonLilith, "black_moon_lilith", "Black Moon Lilith"),
    (Body::DarkMoonLilith, "dark_moon_lilith", "Dark Moon Lilith"),
    (Body::AsteroidLilith, "asteroid_lilith", "Asteroid Lilith"),
    (Body::Rahu, "rahu", "Rahu"),
    (Body::Ketu, "ketu", "Ketu"),
];

// Alternate spellings accepted by `FromStr`
const ALIASES: &[(&str, Body)] = &[
    ("north_node", Body::Rahu),
    ("south_node", Body::Ketu),
    ("lilith", Body::BlackMoonLilith),
    ("mean_apogee", Body::BlackMoonLilith),
];

impl Body {
    pub const ALL: [Body; 15] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::BlackMoonLilith,
        Body::DarkMoonLilith,
        Body::AsteroidLilith,
        Body::Rahu,
        Body::Ketu,
    ];

    /// Stable snake_case identifier, e.g. `"black_moon_lilith"`.
    pub fn id(self) -> &'static str {
        BODY_TABLE[self as usize].1
    }

    pub fn name(self) -> &'static str {
        BODY_TABLE[self as usize].2
    }

    pub fn class(self) -> BodyClass {
        match self {
            Body::Sun | Body::Moon => BodyClass::Luminary,
            Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
                BodyClass::Classical
            }
            Body::Uranus | Body::Neptune | Body::Pluto => BodyClass::Outer,
            _ => BodyClass::Derived,
        }
    }

    /// Whether the body is a computed point rather than a physical object.
    pub fn is_shadow_point(self) -> bool {
        self.class() == BodyClass::Derived
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ConfigurationError;

    /// Accepts ids (`"black_moon_lilith"`), display names
    /// (`"Black Moon Lilith"`) and a few common aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        BODY_TABLE
            .iter()
            .find(|(_, id, _)| *id == key)
            .map(|(body, _, _)| *body)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|(_, body)| *body)
            })
            .ok_or_else(|| ConfigurationError::UnknownBody {
                id: s.to_string(),
                valid: BODY_TABLE.iter().map(|(_, id, _)| id.to_string()).collect(),
            })
    }
}

/// A validated, non-empty list of distinct bodies.
///
/// Order is preserved as given; it only affects the order of per-body
/// results, never their values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodySet {
    bodies: Vec<Body>,
}

impl BodySet {
    pub fn new(bodies: Vec<Body>) -> Result<Self, ConfigurationError> {
        if bodies.is_empty() {
            return Err(ConfigurationError::EmptyBodyList);
        }
        let mut seen = BTreeSet::new();
        for body in &bodies {
            if !seen.insert(*body) {
                return Err(ConfigurationError::DuplicateBody { body: *body });
            }
        }
        Ok(Self { bodies })
    }

    /// Parse and validate a list of body identifiers.
    pub fn parse<S: AsRef<str>>(ids: &[S]) -> Result<Self, ConfigurationError> {
        let bodies = ids
            .iter()
            .map(|id| id.as_ref().parse::<Body>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(bodies)
    }

    /// Every supported body.
    pub fn all() -> Self {
        Self {
            bodies: Body::ALL.to_vec(),
        }
    }

    /// The ten physical bodies, without shadow points.
    pub fn physical() -> Self {
        Self {
            bodies: Body::ALL
                .iter()
                .copied()
                .filter(|b| !b.is_shadow_point())
                .collect(),
        }
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn contains(&self, body: Body) -> bool {
        self.bodies.contains(&body)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Body> + '_ {
        self.bodies.iter().copied()
    }
}
