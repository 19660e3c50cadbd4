use crate::bodies::Body;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    SemiSextile,
    SemiSquare,
    Sextile,
    Quintile,
    Square,
    Trine,
    Sesquiquadrate,
    Biquintile,
    Quincunx,
    Opposition,
}

impl AspectKind {
    /// Canonical separation in degrees.
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::SemiSextile => 30.0,
            AspectKind::SemiSquare => 45.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Quintile => 72.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Sesquiquadrate => 135.0,
            AspectKind::Biquintile => 144.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::SemiSextile => "semi_sextile",
            AspectKind::SemiSquare => "semi_square",
            AspectKind::Sextile => "sextile",
            AspectKind::Quintile => "quintile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Sesquiquadrate => "sesquiquadrate",
            AspectKind::Biquintile => "biquintile",
            AspectKind::Quincunx => "quincunx",
            AspectKind::Opposition => "opposition",
        }
    }

    pub fn is_major(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction
                | AspectKind::Sextile
                | AspectKind::Square
                | AspectKind::Trine
                | AspectKind::Opposition
        )
    }

    pub fn from_id(id: &str) -> Option<Self> {
        ASPECT_KINDS.iter().copied().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

const ASPECT_KINDS: [AspectKind; 11] = [
    AspectKind::Conjunction,
    AspectKind::SemiSextile,
    AspectKind::SemiSquare,
    AspectKind::Sextile,
    AspectKind::Quintile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Sesquiquadrate,
    AspectKind::Biquintile,
    AspectKind::Quincunx,
    AspectKind::Opposition,
];

/// One row of an aspect table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Allowed deviation from the canonical angle, degrees
    pub orb: f64,
    /// Strength at exact separation, before orb falloff
    pub base_weight: f64,
}

impl AspectDefinition {
    pub const fn new(kind: AspectKind, orb: f64, base_weight: f64) -> Self {
        Self {
            kind,
            orb,
            base_weight,
        }
    }
}

// (kind, orb, base weight)
const STANDARD_TABLE: &[(AspectKind, f64, f64)] = &[
    (AspectKind::Conjunction, 8.0, 0.0),
    (AspectKind::SemiSextile, 2.0, 0.05),
    (AspectKind::SemiSquare, 2.0, -0.1),
    (AspectKind::Sextile, 6.0, 0.15),
    (AspectKind::Quintile, 2.0, 0.1),
    (AspectKind::Square, 8.0, -0.15),
    (AspectKind::Trine, 8.0, 0.2),
    (AspectKind::Sesquiquadrate, 2.0, -0.1),
    (AspectKind::Biquintile, 2.0, 0.1),
    (AspectKind::Quincunx, 4.0, -0.05),
    (AspectKind::Opposition, 8.0, -0.2),
];

pub const PRESET_NAMES: &[&str] = &["standard", "classic", "major_only"];

/// The set of aspects a profile recognises, with orbs and weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectTable {
    definitions: Vec<AspectDefinition>,
}

impl AspectTable {
    pub fn new(definitions: Vec<AspectDefinition>) -> Result<Self, ConfigurationError> {
        let table = Self { definitions };
        table.validate()?;
        Ok(table)
    }

    /// All eleven aspects with the default orbs.
    pub fn standard() -> Self {
        Self {
            definitions: STANDARD_TABLE
                .iter()
                .map(|(kind, orb, weight)| AspectDefinition::new(*kind, *orb, *weight))
                .collect(),
        }
    }

    /// Wider luminary-style orbs on the conjunction and opposition, and only
    /// the square-family, sextile, trine and quintile otherwise.
    pub fn classic() -> Self {
        let keep = [
            AspectKind::Conjunction,
            AspectKind::SemiSquare,
            AspectKind::Sextile,
            AspectKind::Quintile,
            AspectKind::Square,
            AspectKind::Trine,
            AspectKind::Sesquiquadrate,
            AspectKind::Opposition,
        ];
        let definitions = Self::standard()
            .definitions
            .into_iter()
            .filter(|def| keep.contains(&def.kind))
            .map(|mut def| {
                if matches!(def.kind, AspectKind::Conjunction | AspectKind::Opposition) {
                    def.orb = 10.0;
                }
                def
            })
            .collect();
        Self { definitions }
    }

    pub fn major_only() -> Self {
        let definitions = Self::standard()
            .definitions
            .into_iter()
            .filter(|def| def.kind.is_major())
            .collect();
        Self { definitions }
    }

    pub fn preset(name: &str) -> Result<Self, ConfigurationError> {
        match name {
            "standard" => Ok(Self::standard()),
            "classic" => Ok(Self::classic()),
            "major_only" => Ok(Self::major_only()),
            _ => Err(ConfigurationError::UnknownPreset {
                name: name.to_string(),
                valid: PRESET_NAMES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    pub fn get(&self, kind: AspectKind) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|def| def.kind == kind)
    }

    /// Replace the orb for one aspect; no-op if the aspect is not in the table.
    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Self {
        if let Some(def) = self.definitions.iter_mut().find(|def| def.kind == kind) {
            def.orb = orb;
        }
        self
    }

    pub fn with_weight(mut self, kind: AspectKind, base_weight: f64) -> Self {
        if let Some(def) = self.definitions.iter_mut().find(|def| def.kind == kind) {
            def.base_weight = base_weight;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for def in &self.definitions {
            if !def.orb.is_finite() || def.orb <= 0.0 {
                return Err(ConfigurationError::InvalidOrb {
                    aspect: def.kind.id().to_string(),
                    orb: def.orb,
                });
            }
            if !def.base_weight.is_finite() || def.base_weight.abs() > 1.0 {
                return Err(ConfigurationError::InvalidWeight {
                    field: format!("aspects.{}.base_weight", def.kind.id()),
                    value: def.base_weight,
                });
            }
        }
        Ok(())
    }
}

impl Default for AspectTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// An aspect between two bodies. `first` always orders before `second`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    pub kind: AspectKind,
    /// Shortest angular separation, [0, 180]
    pub separation: f64,
    /// `separation - kind.angle()`
    pub deviation: f64,
    /// [-1, 1]
    pub strength: f64,
    /// Whether the aspect is applying (approaching exact)
    pub applying: bool,
    /// Within 0.1° of exact
    pub exact: bool,
}

impl Aspect {
    pub fn involves(&self, body: Body) -> bool {
        self.first == body || self.second == body
    }

    /// The other body of the pair, if `body` is part of it.
    pub fn other(&self, body: Body) -> Option<Body> {
        if self.first == body {
            Some(self.second)
        } else if self.second == body {
            Some(self.first)
        } else {
            None
        }
    }

    pub fn pair(&self) -> (Body, Body) {
        (self.first, self.second)
    }
}
