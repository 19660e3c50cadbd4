//! Analysis profile.
//!
//! Every tunable of the pipeline lives here as data: the aspect table,
//! ayanamsa, obliquity, house anchor, index weights and mean motions.
//! A profile is validated once, when the engine is built.

use crate::aspects::AspectTable;
use crate::bodies::Body;
use crate::coords::{J2000_JD, DEFAULT_OBLIQUITY_DEG};
use crate::error::ConfigurationError;
use crate::zodiac::{Element, HouseAnchor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Offset between the tropical and sidereal zodiacs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ayanamsa {
    Fixed {
        degrees: f64,
    },
    /// Precesses linearly from a reference epoch.
    Linear {
        epoch_jd: f64,
        degrees_at_epoch: f64,
        arcsec_per_year: f64,
    },
}

impl Ayanamsa {
    /// Lahiri-style linear model anchored at J2000.
    pub fn lahiri() -> Self {
        Ayanamsa::Linear {
            epoch_jd: J2000_JD,
            degrees_at_epoch: 23.853,
            arcsec_per_year: 50.29,
        }
    }

    pub fn degrees_at(&self, jd: f64) -> f64 {
        match *self {
            Ayanamsa::Fixed { degrees } => degrees,
            Ayanamsa::Linear {
                epoch_jd,
                degrees_at_epoch,
                arcsec_per_year,
            } => {
                let years = (jd - epoch_jd) / DAYS_PER_JULIAN_YEAR;
                degrees_at_epoch + years * arcsec_per_year / 3600.0
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let ok = match *self {
            Ayanamsa::Fixed { degrees } => degrees.is_finite() && (0.0..360.0).contains(&degrees),
            Ayanamsa::Linear {
                epoch_jd,
                degrees_at_epoch,
                arcsec_per_year,
            } => epoch_jd.is_finite() && degrees_at_epoch.is_finite() && arcsec_per_year.is_finite(),
        };
        if ok {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidAyanamsa {
                message: format!("{:?} must be finite, with a fixed offset in [0, 360)", self),
            })
        }
    }
}

impl Default for Ayanamsa {
    fn default() -> Self {
        Ayanamsa::Fixed { degrees: 24.0 }
    }
}

/// Index contribution of each element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementModifiers {
    pub fire: f64,
    pub earth: f64,
    pub air: f64,
    pub water: f64,
}

impl ElementModifiers {
    pub fn for_element(&self, element: Element) -> f64 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }
}

impl Default for ElementModifiers {
    fn default() -> Self {
        Self {
            fire: 0.1,
            earth: 0.0,
            air: 0.05,
            water: -0.1,
        }
    }
}

/// Terms of the retrograde factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrogradeWeights {
    pub base: f64,
    /// Multiplied by `|v| / |mean|`
    pub speed: f64,
    pub debilitated: f64,
    pub exalted: f64,
}

impl Default for RetrogradeWeights {
    fn default() -> Self {
        Self {
            base: -0.2,
            speed: -0.1,
            debilitated: -0.1,
            exalted: 0.05,
        }
    }
}

/// Mean daily motion in degrees per day.
pub fn default_mean_motion(body: Body) -> f64 {
    match body {
        Body::Sun | Body::Mercury | Body::Venus => 0.9856,
        Body::Moon => 13.1764,
        Body::Mars => 0.5240,
        Body::Jupiter => 0.0831,
        Body::Saturn => 0.0335,
        Body::Uranus => 0.0117,
        Body::Neptune => 0.0060,
        Body::Pluto => 0.0040,
        Body::BlackMoonLilith => 0.111404,
        Body::DarkMoonLilith => 3.025,
        Body::AsteroidLilith => 0.23,
        Body::Rahu | Body::Ketu => -0.053,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisProfile {
    pub ayanamsa: Ayanamsa,
    pub obliquity_deg: f64,
    pub house_anchor: HouseAnchor,
    pub aspects: AspectTable,
    /// Degrees short of 180 still counted as a Symmetry pair
    pub symmetry_window_deg: f64,
    /// Phase anchor for cycle frequencies
    pub reference_body: Body,
    /// Body whose trend is reported with the composite index
    pub focus_body: Body,
    /// Per-body overrides of the aggregate weight
    pub importance: BTreeMap<Body, f64>,
    /// Per-body overrides of the mean daily motion
    pub mean_motion: BTreeMap<Body, f64>,
    pub element_modifiers: ElementModifiers,
    pub retrograde: RetrogradeWeights,
    pub velocity_scale: f64,
    pub degree_scale: f64,
    pub resonance_threshold: f64,
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        Self {
            ayanamsa: Ayanamsa::default(),
            obliquity_deg: DEFAULT_OBLIQUITY_DEG,
            house_anchor: HouseAnchor::default(),
            aspects: AspectTable::standard(),
            symmetry_window_deg: 5.0,
            reference_body: Body::Sun,
            focus_body: Body::BlackMoonLilith,
            importance: BTreeMap::new(),
            mean_motion: BTreeMap::new(),
            element_modifiers: ElementModifiers::default(),
            retrograde: RetrogradeWeights::default(),
            velocity_scale: 0.3,
            degree_scale: 0.2,
            resonance_threshold: 0.5,
        }
    }
}

impl AnalysisProfile {
    pub fn with_aspects(mut self, aspects: AspectTable) -> Self {
        self.aspects = aspects;
        self
    }

    pub fn with_ayanamsa(mut self, ayanamsa: Ayanamsa) -> Self {
        self.ayanamsa = ayanamsa;
        self
    }

    pub fn with_house_anchor(mut self, anchor: HouseAnchor) -> Self {
        self.house_anchor = anchor;
        self
    }

    /// Aggregate weight of a body, from overrides or its class.
    pub fn importance_of(&self, body: Body) -> f64 {
        self.importance
            .get(&body)
            .copied()
            .unwrap_or_else(|| body.class().default_importance())
    }

    pub fn mean_motion_of(&self, body: Body) -> f64 {
        self.mean_motion
            .get(&body)
            .copied()
            .unwrap_or_else(|| default_mean_motion(body))
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.ayanamsa.validate()?;
        if !(self.obliquity_deg.is_finite() && self.obliquity_deg > 0.0 && self.obliquity_deg < 90.0) {
            return Err(ConfigurationError::InvalidObliquity {
                degrees: self.obliquity_deg,
            });
        }
        if !(self.symmetry_window_deg.is_finite()
            && self.symmetry_window_deg > 0.0
            && self.symmetry_window_deg < 90.0)
        {
            return Err(ConfigurationError::InvalidWindow {
                window: self.symmetry_window_deg,
            });
        }
        self.aspects.validate()?;

        for (body, weight) in &self.importance {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(invalid_weight(format!("importance.{}", body.id()), *weight));
            }
        }
        for (body, motion) in &self.mean_motion {
            if !motion.is_finite() {
                return Err(invalid_weight(format!("mean_motion.{}", body.id()), *motion));
            }
        }

        let scalars = [
            ("element_modifiers.fire", self.element_modifiers.fire),
            ("element_modifiers.earth", self.element_modifiers.earth),
            ("element_modifiers.air", self.element_modifiers.air),
            ("element_modifiers.water", self.element_modifiers.water),
            ("retrograde.base", self.retrograde.base),
            ("retrograde.speed", self.retrograde.speed),
            ("retrograde.debilitated", self.retrograde.debilitated),
            ("retrograde.exalted", self.retrograde.exalted),
            ("velocity_scale", self.velocity_scale),
            ("degree_scale", self.degree_scale),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(invalid_weight(field.to_string(), value));
            }
        }
        if !(self.resonance_threshold.is_finite() && (0.0..=1.0).contains(&self.resonance_threshold)) {
            return Err(invalid_weight(
                "resonance_threshold".to_string(),
                self.resonance_threshold,
            ));
        }
        Ok(())
    }
}

fn invalid_weight(field: String, value: f64) -> ConfigurationError {
    ConfigurationError::InvalidWeight { field, value }
}
