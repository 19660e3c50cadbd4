//! The twelve sidereal signs and their classical attributes.

use crate::coords::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIGN_SPAN_DEG: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGN_NAMES: &[&str] = &[
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign for an index, taken modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Sign containing a longitude; any multiple of 360 maps to the same sign.
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        Self::from_index((lon / SIGN_SPAN_DEG) as usize)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        SIGN_NAMES[self.index()]
    }

    /// Longitude where the sign begins.
    pub fn start_degree(self) -> f64 {
        self.index() as f64 * SIGN_SPAN_DEG
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 6)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_from_longitude() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(71.0), ZodiacSign::Gemini);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
    }

    #[test]
    fn test_sign_is_periodic() {
        for step in 0..72 {
            let lon = step as f64 * 5.0 + 0.25;
            let base = ZodiacSign::from_longitude(lon);
            for k in [-3.0, -1.0, 1.0, 2.0, 10.0] {
                assert_eq!(ZodiacSign::from_longitude(lon + 360.0 * k), base);
            }
        }
    }

    #[test]
    fn test_attributes() {
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Capricorn.element(), Element::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), Element::Air);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
        assert_eq!(ZodiacSign::Scorpio.modality(), Modality::Fixed);
        assert_eq!(ZodiacSign::Virgo.modality(), Modality::Mutable);
        assert_eq!(ZodiacSign::Gemini.polarity(), Polarity::Positive);
        assert_eq!(ZodiacSign::Aries.opposite(), ZodiacSign::Libra);
        assert_eq!(ZodiacSign::Virgo.opposite(), ZodiacSign::Pisces);
    }
}
