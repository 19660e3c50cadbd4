use crate::bodies::Body;
use crate::coords::Confidence;
use crate::ephemeris::GeoLocation;
use crate::zodiac::{Dignity, NakshatraPlacement, ZodiacSign};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A body placed in the sidereal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialBody {
    pub body: Body,
    /// Tropical longitude in degrees (0-360)
    pub tropical_longitude: f64,
    /// Sidereal longitude in degrees (0-360)
    pub sidereal_longitude: f64,
    pub latitude: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub distance_au: Option<f64>,
    /// Degrees per day over the previous day
    pub velocity: f64,
    pub retrograde: bool,
    pub sign: ZodiacSign,
    /// 1-12
    pub house: u8,
    pub nakshatra: NakshatraPlacement,
    pub dignity: Dignity,
}

/// Ascendant or Midheaven.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAngle {
    pub tropical_longitude: f64,
    pub sidereal_longitude: f64,
    pub sign: ZodiacSign,
    pub nakshatra: NakshatraPlacement,
    pub confidence: Confidence,
}

/// Named band of the Moon's elongation from the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LotKind {
    /// Ascendant + Moon - Sun
    Fortune,
    /// Ascendant + Sun - Moon
    Spirit,
    /// Ascendant + Venus - Mars
    Eros,
}

/// An Arabic part, in sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lot {
    pub kind: LotKind,
    pub sidereal_longitude: f64,
    pub sign: ZodiacSign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub instant: DateTime<Utc>,
    pub location: GeoLocation,
    pub julian_day: f64,
    pub ayanamsa_deg: f64,
    pub local_sidereal_time_deg: f64,
    pub ascendant: ChartAngle,
    pub midheaven: ChartAngle,
    /// Sidereal longitude where house 1 begins
    pub house_anchor_deg: f64,
    pub bodies: Vec<CelestialBody>,
}

impl Chart {
    pub fn body(&self, body: Body) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.body == body)
    }

    /// Bodies in a given house.
    pub fn bodies_in_house(&self, house: u8) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(move |b| b.house == house)
    }
}
