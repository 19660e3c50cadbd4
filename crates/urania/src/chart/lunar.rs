//! Lunar phase and the Lots (Arabic parts) derived from a chart.

use crate::bodies::Body;
use crate::chart::types::{Chart, Lot, LotKind, MoonPhase};
use crate::coords::normalize_degrees;
use crate::zodiac::ZodiacSign;

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::ThirdQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Band for the Moon's elongation east of the Sun, in degrees.
    /// New spans [355, 5); the remaining bands are 45° wide around the
    /// quarters, with the crescents filling the gaps.
    pub fn from_elongation(elongation_deg: f64) -> Self {
        let e = normalize_degrees(elongation_deg);
        if !(5.0..355.0).contains(&e) {
            MoonPhase::New
        } else if e < 67.5 {
            MoonPhase::WaxingCrescent
        } else if e < 112.5 {
            MoonPhase::FirstQuarter
        } else if e < 157.5 {
            MoonPhase::WaxingGibbous
        } else if e < 202.5 {
            MoonPhase::Full
        } else if e < 247.5 {
            MoonPhase::WaningGibbous
        } else if e < 292.5 {
            MoonPhase::ThirdQuarter
        } else {
            MoonPhase::WaningCrescent
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::ThirdQuarter => "Third Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn waxing(self) -> bool {
        matches!(
            self,
            MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous
        )
    }
}

impl LotKind {
    pub const ALL: [LotKind; 3] = [LotKind::Fortune, LotKind::Spirit, LotKind::Eros];

    /// The bodies whose difference is added to the ascendant.
    pub fn operands(self) -> (Body, Body) {
        match self {
            LotKind::Fortune => (Body::Moon, Body::Sun),
            LotKind::Spirit => (Body::Sun, Body::Moon),
            LotKind::Eros => (Body::Venus, Body::Mars),
        }
    }
}

impl Lot {
    /// `ascendant + plus - minus`, normalized.
    pub fn from_longitudes(kind: LotKind, ascendant: f64, plus: f64, minus: f64) -> Self {
        let sidereal_longitude = normalize_degrees(ascendant + plus - minus);
        Self {
            kind,
            sidereal_longitude,
            sign: ZodiacSign::from_longitude(sidereal_longitude),
        }
    }
}

impl Chart {
    /// Moon minus Sun, in [0, 360). `None` unless both luminaries were sampled.
    pub fn lunar_elongation(&self) -> Option<f64> {
        let sun = self.body(Body::Sun)?;
        let moon = self.body(Body::Moon)?;
        Some(normalize_degrees(moon.sidereal_longitude - sun.sidereal_longitude))
    }

    pub fn moon_phase(&self) -> Option<MoonPhase> {
        self.lunar_elongation().map(MoonPhase::from_elongation)
    }

    /// `None` when either operand body is missing from the chart.
    pub fn lot(&self, kind: LotKind) -> Option<Lot> {
        let (plus, minus) = kind.operands();
        let plus = self.body(plus)?.sidereal_longitude;
        let minus = self.body(minus)?.sidereal_longitude;
        Some(Lot::from_longitudes(kind, self.ascendant.sidereal_longitude, plus, minus))
    }

    /// Every lot the chart's bodies allow.
    pub fn lots(&self) -> Vec<Lot> {
        LotKind::ALL.iter().filter_map(|kind| self.lot(*kind)).collect()
    }
}
