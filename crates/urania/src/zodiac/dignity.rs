//! Planetary dignity for the seven classical bodies.
//!
//! Exaltation and debilitation follow the sidereal tradition; rulership,
//! detriment and fall follow the Western tables. When a sign matches more
//! than one entry the first in [`Dignity`] order wins.

use super::signs::ZodiacSign;
use crate::bodies::Body;
use serde::{Deserialize, Serialize};

/// Declared in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Debilitated,
    Ruler,
    Detriment,
    Fall,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DignityEntry {
    pub body: Body,
    pub exalted: ZodiacSign,
    pub debilitated: ZodiacSign,
    pub rulers: &'static [ZodiacSign],
    pub detriments: &'static [ZodiacSign],
    pub fall: ZodiacSign,
}

use ZodiacSign::*;

const DIGNITY_TABLE: &[DignityEntry] = &[
    DignityEntry {
        body: Body::Sun,
        exalted: Aries,
        debilitated: Libra,
        rulers: &[Leo],
        detriments: &[Aquarius],
        fall: Virgo,
    },
    DignityEntry {
        body: Body::Moon,
        exalted: Taurus,
        debilitated: Scorpio,
        rulers: &[Cancer],
        detriments: &[Capricorn],
        fall: Scorpio,
    },
    DignityEntry {
        body: Body::Mercury,
        exalted: Virgo,
        debilitated: Pisces,
        rulers: &[Gemini, Virgo],
        detriments: &[Sagittarius, Pisces],
        fall: Pisces,
    },
    DignityEntry {
        body: Body::Venus,
        exalted: Pisces,
        debilitated: Virgo,
        rulers: &[Taurus, Libra],
        detriments: &[Aries, Scorpio],
        fall: Virgo,
    },
    DignityEntry {
        body: Body::Mars,
        exalted: Capricorn,
        debilitated: Cancer,
        rulers: &[Aries, Scorpio],
        detriments: &[Libra, Taurus],
        fall: Cancer,
    },
    DignityEntry {
        body: Body::Jupiter,
        exalted: Cancer,
        debilitated: Capricorn,
        rulers: &[Sagittarius, Pisces],
        detriments: &[Gemini, Virgo],
        fall: Capricorn,
    },
    DignityEntry {
        body: Body::Saturn,
        exalted: Libra,
        debilitated: Aries,
        rulers: &[Capricorn, Aquarius],
        detriments: &[Cancer, Leo],
        fall: Aries,
    },
];

/// Table entry for a body, `None` for bodies without classical dignities.
pub fn dignity_entry(body: Body) -> Option<&'static DignityEntry> {
    DIGNITY_TABLE.iter().find(|entry| entry.body == body)
}

pub fn dignity_of(body: Body, sign: ZodiacSign) -> Dignity {
    let Some(entry) = dignity_entry(body) else {
        return Dignity::Neutral;
    };
    if entry.exalted == sign {
        Dignity::Exalted
    } else if entry.debilitated == sign {
        Dignity::Debilitated
    } else if entry.rulers.contains(&sign) {
        Dignity::Ruler
    } else if entry.detriments.contains(&sign) {
        Dignity::Detriment
    } else if entry.fall == sign {
        Dignity::Fall
    } else {
        Dignity::Neutral
    }
}
