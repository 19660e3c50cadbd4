//! Nakshatra placements.
//!
//! The 27 lunar mansions are laid out at a fixed width of 13.3333°, each split
//! into 4 padas. Because 27 × 13.3333 falls just short of 360°, the final
//! sliver before 0° wraps back to Ashwini.

use crate::bodies::Body;
use crate::coords::normalize_degrees;
use serde::Serialize;

pub const NAKSHATRA_WIDTH_DEG: f64 = 13.3333;
pub const PADA_WIDTH_DEG: f64 = NAKSHATRA_WIDTH_DEG / 4.0;

// (slug, display_name, planetary lord)
pub const NAKSHATRA_ORDER: &[(&str, &str, Body)] = &[
    ("ashwini", "Ashwini", Body::Ketu),
    ("bharani", "Bharani", Body::Venus),
    ("krittika", "Krittika", Body::Sun),
    ("rohini", "Rohini", Body::Moon),
    ("mrigashira", "Mrigashira", Body::Mars),
    ("ardra", "Ardra", Body::Rahu),
    ("punarvasu", "Punarvasu", Body::Jupiter),
    ("pushya", "Pushya", Body::Saturn),
    ("ashlesha", "Ashlesha", Body::Mercury),
    ("magha", "Magha", Body::Ketu),
    ("purva_phalguni", "Purva Phalguni", Body::Venus),
    ("uttara_phalguni", "Uttara Phalguni", Body::Sun),
    ("hasta", "Hasta", Body::Moon),
    ("chitra", "Chitra", Body::Mars),
    ("swati", "Swati", Body::Rahu),
    ("vishakha", "Vishakha", Body::Jupiter),
    ("anuradha", "Anuradha", Body::Saturn),
    ("jyeshtha", "Jyeshtha", Body::Mercury),
    ("mula", "Mula", Body::Ketu),
    ("purva_ashadha", "Purva Ashadha", Body::Venus),
    ("uttara_ashadha", "Uttara Ashadha", Body::Sun),
    ("shravana", "Shravana", Body::Moon),
    ("dhanishta", "Dhanishta", Body::Mars),
    ("shatabhisha", "Shatabhisha", Body::Rahu),
    ("purva_bhadrapada", "Purva Bhadrapada", Body::Jupiter),
    ("uttara_bhadrapada", "Uttara Bhadrapada", Body::Saturn),
    ("revati", "Revati", Body::Mercury),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub lord: Body,
    pub start: f64,
    pub end: f64,
    pub index: usize,
}

/// Position of a longitude within its nakshatra.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraPlacement {
    pub index: usize,
    pub id: &'static str,
    pub name: &'static str,
    pub lord: Body,
    pub start_degree: f64,
    pub end_degree: f64,
    /// Quarter of the mansion, 1-4.
    pub pada: u8,
    /// Fraction of the mansion already traversed, [0, 1].
    pub progress: f64,
}

fn build_nakshatra_table() -> Vec<NakshatraRecord> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, (slug, display_name, lord))| {
            let start = idx as f64 * NAKSHATRA_WIDTH_DEG;
            NakshatraRecord {
                id: *slug,
                name: *display_name,
                lord: *lord,
                start,
                end: start + NAKSHATRA_WIDTH_DEG,
                index: idx,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<NakshatraRecord> = build_nakshatra_table();
}

pub fn nakshatra_table() -> &'static [NakshatraRecord] {
    &NAKSHATRA_TABLE
}

/// Return the placement for the nakshatra containing the given longitude.
pub fn nakshatra_for_longitude(longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(longitude);
    let raw = (lon / NAKSHATRA_WIDTH_DEG) as usize;
    let entry = &NAKSHATRA_TABLE[raw % NAKSHATRA_TABLE.len()];

    // Offset from the band actually counted, so the wrap sliver stays small
    let offset = lon - raw as f64 * NAKSHATRA_WIDTH_DEG;
    let pada = ((offset / PADA_WIDTH_DEG) as u8).min(3) + 1;

    NakshatraPlacement {
        index: entry.index,
        id: entry.id,
        name: entry.name,
        lord: entry.lord,
        start_degree: entry.start,
        end_degree: entry.end,
        pada,
        progress: (offset / NAKSHATRA_WIDTH_DEG).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nakshatra_for_longitude() {
        let p = nakshatra_for_longitude(0.0);
        assert_eq!(p.id, "ashwini");
        assert_eq!(p.lord, Body::Ketu);
        assert_eq!(p.pada, 1);

        let p = nakshatra_for_longitude(13.5);
        assert_eq!(p.id, "bharani");
        assert_eq!(p.lord, Body::Venus);

        let p = nakshatra_for_longitude(359.0);
        assert_eq!(p.id, "revati");
        assert_eq!(p.index, 26);
    }

    #[test]
    fn test_padas() {
        assert_eq!(nakshatra_for_longitude(3.4).pada, 2);
        assert_eq!(nakshatra_for_longitude(6.7).pada, 3);
        assert_eq!(nakshatra_for_longitude(13.0).pada, 4);
    }

    #[test]
    fn test_wrap_sliver_maps_to_ashwini() {
        let p = nakshatra_for_longitude(359.9995);
        assert_eq!(p.index, 0);
        assert_eq!(p.pada, 1);
        assert!(p.progress < 0.01);
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(nakshatra_table().len(), 27);
        assert_eq!(nakshatra_table()[26].id, "revati");
    }
}
