//! Equal 30° houses counted from the Ascendant.

use super::signs::SIGN_SPAN_DEG;
use crate::coords::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Where house 1 begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseAnchor {
    /// House 1 starts exactly at the Ascendant degree.
    #[default]
    Ascendant,
    /// House 1 is the whole sign holding the Ascendant.
    WholeSign,
}

/// Longitude where house 1 begins for the given (sidereal) Ascendant.
pub fn house_anchor_degree(ascendant: f64, anchor: HouseAnchor) -> f64 {
    let asc = normalize_degrees(ascendant);
    match anchor {
        HouseAnchor::Ascendant => asc,
        HouseAnchor::WholeSign => (asc / SIGN_SPAN_DEG).floor() * SIGN_SPAN_DEG,
    }
}

/// House number (1-12) of a longitude relative to the house-1 start.
pub fn house_number(longitude: f64, anchor_degree: f64) -> u8 {
    let offset = normalize_degrees(longitude - anchor_degree);
    let index = ((offset / SIGN_SPAN_DEG) as u8).min(11);
    index + 1
}

/// Start longitude of each of the twelve houses.
pub fn house_cusps(anchor_degree: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_degrees(anchor_degree + i as f64 * SIGN_SPAN_DEG);
    }
    cusps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::separation;

    #[test]
    fn test_house_numbers() {
        assert_eq!(house_number(100.0, 100.0), 1);
        assert_eq!(house_number(129.99, 100.0), 1);
        assert_eq!(house_number(130.0, 100.0), 2);
        assert_eq!(house_number(99.99, 100.0), 12);
        assert_eq!(house_number(10.0, 350.0), 1);
    }

    #[test]
    fn test_whole_sign_anchor() {
        assert_eq!(house_anchor_degree(47.5, HouseAnchor::WholeSign), 30.0);
        assert_eq!(house_anchor_degree(47.5, HouseAnchor::Ascendant), 47.5);
    }

    #[test]
    fn test_bands_partition_the_circle() {
        for asc in [0.0, 12.5, 179.0, 333.3] {
            let cusps = house_cusps(asc);
            let total: f64 = (0..12)
                .map(|i| {
                    let next = cusps[(i + 1) % 12];
                    normalize_degrees(next - cusps[i])
                })
                .sum();
            assert!((total - 360.0).abs() < 1e-9);
            for (i, cusp) in cusps.iter().enumerate() {
                assert!(separation(*cusp, asc + 30.0 * i as f64) < 1e-9);
                assert_eq!(house_number(cusp + 0.5, asc), i as u8 + 1);
            }
        }
    }
}
