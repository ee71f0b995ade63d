//! Length units.
//!
//! The metre is the base unit (`Meter::RATIO == 1.0`). Customary units are chained from each other, starting
//! from the international inch (exactly `2.54 cm`).
//!
//! ```rust
//! use qdim_core::length::{Length, FOOT, INCH, to_inch};
//!
//! let l: Length = 2.0 * FOOT + 3.0 * INCH;
//! assert!((to_inch(l) - 27.0).abs() < 1e-12);
//! ```

use crate::dimension::{exponent::*, Dim};
use crate::{Quantity, Unit};
use qdim_derive::Unit;

/// Dimension of length (`m`).
pub type LengthDim = Dim<Zero, One, Zero, Zero, Zero, Zero, Zero, Zero>;
/// A length, stored in metres.
pub type Length = Quantity<LengthDim>;

/// Metre (SI base unit), with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = LengthDim, ratio = 1.0, base, prefixes)]
pub struct Meter;

// ─────────────────────────────────────────────────────────────────────────────
// Customary units
// ─────────────────────────────────────────────────────────────────────────────

/// International inch (`2.54 cm`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = LengthDim, ratio = 2.54 * Centimeter::RATIO)]
pub struct Inch;

/// Foot (`12 in`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = LengthDim, ratio = 12.0 * Inch::RATIO)]
pub struct Foot;

/// Yard (`3 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", dimension = LengthDim, ratio = 3.0 * Foot::RATIO)]
pub struct Yard;

/// Statute mile (`5280 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", dimension = LengthDim, ratio = 5280.0 * Foot::RATIO)]
pub struct Mile;

/// Competition field tile (`600 mm`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "tile", dimension = LengthDim, ratio = 600.0 * Millimeter::RATIO)]
pub struct Tile;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Metric family
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn metric_prefixes() {
        assert_eq!(KILOMETER.value(), 1e3);
        assert_eq!(MEGAMETER.value(), 1e6);
        assert_eq!(TERAMETER.value(), 1e12);
        assert_eq!(CENTIMETER.value(), 0.01);
        assert_eq!(MILLIMETER.value(), 0.001);
        assert_eq!(from_millimeter(1.0), from_meter(0.001));
        assert_eq!(<Micrometer as Unit>::SYMBOL, "um");
        assert_eq!(<Kilometer as Unit>::SYMBOL, "km");
    }

    #[test]
    fn prefixed_quantities_compare_in_base_units() {
        assert_eq!(1.0 * KILOMETER, 1000.0 * METER);
        assert!(999.0 * METER < KILOMETER);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Customary units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn customary_chain() {
        assert_abs_diff_eq!(INCH.value(), 0.0254, epsilon = 1e-12);
        assert_abs_diff_eq!(FOOT.value(), 0.3048, epsilon = 1e-12);
        assert_abs_diff_eq!(YARD.value(), 0.9144, epsilon = 1e-12);
        assert_relative_eq!(MILE.value(), 1609.344, max_relative = 1e-12);
    }

    #[test]
    fn tile_is_600_mm() {
        assert_abs_diff_eq!(TILE.value(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(to_tile(3.0 * METER), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn display_in_meters() {
        assert_eq!(format!("{}", 3.0 * METER), "3_m");
        assert_eq!(format!("{:.1}", 2.0 * FOOT), "0.6_m");
        assert_eq!(format!("{}", (2.5 * KILOMETER).display_in::<Kilometer>()), "2.5_km");
    }

    proptest! {
        #[test]
        fn prop_inch_roundtrip(v in -1e6..1e6f64) {
            let back = to_inch(from_inch(v));
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_from_unit_matches_generated_helper(v in -1e6..1e6f64) {
            prop_assert_eq!(Length::from_unit::<Mile>(v), from_mile(v));
        }
    }
}
