//! Mass units.
//!
//! The kilogram is the base unit (`Kilogram::RATIO == 1.0`).

use crate::dimension::{exponent::*, Dim};
use crate::{Quantity, Unit};
use qdim_derive::Unit;

/// Dimension of mass (`kg`).
pub type MassDim = Dim<One, Zero, Zero, Zero, Zero, Zero, Zero, Zero>;
/// A mass, stored in kilograms.
pub type Mass = Quantity<MassDim>;

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = MassDim, ratio = 1.0, base)]
pub struct Kilogram;

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = MassDim, ratio = 1e-3)]
pub struct Gram;

/// International avoirdupois pound (exactly `453.59237 g`).
///
/// Some libraries round the pound to `453.6 g`; values exchanged with them differ by about 0.0017 %.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = MassDim, ratio = 453.59237 * Gram::RATIO)]
pub struct Pound;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn gram_and_pound() {
        assert_abs_diff_eq!(from_gram(1000.0).value(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(POUND.value(), 0.453_592_37, epsilon = 1e-12);
        assert_abs_diff_eq!(to_pound(KILOGRAM), 2.204_622_621_8, epsilon = 1e-9);
    }

    #[test]
    fn display_in_kilograms() {
        assert_eq!(format!("{}", 3.0 * KILOGRAM), "3_kg");
    }
}
