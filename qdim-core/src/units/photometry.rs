//! Luminous intensity.

use crate::dimension::{exponent::*, Dim};
use crate::Quantity;
use qdim_derive::Unit;

/// Dimension of luminous intensity (`cd`).
pub type LuminosityDim = Dim<Zero, Zero, Zero, Zero, Zero, Zero, One, Zero>;
/// A luminous intensity, stored in candelas.
pub type Luminosity = Quantity<LuminosityDim>;

/// Candela (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cd", dimension = LuminosityDim, ratio = 1.0, base)]
pub struct Candela;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candela_display() {
        assert_eq!(format!("{}", 2.0 * CANDELA), "2_cd");
        assert_eq!(to_candela(from_candela(7.5)), 7.5);
    }
}
