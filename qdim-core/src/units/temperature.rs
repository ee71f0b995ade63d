//! Thermodynamic temperature.
//!
//! Only absolute scales are modelled; offset scales such as Celsius need an affine conversion that a single
//! ratio cannot express.

use crate::dimension::{exponent::*, Dim};
use crate::Quantity;
use qdim_derive::Unit;

/// Dimension of temperature (`K`).
pub type TemperatureDim = Dim<Zero, Zero, Zero, Zero, Zero, One, Zero, Zero>;
/// An absolute temperature, stored in kelvins.
pub type Temperature = Quantity<TemperatureDim>;

/// Kelvin (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", dimension = TemperatureDim, ratio = 1.0, base)]
pub struct Kelvin;

/// Rankine (`5/9 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "R", dimension = TemperatureDim, ratio = 5.0 / 9.0)]
pub struct Rankine;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rankine_is_five_ninths_of_a_kelvin() {
        assert_relative_eq!(to_rankine(273.15 * KELVIN), 491.67, max_relative = 1e-12);
        assert_relative_eq!(from_rankine(9.0).value(), 5.0, max_relative = 1e-12);
        assert_eq!(format!("{}", 300.0 * KELVIN), "300_K");
    }
}
