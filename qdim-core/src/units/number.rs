//! Dimensionless quantities.
//!
//! [`Number`] is what same-dimension ratios (`Length / Length`) produce. It converts to and from `f64` freely,
//! compares against `f64` directly, and feeds the inverse trigonometric functions in [`crate::angle`].
//!
//! ```rust
//! use qdim_core::number::{Number, PERCENT};
//! use qdim_core::length::{METER, CENTIMETER};
//!
//! let ratio: Number = (25.0 * CENTIMETER) / METER;
//! assert!((ratio.to_unit::<qdim_core::number::Percent>() - 25.0).abs() < 1e-12);
//! assert_eq!(PERCENT, 0.01);
//! ```

pub use crate::dimension::NumberDim;
use crate::Quantity;
use qdim_derive::Unit;

/// A dimensionless quantity.
pub type Number = Quantity<NumberDim>;

/// The plain number `1`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "num", dimension = NumberDim, ratio = 1.0, base)]
pub struct Unitless;

/// Percent (`1/100`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", dimension = NumberDim, ratio = 0.01)]
pub struct Percent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_ratio() {
        assert_eq!(from_percent(50.0), 0.5);
        assert_eq!(to_percent(Number::new(0.25)), 25.0);
    }

    #[test]
    fn display_uses_num_symbol() {
        assert_eq!(format!("{}", from_unitless(2.5)), "2.5_num");
    }

    #[test]
    fn number_orders_against_f64() {
        assert!(UNITLESS > 0.5);
        assert!(PERCENT < 1.0);
    }
}
