//! Linear jerk units (`Length / Time^3`).

use crate::dimension::{exponent::*, Dim};
use crate::length::{Inch, Meter, Mile};
use crate::time::{Hour, Second};
use crate::{Quantity, Unit};
use qdim_derive::Unit;

/// Dimension of linear jerk (`m·s^-3`).
pub type LinearJerkDim = Dim<Zero, One, NegThree, Zero, Zero, Zero, Zero, Zero>;
/// A linear jerk, stored in metres per second cubed.
pub type LinearJerk = Quantity<LinearJerkDim>;

/// Metre per second cubed, with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "m/s^3",
    dimension = LinearJerkDim,
    ratio = Meter::RATIO / (Second::RATIO * Second::RATIO * Second::RATIO),
    base,
    prefixes
)]
pub struct MeterPerSecondCubed;

/// Metre per hour cubed, with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "m/h^3",
    dimension = LinearJerkDim,
    ratio = Meter::RATIO / (Hour::RATIO * Hour::RATIO * Hour::RATIO),
    prefixes
)]
pub struct MeterPerHourCubed;

/// Inch per second cubed.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "in/s^3",
    dimension = LinearJerkDim,
    ratio = Inch::RATIO / (Second::RATIO * Second::RATIO * Second::RATIO)
)]
pub struct InchPerSecondCubed;

/// Mile per hour cubed.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "mi/h^3",
    dimension = LinearJerkDim,
    ratio = Mile::RATIO / (Hour::RATIO * Hour::RATIO * Hour::RATIO)
)]
pub struct MilePerHourCubed;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceleration::METER_PER_SECOND_SQUARED;
    use crate::time::SECOND;
    use approx::assert_relative_eq;

    #[test]
    fn acceleration_over_time() {
        let j: LinearJerk = (6.0 * METER_PER_SECOND_SQUARED) / (2.0 * SECOND);
        assert_eq!(j, 3.0 * METER_PER_SECOND_CUBED);
        assert_eq!(format!("{}", j), "3_m/s^3");
    }

    #[test]
    fn derived_units() {
        assert_relative_eq!(KILOMETER_PER_SECOND_CUBED.value(), 1000.0);
        assert_relative_eq!(INCH_PER_SECOND_CUBED.value(), 0.0254, max_relative = 1e-12);
        assert_relative_eq!(
            METER_PER_HOUR_CUBED.value(),
            1.0 / (3600.0 * 3600.0 * 3600.0),
            max_relative = 1e-12
        );
        assert_eq!(<MilePerHourCubed as Unit>::SYMBOL, "mi/h^3");
    }
}
