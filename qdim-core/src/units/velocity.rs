//! Linear velocity units (`Length / Time`).
//!
//! ```rust
//! use qdim_core::velocity::{LinearVelocity, KILOMETER_PER_HOUR, to_meter_per_second};
//!
//! let v: LinearVelocity = 36.0 * KILOMETER_PER_HOUR;
//! assert!((to_meter_per_second(v) - 10.0).abs() < 1e-12);
//! ```

use crate::dimension::{exponent::*, Dim};
use crate::length::{Inch, Meter, Mile};
use crate::time::{Hour, Second};
use crate::{Quantity, Unit};
use qdim_derive::Unit;

/// Dimension of linear velocity (`m·s^-1`).
pub type LinearVelocityDim = Dim<Zero, One, NegOne, Zero, Zero, Zero, Zero, Zero>;
/// A linear velocity, stored in metres per second.
pub type LinearVelocity = Quantity<LinearVelocityDim>;

/// Metre per second, with its metric prefixes (`km/s`, `mm/s`, ...).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", dimension = LinearVelocityDim, ratio = Meter::RATIO / Second::RATIO, base, prefixes)]
pub struct MeterPerSecond;

/// Metre per hour, with its metric prefixes (`km/h`, ...).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/h", dimension = LinearVelocityDim, ratio = Meter::RATIO / Hour::RATIO, prefixes)]
pub struct MeterPerHour;

/// Inch per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in/s", dimension = LinearVelocityDim, ratio = Inch::RATIO / Second::RATIO)]
pub struct InchPerSecond;

/// Mile per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi/h", dimension = LinearVelocityDim, ratio = Mile::RATIO / Hour::RATIO)]
pub struct MilePerHour;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Length, KILOMETER, METER};
    use crate::time::{Time, HOUR, SECOND};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn length_over_time() {
        let v: LinearVelocity = (100.0 * METER) / (10.0 * SECOND);
        assert_eq!(v, 10.0 * METER_PER_SECOND);
        assert_eq!(format!("{}", v), "10_m/s");
    }

    #[test]
    fn velocity_times_time_is_length() {
        let d: Length = (3.0 * METER_PER_SECOND) * (4.0 * SECOND);
        assert_eq!(d, 12.0 * METER);
        let t: Time = (1.0 * KILOMETER) / (1.0 * KILOMETER_PER_HOUR);
        assert_relative_eq!(t.value(), HOUR.value(), max_relative = 1e-12);
    }

    #[test]
    fn prefixed_families() {
        assert_eq!(<KilometerPerHour as Unit>::SYMBOL, "km/h");
        assert_eq!(<CentimeterPerSecond as Unit>::SYMBOL, "cm/s");
        assert_relative_eq!(KILOMETER_PER_SECOND.value(), 1000.0);
        assert_relative_eq!(to_kilometer_per_hour(10.0 * METER_PER_SECOND), 36.0, max_relative = 1e-12);
    }

    #[test]
    fn customary_velocities() {
        assert_abs_diff_eq!(INCH_PER_SECOND.value(), 0.0254, epsilon = 1e-12);
        assert_relative_eq!(MILE_PER_HOUR.value(), 0.44704, max_relative = 1e-12);
    }
}
