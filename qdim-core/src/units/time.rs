//! Time units.
//!
//! The second is the base unit (`Second::RATIO == 1.0`); its prefixed family runs from terasecond to
//! nanosecond.
//!
//! ```rust
//! use qdim_core::time::{Time, HOUR, MINUTE, to_minute};
//!
//! let t: Time = 1.5 * HOUR;
//! assert_eq!(to_minute(t), 90.0);
//! assert_eq!(t.ratio_to(MINUTE), 90.0);
//! ```

use crate::dimension::{exponent::*, Dim};
use crate::{Quantity, Unit};
use qdim_derive::Unit;

/// Dimension of time (`s`).
pub type TimeDim = Dim<Zero, Zero, One, Zero, Zero, Zero, Zero, Zero>;
/// A duration, stored in seconds.
pub type Time = Quantity<TimeDim>;

/// Second (SI base unit), with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = TimeDim, ratio = 1.0, base, prefixes)]
pub struct Second;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = TimeDim, ratio = 60.0 * Second::RATIO)]
pub struct Minute;

/// Hour (`60 min`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hr", dimension = TimeDim, ratio = 60.0 * Minute::RATIO)]
pub struct Hour;

/// Day (`24 hr`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "day", dimension = TimeDim, ratio = 24.0 * Hour::RATIO)]
pub struct Day;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn seconds_to_minutes() {
        assert_abs_diff_eq!(to_minute(60.0 * SECOND), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn minutes_to_hours() {
        assert_abs_diff_eq!((60.0 * MINUTE).to_unit::<Hour>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn base_values_in_seconds() {
        assert_abs_diff_eq!(MINUTE.value(), 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(HOUR.value(), 3600.0, epsilon = 1e-9);
        assert_abs_diff_eq!((1.5 * HOUR).value(), 5400.0, epsilon = 1e-9);
    }

    #[test]
    fn hours_to_days() {
        assert_abs_diff_eq!(to_day(24.0 * HOUR), 1.0, epsilon = 1e-12);
        assert_eq!(DAY.value(), 86_400.0);
    }

    #[test]
    fn prefixed_seconds() {
        assert_eq!(MILLISECOND.value(), 1e-3);
        assert_abs_diff_eq!(from_microsecond(5.0).value(), 5e-6, epsilon = 1e-18);
        assert_eq!(KILOSECOND.value(), 1e3);
        assert_eq!(<Nanosecond as Unit>::SYMBOL, "ns");
        assert_eq!(<Millisecond as Unit>::SYMBOL, "ms");
    }

    #[test]
    fn display_in_seconds() {
        assert_eq!(format!("{}", 2.0 * MINUTE), "120_s");
        assert_eq!(format!("{}", (2.0 * MINUTE).display_in::<Minute>()), "2_min");
    }

    proptest! {
        #[test]
        fn prop_minute_roundtrip(v in -1e9..1e9f64) {
            let back = to_minute(from_minute(v));
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
