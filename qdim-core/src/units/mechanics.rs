//! Mechanical quantities derived from mass, length, time and angle.
//!
//! ```rust
//! use qdim_core::mechanics::{Force, Power, Torque, NEWTON, WATT};
//! use qdim_core::length::METER;
//! use qdim_core::time::SECOND;
//!
//! let f: Force = 10.0 * NEWTON;
//! let t: Torque = f * (0.5 * METER);
//! let p: Power = t / SECOND;
//! assert_eq!(p, 5.0 * WATT);
//! ```

use crate::dimension::{exponent::*, Dim};
use crate::length::Meter;
use crate::{Quantity, Unit};
use qdim_derive::Unit;

/// Dimension of path curvature (`m^-1`).
///
/// Radians are dimensionless here: curvature times arc length is a plain [`crate::number::Number`].
pub type CurvatureDim = Dim<Zero, NegOne, Zero, Zero, Zero, Zero, Zero, Zero>;
/// A curvature, stored in radians per metre.
pub type Curvature = Quantity<CurvatureDim>;

/// Dimension of moment of inertia (`kg·m^2`).
pub type InertiaDim = Dim<One, Two, Zero, Zero, Zero, Zero, Zero, Zero>;
/// A moment of inertia, stored in kilogram square metres.
pub type Inertia = Quantity<InertiaDim>;

/// Dimension of force (`kg·m·s^-2`).
pub type ForceDim = Dim<One, One, NegTwo, Zero, Zero, Zero, Zero, Zero>;
/// A force, stored in newtons.
pub type Force = Quantity<ForceDim>;

/// Dimension of torque (`kg·m^2·s^-2`).
pub type TorqueDim = Dim<One, Two, NegTwo, Zero, Zero, Zero, Zero, Zero>;
/// A torque, stored in newton metres.
pub type Torque = Quantity<TorqueDim>;

/// Dimension of power (`kg·m^2·s^-3`).
pub type PowerDim = Dim<One, Two, NegThree, Zero, Zero, Zero, Zero, Zero>;
/// A power, stored in watts.
pub type Power = Quantity<PowerDim>;

/// Radian per metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad/m", dimension = CurvatureDim, ratio = 1.0 / Meter::RATIO, base)]
pub struct RadianPerMeter;

/// Kilogram square metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg*m^2", dimension = InertiaDim, ratio = 1.0, base)]
pub struct KilogramSquareMeter;

/// Newton (`kg·m·s^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", dimension = ForceDim, ratio = 1.0, base)]
pub struct Newton;

/// Newton metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N*m", dimension = TorqueDim, ratio = Newton::RATIO * Meter::RATIO, base)]
pub struct NewtonMeter;

/// Watt (`J/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "W", dimension = PowerDim, ratio = 1.0, base)]
pub struct Watt;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceleration::METER_PER_SECOND_SQUARED;
    use crate::dimension::Dimension;
    use crate::length::{Length, METER};
    use crate::mass::KILOGRAM;
    use crate::number::Number;

    #[test]
    fn newtons_second_law() {
        let f: Force = (2.0 * KILOGRAM) * (3.0 * METER_PER_SECOND_SQUARED);
        assert_eq!(f, 6.0 * NEWTON);
        assert_eq!(format!("{}", f), "6_N");
    }

    #[test]
    fn inertia_of_point_mass() {
        let r: Length = 2.0 * METER;
        let i: Inertia = (3.0 * KILOGRAM) * r * r;
        assert_eq!(i, 12.0 * KILOGRAM_SQUARE_METER);
    }

    #[test]
    fn curvature_is_inverse_length() {
        assert_eq!(format!("{}", CurvatureDim::VECTOR), "m^-1");
        let k: Curvature = Number::from(0.5) / METER;
        assert_eq!(k, 0.5 * RADIAN_PER_METER);
        assert_eq!(format!("{}", k), "0.5_rad/m");
    }

    #[test]
    fn curvature_times_arc_is_a_number() {
        let k: Curvature = 0.5 * RADIAN_PER_METER;
        let turned: Number = k * (4.0 * METER);
        assert_eq!(turned, 2.0);
        let radius: Length = 1.0 / k;
        assert_eq!(radius, 2.0 * METER);
    }

    #[test]
    fn torque_display() {
        assert_eq!(format!("{}", 1.5 * NEWTON_METER), "1.5_N*m");
        assert_eq!(format!("{}", 2.0 * WATT), "2_W");
    }
}
