//! Plane angle and rotational motion.
//!
//! Angles are stored in radians. The angle exponent is tracked like any other base dimension, so a torque
//! (`N·m`) and an energy per radian (`J/rad`) stay distinct types.
//!
//! This module also carries the trigonometric functions and the conversions between angular and linear
//! motion of a wheel:
//!
//! ```rust
//! use qdim_core::angle::{to_linear, AngularVelocity, RADIAN_PER_SECOND};
//! use qdim_core::length::METER;
//! use qdim_core::velocity::LinearVelocity;
//!
//! let spin: AngularVelocity = 20.0 * RADIAN_PER_SECOND;
//! let surface: LinearVelocity = to_linear(spin, 0.1 * METER);
//! assert!((surface.value() - 1.0).abs() < 1e-12);
//! ```

use crate::dimension::{exponent::*, Dim, Swapped, SwapAngleLength};
use crate::float;
use crate::length::Length;
use crate::number::Number;
use crate::time::{Minute, Second};
use crate::{Dimension, Quantity, Unit};
use core::f64::consts::PI;
use qdim_derive::Unit;

/// Dimension of plane angle (`rad`).
pub type AngleDim = Dim<Zero, Zero, Zero, Zero, One, Zero, Zero, Zero>;
/// A plane angle, stored in radians.
pub type Angle = Quantity<AngleDim>;

/// Dimension of angular velocity (`s^-1·rad`).
pub type AngularVelocityDim = Dim<Zero, Zero, NegOne, Zero, One, Zero, Zero, Zero>;
/// An angular velocity, stored in radians per second.
pub type AngularVelocity = Quantity<AngularVelocityDim>;

/// Dimension of angular acceleration (`s^-2·rad`).
pub type AngularAccelerationDim = Dim<Zero, Zero, NegTwo, Zero, One, Zero, Zero, Zero>;
/// An angular acceleration, stored in radians per second squared.
pub type AngularAcceleration = Quantity<AngularAccelerationDim>;

/// Dimension of angular jerk (`s^-3·rad`).
pub type AngularJerkDim = Dim<Zero, Zero, NegThree, Zero, One, Zero, Zero, Zero>;
/// An angular jerk, stored in radians per second cubed.
pub type AngularJerk = Quantity<AngularJerkDim>;

// ─────────────────────────────────────────────────────────────────────────────
// Angle
// ─────────────────────────────────────────────────────────────────────────────

/// Radian.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", dimension = AngleDim, ratio = 1.0, base)]
pub struct Radian;

/// Degree (`π/180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "deg", dimension = AngleDim, ratio = PI / 180.0 * Radian::RATIO)]
pub struct Degree;

/// Full rotation (`2π rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rot", dimension = AngleDim, ratio = 2.0 * PI * Radian::RATIO)]
pub struct Rotation;

// ─────────────────────────────────────────────────────────────────────────────
// Angular velocity, acceleration, jerk
// ─────────────────────────────────────────────────────────────────────────────

/// Radian per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad/s", dimension = AngularVelocityDim, ratio = Radian::RATIO / Second::RATIO, base)]
pub struct RadianPerSecond;

/// Degree per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "deg/s", dimension = AngularVelocityDim, ratio = Degree::RATIO / Second::RATIO)]
pub struct DegreePerSecond;

/// Rotation per minute.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rpm", dimension = AngularVelocityDim, ratio = Rotation::RATIO / Minute::RATIO)]
pub struct RotationPerMinute;

/// Radian per second squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "rad/s^2",
    dimension = AngularAccelerationDim,
    ratio = Radian::RATIO / (Second::RATIO * Second::RATIO),
    base
)]
pub struct RadianPerSecondSquared;

/// Degree per second squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "deg/s^2",
    dimension = AngularAccelerationDim,
    ratio = Degree::RATIO / (Second::RATIO * Second::RATIO)
)]
pub struct DegreePerSecondSquared;

/// Radian per second cubed.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "rad/s^3",
    dimension = AngularJerkDim,
    ratio = Radian::RATIO / (Second::RATIO * Second::RATIO * Second::RATIO),
    base
)]
pub struct RadianPerSecondCubed;

// ─────────────────────────────────────────────────────────────────────────────
// Trigonometry
// ─────────────────────────────────────────────────────────────────────────────

impl Quantity<AngleDim> {
    /// Sine.
    ///
    /// ```rust
    /// use qdim_core::angle::DEGREE;
    /// assert!(((30.0 * DEGREE).sin().value() - 0.5).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn sin(self) -> Number {
        Number::new(float::sin(self.value()))
    }

    /// Cosine.
    #[inline]
    pub fn cos(self) -> Number {
        Number::new(float::cos(self.value()))
    }

    /// Tangent.
    #[inline]
    pub fn tan(self) -> Number {
        Number::new(float::tan(self.value()))
    }

    /// `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (Number, Number) {
        (self.sin(), self.cos())
    }
}

impl Quantity<crate::NumberDim> {
    /// Arc sine, in `[-π/2, π/2]`.
    #[inline]
    pub fn asin(self) -> Angle {
        Angle::new(float::asin(self.value()))
    }

    /// Arc cosine, in `[0, π]`.
    ///
    /// ```rust
    /// use qdim_core::number::Number;
    /// use qdim_core::angle::Degree;
    /// let a = Number::new(0.5).acos();
    /// assert!((a.to_unit::<Degree>() - 60.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn acos(self) -> Angle {
        Angle::new(float::acos(self.value()))
    }

    /// Arc tangent, in `[-π/2, π/2]`.
    #[inline]
    pub fn atan(self) -> Angle {
        Angle::new(float::atan(self.value()))
    }
}

/// Four-quadrant arc tangent of `y / x`, in `[-π, π]`.
#[inline]
pub fn atan2<D: Dimension>(y: Quantity<D>, x: Quantity<D>) -> Angle {
    Angle::new(float::atan2(y.value(), x.value()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Angular ↔ linear
// ─────────────────────────────────────────────────────────────────────────────

/// Linear counterpart of an angular quantity on a wheel of the given diameter.
///
/// Multiplies by the radius and swaps the angle and length exponents: an angle becomes an arc length, an
/// angular velocity a surface speed.
#[inline]
pub fn to_linear<D: SwapAngleLength>(angular: Quantity<D>, diameter: Length) -> Quantity<Swapped<D>> {
    angular
        .force_reinterpret_dimension::<Swapped<D>>()
        * (diameter.value() / 2.0)
}

/// Angular counterpart of a linear quantity on a wheel of the given diameter; inverse of [`to_linear`].
#[inline]
pub fn to_angular<D: SwapAngleLength>(linear: Quantity<D>, diameter: Length) -> Quantity<Swapped<D>> {
    linear
        .force_reinterpret_dimension::<Swapped<D>>()
        / (diameter.value() / 2.0)
}
