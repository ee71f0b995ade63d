//! Linear acceleration units (`Length / Time^2`).

use crate::dimension::{exponent::*, Dim};
use crate::length::{Inch, Meter, Mile};
use crate::time::{Hour, Second};
use crate::{Quantity, Unit};
use qdim_derive::Unit;

/// Dimension of linear acceleration (`m·s^-2`).
pub type LinearAccelerationDim = Dim<Zero, One, NegTwo, Zero, Zero, Zero, Zero, Zero>;
/// A linear acceleration, stored in metres per second squared.
pub type LinearAcceleration = Quantity<LinearAccelerationDim>;

/// Metre per second squared, with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "m/s^2",
    dimension = LinearAccelerationDim,
    ratio = Meter::RATIO / (Second::RATIO * Second::RATIO),
    base,
    prefixes
)]
pub struct MeterPerSecondSquared;

/// Metre per hour squared, with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "m/h^2",
    dimension = LinearAccelerationDim,
    ratio = Meter::RATIO / (Hour::RATIO * Hour::RATIO),
    prefixes
)]
pub struct MeterPerHourSquared;

/// Inch per second squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "in/s^2",
    dimension = LinearAccelerationDim,
    ratio = Inch::RATIO / (Second::RATIO * Second::RATIO)
)]
pub struct InchPerSecondSquared;

/// Mile per hour squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "mi/h^2",
    dimension = LinearAccelerationDim,
    ratio = Mile::RATIO / (Hour::RATIO * Hour::RATIO)
)]
pub struct MilePerHourSquared;
