//! Area units.
//!
//! The square metre is the base unit. Squared metric units are built from the prefixed metres of
//! [`crate::length`], so `SquareKilometer::RATIO == Kilometer::RATIO * Kilometer::RATIO`.

use crate::dimension::{exponent::*, Dim};
use crate::length::{
    Centimeter, Foot, Gigameter, Inch, Kilometer, Megameter, Micrometer, Millimeter, Nanometer, Terameter,
};
use crate::{Quantity, Unit};
use qdim_derive::Unit;

/// Dimension of area (`m^2`).
pub type AreaDim = Dim<Zero, Two, Zero, Zero, Zero, Zero, Zero, Zero>;
/// An area, stored in square metres.
pub type Area = Quantity<AreaDim>;

/// Square metre (coherent SI unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m^2", dimension = AreaDim, ratio = 1.0, base)]
pub struct SquareMeter;

/// Square terametre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Tm^2", dimension = AreaDim, ratio = Terameter::RATIO * Terameter::RATIO)]
pub struct SquareTerameter;

/// Square gigametre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Gm^2", dimension = AreaDim, ratio = Gigameter::RATIO * Gigameter::RATIO)]
pub struct SquareGigameter;

/// Square megametre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Mm^2", dimension = AreaDim, ratio = Megameter::RATIO * Megameter::RATIO)]
pub struct SquareMegameter;

/// Square kilometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km^2", dimension = AreaDim, ratio = Kilometer::RATIO * Kilometer::RATIO)]
pub struct SquareKilometer;

/// Square centimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm^2", dimension = AreaDim, ratio = Centimeter::RATIO * Centimeter::RATIO)]
pub struct SquareCentimeter;

/// Square millimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm^2", dimension = AreaDim, ratio = Millimeter::RATIO * Millimeter::RATIO)]
pub struct SquareMillimeter;

/// Square micrometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "um^2", dimension = AreaDim, ratio = Micrometer::RATIO * Micrometer::RATIO)]
pub struct SquareMicrometer;

/// Square nanometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm^2", dimension = AreaDim, ratio = Nanometer::RATIO * Nanometer::RATIO)]
pub struct SquareNanometer;

/// Square inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in^2", dimension = AreaDim, ratio = Inch::RATIO * Inch::RATIO)]
pub struct SquareInch;

/// Square foot.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft^2", dimension = AreaDim, ratio = Foot::RATIO * Foot::RATIO)]
pub struct SquareFoot;
