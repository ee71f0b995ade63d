//! Amount of substance.

use crate::dimension::{exponent::*, Dim};
use crate::Quantity;
use qdim_derive::Unit;

/// Dimension of amount of substance (`mol`).
pub type AmountDim = Dim<Zero, Zero, Zero, Zero, Zero, Zero, Zero, One>;
/// An amount of substance, stored in moles.
pub type Moles = Quantity<AmountDim>;

/// Mole (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mol", dimension = AmountDim, ratio = 1.0, base)]
pub struct Mole;
