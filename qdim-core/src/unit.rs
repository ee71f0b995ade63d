//! Unit types and traits.

use crate::dimension::Dimension;
use crate::Quantity;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the size of one of this unit expressed in the base unit of its dimension.
///   Metres are the base of length (`Meter::RATIO == 1.0`), so `Kilometer::RATIO == 1000.0` and
///   `Inch::RATIO == 0.0254`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`).
///
/// * `Dim` ties the unit to its [`Dimension`].
///
/// Units are normally declared with `#[derive(Unit)]`, which also generates the unit constant and the
/// `from_*`/`to_*` helpers.
///
/// # Invariants
///
/// - Implementations are zero-sized marker types.
/// - `RATIO` is finite and positive.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Size of one unit in base units.
    const RATIO: f64;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol.
    const SYMBOL: &'static str;
}

/// A dimension with a registered base unit, used to print its quantities.
///
/// Implemented by `#[unit(..., base)]`. A dimension can have only one base unit; registering a second one is a
/// conflicting-implementation error.
pub trait NamedDimension: Dimension {
    /// The unit whose `RATIO` is `1.0` and whose symbol is used by `Display`.
    type BaseUnit: Unit<Dim = Self>;
}

/// Display adapter returned by [`Quantity::display_in`].
///
/// Prints `{value}_{symbol}` with the value expressed in `U`.
pub struct DisplayIn<D: Dimension, U: Unit<Dim = D>> {
    quantity: Quantity<D>,
    unit: PhantomData<U>,
}

impl<D: Dimension, U: Unit<Dim = D>> DisplayIn<D, U> {
    pub(crate) fn new(quantity: Quantity<D>) -> Self {
        Self {
            quantity,
            unit: PhantomData,
        }
    }
}

impl<D: Dimension, U: Unit<Dim = D>> Display for DisplayIn<D, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.quantity.to_unit::<U>(), f)?;
        write!(f, "_{}", U::SYMBOL)
    }
}
