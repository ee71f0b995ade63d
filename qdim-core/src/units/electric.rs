//! Electrical quantities.
//!
//! Volts, ohms and siemens come with their metric prefixes (`mV`, `kohm`, `uS`, ...).

use crate::dimension::{exponent::*, Dim};
use crate::Quantity;
use qdim_derive::Unit;

/// Dimension of electric current (`A`).
pub type CurrentDim = Dim<Zero, Zero, Zero, One, Zero, Zero, Zero, Zero>;
/// An electric current, stored in amperes.
pub type Current = Quantity<CurrentDim>;

/// Dimension of electric charge (`s·A`).
pub type ChargeDim = Dim<Zero, Zero, One, One, Zero, Zero, Zero, Zero>;
/// An electric charge, stored in coulombs.
pub type Charge = Quantity<ChargeDim>;

/// Dimension of voltage (`kg·m^2·s^-3·A^-1`).
pub type VoltageDim = Dim<One, Two, NegThree, NegOne, Zero, Zero, Zero, Zero>;
/// A voltage, stored in volts.
pub type Voltage = Quantity<VoltageDim>;

/// Dimension of resistance (`kg·m^2·s^-3·A^-2`).
pub type ResistanceDim = Dim<One, Two, NegThree, NegTwo, Zero, Zero, Zero, Zero>;
/// A resistance, stored in ohms.
pub type Resistance = Quantity<ResistanceDim>;

/// Dimension of conductance (`kg^-1·m^-2·s^3·A^2`).
pub type ConductanceDim = Dim<NegOne, NegTwo, Three, Two, Zero, Zero, Zero, Zero>;
/// A conductance, stored in siemens.
pub type Conductance = Quantity<ConductanceDim>;

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", dimension = CurrentDim, ratio = 1.0, base)]
pub struct Ampere;

/// Coulomb (`A·s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "C", dimension = ChargeDim, ratio = 1.0, base)]
pub struct Coulomb;

/// Volt, with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", dimension = VoltageDim, ratio = 1.0, base, prefixes)]
pub struct Volt;

/// Ohm, with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ohm", dimension = ResistanceDim, ratio = 1.0, base, prefixes)]
pub struct Ohm;

/// Siemens, with its metric prefixes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "S", dimension = ConductanceDim, ratio = 1.0, base, prefixes)]
pub struct Siemens;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::{Power, WATT};
    use crate::time::SECOND;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn ohms_law() {
        let v: Voltage = 12.0 * VOLT;
        let i: Current = 2.0 * AMPERE;
        let r: Resistance = v / i;
        assert_eq!(r, 6.0 * OHM);
        let p: Power = v * i;
        assert_eq!(p, 24.0 * WATT);
    }

    #[test]
    fn conductance_is_reciprocal_resistance() {
        let g: Conductance = 1.0 / (4.0 * OHM);
        assert_eq!(g, 0.25 * SIEMENS);
        assert_eq!(format!("{}", g), "0.25_S");
    }

    #[test]
    fn charge_is_current_times_time() {
        let q: Charge = (3.0 * AMPERE) * (2.0 * SECOND);
        assert_eq!(q, 6.0 * COULOMB);
    }

    #[test]
    fn prefixed_electric_units() {
        assert_relative_eq!(MILLIVOLT.value(), 1e-3);
        assert_relative_eq!(KILOOHM.value(), 1e3);
        assert_relative_eq!(to_microsiemens(SIEMENS), 1e6, max_relative = 1e-12);
        assert_eq!(<Kiloohm as Unit>::SYMBOL, "kohm");
        assert_eq!(<Megavolt as Unit>::SYMBOL, "MV");
    }
}
