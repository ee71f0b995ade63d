//! Core type system for dimensionally checked physical quantities.
//!
//! `qdim-core` tracks physical dimensions in the type system at zero runtime cost:
//!
//! - A *dimension* is a type-level vector of eight rational exponents over mass, length, time, current,
//!   angle, temperature, luminosity and amount ([`Dim`]).
//! - A value carrying a dimension is a [`Quantity<D>`], backed by an `f64` in coherent base units.
//! - Multiplying or dividing quantities adds or subtracts exponents at compile time ([`Product`],
//!   [`Quotient`]); powers and roots scale them ([`Power`], [`Root`]).
//! - A *unit* is a zero-sized marker implementing [`Unit`]; it only matters when entering or leaving the base
//!   unit system.
//!
//! Most users should depend on `qdim` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimensionally inconsistent arithmetic (adding a length to a time, assigning a
//!   velocity to an acceleration, ...).
//! - Automatic derivation of result dimensions, including fractional exponents from roots.
//! - A catalogue of units with metric prefixes, generated from one declaration per unit.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Affine scales such as Celsius.
//! - Exponents whose denominator does not divide [`EXPONENT_SCALE`].
//!
//! # Quick start
//!
//! ```rust
//! use qdim_core::length::{Length, KILOMETER, METER};
//! use qdim_core::time::{Time, MINUTE};
//! use qdim_core::velocity::{LinearVelocity, MeterPerSecond};
//!
//! let d: Length = 1.5 * KILOMETER + 200.0 * METER;
//! let t: Time = 5.0 * MINUTE;
//! let v: LinearVelocity = d / t;
//! assert!((v.to_unit::<MeterPerSecond>() - 5.666_666).abs() < 1e-6);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `qdim-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! qdim-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support. `Quantity<D>` serializes as its raw `f64`; [`serde_with_dimension`]
//!   records and checks the dimension.
//! - `approx`: implements the `approx` comparison traits for [`Quantity`] and [`Vector3D`].
//!
//! # Panics and errors
//!
//! Arithmetic is plain `f64` and follows IEEE-754 (NaN and infinities propagate). Errors only arise where a
//! dimension is checked at run time; they are reported as [`DimensionError`].
//!
//! # Logging
//!
//! The crate logs through the `log` facade: `trace` when a dimension is forcibly reinterpreted and `debug` when a
//! runtime downcast is rejected. Nothing is logged on the arithmetic paths.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod any;
mod dimension;
mod error;
mod float;
pub mod math;
mod quantity;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use any::AnyQuantity;
pub use dimension::{
    exponent, AddExponents, BaseDimension, Dim, Dimension, DimensionVector, DivideExponents, NumberDim, Power, Product,
    Quotient, Rational, Root, ScaleExponents, SubExponents, SwapAngleLength, Swapped, EXPONENT_SCALE,
};
pub use error::DimensionError;
pub use quantity::Quantity;
pub use unit::{DisplayIn, NamedDimension, Unit};
pub use vector::{V3Acceleration, V3Force, V3Position, V3Velocity, Vector3D};

#[cfg(feature = "serde")]
pub use quantity::serde_with_dimension;

/// Type-level integers used to spell exponents and `pow`/`root` arguments.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `qdim-core` so they can register base units and implement inherent methods such as
/// the trigonometric functions without running into Rust's orphan rules.
pub mod units;

pub use units::acceleration;
pub use units::amount;
pub use units::angle;
pub use units::area;
pub use units::electric;
pub use units::jerk;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::number;
pub use units::photometry;
pub use units::temperature;
pub use units::time;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::exponent::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test dimension and units for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    type TestDim = Dim<Zero, Zero, Zero, Zero, Zero, Zero, Zero, Three>;

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum TestUnit {}
    impl Unit for TestUnit {
        const RATIO: f64 = 1.0;
        type Dim = TestDim;
        const SYMBOL: &'static str = "tu";
    }
    impl NamedDimension for TestDim {
        type BaseUnit = TestUnit;
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum DoubleTestUnit {}
    impl Unit for DoubleTestUnit {
        const RATIO: f64 = 2.0;
        type Dim = TestDim;
        const SYMBOL: &'static str = "dtu";
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Hand-written units behave like derived ones
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn manual_unit_conversion() {
        let q = Quantity::<TestDim>::from_unit::<DoubleTestUnit>(3.0);
        assert_eq!(q.value(), 6.0);
        assert_eq!(q.to_unit::<TestUnit>(), 6.0);
        assert_eq!(q.to_unit::<DoubleTestUnit>(), 3.0);
    }

    #[test]
    fn manual_unit_display() {
        let q = Quantity::<TestDim>::new(1.5);
        assert_eq!(format!("{}", q), "1.5_tu");
        assert_eq!(format!("{}", q.display_in::<DoubleTestUnit>()), "0.75_dtu");
    }

    #[test]
    fn test_dimension_vector() {
        assert_eq!(
            TestDim::VECTOR.exponent(BaseDimension::Amount),
            Rational::integer(3)
        );
        assert_eq!(format!("{}", TestDim::VECTOR), "mol^3");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Catalogue closure
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn derived_dimensions_close_over_the_catalogue() {
        use crate::electric::{CurrentDim, ResistanceDim, VoltageDim};
        use crate::mechanics::{ForceDim, PowerDim, TorqueDim};

        assert_eq!(
            Product::<mass::MassDim, acceleration::LinearAccelerationDim>::VECTOR,
            ForceDim::VECTOR
        );
        assert_eq!(
            Product::<ForceDim, length::LengthDim>::VECTOR,
            TorqueDim::VECTOR
        );
        assert_eq!(
            Quotient::<TorqueDim, time::TimeDim>::VECTOR,
            PowerDim::VECTOR
        );
        assert_eq!(
            Quotient::<PowerDim, CurrentDim>::VECTOR,
            VoltageDim::VECTOR
        );
        assert_eq!(
            Quotient::<VoltageDim, CurrentDim>::VECTOR,
            ResistanceDim::VECTOR
        );
    }

    #[test]
    fn quantities_are_plain_f64_in_size() {
        assert_eq!(
            core::mem::size_of::<length::Length>(),
            core::mem::size_of::<f64>()
        );
        assert_eq!(
            core::mem::size_of::<V3Position>(),
            3 * core::mem::size_of::<f64>()
        );
    }

    #[test]
    fn quantities_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<length::Length>();
        assert_send_sync::<V3Force>();
        assert_send_sync::<AnyQuantity>();
    }
}
