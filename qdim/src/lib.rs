//! Compile-time checked physical quantities.
//!
//! `qdim` is the user-facing crate in this workspace. It re-exports the full API from `qdim-core` and flattens most
//! of the unit catalogue into the crate root.
//!
//! The core idea is: a value is always a `Quantity<D>`, where `D` is a zero-sized type listing the exponents of the
//! eight base dimensions. Values are stored in coherent base units, so units only appear at the edges (reading a
//! value in, printing it out) and the dimension costs nothing at run time.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can’t add metres to seconds).
//! - Derives the dimension of every product, quotient, power and root, including fractional exponents.
//! - Provides metric prefixes, customary units and 3D vectors of quantities.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Affine temperature scales (Celsius, Fahrenheit).
//! - Parsing quantities from text.
//!
//! # Quick start
//!
//! ```rust
//! use qdim::{Length, LinearVelocity, Time, KILOMETER_PER_HOUR, METER, SECOND};
//!
//! let d: Length = 100.0 * METER;
//! let t: Time = 12.0 * SECOND;
//! let v: LinearVelocity = d / t;
//! assert!((v.ratio_to(KILOMETER_PER_HOUR) - 30.0).abs() < 1e-9);
//! ```
//!
//! Powers and roots keep track of the dimension:
//!
//! ```rust
//! use qdim::{math, Area, Length, METER};
//!
//! let a: Area = math::square(3.0 * METER);
//! let side: Length = math::sqrt(a);
//! assert_eq!(side, 3.0 * METER);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use qdim::{METER, SECOND};
//!
//! let _ = METER + SECOND; // cannot add a length to a time
//! ```
//!
//! ```compile_fail
//! use qdim::{LinearAcceleration, METER, SECOND};
//!
//! let _: LinearAcceleration = METER / SECOND; // a velocity is not an acceleration
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules. All of them except [`mechanics`] are also flattened into the
//! crate root; `mechanics::Power` would otherwise shadow the [`Power`] dimension operator.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qdim-core`.
//! - `serde`: `Quantity<D>` serializes as its raw `f64`; [`serde_with_dimension`] stores and checks the dimension.
//! - `approx`: `approx` comparisons for [`Quantity`] and [`Vector3D`].
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qdim = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Arithmetic does not panic and follows IEEE-754. [`DimensionError`] is returned only where a dimension is checked at
//! run time ([`AnyQuantity::downcast`], dimension-tagged deserialization).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use qdim_core::*;

/// Derive macro used by `qdim-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, `crate::Quantity` and `crate::NamedDimension`, so it is intended for
/// use inside `qdim-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use qdim_derive::Unit;

pub use qdim_core::units::acceleration::*;
pub use qdim_core::units::amount::*;
pub use qdim_core::units::angle::*;
pub use qdim_core::units::area::*;
pub use qdim_core::units::electric::*;
pub use qdim_core::units::jerk::*;
pub use qdim_core::units::length::*;
pub use qdim_core::units::mass::*;
pub use qdim_core::units::number::*;
pub use qdim_core::units::photometry::*;
pub use qdim_core::units::temperature::*;
pub use qdim_core::units::time::*;
pub use qdim_core::units::velocity::*;
