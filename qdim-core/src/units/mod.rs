//! Predefined unit modules grouped by dimension.
//!
//! Each module declares the dimension aliases (`LengthDim`), the quantity alias (`Length`) and the units of
//! that dimension. Every unit comes with a constant holding one unit (`KILOMETER`) and a `from_*`/`to_*` pair
//! (`from_kilometer`, `to_kilometer`). Units are declared with `#[derive(Unit)]`, which keeps the catalogue
//! free of hand-written conversion code.
//!
//! ## Modules
//!
//! - [`number`]: dimensionless numbers and percent.
//! - [`mass`], [`time`], [`length`]: the mechanical base dimensions.
//! - [`area`], [`velocity`], [`acceleration`], [`jerk`]: kinematics built from [`length`] and [`time`].
//! - [`angle`]: angles, angular motion, trigonometry and angular ↔ linear conversion.
//! - [`mechanics`]: curvature, inertia, force, torque and power.
//! - [`electric`]: current, charge, voltage, resistance and conductance.
//! - [`temperature`], [`photometry`], [`amount`]: the remaining base dimensions.

pub mod acceleration;
pub mod amount;
pub mod angle;
pub mod area;
pub mod electric;
pub mod jerk;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod number;
pub mod photometry;
pub mod temperature;
pub mod time;
pub mod velocity;
