//! Dimension-aware math on [`Quantity`].
//!
//! Functions that keep the dimension (`abs`, `min`, `round`, ...) accept any `Quantity<D>`. Powers and roots
//! change it, so their result type is computed with [`Power`] and [`Root`]; a root that would need an exponent
//! outside the representable set is a compile error.
//!
//! ```rust
//! use qdim_core::math;
//! use qdim_core::area::Area;
//! use qdim_core::length::{Length, METER};
//!
//! let side: Length = 3.0 * METER;
//! let a: Area = math::square(side);
//! let back: Length = math::sqrt(a);
//! assert_eq!(back, side);
//! ```
//!
//! ```compile_fail
//! use qdim_core::math;
//! use qdim_core::length::METER;
//!
//! // exponent 1/7 is not representable
//! let _ = math::root::<qdim_core::typenum::P7, _>(METER);
//! ```

use crate::dimension::{DivideExponents, Power, Root, ScaleExponents};
use crate::float;
use crate::{Dimension, Quantity};
use typenum::{Integer, NonZero, P2, P3};

/// Absolute value.
#[inline]
pub fn abs<D: Dimension>(q: Quantity<D>) -> Quantity<D> {
    Quantity::new(float::abs(q.value()))
}

/// The smaller operand.
///
/// Returns `b` when the operands are unordered (NaN).
#[inline]
pub fn min<D: Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
    if a < b {
        a
    } else {
        b
    }
}

/// The larger operand.
///
/// Returns `b` when the operands are unordered (NaN).
#[inline]
pub fn max<D: Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
    if a > b {
        a
    } else {
        b
    }
}

/// Integer power; the dimension's exponents are multiplied by `N`.
///
/// ```rust
/// use qdim_core::math;
/// use qdim_core::length::METER;
/// use qdim_core::typenum::N1;
///
/// let per_meter = math::pow::<N1, _>(4.0 * METER);
/// assert_eq!(per_meter.value(), 0.25);
/// ```
#[inline]
pub fn pow<N: Integer, D: ScaleExponents<N>>(q: Quantity<D>) -> Quantity<Power<D, N>> {
    Quantity::new(float::powi(q.value(), N::I32))
}

/// `q²`.
#[inline]
pub fn square<D: ScaleExponents<P2>>(q: Quantity<D>) -> Quantity<Power<D, P2>> {
    Quantity::new(q.value() * q.value())
}

/// `q³`.
#[inline]
pub fn cube<D: ScaleExponents<P3>>(q: Quantity<D>) -> Quantity<Power<D, P3>> {
    Quantity::new(q.value() * q.value() * q.value())
}

/// `N`-th root, computed as `q^(1/N)`; the dimension's exponents are divided by `N`.
///
/// Negative values give NaN, as with `f64::powf`.
#[inline]
pub fn root<N: Integer + NonZero, D: DivideExponents<N>>(q: Quantity<D>) -> Quantity<Root<D, N>> {
    Quantity::new(float::powf(q.value(), 1.0 / f64::from(N::I32)))
}

/// Square root.
#[inline]
pub fn sqrt<D: DivideExponents<P2>>(q: Quantity<D>) -> Quantity<Root<D, P2>> {
    Quantity::new(float::sqrt(q.value()))
}

/// Cube root; defined for negative values.
#[inline]
pub fn cbrt<D: DivideExponents<P3>>(q: Quantity<D>) -> Quantity<Root<D, P3>> {
    Quantity::new(float::cbrt(q.value()))
}

/// `sqrt(x² + y²)` without intermediate overflow.
#[inline]
pub fn hypot<D: Dimension>(x: Quantity<D>, y: Quantity<D>) -> Quantity<D> {
    Quantity::new(float::hypot(x.value(), y.value()))
}

/// Floating-point remainder of `x / y`, with the sign of `x`.
#[inline]
pub fn rem<D: Dimension>(x: Quantity<D>, y: Quantity<D>) -> Quantity<D> {
    Quantity::new(x.value() % y.value())
}

/// Magnitude of `magnitude` with the sign of `sign`; the two may have different dimensions.
#[inline]
pub fn copysign<D: Dimension, E: Dimension>(magnitude: Quantity<D>, sign: Quantity<E>) -> Quantity<D> {
    Quantity::new(float::copysign(magnitude.value(), sign.value()))
}

/// `-1` for negative values, `1` otherwise (zero included).
#[inline]
pub fn sgn<D: Dimension>(q: Quantity<D>) -> i32 {
    if q.value() < 0.0 {
        -1
    } else {
        1
    }
}

/// `true` when the sign bit is set (negative values, `-0.0` and negative NaN).
#[inline]
pub fn signbit<D: Dimension>(q: Quantity<D>) -> bool {
    q.value().is_sign_negative()
}

/// Restricts `q` to `[lo, hi]`, computed as `max(q, lo)` then `min(_, hi)`.
///
/// Never panics; if `lo > hi` the result is `hi`.
#[inline]
pub fn clamp<D: Dimension>(q: Quantity<D>, lo: Quantity<D>, hi: Quantity<D>) -> Quantity<D> {
    min(max(q, lo), hi)
}

/// Smallest multiple of `step` that is not below `q`.
///
/// ```rust
/// use qdim_core::math;
/// use qdim_core::length::{CENTIMETER, METER};
///
/// let r = math::ceil(1.234 * METER, CENTIMETER);
/// assert!((r.value() - 1.24).abs() < 1e-12);
/// ```
#[inline]
pub fn ceil<D: Dimension>(q: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
    Quantity::new(float::ceil(q.ratio_to(step)) * step.value())
}

/// Largest multiple of `step` that is not above `q`.
#[inline]
pub fn floor<D: Dimension>(q: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
    Quantity::new(float::floor(q.ratio_to(step)) * step.value())
}

/// `q` truncated toward zero to a multiple of `step`.
#[inline]
pub fn trunc<D: Dimension>(q: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
    Quantity::new(float::trunc(q.ratio_to(step)) * step.value())
}

/// Nearest multiple of `step`; halfway cases round away from zero.
#[inline]
pub fn round<D: Dimension>(q: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
    Quantity::new(float::round(q.ratio_to(step)) * step.value())
}
