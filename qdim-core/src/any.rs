//! Quantities whose dimension is only known at run time.
//!
//! [`AnyQuantity`] pairs a value with a [`DimensionVector`]. It is what a typed [`Quantity`] becomes after
//! [`Quantity::erase`], and what a dimension-tagged value read from outside the program looks like before it
//! is checked. [`AnyQuantity::downcast`] recovers the typed quantity when the dimensions agree.
//!
//! ```rust
//! use qdim_core::AnyQuantity;
//! use qdim_core::length::{Length, METER};
//! use qdim_core::time::Time;
//!
//! let erased = (2.0 * METER).erase();
//! assert_eq!(format!("{}", erased), "2 m");
//! assert!(erased.downcast::<qdim_core::length::LengthDim>().is_ok());
//! assert!(Time::try_from(erased).is_err());
//! let _: Length = Length::try_from(erased).unwrap();
//! ```

use crate::{Dimension, DimensionError, DimensionVector, Quantity, Rational};
use core::fmt;
use core::ops::{Div, Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value with a runtime dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnyQuantity {
    value: f64,
    dimension: DimensionVector,
}

impl AnyQuantity {
    /// Pairs a base-unit value with its dimension.
    #[inline]
    pub const fn new(value: f64, dimension: DimensionVector) -> Self {
        Self { value, dimension }
    }

    /// A dimensionless value.
    #[inline]
    pub const fn number(value: f64) -> Self {
        Self::new(value, DimensionVector::DIMENSIONLESS)
    }

    /// Value in base units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Runtime dimension.
    #[inline]
    pub const fn dimension(self) -> DimensionVector {
        self.dimension
    }

    /// Recovers the typed quantity if the dimension is `D`.
    pub fn downcast<D: Dimension>(self) -> Result<Quantity<D>, DimensionError> {
        if self.dimension == D::VECTOR {
            Ok(Quantity::new(self.value))
        } else {
            log::debug!(
                "rejected downcast of `{}` to `{}`",
                self.dimension,
                D::VECTOR
            );
            Err(DimensionError::Mismatch {
                expected: D::VECTOR,
                found: self.dimension,
            })
        }
    }

    /// Sum, if both operands have the same dimension.
    pub fn checked_add(self, other: Self) -> Result<Self, DimensionError> {
        self.ensure_same_dimension(other)?;
        Ok(Self::new(self.value + other.value, self.dimension))
    }

    /// Difference, if both operands have the same dimension.
    pub fn checked_sub(self, other: Self) -> Result<Self, DimensionError> {
        self.ensure_same_dimension(other)?;
        Ok(Self::new(self.value - other.value, self.dimension))
    }

    /// Integer power.
    pub fn powi(self, n: i32) -> Self {
        Self::new(
            crate::float::powi(self.value, n),
            self.dimension.scale(Rational::integer(n)),
        )
    }

    /// Square root; halves every exponent.
    pub fn sqrt(self) -> Self {
        Self::new(
            crate::float::sqrt(self.value),
            self.dimension.divide_exponents(Rational::integer(2)),
        )
    }

    fn ensure_same_dimension(self, other: Self) -> Result<(), DimensionError> {
        if self.dimension == other.dimension {
            Ok(())
        } else {
            log::debug!(
                "rejected `{}` operand next to `{}`",
                other.dimension,
                self.dimension
            );
            Err(DimensionError::Mismatch {
                expected: self.dimension,
                found: other.dimension,
            })
        }
    }
}

impl<D: Dimension> Quantity<D> {
    /// Moves the dimension from the type into the value.
    #[inline]
    pub fn erase(self) -> AnyQuantity {
        AnyQuantity::new(self.value(), D::VECTOR)
    }
}

impl<D: Dimension> From<Quantity<D>> for AnyQuantity {
    #[inline]
    fn from(quantity: Quantity<D>) -> Self {
        quantity.erase()
    }
}

impl<D: Dimension> TryFrom<AnyQuantity> for Quantity<D> {
    type Error = DimensionError;

    #[inline]
    fn try_from(any: AnyQuantity) -> Result<Self, Self::Error> {
        any.downcast()
    }
}

impl Mul for AnyQuantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value, self.dimension.add(rhs.dimension))
    }
}

impl Div for AnyQuantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value, self.dimension.subtract(rhs.dimension))
    }
}

impl Mul<f64> for AnyQuantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.dimension)
    }
}

impl Div<f64> for AnyQuantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.dimension)
    }
}

impl Neg for AnyQuantity {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.dimension)
    }
}

/// Formats as `{value} {dimension}`, e.g. `9.81 m·s^-2`.
impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {}", self.dimension)
    }
}
