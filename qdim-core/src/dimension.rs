//! Dimension vectors and the exponent algebra.
//!
//! A dimension is a vector of eight rational exponents, one per [`BaseDimension`]. At the type level it is the
//! zero-sized [`Dim`] whose eight parameters are `typenum` integers holding each exponent multiplied by
//! [`EXPONENT_SCALE`]. Exponent `1` is therefore `P240`, `-2` is `N480` and `1/2` is `P120`.
//!
//! Scaling by a fixed constant gives every representable rational exactly one encoding, so two dimensions are the
//! same type if and only if their exponents are equal. Any rational whose denominator divides `240` can be
//! represented. An operation whose exact result cannot be (say, the seventh root of a length) fails to compile
//! rather than truncating.
//!
//! The algebra itself lives in four traits, each with a type alias for its result:
//!
//! | trait                 | alias             | exponents            | quantity operation |
//! |-----------------------|-------------------|----------------------|--------------------|
//! | [`AddExponents`]      | [`Product`]       | `a + b`              | `x * y`            |
//! | [`SubExponents`]      | [`Quotient`]      | `a - b`              | `x / y`            |
//! | [`ScaleExponents`]    | [`Power`]         | `a * n`              | `x^n`              |
//! | [`DivideExponents`]   | [`Root`]          | `a / n`              | `x^(1/n)`          |
//!
//! [`DimensionVector`] is the runtime view of the same data, available on every dimension as
//! [`Dimension::VECTOR`].
//!
//! ```rust
//! use qdim_core::{Dimension, Product, Rational, BaseDimension};
//! use qdim_core::length::LengthDim;
//!
//! type AreaDim = Product<LengthDim, LengthDim>;
//! assert_eq!(AreaDim::VECTOR.exponent(BaseDimension::Length), Rational::integer(2));
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Sub};
use typenum::{Diff, Integer, NonZero, PartialDiv, PartialQuot, Prod, Sum, Z0};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DimensionError;

/// Multiplier applied to every exponent in the type-level encoding.
pub const EXPONENT_SCALE: i32 = 240;

/// Named type-level exponents, already multiplied by [`EXPONENT_SCALE`].
///
/// These keep the catalogue readable: `Dim<Zero, One, NegTwo, Zero, Zero, Zero, Zero, Zero>` is an acceleration.
pub mod exponent {
    use typenum::{N120, N240, N480, N720, P120, P240, P480, P720, Z0};

    /// Exponent `0`.
    pub type Zero = Z0;
    /// Exponent `1/2`.
    pub type Half = P120;
    /// Exponent `-1/2`.
    pub type NegHalf = N120;
    /// Exponent `1`.
    pub type One = P240;
    /// Exponent `2`.
    pub type Two = P480;
    /// Exponent `3`.
    pub type Three = P720;
    /// Exponent `-1`.
    pub type NegOne = N240;
    /// Exponent `-2`.
    pub type NegTwo = N480;
    /// Exponent `-3`.
    pub type NegThree = N720;
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime rationals
// ─────────────────────────────────────────────────────────────────────────────

const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    // Both operands come from i32 products, so the gcd is far below i128::MAX.
    a as i128
}

/// A rational exponent, always kept in lowest terms with a positive denominator.
///
/// Arithmetic is carried out in `i128` and reduced before narrowing, so it never wraps. A result whose reduced
/// numerator or denominator does not fit in `i32` panics in the plain operations and is `None` in the `checked_*`
/// ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "(i32, i32)", try_from = "(i32, i32)"))]
pub struct Rational {
    numer: i32,
    denom: i32,
}

impl Rational {
    /// `0`.
    pub const ZERO: Self = Self { numer: 0, denom: 1 };
    /// `1`.
    pub const ONE: Self = Self { numer: 1, denom: 1 };

    /// Builds `numer / denom` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero, or if the reduced value does not fit (`i32::MIN / -1`). Use
    /// [`Rational::checked_new`] for untrusted input.
    #[inline]
    pub const fn new(numer: i32, denom: i32) -> Self {
        assert!(denom != 0, "rational exponent with a zero denominator");
        Self::narrow(Self::reduced(numer as i128, denom as i128))
    }

    /// Builds `numer / denom` in lowest terms, or `None` when `denom` is zero or the reduced value does not fit.
    #[inline]
    pub const fn checked_new(numer: i32, denom: i32) -> Option<Self> {
        if denom == 0 {
            None
        } else {
            Self::reduced(numer as i128, denom as i128)
        }
    }

    /// The integer `n` as a rational.
    #[inline]
    pub const fn integer(n: i32) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// Reduces a wide fraction with a non-zero denominator and narrows it back to `i32`.
    const fn reduced(numer: i128, denom: i128) -> Option<Self> {
        if numer == 0 {
            return Some(Self::ZERO);
        }
        let g = gcd(numer, denom);
        let (mut n, mut d) = (numer / g, denom / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        if n < i32::MIN as i128 || n > i32::MAX as i128 || d > i32::MAX as i128 {
            return None;
        }
        Some(Self {
            numer: n as i32,
            denom: d as i32,
        })
    }

    const fn narrow(r: Option<Self>) -> Self {
        match r {
            Some(r) => r,
            None => panic!("rational exponent overflows i32"),
        }
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn numer(self) -> i32 {
        self.numer
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn denom(self) -> i32 {
        self.denom
    }

    /// `true` for `0`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numer == 0
    }

    /// `true` when the denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.denom == 1
    }

    /// Sum, or `None` if it does not fit.
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        let (a, b, c, d) = self.wide(other);
        Self::reduced(a * d + c * b, b * d)
    }

    /// Difference, or `None` if it does not fit.
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        let (a, b, c, d) = self.wide(other);
        Self::reduced(a * d - c * b, b * d)
    }

    /// Product, or `None` if it does not fit.
    pub const fn checked_mul(self, other: Self) -> Option<Self> {
        let (a, b, c, d) = self.wide(other);
        Self::reduced(a * c, b * d)
    }

    /// Quotient, or `None` if `other` is zero or the result does not fit.
    pub const fn checked_div(self, other: Self) -> Option<Self> {
        if other.numer == 0 {
            return None;
        }
        let (a, b, c, d) = self.wide(other);
        Self::reduced(a * d, b * c)
    }

    /// Const addition.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit.
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self::narrow(self.checked_add(other))
    }

    /// Const subtraction.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit.
    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Self::narrow(self.checked_sub(other))
    }

    /// Const multiplication.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit.
    #[inline]
    pub const fn mul(self, other: Self) -> Self {
        Self::narrow(self.checked_mul(other))
    }

    /// Const division.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero or the result does not fit.
    #[inline]
    pub const fn div(self, other: Self) -> Self {
        assert!(other.numer != 0, "rational exponent with a zero denominator");
        Self::narrow(self.checked_div(other))
    }

    const fn wide(self, other: Self) -> (i128, i128, i128, i128) {
        (
            self.numer as i128,
            self.denom as i128,
            other.numer as i128,
            other.denom as i128,
        )
    }
}

impl Add for Rational {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Rational::add(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Rational::sub(self, rhs)
    }
}

impl Mul for Rational {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Rational::mul(self, rhs)
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(n: i32) -> Self {
        Self::integer(n)
    }
}

impl From<Rational> for (i32, i32) {
    #[inline]
    fn from(r: Rational) -> Self {
        (r.numer, r.denom)
    }
}

impl TryFrom<(i32, i32)> for Rational {
    type Error = DimensionError;

    fn try_from((numer, denom): (i32, i32)) -> Result<Self, Self::Error> {
        if denom == 0 {
            return Err(DimensionError::ZeroDenominator { numer });
        }
        Self::checked_new(numer, denom).ok_or(DimensionError::ExponentOverflow { numer, denom })
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions and the runtime dimension vector
// ─────────────────────────────────────────────────────────────────────────────

/// The eight base dimensions, in the order they appear in every dimension vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseDimension {
    /// Mass, in kilograms.
    Mass,
    /// Length, in metres.
    Length,
    /// Time, in seconds.
    Time,
    /// Electric current, in amperes.
    Current,
    /// Plane angle, in radians.
    Angle,
    /// Thermodynamic temperature, in kelvins.
    Temperature,
    /// Luminous intensity, in candelas.
    Luminosity,
    /// Amount of substance, in moles.
    Amount,
}

impl BaseDimension {
    /// All base dimensions in vector order.
    pub const ALL: [Self; 8] = [
        Self::Mass,
        Self::Length,
        Self::Time,
        Self::Current,
        Self::Angle,
        Self::Temperature,
        Self::Luminosity,
        Self::Amount,
    ];

    /// Position of this base dimension inside a [`DimensionVector`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the base unit this dimension is stored in.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mass => "kg",
            Self::Length => "m",
            Self::Time => "s",
            Self::Current => "A",
            Self::Angle => "rad",
            Self::Temperature => "K",
            Self::Luminosity => "cd",
            Self::Amount => "mol",
        }
    }
}

/// Runtime view of a dimension: eight rational exponents in [`BaseDimension::ALL`] order.
///
/// Every operation mirrors one of the type-level traits, so `A::VECTOR.add(B::VECTOR)` equals
/// `Product::<A, B>::VECTOR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DimensionVector {
    exponents: [Rational; 8],
}

impl DimensionVector {
    /// The identity: every exponent zero.
    pub const DIMENSIONLESS: Self = Self {
        exponents: [Rational::ZERO; 8],
    };

    /// Builds a vector from eight rational exponents.
    #[inline]
    pub const fn new(exponents: [Rational; 8]) -> Self {
        Self { exponents }
    }

    /// Builds a vector from eight integer exponents.
    pub const fn from_integers(exponents: [i32; 8]) -> Self {
        let mut out = [Rational::ZERO; 8];
        let mut i = 0;
        while i < 8 {
            out[i] = Rational::integer(exponents[i]);
            i += 1;
        }
        Self { exponents: out }
    }

    /// Decodes the type-level encoding (exponents multiplied by [`EXPONENT_SCALE`]).
    pub(crate) const fn from_scaled(scaled: [i32; 8]) -> Self {
        let mut out = [Rational::ZERO; 8];
        let mut i = 0;
        while i < 8 {
            out[i] = Rational::new(scaled[i], EXPONENT_SCALE);
            i += 1;
        }
        Self { exponents: out }
    }

    /// Exponent of one base dimension.
    #[inline]
    pub const fn exponent(self, base: BaseDimension) -> Rational {
        self.exponents[base.index()]
    }

    /// All eight exponents.
    #[inline]
    pub const fn exponents(self) -> [Rational; 8] {
        self.exponents
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        let mut i = 0;
        while i < 8 {
            if !self.exponents[i].is_zero() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Componentwise sum; the dimension of a product.
    pub const fn add(self, other: Self) -> Self {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 8 {
            out[i] = out[i].add(other.exponents[i]);
            i += 1;
        }
        Self { exponents: out }
    }

    /// Componentwise difference; the dimension of a quotient.
    pub const fn subtract(self, other: Self) -> Self {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 8 {
            out[i] = out[i].sub(other.exponents[i]);
            i += 1;
        }
        Self { exponents: out }
    }

    /// Multiplies every exponent by `factor`; the dimension of a power.
    pub const fn scale(self, factor: Rational) -> Self {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 8 {
            out[i] = out[i].mul(factor);
            i += 1;
        }
        Self { exponents: out }
    }

    /// Divides every exponent by `divisor`; the dimension of a root.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub const fn divide_exponents(self, divisor: Rational) -> Self {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 8 {
            out[i] = out[i].div(divisor);
            i += 1;
        }
        Self { exponents: out }
    }

    /// Exchanges the angle and length exponents.
    pub const fn swap_angle_length(self) -> Self {
        let mut out = self.exponents;
        let length = BaseDimension::Length.index();
        let angle = BaseDimension::Angle.index();
        out[length] = self.exponents[angle];
        out[angle] = self.exponents[length];
        Self { exponents: out }
    }
}

impl Default for DimensionVector {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

/// Formats as a product of base unit symbols, e.g. `kg·m·s^-2` or `m^(1/2)`; `1` when dimensionless.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.exponent(base);
            if e.is_zero() {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if e == Rational::ONE {
                continue;
            }
            if e.is_integer() {
                write!(f, "^{}", e)?;
            } else {
                write!(f, "^({})", e)?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Type-level dimension vector.
///
/// Parameters are, in order: mass, length, time, current, angle, temperature, luminosity, amount. Each is a
/// `typenum` integer equal to the exponent times [`EXPONENT_SCALE`]; see [`exponent`] for readable names.
/// The type is never instantiated.
pub struct Dim<M, L, T, I, A, O, J, N>(PhantomData<(M, L, T, I, A, O, J, N)>);

/// Trait implemented by every type-level dimension.
pub trait Dimension: Sized {
    /// Scaled mass exponent.
    type Mass: Integer;
    /// Scaled length exponent.
    type Length: Integer;
    /// Scaled time exponent.
    type Time: Integer;
    /// Scaled current exponent.
    type Current: Integer;
    /// Scaled angle exponent.
    type Angle: Integer;
    /// Scaled temperature exponent.
    type Temperature: Integer;
    /// Scaled luminosity exponent.
    type Luminosity: Integer;
    /// Scaled amount-of-substance exponent.
    type Amount: Integer;

    /// The same dimension as a runtime value, exponents in lowest terms.
    const VECTOR: DimensionVector;
}

impl<M, L, T, I, A, O, J, N> Dimension for Dim<M, L, T, I, A, O, J, N>
where
    M: Integer,
    L: Integer,
    T: Integer,
    I: Integer,
    A: Integer,
    O: Integer,
    J: Integer,
    N: Integer,
{
    type Mass = M;
    type Length = L;
    type Time = T;
    type Current = I;
    type Angle = A;
    type Temperature = O;
    type Luminosity = J;
    type Amount = N;

    const VECTOR: DimensionVector = DimensionVector::from_scaled([
        M::I32,
        L::I32,
        T::I32,
        I::I32,
        A::I32,
        O::I32,
        J::I32,
        N::I32,
    ]);
}

/// The dimensionless dimension (all exponents zero).
pub type NumberDim = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Componentwise exponent addition; the dimension of `Self * Rhs`.
pub trait AddExponents<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Componentwise exponent subtraction; the dimension of `Self / Rhs`.
pub trait SubExponents<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Multiplies every exponent by the integer `N`; the dimension of `Self^N`.
pub trait ScaleExponents<N: Integer>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Divides every exponent by the non-zero integer `N`; the dimension of the `N`-th root.
///
/// Only implemented when every scaled exponent is exactly divisible by `N`.
pub trait DivideExponents<N: Integer + NonZero>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Exchanges the angle and length exponents (angular ↔ linear).
pub trait SwapAngleLength: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of `A * B`.
pub type Product<A, B> = <A as AddExponents<B>>::Output;
/// Dimension of `A / B`.
pub type Quotient<A, B> = <A as SubExponents<B>>::Output;
/// Dimension of `A^N`.
pub type Power<A, N> = <A as ScaleExponents<N>>::Output;
/// Dimension of the `N`-th root of `A`.
pub type Root<A, N> = <A as DivideExponents<N>>::Output;
/// `A` with its angle and length exponents exchanged.
pub type Swapped<A> = <A as SwapAngleLength>::Output;

macro_rules! componentwise_exponent_op {
    ($trait:ident, $op:ident, $alias:ident) => {
        impl<M1, L1, T1, I1, A1, O1, J1, N1, M2, L2, T2, I2, A2, O2, J2, N2>
            $trait<Dim<M2, L2, T2, I2, A2, O2, J2, N2>> for Dim<M1, L1, T1, I1, A1, O1, J1, N1>
        where
            M1: Integer + $op<M2>,
            L1: Integer + $op<L2>,
            T1: Integer + $op<T2>,
            I1: Integer + $op<I2>,
            A1: Integer + $op<A2>,
            O1: Integer + $op<O2>,
            J1: Integer + $op<J2>,
            N1: Integer + $op<N2>,
            M2: Integer,
            L2: Integer,
            T2: Integer,
            I2: Integer,
            A2: Integer,
            O2: Integer,
            J2: Integer,
            N2: Integer,
            $alias<M1, M2>: Integer,
            $alias<L1, L2>: Integer,
            $alias<T1, T2>: Integer,
            $alias<I1, I2>: Integer,
            $alias<A1, A2>: Integer,
            $alias<O1, O2>: Integer,
            $alias<J1, J2>: Integer,
            $alias<N1, N2>: Integer,
        {
            type Output = Dim<
                $alias<M1, M2>,
                $alias<L1, L2>,
                $alias<T1, T2>,
                $alias<I1, I2>,
                $alias<A1, A2>,
                $alias<O1, O2>,
                $alias<J1, J2>,
                $alias<N1, N2>,
            >;
        }
    };
}

componentwise_exponent_op!(AddExponents, Add, Sum);
componentwise_exponent_op!(SubExponents, Sub, Diff);

impl<M, L, T, I, A, O, J, N, K> ScaleExponents<K> for Dim<M, L, T, I, A, O, J, N>
where
    K: Integer,
    M: Integer + Mul<K>,
    L: Integer + Mul<K>,
    T: Integer + Mul<K>,
    I: Integer + Mul<K>,
    A: Integer + Mul<K>,
    O: Integer + Mul<K>,
    J: Integer + Mul<K>,
    N: Integer + Mul<K>,
    Prod<M, K>: Integer,
    Prod<L, K>: Integer,
    Prod<T, K>: Integer,
    Prod<I, K>: Integer,
    Prod<A, K>: Integer,
    Prod<O, K>: Integer,
    Prod<J, K>: Integer,
    Prod<N, K>: Integer,
{
    type Output = Dim<
        Prod<M, K>,
        Prod<L, K>,
        Prod<T, K>,
        Prod<I, K>,
        Prod<A, K>,
        Prod<O, K>,
        Prod<J, K>,
        Prod<N, K>,
    >;
}

impl<M, L, T, I, A, O, J, N, K> DivideExponents<K> for Dim<M, L, T, I, A, O, J, N>
where
    K: Integer + NonZero,
    M: Integer + PartialDiv<K>,
    L: Integer + PartialDiv<K>,
    T: Integer + PartialDiv<K>,
    I: Integer + PartialDiv<K>,
    A: Integer + PartialDiv<K>,
    O: Integer + PartialDiv<K>,
    J: Integer + PartialDiv<K>,
    N: Integer + PartialDiv<K>,
    PartialQuot<M, K>: Integer,
    PartialQuot<L, K>: Integer,
    PartialQuot<T, K>: Integer,
    PartialQuot<I, K>: Integer,
    PartialQuot<A, K>: Integer,
    PartialQuot<O, K>: Integer,
    PartialQuot<J, K>: Integer,
    PartialQuot<N, K>: Integer,
{
    type Output = Dim<
        PartialQuot<M, K>,
        PartialQuot<L, K>,
        PartialQuot<T, K>,
        PartialQuot<I, K>,
        PartialQuot<A, K>,
        PartialQuot<O, K>,
        PartialQuot<J, K>,
        PartialQuot<N, K>,
    >;
}

impl<M, L, T, I, A, O, J, N> SwapAngleLength for Dim<M, L, T, I, A, O, J, N>
where
    M: Integer,
    L: Integer,
    T: Integer,
    I: Integer,
    A: Integer,
    O: Integer,
    J: Integer,
    N: Integer,
{
    type Output = Dim<M, A, T, I, L, O, J, N>;
}
