//! Quantity type and its implementations.

use crate::dimension::{AddExponents, DivideExponents, NumberDim, Power, Product, Quotient, Root, ScaleExponents};
use crate::dimension::{Dimension, SubExponents};
use crate::math;
use crate::unit::{DisplayIn, NamedDimension, Unit};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;
use typenum::{Integer, NonZero, P2, P3};

#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A scalar carrying a dimension `D`.
///
/// `Quantity<D>` wraps an `f64` holding the magnitude in the coherent base units of `D` (kilograms, metres,
/// seconds, amperes, radians, kelvins, candelas and moles). The dimension exists only in the type, so a
/// quantity is exactly as large as an `f64` and every operation compiles to the bare floating-point one.
///
/// Only quantities of the same dimension can be added, subtracted or compared. Multiplication and division
/// combine dimensions through [`Product`] and [`Quotient`].
///
/// # Examples
///
/// ```rust
/// use qdim_core::length::{Length, METER};
/// use qdim_core::time::SECOND;
/// use qdim_core::velocity::LinearVelocity;
///
/// let d: Length = 100.0 * METER;
/// let v: LinearVelocity = d / (9.58 * SECOND);
/// assert!((v.value() - 10.438).abs() < 1e-3);
/// ```
///
/// Adding a length to a time does not compile:
///
/// ```compile_fail
/// use qdim_core::length::METER;
/// use qdim_core::time::SECOND;
///
/// let _ = METER + SECOND;
/// ```
///
/// Neither does storing a raw `f64` in a dimensioned binding:
///
/// ```compile_fail
/// use qdim_core::length::Length;
///
/// let _: Length = 3.0.into();
/// ```
pub struct Quantity<D: Dimension> {
    value: f64,
    dimension: PhantomData<D>,
}

impl<D: Dimension> Quantity<D> {
    /// Zero of this dimension.
    pub const ZERO: Self = Self::new(0.0);

    /// NaN of this dimension.
    ///
    /// ```rust
    /// use qdim_core::length::Length;
    /// assert!(Length::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Positive infinity of this dimension.
    pub const INFINITY: Self = Self::new(f64::INFINITY);

    /// Wraps a value already expressed in base units.
    ///
    /// ```rust
    /// use qdim_core::mass::Mass;
    /// let m = Mass::new(3.0);
    /// assert_eq!(m.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// Returns the magnitude in base units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Dimensionless ratio `self / other`.
    ///
    /// ```rust
    /// use qdim_core::length::{KILOMETER, METER};
    /// assert_eq!(KILOMETER.ratio_to(METER), 1000.0);
    /// ```
    #[inline]
    pub const fn ratio_to(self, other: Self) -> f64 {
        self.value / other.value
    }

    /// Builds a quantity from a value expressed in unit `U`.
    ///
    /// ```rust
    /// use qdim_core::length::{Length, Foot};
    /// let l = Length::from_unit::<Foot>(1.0);
    /// assert!((l.value() - 0.3048).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn from_unit<U: Unit<Dim = D>>(value: f64) -> Self {
        Self::new(value * U::RATIO)
    }

    /// Expresses this quantity in unit `U`.
    ///
    /// ```rust
    /// use qdim_core::length::{Centimeter, METER};
    /// assert!((METER.to_unit::<Centimeter>() - 100.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub const fn to_unit<U: Unit<Dim = D>>(self) -> f64 {
        self.value / U::RATIO
    }

    /// Formats this quantity in unit `U` instead of the base unit.
    ///
    /// ```rust
    /// use qdim_core::length::{Kilometer, METER};
    /// let d = 1500.0 * METER;
    /// assert_eq!(format!("{}", d.display_in::<Kilometer>()), "1.5_km");
    /// ```
    #[inline]
    pub fn display_in<U: Unit<Dim = D>>(self) -> DisplayIn<D, U> {
        DisplayIn::new(self)
    }

    /// Keeps the value and relabels the dimension.
    ///
    /// This bypasses dimensional checking and is meant for conversions that the type system cannot express.
    #[inline]
    pub fn force_reinterpret_dimension<E: Dimension>(self) -> Quantity<E> {
        log::trace!(
            "reinterpreting {} as {} ({})",
            D::VECTOR,
            E::VECTOR,
            self.value
        );
        Quantity::new(self.value)
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        math::abs(self)
    }

    /// Smaller of the two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        math::min(self, other)
    }

    /// Larger of the two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        math::max(self, other)
    }

    /// Restricts `self` to `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        math::clamp(self, lo, hi)
    }

    /// `sqrt(self² + other²)`.
    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        math::hypot(self, other)
    }

    /// Raises to the integer power `N`, scaling the dimension accordingly.
    ///
    /// ```rust
    /// use qdim_core::length::METER;
    /// use qdim_core::typenum::P3;
    /// assert_eq!((2.0 * METER).pow::<P3>().value(), 8.0);
    /// ```
    #[inline]
    pub fn pow<N: Integer>(self) -> Quantity<Power<D, N>>
    where
        D: ScaleExponents<N>,
    {
        math::pow::<N, D>(self)
    }

    /// `N`-th root; only compiles when every exponent of `D` divides evenly.
    #[inline]
    pub fn root<N: Integer + NonZero>(self) -> Quantity<Root<D, N>>
    where
        D: DivideExponents<N>,
    {
        math::root::<N, D>(self)
    }

    /// Square.
    #[inline]
    pub fn square(self) -> Quantity<Power<D, P2>>
    where
        D: ScaleExponents<P2>,
    {
        math::square(self)
    }

    /// Cube.
    #[inline]
    pub fn cube(self) -> Quantity<Power<D, P3>>
    where
        D: ScaleExponents<P3>,
    {
        math::cube(self)
    }

    /// Square root.
    #[inline]
    pub fn sqrt(self) -> Quantity<Root<D, P2>>
    where
        D: DivideExponents<P2>,
    {
        math::sqrt(self)
    }

    /// Cube root.
    #[inline]
    pub fn cbrt(self) -> Quantity<Root<D, P3>>
    where
        D: DivideExponents<P3>,
    {
        math::cbrt(self)
    }

    /// `true` if the value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value.is_nan()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marker-free trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> Default for Quantity<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &format_args!("{}", D::VECTOR))
            .finish()
    }
}

/// Formats as `{value}_{symbol}` using the base unit registered for `D`.
///
/// Formatting flags such as precision apply to the value.
impl<D: NamedDimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, "_{}", <D::BaseUnit as Unit>::SYMBOL)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

/// Floating-point remainder; same as [`math::rem`].
impl<D: Dimension> Rem for Quantity<D> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        math::rem(self, rhs)
    }
}

impl<D: Dimension> core::iter::Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, D: Dimension> core::iter::Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}

/// `f64 / Quantity<D>` has the reciprocal dimension.
impl<D> Div<Quantity<D>> for f64
where
    D: Dimension,
    NumberDim: SubExponents<D>,
{
    type Output = Quantity<Quotient<NumberDim, D>>;
    #[inline]
    fn div(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::new(self / rhs.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension-combining operators
// ─────────────────────────────────────────────────────────────────────────────

impl<L, R> Mul<Quantity<R>> for Quantity<L>
where
    L: AddExponents<R>,
    R: Dimension,
{
    type Output = Quantity<Product<L, R>>;
    #[inline]
    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<L, R> Div<Quantity<R>> for Quantity<L>
where
    L: SubExponents<R>,
    R: Dimension,
{
    type Output = Quantity<Quotient<L, R>>;
    #[inline]
    fn div(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless quantities interoperate with f64
// ─────────────────────────────────────────────────────────────────────────────

impl From<f64> for Quantity<NumberDim> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity<NumberDim>> for f64 {
    #[inline]
    fn from(quantity: Quantity<NumberDim>) -> Self {
        quantity.value
    }
}

impl PartialEq<f64> for Quantity<NumberDim> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialOrd<f64> for Quantity<NumberDim> {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// approx support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "approx")]
impl<D: Dimension> AbsDiffEq for Quantity<D> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<D: Dimension> RelativeEq for Quantity<D> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<D: Dimension> UlpsEq for Quantity<D> {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension> Serialize for Quantity<D> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> Deserialize<'de> for Quantity<D> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper that stores the dimension next to the value.
///
/// Use it with `#[serde(with = "...")]` when the serialized form has to be self-describing. Deserializing a
/// value whose recorded dimension differs from the field's type is an error.
///
/// # Examples
///
/// ```rust
/// use qdim_core::length::Length;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Track {
///     #[serde(with = "qdim_core::serde_with_dimension")]
///     width: Length,  // {"value": 0.6, "dimension": [[0,1],[1,1],...]}
///
///     offset: Length, // 0.1
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_dimension {
    use super::*;
    use crate::DimensionVector;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<D>` as a struct with `value` and `dimension` fields.
    pub fn serialize<D, S>(quantity: &Quantity<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("dimension", &D::VECTOR)?;
        state.end()
    }

    /// Deserializes a `Quantity<D>` from a struct with `value` and `dimension` fields.
    ///
    /// Both fields are required and `dimension` must equal `D::VECTOR`.
    pub fn deserialize<'de, D, De>(deserializer: De) -> Result<Quantity<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Dimension,
        }

        struct QuantityVisitor<D>(PhantomData<D>);

        impl<'de, D: Dimension> Visitor<'de> for QuantityVisitor<D> {
            type Value = Quantity<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and dimension fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut dimension: Option<DimensionVector> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Dimension => {
                            if dimension.is_some() {
                                return Err(de::Error::duplicate_field("dimension"));
                            }
                            dimension = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let dimension = dimension.ok_or_else(|| de::Error::missing_field("dimension"))?;

                crate::AnyQuantity::new(value, dimension)
                    .downcast::<D>()
                    .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "dimension"],
            QuantityVisitor(PhantomData),
        )
    }
}
