//! Three-component vectors of quantities.
//!
//! [`Vector3D<D>`] holds three `Quantity<D>` components. Direction is expressed as direction cosines: the
//! angle each axis makes with the vector, as returned by [`Vector3D::theta`].
//!
//! ```rust
//! use qdim_core::{Vector3D, V3Position};
//! use qdim_core::length::METER;
//!
//! let a: V3Position = Vector3D::new(1.0 * METER, 2.0 * METER, 2.0 * METER);
//! assert_eq!(a.magnitude(), 3.0 * METER);
//! assert_eq!(format!("{}", a), "(1_m, 2_m, 2_m)");
//! ```

use crate::acceleration::LinearAccelerationDim;
use crate::angle::{Angle, AngleDim};
use crate::dimension::{AddExponents, Dimension, NumberDim, Product};
use crate::length::LengthDim;
use crate::mechanics::ForceDim;
use crate::velocity::LinearVelocityDim;
use crate::{float, NamedDimension, Quantity};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// A 3D vector whose components share the dimension `D`.
pub struct Vector3D<D: Dimension> {
    /// X component.
    pub x: Quantity<D>,
    /// Y component.
    pub y: Quantity<D>,
    /// Z component.
    pub z: Quantity<D>,
}

/// Position vector.
pub type V3Position = Vector3D<LengthDim>;
/// Velocity vector.
pub type V3Velocity = Vector3D<LinearVelocityDim>;
/// Acceleration vector.
pub type V3Acceleration = Vector3D<LinearAccelerationDim>;
/// Force vector.
pub type V3Force = Vector3D<ForceDim>;

impl<D: Dimension> Vector3D<D> {
    /// The zero vector.
    pub const ZERO: Self = Self::new(Quantity::ZERO, Quantity::ZERO, Quantity::ZERO);

    /// Builds a vector from its components.
    #[inline]
    pub const fn new(x: Quantity<D>, y: Quantity<D>, z: Quantity<D>) -> Self {
        Self { x, y, z }
    }

    /// Builds a vector of length `|magnitude|` along the direction cosines `theta`.
    ///
    /// The angles are used as given; they describe a valid direction only when
    /// `cos²θx + cos²θy + cos²θz = 1`.
    pub fn from_polar(theta: &Vector3D<AngleDim>, magnitude: Quantity<D>) -> Self {
        let m = magnitude.abs();
        Self::new(
            m * theta.x.cos().value(),
            m * theta.y.cos().value(),
            m * theta.z.cos().value(),
        )
    }

    /// A vector of one base unit along `theta`.
    #[inline]
    pub fn unit_vector(theta: &Vector3D<AngleDim>) -> Self {
        Self::from_polar(theta, Quantity::new(1.0))
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> Quantity<D> {
        let (x, y, z) = (self.x.value(), self.y.value(), self.z.value());
        Quantity::new(float::sqrt(x * x + y * y + z * z))
    }

    /// Direction cosines: the angle between this vector and each axis.
    ///
    /// NaN for the zero vector.
    pub fn theta(&self) -> Vector3D<AngleDim> {
        let m = self.magnitude();
        let angle = |component: Quantity<D>| Angle::new(float::acos(component.ratio_to(m)));
        Vector3D::new(angle(self.x), angle(self.y), angle(self.z))
    }

    /// Scalar product; the dimensions multiply.
    ///
    /// ```rust
    /// use qdim_core::{Vector3D, V3Force, V3Position};
    /// use qdim_core::length::METER;
    /// use qdim_core::mechanics::{Torque, NEWTON};
    ///
    /// let f: V3Force = Vector3D::new(2.0 * NEWTON, 0.0 * NEWTON, 0.0 * NEWTON);
    /// let d: V3Position = Vector3D::new(3.0 * METER, 4.0 * METER, 0.0 * METER);
    /// let work: Torque = f.dot(&d);
    /// assert_eq!(work.value(), 6.0);
    /// ```
    pub fn dot<E>(&self, other: &Vector3D<E>) -> Quantity<Product<D, E>>
    where
        D: AddExponents<E>,
        E: Dimension,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Vector product; the dimensions multiply.
    pub fn cross<E>(&self, other: &Vector3D<E>) -> Vector3D<Product<D, E>>
    where
        D: AddExponents<E>,
        E: Dimension,
    {
        Vector3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Displacement from `self` to `other`.
    #[inline]
    pub fn vector_to(&self, other: &Self) -> Self {
        *other - *self
    }

    /// Distance between the two points.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> Quantity<D> {
        self.vector_to(other).magnitude()
    }

    /// Angle between the two vectors, in `[0, π]`.
    pub fn angle_to(&self, other: &Self) -> Angle {
        let dot = self.x.value() * other.x.value()
            + self.y.value() * other.y.value()
            + self.z.value() * other.z.value();
        let scale = self.magnitude().value() * other.magnitude().value();
        Angle::new(float::acos(dot / scale))
    }

    /// Same direction, unit length, dimensionless.
    ///
    /// NaN components for the zero vector.
    pub fn normalize(&self) -> Vector3D<NumberDim> {
        let m = self.magnitude();
        Vector3D::new(
            Quantity::new(self.x.ratio_to(m)),
            Quantity::new(self.y.ratio_to(m)),
            Quantity::new(self.z.ratio_to(m)),
        )
    }

    /// Adds `delta` to the direction cosines, keeping the magnitude.
    #[inline]
    pub fn rotate_by(&mut self, delta: &Vector3D<AngleDim>) {
        *self = self.rotated_by(delta);
    }

    /// Copy with `delta` added to the direction cosines.
    pub fn rotated_by(&self, delta: &Vector3D<AngleDim>) -> Self {
        Self::from_polar(&(self.theta() + *delta), self.magnitude())
    }

    /// Points the vector along `angle`, keeping the magnitude.
    #[inline]
    pub fn rotate_to(&mut self, angle: &Vector3D<AngleDim>) {
        *self = self.rotated_to(angle);
    }

    /// Copy pointing along `angle`.
    pub fn rotated_to(&self, angle: &Vector3D<AngleDim>) -> Self {
        Self::from_polar(angle, self.magnitude())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marker-free trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Vector3D<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Vector3D<D> {}

impl<D: Dimension> Default for Vector3D<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> PartialEq for Vector3D<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl<D: Dimension> fmt::Debug for Vector3D<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3D")
            .field("x", &self.x.value())
            .field("y", &self.y.value())
            .field("z", &self.z.value())
            .field("dimension", &format_args!("{}", D::VECTOR))
            .finish()
    }
}

impl<D: NamedDimension> fmt::Display for Vector3D<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Vector3D<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<D: Dimension> AddAssign for Vector3D<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<D: Dimension> Sub for Vector3D<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<D: Dimension> SubAssign for Vector3D<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<D: Dimension> Neg for Vector3D<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<D: Dimension> Mul<f64> for Vector3D<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<D: Dimension> Mul<Vector3D<D>> for f64 {
    type Output = Vector3D<D>;
    #[inline]
    fn mul(self, rhs: Vector3D<D>) -> Vector3D<D> {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f64> for Vector3D<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<D: Dimension> Div<f64> for Vector3D<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<D: Dimension> DivAssign<f64> for Vector3D<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// approx support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "approx")]
impl<D: Dimension> AbsDiffEq for Vector3D<D> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<D: Dimension> RelativeEq for Vector3D<D> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<D: Dimension> UlpsEq for Vector3D<D> {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
