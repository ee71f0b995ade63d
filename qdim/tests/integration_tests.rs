//! Integration-level tests for the `qdim` facade crate.

use qdim::mechanics::ForceDim;
use qdim::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use core::f64::consts::PI;
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Units and conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_length() {
    let km = 1.0 * KILOMETER;
    assert_abs_diff_eq!(to_meter(km), 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(to_foot(1.0 * YARD), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(to_inch(1.0 * FOOT), 12.0, epsilon = 1e-12);
    assert_relative_eq!(to_kilometer(1.0 * MILE), 1.609_344, max_relative = 1e-12);
}

#[test]
fn smoke_test_time() {
    assert_abs_diff_eq!(to_second(1.0 * DAY), 86_400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(to_minute(1.0 * HOUR), 60.0, epsilon = 1e-12);
    assert_abs_diff_eq!(to_millisecond(2.0 * SECOND), 2000.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_mass() {
    assert_abs_diff_eq!(to_gram(1.0 * KILOGRAM), 1000.0, epsilon = 1e-9);
    assert_relative_eq!(to_kilogram(1.0 * POUND), 0.453_592_37, max_relative = 1e-12);
}

#[test]
fn smoke_test_angle() {
    assert_abs_diff_eq!(to_radian(180.0 * DEGREE), PI, epsilon = 1e-12);
    assert_abs_diff_eq!(to_degree(1.0 * ROTATION), 360.0, epsilon = 1e-9);
    assert_relative_eq!(
        to_radian_per_second(60.0 * ROTATION_PER_MINUTE),
        2.0 * PI,
        max_relative = 1e-12
    );
}

#[test]
fn smoke_test_velocity() {
    let v: LinearVelocity = 36.0 * KILOMETER_PER_HOUR;
    assert_relative_eq!(to_meter_per_second(v), 10.0, max_relative = 1e-12);
    assert_relative_eq!(v.ratio_to(METER_PER_SECOND), 10.0, max_relative = 1e-12);
}

#[test]
fn unit_constants_are_one_unit_in_base_units() {
    assert_eq!(METER.value(), 1.0);
    assert_eq!(SECOND.value(), 1.0);
    assert_eq!(KILOGRAM.value(), 1.0);
    assert_eq!(RADIAN.value(), 1.0);
    assert_eq!(CENTIMETER.value(), Centimeter::RATIO);
    assert_abs_diff_eq!(from_centimeter(250.0).value(), 2.5, epsilon = 1e-12);
}

#[test]
fn customary_units_in_base_units() {
    assert_abs_diff_eq!((1.0 * INCH).value(), 0.0254, epsilon = 1e-15);
    assert_abs_diff_eq!((1.0 * MILE).value(), 1609.344, epsilon = 1e-9);
    assert_abs_diff_eq!((1.0 * HOUR).value(), 3600.0, epsilon = 1e-9);
    assert_abs_diff_eq!((1.0 * POUND).value(), 0.453_592_37, epsilon = 1e-15);
}

#[test]
fn from_unit_and_to_unit_are_inverse() {
    let q = Length::from_unit::<Inch>(12.0);
    assert_abs_diff_eq!(q.to_unit::<Foot>(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(q.to_unit::<Inch>(), 12.0, epsilon = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension algebra closes over the catalogue
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn kinematics_chain() {
    let v: LinearVelocity = (10.0 * METER) / (2.0 * SECOND);
    let a: LinearAcceleration = v / (5.0 * SECOND);
    let j: LinearJerk = a / (1.0 * SECOND);
    assert_eq!(a, 1.0 * METER_PER_SECOND_SQUARED);
    assert_eq!(j, 1.0 * METER_PER_SECOND_CUBED);
    let back: Length = j * (1.0 * SECOND) * (5.0 * SECOND) * (2.0 * SECOND);
    assert_eq!(back, 10.0 * METER);
}

#[test]
fn mechanics_chain() {
    let f: mechanics::Force = (2.0 * KILOGRAM) * (3.0 * METER_PER_SECOND_SQUARED);
    assert_eq!(f, 6.0 * mechanics::NEWTON);
    let torque: mechanics::Torque = f * (0.5 * METER);
    assert_eq!(torque, 3.0 * mechanics::NEWTON_METER);
    let power: mechanics::Power = torque / (1.0 * SECOND);
    assert_eq!(power, 3.0 * mechanics::WATT);
}

#[test]
fn electrical_chain() {
    let v: Voltage = mechanics::WATT / AMPERE;
    assert_eq!(v, 1.0 * VOLT);
    let r: Resistance = (12.0 * VOLT) / (2.0 * AMPERE);
    assert_eq!(r, 6.0 * OHM);
    let g: Conductance = 1.0 / r;
    assert_abs_diff_eq!(g.ratio_to(SIEMENS), 1.0 / 6.0, epsilon = 1e-15);
    let q: Charge = (2.0 * AMPERE) * (3.0 * SECOND);
    assert_eq!(q, 6.0 * COULOMB);
}

#[test]
fn dimensionless_results_are_numbers() {
    let n: Number = (6.0 * METER) / (3.0 * METER);
    assert_eq!(n, 2.0);
    let raw: f64 = n.into();
    assert_eq!(raw, 2.0);
    assert!(NumberDim::VECTOR.is_dimensionless());
    assert_abs_diff_eq!(to_percent(Number::from(0.25)), 25.0, epsilon = 1e-12);
}

#[test]
fn fractional_exponents_round_trip() {
    type SqrtLength = Root<LengthDim, typenum::P2>;
    let r: Quantity<SqrtLength> = (9.0 * METER).sqrt();
    assert_eq!(r.value(), 3.0);
    assert_eq!(
        SqrtLength::VECTOR.exponent(BaseDimension::Length),
        Rational::new(1, 2)
    );
    assert_eq!(format!("{}", SqrtLength::VECTOR), "m^(1/2)");
    let back: Length = r * r;
    assert_eq!(back, 9.0 * METER);
}

#[test]
fn dimension_vectors_match_type_level_algebra() {
    assert_eq!(
        Product::<ForceDim, LengthDim>::VECTOR,
        ForceDim::VECTOR.add(LengthDim::VECTOR)
    );
    assert_eq!(
        Quotient::<LengthDim, TimeDim>::VECTOR,
        LinearVelocityDim::VECTOR
    );
    assert_eq!(
        Power::<LengthDim, typenum::P2>::VECTOR,
        AreaDim::VECTOR
    );
    assert_eq!(Swapped::<AngularVelocityDim>::VECTOR, LinearVelocityDim::VECTOR);
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn display_uses_base_unit_symbol() {
    assert_eq!(format!("{}", 1.5 * METER), "1.5_m");
    assert_eq!(format!("{}", 2.0 * METER_PER_SECOND), "2_m/s");
    assert_eq!(format!("{:.2}", 1.0 * KILOMETER), "1000.00_m");
    assert_eq!(format!("{}", (1.0 * KILOMETER).display_in::<Kilometer>()), "1_km");
}

#[test]
fn display_of_runtime_dimensions() {
    let g = (9.81 * METER_PER_SECOND_SQUARED).erase();
    assert_eq!(format!("{}", g), "9.81 m·s^-2");
    assert_eq!(format!("{}", ForceDim::VECTOR), "kg·m·s^-2");
}

// ─────────────────────────────────────────────────────────────────────────────
// Math
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn math_preserves_and_derives_dimensions() {
    let side = 3.0 * METER;
    let area: Area = math::square(side);
    assert_eq!(area, 9.0 * SQUARE_METER);
    let volume = math::cube(side);
    assert_eq!(volume.value(), 27.0);
    let edge: Length = math::cbrt(volume);
    assert_abs_diff_eq!(edge.value(), 3.0, epsilon = 1e-12);
    assert_eq!(math::hypot(3.0 * METER, 4.0 * METER), 5.0 * METER);
    assert_eq!(math::abs(-2.0 * SECOND), 2.0 * SECOND);
    assert_eq!(math::sgn(-2.0 * SECOND), -1);
    assert_eq!(math::round(1.26 * METER, 0.5 * METER), 1.5 * METER);
}

#[test]
fn trigonometry_on_angles() {
    let a = 90.0 * DEGREE;
    assert_abs_diff_eq!(a.sin().value(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a.cos().value(), 0.0, epsilon = 1e-12);
    let back = Number::from(1.0).asin();
    assert_abs_diff_eq!(back.ratio_to(DEGREE), 90.0, epsilon = 1e-9);
    let heading = atan2(1.0 * METER, 1.0 * METER);
    assert_abs_diff_eq!(heading.ratio_to(DEGREE), 45.0, epsilon = 1e-9);
}

#[test]
fn wheel_speed_conversion() {
    let wheel = 0.1 * METER;
    let omega = 10.0 * RADIAN_PER_SECOND;
    let v: LinearVelocity = to_linear(omega, wheel);
    assert_abs_diff_eq!(v.value(), 0.5, epsilon = 1e-12);
    let omega_back: AngularVelocity = to_angular(v, wheel);
    assert_abs_diff_eq!(omega_back.value(), 10.0, epsilon = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Vectors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn vector_arithmetic() {
    let p: V3Position = Vector3D::new(1.0 * METER, 2.0 * METER, 2.0 * METER);
    assert_eq!(p.magnitude(), 3.0 * METER);
    let q = p * 2.0;
    assert_eq!(p.distance_to(&q), 3.0 * METER);
    let dt = 2.0 * SECOND;
    let v: V3Velocity = Vector3D::new(p.x / dt, p.y / dt, p.z / dt);
    assert_eq!(v.x, 0.5 * METER_PER_SECOND);
}

#[test]
fn work_is_force_dot_displacement() {
    let f: V3Force = Vector3D::new(
        2.0 * mechanics::NEWTON,
        0.0 * mechanics::NEWTON,
        0.0 * mechanics::NEWTON,
    );
    let d: V3Position = Vector3D::new(3.0 * METER, 4.0 * METER, 0.0 * METER);
    let work: mechanics::Torque = f.dot(&d);
    assert_eq!(work, 6.0 * mechanics::NEWTON_METER);
    let moment = d.cross(&f);
    assert_eq!(moment.z.value(), -8.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime dimensions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn any_quantity_downcast() {
    let erased = AnyQuantity::from(2.0 * METER) / AnyQuantity::from(4.0 * SECOND);
    let v: LinearVelocity = erased.downcast().unwrap();
    assert_eq!(v, 0.5 * METER_PER_SECOND);
    let err = erased.downcast::<TimeDim>().unwrap_err();
    assert!(matches!(err, DimensionError::Mismatch { .. }));
    assert_eq!(
        err.to_string(),
        "dimension mismatch: expected `s`, found `m·s^-1`"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "qdim::serde_with_dimension")]
        distance: Length,
        duration: Time,
    }

    #[test]
    fn tagged_and_raw_fields() {
        let sample = Sample {
            distance: 2.0 * METER,
            duration: 3.0 * SECOND,
        };
        let json = serde_json::to_string(&sample).unwrap();
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn wrong_dimension_is_rejected() {
        #[derive(Deserialize)]
        struct Wrong {
            #[serde(with = "qdim::serde_with_dimension")]
            #[allow(dead_code)]
            distance: Time,
        }

        let json = serde_json::to_string(&Sample {
            distance: 2.0 * METER,
            duration: 3.0 * SECOND,
        })
        .unwrap();
        let err = serde_json::from_str::<Wrong>(&json).err().unwrap();
        assert!(err.to_string().contains("dimension mismatch"));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_conversion_round_trip(v in -1e9f64..1e9) {
        let q = from_mile(v);
        prop_assert!((to_mile(q) - v).abs() <= 1e-9 * v.abs().max(1.0));
    }

    #[test]
    fn prop_division_undoes_multiplication(a in 1e-3f64..1e3, b in 1e-3f64..1e3) {
        let d = a * METER;
        let t = b * SECOND;
        let back: Length = (d / t) * t;
        prop_assert!((back.value() - a).abs() <= 1e-12 * a);
    }

    #[test]
    fn prop_sqrt_of_square(a in 0.0f64..1e6) {
        let q = a * METER;
        let back: Length = math::sqrt(math::square(q));
        prop_assert!((back.value() - a).abs() <= 1e-9 * a.max(1.0));
    }
}
