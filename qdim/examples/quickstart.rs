//! Minimal end-to-end example: convert angles and compute a velocity (length / time).

use qdim::{Angle, Length, LinearVelocity, Time, DEGREE, KILOMETER, KILOMETER_PER_HOUR, RADIAN, SECOND};

fn main() {
    let a: Angle = 180.0 * DEGREE;
    let r = a.ratio_to(RADIAN);
    assert!((r - core::f64::consts::PI).abs() < 1e-12);

    let d: Length = 1_000.0 * KILOMETER;
    let t: Time = 100.0 * SECOND;
    let v: LinearVelocity = d / t;
    assert!((v.value() - 10_000.0).abs() < 1e-9);

    println!("{a} is {r:.6} rad");
    println!("{v} ({})", v.display_in::<qdim::KilometerPerHour>());
    println!("{:.1} km/h", v.ratio_to(KILOMETER_PER_HOUR));
}
