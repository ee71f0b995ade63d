//! Vector kinematics: integrate a constant force acting on a point mass.

use qdim::mechanics::NEWTON;
use qdim::{
    Mass, Time, V3Acceleration, V3Force, V3Position, V3Velocity, Vector3D, DEGREE, KILOGRAM, METER,
    METER_PER_SECOND, SECOND,
};

fn main() {
    let mass: Mass = 2.0 * KILOGRAM;
    let force: V3Force = Vector3D::new(4.0 * NEWTON, 0.0 * NEWTON, -2.0 * NEWTON);
    let dt: Time = 0.1 * SECOND;

    let accel: V3Acceleration = Vector3D::new(force.x / mass, force.y / mass, force.z / mass);
    let mut velocity: V3Velocity = Vector3D::new(1.0 * METER_PER_SECOND, 0.0 * METER_PER_SECOND, 0.0 * METER_PER_SECOND);
    let mut position: V3Position = Vector3D::ZERO;

    for _ in 0..10 {
        velocity += Vector3D::new(accel.x * dt, accel.y * dt, accel.z * dt);
        position += Vector3D::new(velocity.x * dt, velocity.y * dt, velocity.z * dt);
    }

    println!("position after 1 s: {position}");
    println!("distance travelled: {}", position.magnitude());
    println!("speed: {}", velocity.magnitude());

    let heading = Vector3D::new(90.0 * DEGREE, 0.0 * DEGREE, 90.0 * DEGREE);
    let rotated = position.rotated_to(&heading);
    println!("same distance along +y: {rotated}");
    assert!((rotated.magnitude().value() - position.magnitude().value()).abs() < 1e-9);

    let work = force.dot(&position);
    println!("work done: {work}");

    let offset = position.vector_to(&Vector3D::new(1.0 * METER, 1.0 * METER, 1.0 * METER));
    println!("offset to (1, 1, 1) m: {offset}, angle {}", position.angle_to(&offset).display_in::<qdim::Degree>());
}
