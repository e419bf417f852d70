//! A single body on a revolute-z joint at the origin, hanging under
//! gravity with zero initial velocity and torque.

use rbda::prelude::*;

fn gravity_down_y() -> Vector3D {
    Vector3D::new(0.0, -9.81, 0.0)
}

#[test]
fn single_body_hanging_from_revolute_z() {
    let mut model = Model::new(gravity_down_y(), false);
    let body = Body::new(1.0, Vector3D::new(1.0, 0.0, 0.0), Vector3D::new(1.0, 1.0, 1.0)).unwrap();
    model
        .add_body(0, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), body)
        .unwrap();

    let qddot = model.forward_dynamics(&[0.0], &[0.0], &[0.0]).unwrap();
    assert_eq!(qddot, vec![-4.905]);
}

#[test]
fn single_body_off_axis_com() {
    let mut model = Model::new(gravity_down_y(), false);
    let body = Body::new(1.0, Vector3D::new(1.5, 1.0, 1.0), Vector3D::new(1.0, 2.0, 3.0)).unwrap();
    model
        .add_body(0, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), body)
        .unwrap();

    let qddot = model.forward_dynamics(&[0.0], &[0.0], &[0.0]).unwrap();
    approx::assert_relative_eq!(qddot[0], -2.3544, epsilon = 1e-14);
}
