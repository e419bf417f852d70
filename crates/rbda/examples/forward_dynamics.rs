use rbda::prelude::*;

fn main() {
    // A two-link pendulum: both links revolute about z, the second
    // hinged one unit along x from the first.
    let mut model = Model::new(Vector3D::new(0.0, -9.81, 0.0), false);
    let link = || Body::new(1.0, Vector3D::new(1.0, 0.0, 0.0), Vector3D::new(1.0, 1.0, 1.0)).unwrap();

    let first = model
        .add_body(0, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), link())
        .expect("failed to add first link");
    model
        .add_body(
            first,
            SpatialTransform::translation_only(Vector3D::new(1.0, 0.0, 0.0)),
            Joint::revolute(Vector3D::z()),
            link(),
        )
        .expect("failed to add second link");

    let qddot = model
        .forward_dynamics(&[0.0, 0.0], &[0.0, 0.0], &[0.0, 0.0])
        .expect("failed to compute forward dynamics");

    println!("Joint accelerations: {qddot:?}");
}
