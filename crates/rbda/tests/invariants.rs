//! Quantified invariants 1, 2, 3, and 5 from the model's contract.

use rbda::prelude::*;

#[test]
fn init_and_add_body_keep_arrays_in_lockstep() {
    let mut model = Model::new(default_gravity(), false);
    assert_eq!(model.body_count(), 0);
    assert_eq!(model.lambda().len(), 1);

    for k in 1..=4 {
        model
            .add_body(k - 1, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), Body::massless())
            .unwrap();
        assert_eq!(model.body_count(), k);
        assert_eq!(model.lambda().len(), k + 1);
        assert_eq!(model.joints().len(), k + 1);
        assert_eq!(model.bodies().len(), k + 1);
    }
}

#[test]
fn parent_ids_always_precede_their_body() {
    let mut model = Model::new(default_gravity(), false);
    let a = model
        .add_body(0, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), Body::massless())
        .unwrap();
    let b = model
        .add_body(a, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), Body::massless())
        .unwrap();
    let c = model
        .add_body(a, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), Body::massless())
        .unwrap();
    for i in [a, b, c] {
        assert!(model.lambda()[i] < i);
    }
}

#[test]
fn translation_and_rotation_round_trip_to_identity() {
    let r = Vector3D::new(2.0, -1.0, 0.25);
    let x = SpatialTransform::translation_only(r);
    let x_inv = SpatialTransform::translation_only(-r);
    approx::assert_relative_eq!((x * x_inv).to_matrix(), SpatialMatrix::identity(), epsilon = 1e-14);

    let theta = 0.9;
    let rot = SpatialTransform::rotation_z(theta);
    let rot_inv = SpatialTransform::rotation_z(-theta);
    approx::assert_relative_eq!((rot * rot_inv).to_matrix(), SpatialMatrix::identity(), epsilon = 1e-14);
}

#[test]
fn forward_dynamics_is_deterministic() {
    let mut model = Model::new(Vector3D::new(0.0, -9.81, 0.0), false);
    let body = Body::new(1.0, Vector3D::new(1.0, 0.0, 0.0), Vector3D::new(1.0, 1.0, 1.0)).unwrap();
    model
        .add_body(0, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), body)
        .unwrap();

    let first = model.forward_dynamics(&[0.0], &[0.0], &[0.0]).unwrap();
    let second = model.forward_dynamics(&[0.0], &[0.0], &[0.0]).unwrap();
    assert_eq!(first, second);
}
