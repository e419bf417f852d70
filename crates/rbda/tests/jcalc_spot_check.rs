//! The revolute-z `jcalc` spot check from the testable-properties table.

use rbda::prelude::*;

#[test]
fn revolute_z_quarter_turn() {
    let joint = Joint::revolute(Vector3D::z());
    let calc = jcalc(&joint, std::f64::consts::FRAC_PI_2, 1.0).unwrap();

    #[rustfmt::skip]
    let expected = SpatialMatrix::new(
        0.0, 1.0, 0.0, 0.0, 0.0, 0.0,
        -1.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, -1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    );
    approx::assert_relative_eq!(calc.x_j.to_matrix(), expected, epsilon = 1e-16);
    assert_eq!(calc.v_j, Vector6D::from_parts(Vector3D::z(), Vector3D::zeros()));
    assert_eq!(calc.s, Vector6D::revolute_subspace(Vector3D::z()));
}

#[test]
fn revolute_z_identity_at_q_zero() {
    let joint = Joint::revolute(Vector3D::z());
    let calc = jcalc(&joint, 0.0, 0.0).unwrap();
    approx::assert_relative_eq!(calc.x_j.to_matrix(), SpatialMatrix::identity(), epsilon = 1e-16);
}
