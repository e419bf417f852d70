//! Spatial cross-product operators.
//!
//! For a motion vector `v = (w; v)` (angular `w`, linear `v`),
//! `crossm(v)` is the 6x6 operator such that `crossm(v) * m` is the
//! spatial cross product `v x m` of two motion vectors, and
//! `crossf(v)` is its force-vector dual, `crossf(v) = -crossm(v)^T`.

use crate::transform::SpatialMatrix;
use crate::vector6::Vector6D;

/// Motion-cross operator, Featherstone's `v x` in block form
/// `[w x, 0; v x, w x]`.
#[must_use]
pub fn crossm(v: Vector6D) -> SpatialMatrix {
    let w_hat = v.angular().skew();
    let v_hat = v.linear().skew();
    let mut m = SpatialMatrix::zeros();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(&w_hat);
    m.fixed_view_mut::<3, 3>(3, 0).copy_from(&v_hat);
    m.fixed_view_mut::<3, 3>(3, 3).copy_from(&w_hat);
    m
}

/// Force-cross operator, `crossf(v) = -crossm(v)^T`.
#[must_use]
pub fn crossf(v: Vector6D) -> SpatialMatrix {
    -crossm(v).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector3::Vector3D;

    #[test]
    fn crossf_is_negative_transpose_of_crossm() {
        let v = Vector6D::from_parts(Vector3D::new(1.0, 2.0, 3.0), Vector3D::new(4.0, 5.0, 6.0));
        assert_eq!(crossf(v), -crossm(v).transpose());
    }

    #[test]
    fn crossm_angular_only_matches_3d_cross() {
        let w = Vector3D::new(0.0, 0.0, 1.0);
        let v = Vector6D::from_parts(w, Vector3D::zeros());
        let m = crossm(v).fixed_view::<3, 3>(0, 0).into_owned();
        let other = Vector3D::new(1.0, 0.0, 0.0);
        let expected = w.cross(&other);
        let got = m * other.to_nalgebra();
        assert_eq!(got, expected.to_nalgebra());
    }
}
