//! Construction of spatial rigid-body inertia matrices.

use nalgebra::Matrix3;

use crate::transform::SpatialMatrix;
use crate::vector3::Vector3D;

/// Builds the 6x6 spatial rigid-body inertia of a body with mass `m`,
/// center of mass `com` (in the body frame), and diagonal principal
/// inertia `inertia_diag` at the center of mass, expressed at the
/// body's origin via a single Steiner (parallel-axis) transfer:
///
/// ```text
/// I = [ Ic + m * chat^T * chat   m * chat ]
///     [ m * chat^T               m * I3   ]
/// ```
///
/// where `chat` is the skew-symmetric matrix of `com`.
#[must_use]
pub fn spatial_rigid_body_inertia(m: f64, com: Vector3D, inertia_diag: Vector3D) -> SpatialMatrix {
    let chat = com.skew();
    let ic = Matrix3::from_diagonal(&inertia_diag.to_nalgebra());

    let top_left = ic + m * (chat.transpose() * chat);
    let top_right = m * chat;
    let bottom_left = m * chat.transpose();
    let bottom_right = m * Matrix3::identity();

    let mut i = SpatialMatrix::zeros();
    i.fixed_view_mut::<3, 3>(0, 0).copy_from(&top_left);
    i.fixed_view_mut::<3, 3>(0, 3).copy_from(&top_right);
    i.fixed_view_mut::<3, 3>(3, 0).copy_from(&bottom_left);
    i.fixed_view_mut::<3, 3>(3, 3).copy_from(&bottom_right);
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_mass_at_origin_has_no_coupling() {
        let i = spatial_rigid_body_inertia(2.0, Vector3D::zeros(), Vector3D::new(1.0, 2.0, 3.0));
        assert_relative_eq!(i.fixed_view::<3, 3>(0, 3).into_owned(), Matrix3::zeros());
        assert_relative_eq!(i.fixed_view::<3, 3>(3, 0).into_owned(), Matrix3::zeros());
        assert_relative_eq!(
            i.fixed_view::<3, 3>(3, 3).into_owned(),
            2.0 * Matrix3::identity()
        );
    }

    #[test]
    fn offset_com_matches_parallel_axis_theorem() {
        // mass 1, com = (1,0,0), Ic = diag(1,1,1): the classic S1 case.
        let i = spatial_rigid_body_inertia(
            1.0,
            Vector3D::new(1.0, 0.0, 0.0),
            Vector3D::new(1.0, 1.0, 1.0),
        );
        let expected_top_left = Matrix3::new(1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0);
        assert_relative_eq!(i.fixed_view::<3, 3>(0, 0).into_owned(), expected_top_left);
    }
}
