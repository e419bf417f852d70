//! Spatial (Plucker) transforms.
//!
//! A `SpatialTransform` combines a rotation `E` (direction-cosine
//! matrix, i.e. the transpose of the usual "rotate-a-vector" matrix)
//! and a translation `r`, and acts on spatial vectors as the 6x6
//! block matrix
//!
//! ```text
//! X(E, r) = [ E          0 ]
//!           [ -E * [r]_x  E ]
//! ```
//!
//! Composition is matrix product; the inverse is computed explicitly
//! from `(E, r)` rather than via a general 6x6 matrix inverse.

use nalgebra::{Matrix3, Matrix6, Rotation3, Vector3};
use std::ops::Mul;

use crate::vector3::Vector3D;

/// A dense 6x6 spatial matrix, used for inertias and ABA scratch state.
pub type SpatialMatrix = Matrix6<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialTransform {
    rotation: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl SpatialTransform {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Builds a transform from an explicit direction-cosine matrix and
    /// translation. `rotation` must be a valid element of SO(3).
    #[must_use]
    pub fn from_parts(rotation: Matrix3<f64>, translation: Vector3D) -> Self {
        Self {
            rotation,
            translation: translation.to_nalgebra(),
        }
    }

    #[must_use]
    pub fn rotation(&self) -> Matrix3<f64> {
        self.rotation
    }

    #[must_use]
    pub fn translation(&self) -> Vector3D {
        Vector3D::from(self.translation)
    }

    /// Pure translation transform: rotation = I, translation = `r`.
    #[must_use]
    pub fn translation_only(r: Vector3D) -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: r.to_nalgebra(),
        }
    }

    /// Rotation about the world X axis by `theta`, no translation.
    #[must_use]
    pub fn rotation_x(theta: f64) -> Self {
        Self::from_axis_rotation(Rotation3::from_axis_angle(&Vector3::x_axis(), theta))
    }

    /// Rotation about the world Y axis by `theta`, no translation.
    #[must_use]
    pub fn rotation_y(theta: f64) -> Self {
        Self::from_axis_rotation(Rotation3::from_axis_angle(&Vector3::y_axis(), theta))
    }

    /// Rotation about the world Z axis by `theta`, no translation.
    #[must_use]
    pub fn rotation_z(theta: f64) -> Self {
        Self::from_axis_rotation(Rotation3::from_axis_angle(&Vector3::z_axis(), theta))
    }

    /// Rotation about an arbitrary unit `axis` by `theta`, no translation.
    #[must_use]
    pub fn rotation_about(axis: Vector3D, theta: f64) -> Self {
        let axis = nalgebra::Unit::new_normalize(axis.to_nalgebra());
        Self::from_axis_rotation(Rotation3::from_axis_angle(&axis, theta))
    }

    fn from_axis_rotation(rotation: Rotation3<f64>) -> Self {
        // The spatial/Plucker rotation E is the coordinate-change
        // (direction-cosine) matrix, i.e. the transpose of the
        // active rotation matrix produced by `Rotation3`.
        Self {
            rotation: rotation.matrix().transpose(),
            translation: Vector3::zeros(),
        }
    }

    /// `Xrot(rpy.z, z) . Xrot(rpy.y, y) . Xrot(rpy.x, x) . Xtrans(pos)`.
    #[must_use]
    pub fn from_translation_and_zyx_euler(pos: Vector3D, roll_pitch_yaw: Vector3D) -> Self {
        let rpy = roll_pitch_yaw.as_slice();
        let (roll, pitch, yaw) = (rpy[0], rpy[1], rpy[2]);
        Self::rotation_z(yaw)
            * Self::rotation_y(pitch)
            * Self::rotation_x(roll)
            * Self::translation_only(pos)
    }

    /// The 6x6 matrix form, acting on motion vectors (and, via its
    /// transpose, on force vectors).
    #[must_use]
    pub fn to_matrix(self) -> SpatialMatrix {
        let e = self.rotation;
        let erx = -e * self.translation.cross_matrix();
        let mut m = SpatialMatrix::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&e);
        m.fixed_view_mut::<3, 3>(3, 0).copy_from(&erx);
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&e);
        m
    }

    /// Transpose of [`SpatialTransform::to_matrix`].
    #[must_use]
    pub fn transpose_matrix(self) -> SpatialMatrix {
        self.to_matrix().transpose()
    }

    /// Explicit inverse: `(E, r)^-1 = (E^T, -E * r)`.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            rotation: self.rotation.transpose(),
            translation: -(self.rotation * self.translation),
        }
    }

    /// `X^-T`, the transform forces pick up under a change of frame
    /// (the dual of how motion vectors transform under `X`).
    #[must_use]
    pub fn inverse_transpose_matrix(self) -> SpatialMatrix {
        self.inverse().to_matrix().transpose()
    }

    /// Applies this transform to a motion vector: `X . v`.
    #[must_use]
    pub fn apply_motion(self, v: crate::vector6::Vector6D) -> crate::vector6::Vector6D {
        crate::vector6::Vector6D::from(self.to_matrix() * v.to_nalgebra())
    }

    /// Applies this transform's transpose to a force vector: `X^T . f`,
    /// the form used when propagating articulated quantities from a
    /// child frame into its parent's.
    #[must_use]
    pub fn apply_transpose_force(self, f: crate::vector6::Vector6D) -> crate::vector6::Vector6D {
        crate::vector6::Vector6D::from(self.transpose_matrix() * f.to_nalgebra())
    }
}

impl Mul for SpatialTransform {
    type Output = SpatialTransform;

    /// Composes two transforms the same way their 6x6 matrices would
    /// compose under matrix product, without ever forming the 6x6
    /// matrices: `(E1, r1) * (E2, r2) = (E1 * E2, r2 + E2^T * r1)`.
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            rotation: self.rotation * rhs.rotation,
            translation: rhs.translation + rhs.rotation.transpose() * self.translation,
        }
    }
}

trait SkewExt {
    fn cross_matrix(&self) -> Matrix3<f64>;
}

impl SkewExt for Vector3<f64> {
    fn cross_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            0.0, -self.z, self.y, self.z, 0.0, -self.x, -self.y, self.x, 0.0,
        )
    }
}
