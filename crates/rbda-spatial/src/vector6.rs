//! Defines spatial (6-dimensional) vectors: motion vectors (angular
//! velocity, linear velocity) and force vectors (torque, force) share
//! the same representation, dual under the spatial inner product.
//!
//! Components 0-2 are the angular part, components 3-5 the linear
//! part.

use nalgebra::{Vector3, Vector6};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::vector3::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector6D(pub(crate) Vector6<f64>);

impl Vector6D {
    /// Builds a spatial vector from its angular (0-2) and linear (3-5) parts.
    #[must_use]
    pub fn from_parts(angular: Vector3D, linear: Vector3D) -> Self {
        let mut v = Vector6::zeros();
        v.fixed_rows_mut::<3>(0).copy_from(&angular.to_nalgebra());
        v.fixed_rows_mut::<3>(3).copy_from(&linear.to_nalgebra());
        Self(v)
    }

    /// The zero spatial vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self(Vector6::zeros())
    }

    /// Motion subspace of a revolute joint about `axis`: `(axis; 0)`.
    #[must_use]
    pub fn revolute_subspace(axis: Vector3D) -> Self {
        Self::from_parts(axis, Vector3D::zeros())
    }

    /// Motion subspace of a prismatic joint along `axis`: `(0; axis)`.
    #[must_use]
    pub fn prismatic_subspace(axis: Vector3D) -> Self {
        Self::from_parts(Vector3D::zeros(), axis)
    }

    #[must_use]
    pub fn angular(&self) -> Vector3D {
        Vector3D::from(Vector3::new(self.0[0], self.0[1], self.0[2]))
    }

    #[must_use]
    pub fn linear(&self) -> Vector3D {
        Vector3D::from(Vector3::new(self.0[3], self.0[4], self.0[5]))
    }

    #[must_use]
    pub fn dot(&self, other: &Vector6D) -> f64 {
        self.0.dot(&other.0)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64; 6] {
        self.0.as_slice().try_into().unwrap()
    }

    #[must_use]
    pub fn to_nalgebra(self) -> Vector6<f64> {
        self.0
    }
}

impl From<Vector6<f64>> for Vector6D {
    fn from(v: Vector6<f64>) -> Self {
        Vector6D(v)
    }
}

impl Add for Vector6D {
    type Output = Vector6D;

    fn add(self, rhs: Self) -> Self::Output {
        Vector6D(self.0 + rhs.0)
    }
}

impl Sub for Vector6D {
    type Output = Vector6D;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector6D(self.0 - rhs.0)
    }
}

impl AddAssign for Vector6D {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Vector6D {
    type Output = Vector6D;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector6D(self.0 * rhs)
    }
}

impl Neg for Vector6D {
    type Output = Vector6D;

    fn neg(self) -> Self::Output {
        Vector6D(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revolute_subspace_is_angular_only() {
        let s = Vector6D::revolute_subspace(Vector3D::z());
        assert_eq!(s.angular(), Vector3D::z());
        assert_eq!(s.linear(), Vector3D::zeros());
    }

    #[test]
    fn prismatic_subspace_is_linear_only() {
        let s = Vector6D::prismatic_subspace(Vector3D::x());
        assert_eq!(s.angular(), Vector3D::zeros());
        assert_eq!(s.linear(), Vector3D::x());
    }
}
