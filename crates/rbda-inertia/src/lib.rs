//! Rigid body mass properties.
//!
//! A [`Body`] records the three numbers every rigid body contributes
//! to a dynamics model (mass, center of mass, principal inertia at
//! the center of mass) and assembles them into a spatial rigid-body
//! inertia expressed at the body's origin, once, at construction time.

use std::fmt::Display;

use rbda_spatial::{spatial_rigid_body_inertia, SpatialMatrix, Vector3D};

/// Mass, center-of-mass offset, and diagonal principal inertia of one
/// rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Mass of the body. Zero denotes a massless / fixed-mass-end body.
    pub mass: f64,
    /// Center of mass, expressed in the body frame.
    pub com: Vector3D,
    /// Diagonal principal inertia at the center of mass.
    pub inertia: Vector3D,
}

impl Body {
    /// Creates a new `Body`.
    ///
    /// # Errors
    /// Returns [`BodyError::NegativeMass`] if `mass` is negative.
    pub fn new(mass: f64, com: Vector3D, inertia: Vector3D) -> Result<Self, BodyError> {
        if mass < 0.0 {
            return Err(BodyError::NegativeMass(mass));
        }
        Ok(Self { mass, com, inertia })
    }

    /// A massless body with no inertia, used for the root placeholder
    /// and for purely kinematic (fixed) joints.
    #[must_use]
    pub fn massless() -> Self {
        Self {
            mass: 0.0,
            com: Vector3D::zeros(),
            inertia: Vector3D::zeros(),
        }
    }

    /// The 6x6 spatial rigid-body inertia of this body, expressed at
    /// its origin.
    #[must_use]
    pub fn spatial_inertia(&self) -> SpatialMatrix {
        spatial_rigid_body_inertia(self.mass, self.com, self.inertia)
    }
}

/// Errors that can occur when constructing a [`Body`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// `mass` was negative.
    NegativeMass(f64),
}

impl Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyError::NegativeMass(mass) => {
                write!(f, "body mass must be non-negative, got {mass}")
            }
        }
    }
}

impl std::error::Error for BodyError {}
