//! Joint descriptors and `jcalc`.
//!
//! A [`Joint`] is a tagged sum over the four kinds this engine
//! supports, each carrying the data it needs (an axis for revolute
//! and prismatic joints, nothing for fixed and floating-base joints).
//! [`jcalc`] is a plain function over that sum: given the joint and
//! its current scalar position/velocity, it produces the joint
//! transform, motion subspace, subspace velocity, and velocity-product
//! bias term that the Articulated Body Algorithm needs.

use std::fmt::Display;

use rbda_spatial::{SpatialTransform, Vector3D, Vector6D};

/// The four joint kinds this engine understands, plus the sentinel
/// `Undefined` kind used to catch uninitialized joint slots early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointKind {
    /// Rotation about `axis`, expressed in the joint frame.
    Revolute { axis: Vector3D },
    /// Translation along `axis`, expressed in the joint frame.
    Prismatic { axis: Vector3D },
    /// No degrees of freedom; `X_J` is always the identity.
    Fixed,
    /// The unconstrained 6-DOF joint used for a floating base.
    FloatingBase,
    /// Placeholder for a joint slot that has not been set up yet.
    Undefined,
}

/// A joint descriptor: its kind, plus the motion subspace `S`
/// derived from it (constant for 1-DOF joints).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub kind: JointKind,
}

impl Joint {
    #[must_use]
    pub fn revolute(axis: Vector3D) -> Self {
        Self {
            kind: JointKind::Revolute { axis },
        }
    }

    #[must_use]
    pub fn prismatic(axis: Vector3D) -> Self {
        Self {
            kind: JointKind::Prismatic { axis },
        }
    }

    #[must_use]
    pub fn fixed() -> Self {
        Self {
            kind: JointKind::Fixed,
        }
    }

    #[must_use]
    pub fn floating_base() -> Self {
        Self {
            kind: JointKind::FloatingBase,
        }
    }

    /// Whether this joint carries a scalar degree of freedom (i.e. is
    /// driven by a single `q`/`qdot`/`qddot`/`tau` slot in the model).
    #[must_use]
    pub fn is_single_dof(&self) -> bool {
        matches!(self.kind, JointKind::Revolute { .. } | JointKind::Prismatic { .. })
    }

    /// The joint's constant motion subspace `S` (per §3.3):
    /// `(axis; 0)` for revolute, `(0; axis)` for prismatic, zero for
    /// fixed. The floating-base joint has no single `S`; ABA handles
    /// it specially and this returns zero.
    ///
    /// # Errors
    /// Returns [`JointError::UndefinedJoint`] if `kind` is `Undefined`.
    pub fn motion_subspace(&self) -> Result<Vector6D, JointError> {
        match self.kind {
            JointKind::Revolute { axis } => Ok(Vector6D::revolute_subspace(axis)),
            JointKind::Prismatic { axis } => Ok(Vector6D::prismatic_subspace(axis)),
            JointKind::Fixed | JointKind::FloatingBase => Ok(Vector6D::zeros()),
            JointKind::Undefined => Err(JointError::UndefinedJoint),
        }
    }
}

/// The spatial quantities `jcalc` produces for a single-DOF joint at a
/// given `(q, qdot)`.
#[derive(Debug, Clone, Copy)]
pub struct JointCalc {
    /// The joint transform `X_J` for the current `q`.
    pub x_j: SpatialTransform,
    /// The motion subspace `S`.
    pub s: Vector6D,
    /// `v_J = S . qdot`.
    pub v_j: Vector6D,
    /// The velocity-product bias term `c` (zero for axis-aligned
    /// revolute/prismatic joints).
    pub c: Vector6D,
}

/// Computes the joint transform, motion subspace, subspace velocity,
/// and bias term for a single-DOF joint at configuration `q` with
/// velocity `qdot`.
///
/// # Errors
/// Returns [`JointError::UndefinedJoint`] for `Undefined` joints, and
/// [`JointError::NotSingleDof`] for `FloatingBase` joints (which have
/// no scalar `q`/`qdot` and are handled directly by the floating-base
/// ABA variant instead).
pub fn jcalc(joint: &Joint, q: f64, qdot: f64) -> Result<JointCalc, JointError> {
    match joint.kind {
        JointKind::Revolute { axis } => {
            let s = Vector6D::revolute_subspace(axis);
            Ok(JointCalc {
                x_j: SpatialTransform::rotation_about(axis, q),
                s,
                v_j: s * qdot,
                c: Vector6D::zeros(),
            })
        }
        JointKind::Prismatic { axis } => {
            let s = Vector6D::prismatic_subspace(axis);
            Ok(JointCalc {
                x_j: SpatialTransform::translation_only(axis * q),
                s,
                v_j: s * qdot,
                c: Vector6D::zeros(),
            })
        }
        JointKind::Fixed => Ok(JointCalc {
            x_j: SpatialTransform::identity(),
            s: Vector6D::zeros(),
            v_j: Vector6D::zeros(),
            c: Vector6D::zeros(),
        }),
        JointKind::FloatingBase => Err(JointError::NotSingleDof),
        JointKind::Undefined => Err(JointError::UndefinedJoint),
    }
}

/// Errors that can occur when working with joints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointError {
    /// The joint's `kind` was never set (`Undefined`).
    UndefinedJoint,
    /// `jcalc` was called on a joint with no single scalar DOF.
    NotSingleDof,
}

impl Display for JointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JointError::UndefinedJoint => write!(f, "joint kind is undefined"),
            JointError::NotSingleDof => {
                write!(f, "jcalc requires a single-DOF joint (revolute, prismatic, or fixed)")
            }
        }
    }
}

impl std::error::Error for JointError {}
