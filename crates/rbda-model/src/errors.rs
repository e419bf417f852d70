//! Error type for the kinematic tree and the forward-dynamics passes.

use std::fmt::Display;

use rbda_inertia::BodyError;
use rbda_joint::JointError;

/// Everything that can go wrong building or driving a [`crate::Model`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// `AddBody` was given a parent id greater than the current body count.
    InvalidParent(usize),
    /// A joint passed to `AddBody` (or looked up by `jcalc`) had kind `Undefined`.
    UndefinedJoint(JointError),
    /// A body descriptor failed its own validity check.
    InvalidBody(BodyError),
    /// `q`, `qdot`, or `tau` did not have the expected length.
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// `|d[i]|` fell below tolerance during ABA pass 2/3, or the
    /// floating base's articulated inertia was singular.
    SingularArticulatedInertia(usize),
    /// `qddot` (or the floating-base `a_B`) contained a NaN or Inf.
    NonFiniteResult,
    /// `SetFloatingBody` was called on a model built with `floating_base = false`.
    FloatingBaseDisabled,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidParent(id) => write!(f, "parent id {id} exceeds current body count"),
            ModelError::UndefinedJoint(e) => write!(f, "{e}"),
            ModelError::InvalidBody(e) => write!(f, "{e}"),
            ModelError::DimensionMismatch { what, expected, got } => {
                write!(f, "{what} has length {got}, expected {expected}")
            }
            ModelError::SingularArticulatedInertia(id) => {
                write!(f, "articulated-body inertia at body {id} is singular")
            }
            ModelError::NonFiniteResult => write!(f, "forward dynamics produced a non-finite result"),
            ModelError::FloatingBaseDisabled => {
                write!(f, "SetFloatingBody requires a model constructed with floating_base = true")
            }
        }
    }
}

impl std::error::Error for ModelError {}

impl From<JointError> for ModelError {
    fn from(e: JointError) -> Self {
        ModelError::UndefinedJoint(e)
    }
}

impl From<BodyError> for ModelError {
    fn from(e: BodyError) -> Self {
        ModelError::InvalidBody(e)
    }
}
