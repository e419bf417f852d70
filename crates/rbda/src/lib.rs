//! Rigid body dynamics: spatial algebra, kinematic trees, and the
//! Articulated Body Algorithm, in both its fixed-base and
//! floating-base forms.
//!
//! This crate is a thin facade over the workspace's dynamics crates:
//! [`rbda_spatial`] for spatial vectors, matrices, and transforms,
//! [`rbda_inertia`] for body mass properties, [`rbda_joint`] for joint
//! descriptors and `jcalc`, and [`rbda_model`] for the kinematic tree
//! and the forward-dynamics recursion. A caller driving a simulation
//! builds a [`Model`] with [`Model::add_body`], then calls
//! [`Model::forward_dynamics`] (or
//! [`Model::forward_dynamics_floating_base`]) once per tick.

pub use rbda_inertia::{Body, BodyError};
pub use rbda_joint::{jcalc, Joint, JointCalc, JointError, JointKind};
pub use rbda_model::{default_gravity, Model, ModelError};
pub use rbda_spatial::{
    crossf, crossm, spatial_rigid_body_inertia, SpatialMatrix, SpatialTransform, Vector3D, Vector6D,
};

/// Glob-importable re-export of the crate's full public surface.
pub mod prelude {
    pub use crate::{
        crossf, crossm, default_gravity, jcalc, spatial_rigid_body_inertia, Body, BodyError, Joint,
        JointCalc, JointError, JointKind, Model, ModelError, SpatialMatrix, SpatialTransform,
        Vector3D, Vector6D,
    };
}
