//! Spatial algebra primitives: Plucker transforms, spatial vectors and
//! the cross-product operators of Featherstone's "Rigid Body Dynamics
//! Algorithms".
//!
//! Everything here is deterministic, allocation-free once sizes are
//! fixed, and pure: no type in this crate owns any resource beyond a
//! few stack-allocated `f64`s.

pub mod inertia;
pub mod motion;
pub mod transform;
pub mod vector3;
pub mod vector6;

pub use inertia::spatial_rigid_body_inertia;
pub use motion::{crossf, crossm};
pub use transform::{SpatialMatrix, SpatialTransform};
pub use vector3::Vector3D;
pub use vector6::Vector6D;
