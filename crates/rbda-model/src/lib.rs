//! The kinematic tree and the Articulated Body Algorithm.
//!
//! [`Model`] stores a tree of rigid bodies as parallel arrays indexed
//! by body id, including the ABA scratch state left observable after
//! a forward-dynamics call. [`Model::forward_dynamics`] and
//! [`Model::forward_dynamics_floating_base`] are the two forward
//! dynamics entry points; both are O(N) in tree size and perform no
//! allocation once the model is built.

mod aba;
mod errors;
mod model;

pub use errors::ModelError;
pub use model::{default_gravity, Model};
