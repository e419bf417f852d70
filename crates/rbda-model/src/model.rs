//! The kinematic tree: a bundle of parallel arrays indexed by body id.

use rbda_inertia::Body;
use rbda_joint::Joint;
use rbda_spatial::{SpatialMatrix, SpatialTransform, Vector3D, Vector6D};

use crate::errors::ModelError;

/// Default gravity vector, `(0, 0, -9.81)` along `-z`.
#[must_use]
pub fn default_gravity() -> Vector3D {
    Vector3D::new(0.0, 0.0, -9.81)
}

/// A kinematic tree of rigid bodies plus all the scratch state the
/// Articulated Body Algorithm needs, indexed by body id. Body id `0`
/// is a sentinel: the fixed world for a grounded tree, or the payload
/// slot for the free base when `floating_base` is set.
///
/// Every per-body field below is also part of the model's observable
/// contract: after a `forward_dynamics` call, callers can inspect the
/// per-body velocities, accelerations, and ABA scratch quantities
/// (`IA`, `pA`, `U`, `d`, `u`) that produced `qddot`.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) lambda: Vec<usize>,
    pub(crate) joints: Vec<Joint>,
    pub(crate) bodies: Vec<Body>,
    pub(crate) s: Vec<Vector6D>,
    pub(crate) q: Vec<f64>,
    pub(crate) qdot: Vec<f64>,
    pub(crate) qddot: Vec<f64>,
    pub(crate) tau: Vec<f64>,
    pub(crate) x_t: Vec<SpatialTransform>,
    pub(crate) x_lambda: Vec<SpatialTransform>,
    pub(crate) x_base: Vec<SpatialTransform>,
    pub(crate) v: Vec<Vector6D>,
    pub(crate) a: Vec<Vector6D>,
    pub(crate) c: Vec<Vector6D>,
    pub(crate) ia: Vec<SpatialMatrix>,
    pub(crate) pa: Vec<Vector6D>,
    pub(crate) u_col: Vec<Vector6D>,
    pub(crate) d: Vec<f64>,
    pub(crate) u_scalar: Vec<f64>,
    pub(crate) f_ext: Vec<Vector6D>,
    pub(crate) gravity: Vector3D,
    pub(crate) floating_base: bool,
}

impl Model {
    /// Builds an empty model (body 0 only) with the given gravity and
    /// floating-base setting.
    #[must_use]
    pub fn new(gravity: Vector3D, floating_base: bool) -> Self {
        Self {
            lambda: vec![0],
            joints: vec![Joint::fixed()],
            bodies: vec![Body::massless()],
            s: vec![Vector6D::zeros()],
            q: vec![0.0],
            qdot: vec![0.0],
            qddot: vec![0.0],
            tau: vec![0.0],
            x_t: vec![SpatialTransform::identity()],
            x_lambda: vec![SpatialTransform::identity()],
            x_base: vec![SpatialTransform::identity()],
            v: vec![Vector6D::zeros()],
            a: vec![Vector6D::zeros()],
            c: vec![Vector6D::zeros()],
            ia: vec![SpatialMatrix::zeros()],
            pa: vec![Vector6D::zeros()],
            u_col: vec![Vector6D::zeros()],
            d: vec![0.0],
            u_scalar: vec![0.0],
            f_ext: vec![Vector6D::zeros()],
            gravity,
            floating_base,
        }
    }

    /// Resets the model to the empty tree, keeping its gravity and
    /// floating-base configuration.
    pub fn init(&mut self) {
        *self = Self::new(self.gravity, self.floating_base);
    }

    /// Number of bodies in the tree, excluding the id-0 sentinel.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.lambda.len() - 1
    }

    #[must_use]
    pub fn gravity(&self) -> Vector3D {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector3D) {
        self.gravity = gravity;
    }

    #[must_use]
    pub fn floating_base(&self) -> bool {
        self.floating_base
    }

    pub fn set_floating_base(&mut self, floating_base: bool) {
        self.floating_base = floating_base;
    }

    /// Appends one body to the tree.
    ///
    /// # Errors
    /// [`ModelError::InvalidParent`] if `parent_id` is not a body
    /// already in the tree; [`ModelError::UndefinedJoint`] if
    /// `joint.kind` is `Undefined`.
    pub fn add_body(
        &mut self,
        parent_id: usize,
        x_t: SpatialTransform,
        joint: Joint,
        body: Body,
    ) -> Result<usize, ModelError> {
        if parent_id > self.body_count() {
            return Err(ModelError::InvalidParent(parent_id));
        }
        let s = joint.motion_subspace()?;

        let new_id = self.lambda.len();
        self.lambda.push(parent_id);
        self.joints.push(joint);
        self.bodies.push(body);
        self.s.push(s);
        self.q.push(0.0);
        self.qdot.push(0.0);
        self.qddot.push(0.0);
        self.tau.push(0.0);
        self.x_t.push(x_t);
        self.x_lambda.push(SpatialTransform::identity());
        self.x_base.push(SpatialTransform::identity());
        self.v.push(Vector6D::zeros());
        self.a.push(Vector6D::zeros());
        self.c.push(Vector6D::zeros());
        self.ia.push(SpatialMatrix::zeros());
        self.pa.push(Vector6D::zeros());
        self.u_col.push(Vector6D::zeros());
        self.d.push(0.0);
        self.u_scalar.push(0.0);
        self.f_ext.push(Vector6D::zeros());

        log::trace!("add_body: id={new_id} parent={parent_id}");
        Ok(new_id)
    }

    /// Installs `body` as the floating base's mass/inertia payload
    /// (body id 0).
    ///
    /// # Errors
    /// [`ModelError::FloatingBaseDisabled`] if the model was not
    /// constructed with `floating_base = true`.
    pub fn set_floating_body(&mut self, body: Body) -> Result<(), ModelError> {
        if !self.floating_base {
            return Err(ModelError::FloatingBaseDisabled);
        }
        self.bodies[0] = body;
        Ok(())
    }

    /// Sets the external spatial force applied to body `i`, expressed
    /// in body `i`'s frame.
    pub fn set_external_force(&mut self, i: usize, f: Vector6D) {
        self.f_ext[i] = f;
    }

    #[must_use]
    pub fn lambda(&self) -> &[usize] {
        &self.lambda
    }

    #[must_use]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[must_use]
    pub fn motion_subspaces(&self) -> &[Vector6D] {
        &self.s
    }

    #[must_use]
    pub fn velocities(&self) -> &[Vector6D] {
        &self.v
    }

    #[must_use]
    pub fn accelerations(&self) -> &[Vector6D] {
        &self.a
    }

    #[must_use]
    pub fn bias_velocities(&self) -> &[Vector6D] {
        &self.c
    }

    #[must_use]
    pub fn articulated_inertias(&self) -> &[SpatialMatrix] {
        &self.ia
    }

    #[must_use]
    pub fn bias_forces(&self) -> &[Vector6D] {
        &self.pa
    }

    #[must_use]
    pub fn u(&self) -> &[Vector6D] {
        &self.u_col
    }

    #[must_use]
    pub fn d(&self) -> &[f64] {
        &self.d
    }

    #[must_use]
    pub fn u_scalar(&self) -> &[f64] {
        &self.u_scalar
    }

    #[must_use]
    pub fn x_base(&self) -> &[SpatialTransform] {
        &self.x_base
    }

    #[must_use]
    pub fn x_lambda(&self) -> &[SpatialTransform] {
        &self.x_lambda
    }

    #[must_use]
    pub fn qddot(&self) -> &[f64] {
        &self.qddot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_resets_to_single_sentinel() {
        let mut model = Model::new(default_gravity(), false);
        model
            .add_body(0, SpatialTransform::identity(), Joint::fixed(), Body::massless())
            .unwrap();
        assert_eq!(model.body_count(), 1);
        model.init();
        assert_eq!(model.body_count(), 0);
        assert_eq!(model.lambda().len(), 1);
    }

    #[test]
    fn add_body_grows_every_array_in_lockstep() {
        let mut model = Model::new(default_gravity(), false);
        let id = model
            .add_body(0, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), Body::massless())
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(model.lambda().len(), 2);
        assert_eq!(model.joints().len(), 2);
        assert_eq!(model.bodies().len(), 2);
    }

    #[test]
    fn parent_must_already_exist() {
        let mut model = Model::new(default_gravity(), false);
        let err = model
            .add_body(5, SpatialTransform::identity(), Joint::fixed(), Body::massless())
            .unwrap_err();
        assert_eq!(err, ModelError::InvalidParent(5));
    }

    #[test]
    fn parent_ids_precede_their_children() {
        let mut model = Model::new(default_gravity(), false);
        let a = model
            .add_body(0, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), Body::massless())
            .unwrap();
        let b = model
            .add_body(a, SpatialTransform::identity(), Joint::revolute(Vector3D::z()), Body::massless())
            .unwrap();
        assert!(model.lambda()[a] < a);
        assert!(model.lambda()[b] < b);
    }
}
