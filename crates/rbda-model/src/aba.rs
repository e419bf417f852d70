//! The Articulated Body Algorithm: fixed-base and floating-base
//! forward dynamics.

use rbda_joint::jcalc;
use rbda_spatial::{crossf, crossm, SpatialMatrix, Vector3D, Vector6D};

use crate::errors::ModelError;
use crate::model::Model;

/// `|d[i]|` below this is treated as a singular articulated inertia.
const SINGULARITY_TOLERANCE: f64 = 1e-14;

fn check_len(name: &'static str, got: usize, expected: usize) -> Result<(), ModelError> {
    if got != expected {
        return Err(ModelError::DimensionMismatch {
            what: name,
            expected,
            got,
        });
    }
    Ok(())
}

fn spatial_gravity(gravity: Vector3D) -> Vector6D {
    Vector6D::from_parts(Vector3D::zeros(), gravity)
}

impl Model {
    /// Fixed-base forward dynamics: given joint positions, velocities,
    /// and torques (each of length `body_count()`), computes joint
    /// accelerations.
    ///
    /// # Errors
    /// [`ModelError::DimensionMismatch`] if any input slice has the
    /// wrong length; [`ModelError::SingularArticulatedInertia`] if a
    /// joint's articulated inertia is singular;
    /// [`ModelError::NonFiniteResult`] if the result contains NaN/Inf.
    pub fn forward_dynamics(&mut self, q: &[f64], qdot: &[f64], tau: &[f64]) -> Result<Vec<f64>, ModelError> {
        let n = self.body_count();
        check_len("q", q.len(), n)?;
        check_len("qdot", qdot.len(), n)?;
        check_len("tau", tau.len(), n)?;
        log::debug!("forward_dynamics: n={n} floating_base=false");

        self.q[1..=n].copy_from_slice(q);
        self.qdot[1..=n].copy_from_slice(qdot);
        self.tau[1..=n].copy_from_slice(tau);

        self.v[0] = Vector6D::zeros();
        self.x_base[0] = rbda_spatial::SpatialTransform::identity();
        self.a[0] = -spatial_gravity(self.gravity);

        self.pass1(1..=n)?;
        self.pass2(1..=n)?;
        self.pass3(1..=n);

        let qddot = self.qddot[1..=n].to_vec();
        if qddot.iter().any(|x| !x.is_finite()) {
            return Err(ModelError::NonFiniteResult);
        }
        Ok(qddot)
    }

    /// Floating-base forward dynamics: body 0 is an unconstrained
    /// 6-DOF base whose acceleration `a_B` is solved for, given its
    /// current transform `x_b` (world to base) and velocity `v_b`,
    /// plus an external spatial force `f_b` on the base. `q`, `qdot`,
    /// `tau` cover the `body_count()` non-base joints.
    ///
    /// # Errors
    /// As [`Model::forward_dynamics`], plus a singular base
    /// articulated inertia is reported the same way.
    pub fn forward_dynamics_floating_base(
        &mut self,
        q: &[f64],
        qdot: &[f64],
        tau: &[f64],
        x_b: rbda_spatial::SpatialTransform,
        v_b: Vector6D,
        f_b: Vector6D,
    ) -> Result<(Vec<f64>, Vector6D), ModelError> {
        let n = self.body_count();
        check_len("q", q.len(), n)?;
        check_len("qdot", qdot.len(), n)?;
        check_len("tau", tau.len(), n)?;
        log::debug!("forward_dynamics_floating_base: n={n} floating_base=true");

        self.q[1..=n].copy_from_slice(q);
        self.qdot[1..=n].copy_from_slice(qdot);
        self.tau[1..=n].copy_from_slice(tau);

        self.v[0] = v_b;
        self.x_base[0] = x_b;
        self.ia[0] = self.bodies[0].spatial_inertia();
        let iv0 = self.ia[0] * self.v[0].to_nalgebra();
        self.pa[0] = Vector6D::from(crossf(self.v[0]) * iv0);

        self.pass1(1..=n)?;
        self.pass2(1..=n)?;

        let gravity_in_base = self.x_base[0].apply_motion(-spatial_gravity(self.gravity));
        let pa0_with_base_force = self.pa[0] - self.x_base[0].apply_transpose_force(f_b);
        let rhs = -pa0_with_base_force.to_nalgebra() - self.ia[0] * gravity_in_base.to_nalgebra();
        let ia0_inv = self
            .ia[0]
            .try_inverse()
            .ok_or(ModelError::SingularArticulatedInertia(0))?;
        self.a[0] = Vector6D::from(ia0_inv * rhs);

        self.pass3(1..=n);

        let qddot = self.qddot[1..=n].to_vec();
        let a_b = self.a[0];
        if qddot.iter().any(|x| !x.is_finite()) || a_b.as_slice().iter().any(|x| !x.is_finite()) {
            return Err(ModelError::NonFiniteResult);
        }
        Ok((qddot, a_b))
    }

    fn pass1(&mut self, range: std::ops::RangeInclusive<usize>) -> Result<(), ModelError> {
        for i in range {
            let calc = jcalc(&self.joints[i], self.q[i], self.qdot[i])?;
            self.x_lambda[i] = calc.x_j * self.x_t[i];
            let parent = self.lambda[i];
            self.x_base[i] = self.x_lambda[i] * self.x_base[parent];
            self.v[i] = self.x_lambda[i].apply_motion(self.v[parent]) + calc.v_j;
            self.c[i] = calc.c + Vector6D::from(crossm(self.v[i]) * calc.v_j.to_nalgebra());

            self.ia[i] = self.bodies[i].spatial_inertia();
            let iv = self.ia[i] * self.v[i].to_nalgebra();
            let f_ext_in_frame = self.x_base[i].inverse_transpose_matrix() * self.f_ext[i].to_nalgebra();
            self.pa[i] = Vector6D::from(crossf(self.v[i]) * iv) - Vector6D::from(f_ext_in_frame);

            log::trace!("pass1: body={i} IA={:?} pA={:?}", self.ia[i], self.pa[i]);
        }
        Ok(())
    }

    fn pass2(&mut self, range: std::ops::RangeInclusive<usize>) -> Result<(), ModelError> {
        for i in range.rev() {
            self.u_col[i] = Vector6D::from(self.ia[i] * self.s[i].to_nalgebra());
            self.d[i] = self.s[i].dot(&self.u_col[i]);
            self.u_scalar[i] = self.tau[i] - self.s[i].dot(&self.pa[i]);
            log::trace!(
                "pass2: body={i} U={:?} d={} u={}",
                self.u_col[i],
                self.d[i],
                self.u_scalar[i]
            );

            if self.d[i].abs() < SINGULARITY_TOLERANCE {
                return Err(ModelError::SingularArticulatedInertia(i));
            }

            let parent = self.lambda[i];
            if self.floating_base || parent != 0 {
                let u_outer = self.u_col[i].to_nalgebra() * self.u_col[i].to_nalgebra().transpose();
                let ia_reduced: SpatialMatrix = self.ia[i] - u_outer / self.d[i];
                let pa_reduced = self.pa[i]
                    + Vector6D::from(ia_reduced * self.c[i].to_nalgebra())
                    + self.u_col[i] * (self.u_scalar[i] / self.d[i]);

                let x = self.x_lambda[i];
                self.ia[parent] += x.transpose_matrix() * ia_reduced * x.to_matrix();
                self.pa[parent] += x.apply_transpose_force(pa_reduced);
            }
        }
        Ok(())
    }

    fn pass3(&mut self, range: std::ops::RangeInclusive<usize>) {
        for i in range {
            let parent = self.lambda[i];
            let a_prime = self.x_lambda[i].apply_motion(self.a[parent]) + self.c[i];
            self.qddot[i] = (self.u_scalar[i] - self.u_col[i].dot(&a_prime)) / self.d[i];
            self.a[i] = a_prime + self.s[i] * self.qddot[i];
        }
    }
}
