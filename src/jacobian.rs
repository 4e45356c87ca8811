//! Geometric Jacobian of a serial chain, built in closed form from the
//! rotation centers and axes reported by [`Kinematics::joint_frames`].
//!
//! For a revolute joint i with unit axis `z_i` and center `o_i` (both in the
//! base frame), the column pair is `z_i x (p - o_i)` for the linear part and
//! `z_i` for the angular part, where `p` is the tool center point. No finite
//! differencing is involved, so the columns are exact up to floating point
//! rounding.

use crate::kinematic_traits::{JointFrames, Joints, Kinematics};
use nalgebra::{Matrix3x6, Matrix6, Vector3, Vector6};

pub struct Jacobian {
    linear: Matrix3x6<f64>,
    angular: Matrix3x6<f64>,
}

impl Jacobian {
    /// Builds the Jacobian of the given robot at the given joint configuration.
    pub fn new(robot: &impl Kinematics, qs: &Joints) -> Jacobian {
        Self::from_frames(&robot.joint_frames(qs))
    }

    /// Builds the Jacobian from frames the caller already has. Useful inside
    /// solver loops that need both the frames and the Jacobian per iteration.
    pub fn from_frames(frames: &JointFrames) -> Jacobian {
        let mut linear = Matrix3x6::zeros();
        let mut angular = Matrix3x6::zeros();
        for i in 0..6 {
            let axis = frames.axes[i].into_inner();
            let arm = frames.tcp - frames.origins[i];
            linear.set_column(i, &axis.cross(&arm));
            angular.set_column(i, &axis);
        }
        Jacobian { linear, angular }
    }

    /// Linear velocity rows: world frame TCP velocity per unit joint velocity.
    pub fn linear(&self) -> &Matrix3x6<f64> {
        &self.linear
    }

    /// Angular velocity rows: world frame angular velocity per unit joint velocity.
    pub fn angular(&self) -> &Matrix3x6<f64> {
        &self.angular
    }

    /// The full 6x6 Jacobian, linear rows on top, angular rows below.
    pub fn full(&self) -> Matrix6<f64> {
        let mut full = Matrix6::zeros();
        full.fixed_view_mut::<3, 6>(0, 0).copy_from(&self.linear);
        full.fixed_view_mut::<3, 6>(3, 0).copy_from(&self.angular);
        full
    }

    /// Damped least squares step for a position error: solves
    /// `(J^T J + lambda I) dq = J^T e` over the linear rows only.
    ///
    /// With `lambda > 0` the system matrix is symmetric positive definite even
    /// at singular configurations, so Cholesky applies; LU remains as the
    /// fallback should the factorization be refused. Returns `None` only if
    /// both factorizations fail, which does not happen for finite inputs and
    /// positive lambda.
    pub fn damped_step(&self, error: &Vector3<f64>, lambda: f64) -> Option<Vector6<f64>> {
        let jt = self.linear.transpose();
        let mut a = jt * self.linear;
        for i in 0..6 {
            a[(i, i)] += lambda;
        }
        let b = jt * error;
        a.cholesky()
            .map(|chol| chol.solve(&b))
            .or_else(|| a.lu().solve(&b))
    }
}
