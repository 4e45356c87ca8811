//! Joint space trajectory generation between two configurations.
//!
//! Waypoints are produced by interpolating each joint independently along a
//! time scaling profile. Both endpoints are clamped into the joint limits
//! before interpolation; since every intermediate waypoint is a convex
//! combination of the two, the whole trajectory stays within the limits.

use crate::chain::LinkChain;
use crate::errors::KinematicsError;
use crate::kinematic_traits::Joints;
use crate::utils::serial_kinematics::is_valid;
use nalgebra::Vector3;
use tracing::debug;

/// How normalized time maps onto progress along the joint space segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScaling {
    /// Constant velocity. Velocity is discontinuous at the endpoints.
    Linear,
    /// Smoothstep `3t^2 - 2t^3`: velocity is zero at both endpoints.
    Cubic,
    /// `6t^5 - 15t^4 + 10t^3`: velocity and acceleration are both zero
    /// at the endpoints.
    Quintic,
}

impl TimeScaling {
    /// Maps normalized time to normalized progress. Every profile is
    /// monotonic on [0, 1] with s(0) = 0, s(0.5) = 0.5 and s(1) = 1;
    /// inputs outside [0, 1] are clamped first.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimeScaling::Linear => t,
            TimeScaling::Cubic => t * t * (3.0 - 2.0 * t),
            TimeScaling::Quintic => t * t * t * (t * (6.0 * t - 15.0) + 10.0),
        }
    }
}

/// Plans point to point joint space trajectories over a chain, borrowing the
/// chain only for its joint limits.
pub struct TrajectoryPlanner<'a> {
    chain: &'a LinkChain,
}

impl<'a> TrajectoryPlanner<'a> {
    pub fn new(chain: &'a LinkChain) -> Self {
        TrajectoryPlanner { chain }
    }

    /// Plans with the linear profile. See [`TrajectoryPlanner::plan_scaled`].
    pub fn plan(
        &self,
        start: &Joints,
        end: &Joints,
        count: usize,
    ) -> Result<Vec<Joints>, KinematicsError> {
        self.plan_scaled(start, end, count, TimeScaling::Linear)
    }

    /// Produces `count` waypoints from `start` to `end`, both included and
    /// placed exactly (no interpolation rounding on the endpoints). Endpoints
    /// outside the joint limits are clamped before planning. At least two
    /// waypoints are required.
    pub fn plan_scaled(
        &self,
        start: &Joints,
        end: &Joints,
        count: usize,
        scaling: TimeScaling,
    ) -> Result<Vec<Joints>, KinematicsError> {
        if count < 2 {
            return Err(KinematicsError::WaypointCount { requested: count });
        }
        if !is_valid(start) {
            return Err(KinematicsError::NonFinite {
                what: "start joints",
            });
        }
        if !is_valid(end) {
            return Err(KinematicsError::NonFinite { what: "end joints" });
        }

        let start = self.chain.clamped(start);
        let end = self.chain.clamped(end);

        let last = count - 1;
        let mut waypoints = Vec::with_capacity(count);
        waypoints.push(start);
        for step in 1..last {
            let s = scaling.apply(step as f64 / last as f64);
            waypoints.push(interpolate_joints(&start, &end, s));
        }
        waypoints.push(end);
        debug!("planned {count} waypoints with the {scaling:?} profile");
        Ok(waypoints)
    }
}

/// Joint space interpolation between two configurations. `t` outside [0, 1]
/// returns the nearest endpoint unchanged.
pub fn interpolate_joints(start: &Joints, end: &Joints, t: f64) -> Joints {
    if t < 0.0 {
        return start.clone();
    } else if t > 1.0 {
        return end.clone();
    }

    let mut interpolated = [0.0; 6];
    for i in 0..6 {
        interpolated[i] = start[i] + t * (end[i] - start[i]);
    }
    interpolated
}

/// Evenly spaced points on the straight Cartesian segment between `from` and
/// `to`, endpoints included and placed exactly. Pairs with the inverse
/// kinematics solver for tracking a line with the tool center point.
pub fn cartesian_line(
    from: &Vector3<f64>,
    to: &Vector3<f64>,
    count: usize,
) -> Result<Vec<Vector3<f64>>, KinematicsError> {
    if count < 2 {
        return Err(KinematicsError::WaypointCount { requested: count });
    }
    if !from.iter().all(|v| v.is_finite()) {
        return Err(KinematicsError::NonFinite { what: "line start" });
    }
    if !to.iter().all(|v| v.is_finite()) {
        return Err(KinematicsError::NonFinite { what: "line end" });
    }

    let last = count - 1;
    let mut points = Vec::with_capacity(count);
    points.push(*from);
    for step in 1..last {
        points.push(from.lerp(to, step as f64 / last as f64));
    }
    points.push(*to);
    Ok(points)
}
