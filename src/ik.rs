//! Iterative inverse kinematics for the tool center point position.
//!
//! The solver runs damped least squares (Levenberg-Marquardt with a scalar
//! damping term) over the closed-form [`Jacobian`]: each iteration solves
//! `(J^T J + lambda I) dq = J^T e` for the joint update, applies it, and
//! clamps the result to the joint limits. The damping factor adapts to the
//! outcome of the previous step, growing when the step made things worse and
//! shrinking when it helped, so the solver walks through singular
//! configurations instead of blowing up near them.
//!
//! Only the position of the tool center point is targeted. The orientation
//! the arm arrives with is whatever the converged configuration produces.

use crate::errors::KinematicsError;
use crate::jacobian::Jacobian;
use crate::kinematic_traits::{Joints, Kinematics};
use crate::kinematics_impl::SerialKinematics;
use crate::utils::serial_kinematics::is_valid;
use nalgebra::Vector3;
use tracing::{debug, trace};

/// Tuning knobs for the damped least squares loop. The defaults converge on
/// well behaved arms in a few dozen iterations; raise `max_iterations` or
/// loosen `tolerance` for chains with tight limits or long link runs.
#[derive(Debug, Clone, Copy)]
pub struct IkConfig {
    /// Convergence threshold on the position residual, in meters.
    pub tolerance: f64,
    /// Iteration budget before the solver reports the best it found.
    pub max_iterations: u32,
    /// Damping factor for the first step.
    pub lambda_initial: f64,
    /// Multiplier applied to the damping factor after a worsening step,
    /// and divided out after an improving one.
    pub lambda_scale: f64,
    /// Lower clamp for the damping factor.
    pub lambda_min: f64,
    /// Upper clamp for the damping factor.
    pub lambda_max: f64,
}

impl Default for IkConfig {
    fn default() -> Self {
        IkConfig {
            tolerance: 1e-3,
            max_iterations: 100,
            lambda_initial: 1e-2,
            lambda_scale: 10.0,
            lambda_min: 1e-9,
            lambda_max: 1e3,
        }
    }
}

/// Position-only inverse kinematics solver borrowing a robot.
pub struct IkSolver<'a> {
    robot: &'a SerialKinematics,
    config: IkConfig,
}

impl<'a> IkSolver<'a> {
    pub fn new(robot: &'a SerialKinematics) -> Self {
        Self::with_config(robot, IkConfig::default())
    }

    pub fn with_config(robot: &'a SerialKinematics, config: IkConfig) -> Self {
        IkSolver { robot, config }
    }

    /// Searches for joint angles that place the tool center point at `target`,
    /// starting from `seed`. The seed is clamped into the joint limits before
    /// the first iteration, as is every intermediate configuration, so the
    /// returned joints always comply with the chain limits.
    ///
    /// Fails fast with [`KinematicsError::UnreachableTarget`] (reporting zero
    /// iterations) when the target lies beyond the chain's maximum reach. A
    /// target inside the reach sphere can still be unreachable, for example
    /// below the floor of the workspace; those cases exhaust the iteration
    /// budget and report the closest configuration found.
    pub fn solve(&self, target: &Vector3<f64>, seed: &Joints) -> Result<Joints, KinematicsError> {
        if !(target.x.is_finite() && target.y.is_finite() && target.z.is_finite()) {
            return Err(KinematicsError::NonFinite {
                what: "target position",
            });
        }
        if !is_valid(seed) {
            return Err(KinematicsError::NonFinite {
                what: "seed joints",
            });
        }

        let chain = self.robot.chain();
        let mut current = chain.clamped(seed);

        let from_base = (target - chain.base().translation.vector).norm();
        let reach = chain.max_reach();
        if from_base > reach {
            let distance = (target - self.robot.forward(&current).translation.vector).norm();
            debug!("target is {from_base:.3} m from the base, beyond the {reach:.3} m reach");
            return Err(KinematicsError::UnreachableTarget {
                best: current,
                distance,
                iterations: 0,
            });
        }

        // One chain traversal per iteration: the frames carry both the tool
        // center point for the residual and the Jacobian columns.
        let mut lambda = self.config.lambda_initial;
        let mut frames = self.robot.joint_frames(&current);
        let mut error = target - frames.tcp;
        let mut error_norm = error.norm();
        let mut previous_norm = error_norm;
        let mut best = current;
        let mut best_distance = error_norm;

        for iteration in 0..self.config.max_iterations {
            if error_norm <= self.config.tolerance {
                debug!("converged after {iteration} iterations, residual {error_norm:.2e} m");
                return Ok(current);
            }

            // Judge the previous step before taking the next one. The step
            // itself is never rolled back; a grown lambda tames the next one.
            if iteration > 0 {
                if error_norm < previous_norm {
                    lambda = (lambda / self.config.lambda_scale).max(self.config.lambda_min);
                } else {
                    lambda = (lambda * self.config.lambda_scale).min(self.config.lambda_max);
                }
            }
            previous_norm = error_norm;

            let jacobian = Jacobian::from_frames(&frames);
            let step = match jacobian.damped_step(&error, lambda) {
                Some(step) => step,
                None => {
                    debug!("damped system failed to factor at iteration {iteration}");
                    return Err(KinematicsError::UnreachableTarget {
                        best,
                        distance: best_distance,
                        iterations: iteration,
                    });
                }
            };

            for i in 0..6 {
                current[i] += step[i];
            }
            chain.clamp(&mut current);

            frames = self.robot.joint_frames(&current);
            error = target - frames.tcp;
            error_norm = error.norm();
            trace!("iteration {iteration}: lambda {lambda:.2e}, residual {error_norm:.2e} m");

            if error_norm < best_distance {
                best = current;
                best_distance = error_norm;
            }
        }

        // The last step of the loop is never checked inside it.
        if error_norm <= self.config.tolerance {
            debug!("converged on the final step, residual {error_norm:.2e} m");
            return Ok(current);
        }

        debug!(
            "no convergence within {} iterations, best residual {best_distance:.2e} m",
            self.config.max_iterations
        );
        Err(KinematicsError::UnreachableTarget {
            best,
            distance: best_distance,
            iterations: self.config.max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::LinkChain;
    use crate::kinematic_traits::{J2, JOINTS_AT_ZERO};

    fn simulator() -> SerialKinematics {
        SerialKinematics::new(LinkChain::simulator_arm())
    }

    #[test]
    fn test_round_trip_position() {
        let robot = simulator();
        let goal: Joints = [0.4, 0.5, -0.3, 0.1, 0.4, -0.2];
        let target = robot.forward(&goal).translation.vector;

        let seed: Joints = [0.1, 0.3, -0.2, 0.0, 0.2, 0.0];
        let solver = IkSolver::new(&robot);
        let solution = solver.solve(&target, &seed).expect("reachable target");

        let reached = robot.forward(&solution).translation.vector;
        assert!(
            (reached - target).norm() < 1.5e-3,
            "residual {} m too large",
            (reached - target).norm()
        );
        assert!(robot.chain().compliant(&solution));
    }

    #[test]
    fn test_target_beyond_reach_fails_fast() {
        let robot = simulator();
        let solver = IkSolver::new(&robot);
        let result = solver.solve(&Vector3::new(0.0, 0.0, 5.0), &JOINTS_AT_ZERO);
        match result {
            Err(KinematicsError::UnreachableTarget {
                best,
                distance,
                iterations,
            }) => {
                assert_eq!(iterations, 0);
                assert_eq!(best, JOINTS_AT_ZERO);
                // The zero pose puts the tool at (0, 0, 1.9).
                assert!((distance - 3.1).abs() < 1e-9);
            }
            other => panic!("expected fail fast, got {:?}", other),
        }
    }

    #[test]
    fn test_pocket_target_exhausts_budget() {
        // Inside the reach sphere but below anything the arm can touch:
        // the elbow pitch limits keep the tool well above z = -1.
        let robot = simulator();
        let solver = IkSolver::new(&robot);
        let target = Vector3::new(0.0, 0.0, -1.8);
        let result = solver.solve(&target, &JOINTS_AT_ZERO);
        match result {
            Err(KinematicsError::UnreachableTarget {
                best,
                distance,
                iterations,
            }) => {
                assert_eq!(iterations, IkConfig::default().max_iterations);
                assert!(distance > IkConfig::default().tolerance);
                assert!(robot.chain().compliant(&best));
                // The reported distance is the actual miss of the reported
                // configuration, not of some other iterate.
                let reached = robot.forward(&best).translation.vector;
                assert!(((target - reached).norm() - distance).abs() < 1e-12);
            }
            other => panic!("expected budget exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn test_solver_is_deterministic() {
        let robot = simulator();
        let goal: Joints = [-0.2, 0.6, -0.5, 0.8, 0.3, 0.4];
        let target = robot.forward(&goal).translation.vector;
        let seed: Joints = [0.0, 0.4, -0.3, 0.5, 0.1, 0.2];

        let solver = IkSolver::new(&robot);
        let first = solver.solve(&target, &seed).expect("reachable");
        let second = solver.solve(&target, &seed).expect("reachable");
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_limit_seed_is_clamped() {
        let robot = simulator();
        let goal: Joints = [0.2, 0.8, -0.4, 0.0, 0.3, 0.0];
        let target = robot.forward(&goal).translation.vector;

        let mut seed = JOINTS_AT_ZERO;
        seed[J2] = 2.0; // past the pitch limit, gets pulled back first
        let solver = IkSolver::new(&robot);
        let solution = solver.solve(&target, &seed).expect("reachable target");
        assert!(robot.chain().compliant(&solution));
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        let robot = simulator();
        let solver = IkSolver::new(&robot);

        let result = solver.solve(&Vector3::new(f64::NAN, 0.0, 0.5), &JOINTS_AT_ZERO);
        assert!(matches!(
            result,
            Err(KinematicsError::NonFinite {
                what: "target position"
            })
        ));

        let mut seed = JOINTS_AT_ZERO;
        seed[0] = f64::INFINITY;
        let result = solver.solve(&Vector3::new(0.5, 0.0, 0.5), &seed);
        assert!(matches!(
            result,
            Err(KinematicsError::NonFinite {
                what: "seed joints"
            })
        ));
    }

    #[test]
    fn test_custom_iteration_budget_is_reported() {
        let robot = simulator();
        let config = IkConfig {
            max_iterations: 7,
            ..IkConfig::default()
        };
        let solver = IkSolver::with_config(&robot, config);
        let result = solver.solve(&Vector3::new(0.0, 0.0, -1.8), &JOINTS_AT_ZERO);
        match result {
            Err(KinematicsError::UnreachableTarget { iterations, .. }) => {
                assert_eq!(iterations, 7)
            }
            other => panic!("expected budget exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn test_converged_seed_returns_immediately() {
        let robot = simulator();
        let goal: Joints = [0.3, 0.5, -0.2, 0.1, 0.2, 0.0];
        let target = robot.forward(&goal).translation.vector;
        let solver = IkSolver::new(&robot);
        // Seeding with the exact answer must come back unchanged.
        let solution = solver.solve(&target, &goal).expect("already there");
        assert_eq!(solution, goal);
    }
}
