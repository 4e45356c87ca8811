//! Error types of this library.

use crate::kinematic_traits::Joints;
use std::io;

/// Reported when the chain description itself is invalid. These errors are
/// fatal at startup: a chain that fails validation never becomes usable, so
/// there is nothing to retry.
#[derive(Debug)]
pub enum ConfigError {
    /// The chain description does not contain exactly 6 joints.
    JointCount { expected: usize, found: usize },
    /// A limit pair where min exceeds max.
    LimitOrder { joint: usize, min: f64, max: f64 },
    /// A geometric parameter that is NaN or infinite. The payload names the
    /// offending parameter ("joint 3 axis", "tool transform", ...).
    NonFinite(String),
    /// A rotation axis too close to the zero vector to normalize.
    ZeroAxis { joint: usize },
    IoError(io::Error),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ConfigError::JointCount { expected, found } =>
                write!(f, "Wrong joint count: expected {}, found {}", expected, found),
            ConfigError::LimitOrder { joint, min, max } =>
                write!(f, "Joint {}: lower limit {} exceeds upper limit {}", joint + 1, min, max),
            ConfigError::NonFinite(ref what) =>
                write!(f, "{} is not finite", what),
            ConfigError::ZeroAxis { joint } =>
                write!(f, "Joint {}: rotation axis is degenerate (zero length)", joint + 1),
            ConfigError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ConfigError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

/// Reported by the per request operations (inverse kinematics, trajectory
/// planning). Request validation errors are raised before any computation;
/// `UnreachableTarget` is raised after the iteration budget is spent and is
/// recoverable by the caller choosing another target or seed. The library
/// never retries internally.
#[derive(Debug)]
pub enum KinematicsError {
    /// An input value (target coordinate or joint angle) is NaN or infinite.
    NonFinite { what: &'static str },
    /// A trajectory was requested with fewer than 2 waypoints.
    WaypointCount { requested: usize },
    /// The solver did not converge to the target. Carries the lowest error
    /// configuration found so the caller may use it as a closest approach,
    /// and the remaining distance to the target at that configuration.
    /// `iterations` is 0 when the target was rejected by the reach check
    /// before any iteration was run.
    UnreachableTarget {
        best: Joints,
        distance: f64,
        iterations: u32,
    },
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::NonFinite { what } =>
                write!(f, "Invalid request: {} is not finite", what),
            KinematicsError::WaypointCount { requested } =>
                write!(f, "Invalid request: at least 2 waypoints are required, got {}", requested),
            KinematicsError::UnreachableTarget { distance, iterations, .. } =>
                write!(f, "Target not reached: {:.6} m away after {} iterations", distance, iterations),
        }
    }
}

impl std::error::Error for KinematicsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ConfigError::JointCount { expected: 6, found: 5 };
        assert_eq!(format!("{}", e), "Wrong joint count: expected 6, found 5");

        let e = ConfigError::LimitOrder { joint: 2, min: 1.0, max: -1.0 };
        assert_eq!(format!("{}", e), "Joint 3: lower limit 1 exceeds upper limit -1");

        let e = KinematicsError::WaypointCount { requested: 1 };
        assert_eq!(
            format!("{}", e),
            "Invalid request: at least 2 waypoints are required, got 1"
        );
    }

    #[test]
    fn test_unreachable_carries_best() {
        let best = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let e = KinematicsError::UnreachableTarget { best, distance: 0.25, iterations: 100 };
        match e {
            KinematicsError::UnreachableTarget { best: b, distance, iterations } => {
                assert_eq!(b, best);
                assert_eq!(distance, 0.25);
                assert_eq!(iterations, 100);
            }
            _ => panic!("wrong variant"),
        }
    }
}
