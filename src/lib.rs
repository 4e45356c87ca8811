//! Forward and inverse kinematics for six axis serial arms with revolute
//! joints on arbitrary rotation axes.
//!
//! Closed form solvers are tied to one wrist geometry. This crate instead
//! describes the arm as a chain of fixed offsets and rotation axes, computes
//! forward kinematics by composing the joint frames, derives the geometric
//! Jacobian in closed form from those same frames, and solves the inverse
//! position problem iteratively with damped least squares. Any six joint
//! revolute chain can be modeled, including ones no analytical solver covers.
//!
//! # Features
//!
//! - Forward kinematics for any six joint revolute chain, given per joint
//!   offsets, rotation axes and limits. Intermediate joint poses are also
//!   available for link level work.
//! - Geometric Jacobian assembled from the rotation centers and axes of the
//!   chain. No finite differencing is involved.
//! - Damped least squares inverse kinematics for the tool center point
//!   position, with adaptive damping, joint limit clamping on every step, and
//!   a detailed report (closest configuration found, residual distance,
//!   iterations spent) when the target cannot be reached.
//! - Joint space trajectory generation with linear, cubic and quintic time
//!   scaling profiles, plus straight line sampling in Cartesian space for
//!   pairing with the inverse kinematics solver.
//! - Joint limits are warnings on the forward path (the pose comes back
//!   annotated with the offending joints) and hard bounds on the inverse path.
//! - Chain descriptions can be loaded from YAML files, with angles optionally
//!   in degrees via the deg() extension.
//!
//! All angles are radians and all distances are meters. `Joints` is an alias
//! of `[f64; 6]` and `Pose` of `nalgebra::Isometry3<f64>`.
//!
//! ## Examples
//!
//! The following examples demonstrate various functionalities provided by
//! this crate (they live in the demos folder):
//!
//! - **basic.rs**: Forward kinematics, per joint poses and limit annotations.
//! - **jacobian.rs**: Jacobian columns and a damped least squares step.
//! - **trajectory.rs**: Time scaling profiles and Cartesian line sampling.
//! - **from_yaml.rs**: Loading a chain description from a YAML file.

pub mod chain;
pub mod chain_robots;

#[cfg(feature = "allow_filesystem")]
pub mod chain_from_file;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod errors;

pub mod annotations;

pub mod jacobian;

pub mod ik;

pub mod trajectory;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
