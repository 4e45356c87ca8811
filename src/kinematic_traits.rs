//! Defines the key types and the kinematics trait of this library.

extern crate nalgebra as na;

use na::{Isometry3, Unit, Vector3};

/// Pose of the robot tcp. It contains both Cartesian position and rotation quaternion
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion, Vector3};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(1.0, 0.0, 0.0);
/// // The quaternion should be normalized to represent a valid rotation.
/// let rotation = UnitQuaternion::from_quaternion(na::Quaternion::new(1.0, 0.0, 0.0, 1.0).normalize());
/// let transform = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = Isometry3<f64>;

/// Six joint rotations of the robot in radians, ordered from the base joint
/// to the wrist joint. All angles crossing the library boundary are radians;
/// converting to and from degrees for human display is the job of the
/// presentation layer, not of this library.
pub type Joints = [f64; 6];

// Define indices for easier reading (numbering in robotics starts from 1)
pub const J1: usize = 0;
pub const J2: usize = 1;
pub const J3: usize = 2;
pub const J4: usize = 3;
pub const J5: usize = 4;
pub const J6: usize = 5;

/// Joints with all angles at zero
pub const JOINTS_AT_ZERO: Joints = [0.0; 6];

/// Rotation centers and rotation axes of all joints, expressed in the base
/// frame, together with the tool center point. Produced by a single
/// accumulation pass over the chain; `origins[i]` and `axes[i]` describe
/// joint i after all preceding transforms, before its own rotation is
/// applied.
#[derive(Debug, Clone, Copy)]
pub struct JointFrames {
    pub origins: [Vector3<f64>; 6],
    pub axes: [Unit<Vector3<f64>>; 6],
    pub tcp: Vector3<f64>,
}

pub trait Kinematics {
    /// Computes the pose of the tool center point for the given joints.
    /// Forward kinematics is defined for any finite angles; values outside
    /// the declared joint limits still produce a pose (see
    /// `forward_annotated` on the implementation for the limit side channel).
    fn forward(&self, qs: &Joints) -> Pose;

    /// Computes the poses of all links. The returned array contains one pose
    /// per joint, in chain order; the last element is the tool center point
    /// pose and equals the result of `forward`.
    fn forward_with_joint_poses(&self, joints: &Joints) -> [Pose; 6];

    /// Reports the per joint rotation centers and axes in the base frame for
    /// the given configuration. This is the input of the Jacobian and is
    /// computed in the same single pass as `forward`, not by re-running
    /// forward kinematics per joint.
    fn joint_frames(&self, qs: &Joints) -> JointFrames;
}
