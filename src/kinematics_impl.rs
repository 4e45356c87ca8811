//! Forward kinematics over a validated link chain.

use crate::annotations::{AnnotatedPose, LimitFlags};
use crate::chain::LinkChain;
use crate::kinematic_traits::{JointFrames, Joints, Kinematics, Pose};
use nalgebra::{Translation3, Unit, UnitQuaternion, Vector3};

/// Computes poses for a serial chain by accumulating
/// `base * (offset_1 * R_1) * ... * (offset_6 * R_6) * tool`, where `R_i`
/// is the rotation of joint i about its declared axis. Rotations compose as
/// quaternions; no Euler angle accumulation is involved at any point.
///
/// The struct is immutable after construction and all methods take `&self`,
/// so one instance can serve concurrent callers.
pub struct SerialKinematics {
    chain: LinkChain,
    axes: [Unit<Vector3<f64>>; 6],
}

impl SerialKinematics {
    /// Creates a new `SerialKinematics` instance for the given chain.
    pub fn new(chain: LinkChain) -> Self {
        let axes = std::array::from_fn(|i| Unit::new_normalize(chain.joints()[i].axis));
        SerialKinematics { chain, axes }
    }

    pub fn chain(&self) -> &LinkChain {
        &self.chain
    }

    /// Forward kinematics with the limit side channel: the pose is computed
    /// for any finite input, and the flags report which joints were outside
    /// their declared limits. This is a warning, not an error.
    pub fn forward_annotated(&self, qs: &Joints) -> AnnotatedPose {
        let mut flags = LimitFlags::NONE;
        for i in 0..6 {
            let (min, max) = self.chain.limits(i);
            if qs[i] < min || qs[i] > max {
                flags |= LimitFlags::for_joint(i);
            }
        }
        AnnotatedPose {
            pose: self.forward(qs),
            flags,
        }
    }

    fn joint_rotation(&self, joint: usize, angle: f64) -> Pose {
        Pose::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_axis_angle(&self.axes[joint], angle),
        )
    }
}

impl Kinematics for SerialKinematics {
    fn forward(&self, qs: &Joints) -> Pose {
        let mut transform = *self.chain.base();
        for (i, joint) in self.chain.joints().iter().enumerate() {
            transform *= joint.offset;
            transform *= self.joint_rotation(i, qs[i]);
        }
        transform * *self.chain.tool()
    }

    fn forward_with_joint_poses(&self, joints: &Joints) -> [Pose; 6] {
        let mut poses = [Pose::identity(); 6];
        let mut transform = *self.chain.base();
        for (i, joint) in self.chain.joints().iter().enumerate() {
            transform *= joint.offset;
            transform *= self.joint_rotation(i, joints[i]);
            poses[i] = transform;
        }
        // The last entry is the tool center point, equal to forward()
        poses[5] = transform * *self.chain.tool();
        poses
    }

    fn joint_frames(&self, qs: &Joints) -> JointFrames {
        let mut transform = *self.chain.base();
        let mut origins = [Vector3::zeros(); 6];
        let mut axes = [Vector3::x_axis(); 6];

        for (i, joint) in self.chain.joints().iter().enumerate() {
            transform *= joint.offset;

            // Rotation center and axis in the base frame, taken before the
            // joint's own rotation (which leaves both unchanged anyway)
            origins[i] = transform.translation.vector;
            axes[i] = transform.rotation * self.axes[i];

            transform *= self.joint_rotation(i, qs[i]);
        }

        let tcp = (transform * *self.chain.tool()).translation.vector;
        JointFrames { origins, axes, tcp }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematic_traits::{J2, JOINTS_AT_ZERO};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_forward_equals_last_joint_pose() {
        let robot = SerialKinematics::new(LinkChain::simulator_arm());
        let joints: Joints = [0.3, -0.4, 0.5, 0.2, -0.3, 0.1];
        let pose = robot.forward(&joints);
        let poses = robot.forward_with_joint_poses(&joints);
        assert_eq!(poses[5], pose);
    }

    #[test]
    fn test_joint_frames_tcp_matches_forward() {
        // Bitwise equal, not merely close: both run the same accumulation in
        // the same order, and the solver relies on that to reuse one frames
        // pass for both the residual and the Jacobian.
        let robot = SerialKinematics::new(LinkChain::simulator_arm());
        let joints: Joints = [0.5, 0.2, -0.6, 1.0, 0.4, -0.8];
        let frames = robot.joint_frames(&joints);
        let pose = robot.forward(&joints);
        assert_eq!(frames.tcp, pose.translation.vector);
    }

    #[test]
    fn test_annotated_within_limits() {
        let robot = SerialKinematics::new(LinkChain::simulator_arm());
        let annotated = robot.forward_annotated(&JOINTS_AT_ZERO);
        assert!(annotated.within_limits());
    }

    #[test]
    fn test_annotated_flags_out_of_limit_joint() {
        let robot = SerialKinematics::new(LinkChain::simulator_arm());
        let mut joints = JOINTS_AT_ZERO;
        joints[J2] = FRAC_PI_2 + 0.1; // beyond the pitch limit
        let annotated = robot.forward_annotated(&joints);
        assert_eq!(annotated.flags, LimitFlags::J2_OUT);

        // The pose is still produced and differs from the clamped one
        let clamped = robot.forward(&robot.chain().clamped(&joints));
        assert!(annotated.pose != clamped);
    }
}
