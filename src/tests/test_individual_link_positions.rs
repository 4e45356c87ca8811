use crate::chain::LinkChain;
use crate::kinematic_traits::{JOINTS_AT_ZERO, Joints, Kinematics};
use crate::kinematics_impl::SerialKinematics;
use nalgebra::Vector3;

const SMALL: f64 = 1e-12;

#[test]
fn test_link_positions_straight_up() {
    // With every joint at zero the chain stacks along Z; each joint pose
    // sits at the running sum of the link offsets.
    let robot = SerialKinematics::new(LinkChain::simulator_arm());
    let poses = robot.forward_with_joint_poses(&JOINTS_AT_ZERO);

    let expected_heights = [0.4, 0.4, 0.9, 1.4, 1.7, 1.9];
    for (i, pose) in poses.iter().enumerate() {
        let translation = pose.translation.vector;
        assert!(
            (translation - Vector3::new(0.0, 0.0, expected_heights[i])).norm() < SMALL,
            "joint {} sits at {:?}, expected height {}",
            i + 1,
            translation,
            expected_heights[i]
        );
    }
}

#[test]
fn test_last_link_pose_is_the_tool_pose() {
    let robot = SerialKinematics::new(LinkChain::simulator_arm());
    let joints: Joints = [0.4, -0.3, 0.7, 1.1, -0.5, 0.2];
    let poses = robot.forward_with_joint_poses(&joints);
    assert_eq!(poses[5], robot.forward(&joints));
}

#[test]
fn test_joint_frames_agree_with_link_poses() {
    // The rotation centers reported for the Jacobian are the same points
    // the per joint poses sit at. The joint's own rotation spins the frame
    // in place, so recording before or after it makes no difference for
    // the translation.
    let robot = SerialKinematics::new(LinkChain::simulator_arm());
    let joints: Joints = [0.9, 0.4, -0.6, 0.3, 0.5, -1.2];

    let poses = robot.forward_with_joint_poses(&joints);
    let frames = robot.joint_frames(&joints);

    // The last pose carries the tool transform, so compare joints 1..=5 only.
    for i in 0..5 {
        assert!(
            (frames.origins[i] - poses[i].translation.vector).norm() < SMALL,
            "joint {} center drifted",
            i + 1
        );
    }
    assert!((frames.tcp - poses[5].translation.vector).norm() < SMALL);
}

#[test]
fn test_bench_arm_partial_heights() {
    // The pedestal base lifts every link while staying out of the reach sum.
    let robot = SerialKinematics::new(LinkChain::bench_arm());
    let poses = robot.forward_with_joint_poses(&JOINTS_AT_ZERO);

    let expected_heights = [0.15, 0.35, 0.65, 0.75, 0.95, 1.06];
    for (i, pose) in poses.iter().enumerate() {
        assert!(
            (pose.translation.vector.z - expected_heights[i]).abs() < SMALL,
            "joint {} height {} vs {}",
            i + 1,
            pose.translation.vector.z,
            expected_heights[i]
        );
    }
}
