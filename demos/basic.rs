use rs_serial_kinematics::chain::LinkChain;
use rs_serial_kinematics::kinematic_traits::{JOINTS_AT_ZERO, Joints, Kinematics, Pose};
use rs_serial_kinematics::kinematics_impl::SerialKinematics;
use rs_serial_kinematics::utils::{dump_joints, dump_pose};

/// Forward kinematics, per joint poses and limit annotations.
fn main() {
    let robot = SerialKinematics::new(LinkChain::simulator_arm());

    println!("\nZero configuration, arm fully extended up:");
    let pose: Pose = robot.forward(&JOINTS_AT_ZERO); // Pose is alias of nalgebra::Isometry3<f64>
    dump_pose(&pose);

    let joints: Joints = [0.3, 0.6, -0.4, 0.0, 0.5, 0.1]; // Joints are alias of [f64; 6]
    println!("\nBent configuration:");
    dump_joints(&joints);
    dump_pose(&robot.forward(&joints));

    println!("\nPose of every joint along the chain:");
    for (index, joint_pose) in robot.forward_with_joint_poses(&joints).iter().enumerate() {
        print!("J{}: ", index + 1);
        dump_pose(joint_pose);
    }

    println!("\nOut of limit joints are flagged, the pose is still computed:");
    let wild: Joints = [0.0, 2.0, 0.0, 0.0, 0.0, 0.0]; // J2 beyond the 90 degree limit
    let annotated = robot.forward_annotated(&wild);
    println!("{:?}", annotated);
    println!("Within limits: {}", annotated.within_limits());
}
