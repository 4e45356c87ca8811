use nalgebra::Vector3;
use rs_serial_kinematics::chain::LinkChain;
use rs_serial_kinematics::jacobian::Jacobian;
use rs_serial_kinematics::kinematic_traits::{Joints, Kinematics};
use rs_serial_kinematics::kinematics_impl::SerialKinematics;
use rs_serial_kinematics::utils::{dump_joints, vector6_to_joints};

/// Jacobian columns and a damped least squares step.
fn main() {
    let robot = SerialKinematics::new(LinkChain::simulator_arm());
    let joints: Joints = [0.0, 0.5, -0.3, 0.2, 0.4, 0.1];

    let jacobian = Jacobian::new(&robot, &joints);
    println!("Linear velocity columns (m/s per rad/s):");
    println!("{:.4}", jacobian.linear());
    println!("Angular velocity columns (the rotation axes in the base frame):");
    println!("{:.4}", jacobian.angular());

    // One damped least squares step towards a target 5 cm along X.
    let error = Vector3::new(0.05, 0.0, 0.0);
    let step = jacobian.damped_step(&error, 1e-3).unwrap();
    println!("Step towards 5 cm along X, in degrees per joint:");
    dump_joints(&vector6_to_joints(step));

    let mut stepped = joints;
    for i in 0..6 {
        stepped[i] += step[i];
    }
    let before = robot.forward(&joints).translation.vector;
    let after = robot.forward(&stepped).translation.vector;
    println!(
        "TCP before: x = {:.4}, y = {:.4}, z = {:.4}",
        before.x, before.y, before.z
    );
    println!(
        "TCP after:  x = {:.4}, y = {:.4}, z = {:.4}",
        after.x, after.y, after.z
    );
}
