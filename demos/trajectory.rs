use nalgebra::Vector3;
use rs_serial_kinematics::chain::LinkChain;
use rs_serial_kinematics::kinematic_traits::{JOINTS_AT_ZERO, Joints};
use rs_serial_kinematics::trajectory::{TimeScaling, TrajectoryPlanner, cartesian_line};
use rs_serial_kinematics::utils::dump_trajectory;

/// Time scaling profiles and Cartesian line sampling.
fn main() {
    let chain = LinkChain::simulator_arm();
    let planner = TrajectoryPlanner::new(&chain);
    let end: Joints = [0.8, 0.4, -0.6, 0.3, 0.5, -0.2];

    for scaling in [TimeScaling::Linear, TimeScaling::Cubic, TimeScaling::Quintic] {
        println!("\n{:?} profile:", scaling);
        let waypoints = planner
            .plan_scaled(&JOINTS_AT_ZERO, &end, 7, scaling)
            .unwrap();
        dump_trajectory(&waypoints);
    }

    println!("\nStraight line in Cartesian space, for tracking with the solver:");
    let line = cartesian_line(
        &Vector3::new(0.5, -0.2, 0.8),
        &Vector3::new(0.5, 0.2, 1.2),
        5,
    )
    .unwrap();
    for (index, point) in line.iter().enumerate() {
        println!(
            "{}: x = {:.3}, y = {:.3}, z = {:.3}",
            index, point.x, point.y, point.z
        );
    }
}
