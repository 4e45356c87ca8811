use anyhow::Result;
use nalgebra::Vector3;
use rs_serial_kinematics::chain::LinkChain;
use rs_serial_kinematics::ik::IkSolver;
use rs_serial_kinematics::kinematic_traits::{JOINTS_AT_ZERO, Joints, Kinematics, Pose};
use rs_serial_kinematics::kinematics_impl::SerialKinematics;
use rs_serial_kinematics::trajectory::{TimeScaling, TrajectoryPlanner};
use rs_serial_kinematics::utils::{dump_joints, dump_pose, dump_trajectory};

/// Usage example.
fn main() -> Result<()> {
    let robot = SerialKinematics::new(LinkChain::simulator_arm());

    let joints: Joints = [0.0, 0.5, -0.3, 0.2, 0.4, 0.1]; // Joints are alias of [f64; 6]
    println!("Initial joints:");
    dump_joints(&joints);

    let pose: Pose = robot.forward(&joints); // Pose is alias of nalgebra::Isometry3<f64>
    println!("Tool center point:");
    dump_pose(&pose);

    println!("Joints placing the tool 10 cm away from there:");
    let target = pose.translation.vector + Vector3::new(0.1, -0.05, 0.1);
    let solver = IkSolver::new(&robot);
    let solution = solver.solve(&target, &joints)?;
    dump_joints(&solution);
    dump_pose(&robot.forward(&solution));

    println!("A target beyond the reach of the arm is rejected before iterating:");
    match solver.solve(&Vector3::new(3.0, 0.0, 0.0), &JOINTS_AT_ZERO) {
        Err(error) => println!("  {}", error),
        Ok(_) => println!("  unexpected success"),
    }

    println!("Trajectory from the zero pose to the solution, quintic profile:");
    let planner = TrajectoryPlanner::new(robot.chain());
    let waypoints = planner.plan_scaled(&JOINTS_AT_ZERO, &solution, 5, TimeScaling::Quintic)?;
    dump_trajectory(&waypoints);

    #[cfg(feature = "allow_filesystem")]
    {
        // This requires YAML library
        let loaded = LinkChain::from_yaml_file("demos/simulator_arm.yaml")?;
        println!("Chain loaded from YAML reaches {:.2} m", loaded.max_reach());
    }

    Ok(())
}
