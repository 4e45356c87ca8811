use rs_serial_kinematics::chain::LinkChain;
use rs_serial_kinematics::kinematic_traits::{JOINTS_AT_ZERO, Kinematics};
use rs_serial_kinematics::kinematics_impl::SerialKinematics;
use rs_serial_kinematics::utils::dump_pose;

/// Loading a chain description from a YAML file.
fn main() {
    let chain = LinkChain::from_yaml_file("demos/simulator_arm.yaml")
        .expect("demos/simulator_arm.yaml must parse");
    println!("Loaded chain with reach {:.2} m", chain.max_reach());

    let robot = SerialKinematics::new(chain);
    println!("Zero configuration pose:");
    dump_pose(&robot.forward(&JOINTS_AT_ZERO));
}
