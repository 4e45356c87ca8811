//! Helper functions

use crate::kinematic_traits::{Joints, Pose};
use nalgebra::{UnitQuaternion, Vector6};

/// Checks joint arrays for validity. This is only internally needed as all
/// returned configurations are already checked.
pub(crate) mod serial_kinematics {
    use crate::kinematic_traits::Joints;

    /// Checks if all elements in the array are finite
    pub fn is_valid(qs: &Joints) -> bool {
        qs.iter().all(|&q| q.is_finite())
    }
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint_idx in 0..6 {
        let computed = joints[joint_idx];
        row_str.push_str(&format!("{:5.2} ", computed.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print joint values for all waypoints of a trajectory, one indexed row per
/// waypoint, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_trajectory(waypoints: &[Joints]) {
    if waypoints.is_empty() {
        println!("No waypoints");
    }
    for waypoint_idx in 0..waypoints.len() {
        let mut row_str = String::new();
        for joint_idx in 0..6 {
            let computed = waypoints[waypoint_idx][joint_idx];
            row_str.push_str(&format!("{:5.2} ", computed.to_degrees()));
        }
        println!("{}: [{}]", waypoint_idx, row_str.trim_end());
    }
}

pub fn dump_pose(isometry: &Pose) {
    let translation = isometry.translation.vector;
    let rotation: UnitQuaternion<f64> = isometry.rotation;
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  quat: {:.5},{:.5},{:.5},{:.5}",
        translation.x, translation.y, translation.z, rotation.i, rotation.j, rotation.k, rotation.w
    );
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 6]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Convert joints that are array of f64's in radians to
/// array of f32's in degrees
pub fn to_degrees(angles: &Joints) -> [f32; 6] {
    [
        angles[0].to_degrees() as f32,
        angles[1].to_degrees() as f32,
        angles[2].to_degrees() as f32,
        angles[3].to_degrees() as f32,
        angles[4].to_degrees() as f32,
        angles[5].to_degrees() as f32,
    ]
}

/// Converts ```nalgebra::Vector6<f64>``` to Joints ([f64; 6])
pub fn vector6_to_joints(v: Vector6<f64>) -> Joints {
    [v[0], v[1], v[2], v[3], v[4], v[5]]
}

/// Converts ```Joints ([f64; 6])``` to a ```Vector6<f64>```
pub fn joints_to_vector6(j: Joints) -> Vector6<f64> {
    Vector6::new(j[0], j[1], j[2], j[3], j[4], j[5])
}

pub fn assert_pose_eq(
    ta: &Pose,
    tb: &Pose,
    distance_tolerance: f64,
    angular_tolerance: f64,
) -> bool {
    fn bad(ta: &Pose, tb: &Pose) {
        dump_pose(ta);
        dump_pose(tb);
    }

    let translation_distance = (ta.translation.vector - tb.translation.vector).norm();
    let angular_distance = ta.rotation.angle_to(&tb.rotation);

    if translation_distance.abs() > distance_tolerance {
        bad(ta, tb);
        panic!("Poses have too different translations");
    }

    if angular_distance.abs() > angular_tolerance {
        bad(ta, tb);
        panic!("Poses have too different angles");
    }
    true
}
