//! Supports loading a link chain from YAML file (optional)

use std::path::Path;

use serde::Deserialize;
use serde_saphyr::Options;

use crate::chain::{JointSpec, LinkChain};
use crate::errors::ConfigError;
use crate::kinematic_traits::Pose;
use nalgebra::{Translation3, UnitQuaternion, Vector3};

fn zero3() -> [f64; 3] {
    [0.0; 3]
}

#[derive(Deserialize)]
struct TransformYaml {
    #[serde(default = "zero3")]
    pub translation: [f64; 3],
    #[serde(default = "zero3")]
    pub rpy: [f64; 3],
}

#[derive(Deserialize)]
struct JointYaml {
    #[serde(default = "zero3")]
    pub translation: [f64; 3],
    #[serde(default = "zero3")]
    pub rpy: [f64; 3],
    pub axis: [f64; 3],
    pub limits: [f64; 2],
}

#[derive(Deserialize)]
struct ChainYaml {
    pub joints: Vec<JointYaml>,
    #[serde(default)]
    pub base: Option<TransformYaml>,
    #[serde(default)]
    pub tool: Option<TransformYaml>,
}

impl LinkChain {
    /// Read the chain description from a YAML file. A file like this is
    /// supported:
    /// ```yaml
    /// # Flange up table top arm
    /// joints:
    ///   - translation: [0.0, 0.0, 0.4]
    ///     axis: [0.0, 0.0, 1.0]
    ///     limits: [deg(-180.0), deg(180.0)]
    ///   - axis: [0.0, 1.0, 0.0]
    ///     limits: [deg(-90.0), deg(90.0)]
    ///   # ... six joints in total
    /// tool:
    ///   translation: [0.0, 0.0, 0.2]
    /// ```
    /// Per joint, `translation` and `rpy` (roll, pitch, yaw in radians) locate
    /// the joint relative to the previous one and default to zero. `base` and
    /// `tool` transforms are optional.
    ///
    /// YAML extension to parse the deg(angle) function is supported
    /// (serde_saphyr), so limits and rpy can be given in degrees.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a chain description from a YAML string.
    /// See [`LinkChain::from_yaml_file`] for the format.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // Options is non exhaustive, so it cannot be built as a literal.
        let mut options = Options::default();
        options.angle_conversions = true;
        let root: ChainYaml = serde_saphyr::from_str_with_options(contents, options)
            .map_err(|e| ConfigError::ParseError(format!("{}", e)))?;

        let joints = root
            .joints
            .iter()
            .map(|joint| {
                JointSpec::revolute(
                    isometry(&joint.translation, &joint.rpy),
                    Vector3::new(joint.axis[0], joint.axis[1], joint.axis[2]),
                    joint.limits[0],
                    joint.limits[1],
                )
            })
            .collect();

        let mut chain = LinkChain::new(joints)?;
        if let Some(base) = &root.base {
            chain = chain.with_base(isometry(&base.translation, &base.rpy))?;
        }
        if let Some(tool) = &root.tool {
            chain = chain.with_tool(isometry(&tool.translation, &tool.rpy))?;
        }
        Ok(chain)
    }
}

/// Translation plus roll, pitch, yaw (rotations about the fixed X, Y and Z
/// axes, applied in that order) as a single isometry.
fn isometry(translation: &[f64; 3], rpy: &[f64; 3]) -> Pose {
    Pose::from_parts(
        Translation3::new(translation[0], translation[1], translation[2]),
        UnitQuaternion::from_euler_angles(rpy[0], rpy[1], rpy[2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematic_traits::{JOINTS_AT_ZERO, Kinematics};
    use crate::kinematics_impl::SerialKinematics;
    use std::f64::consts::PI;

    const SIMULATOR_YAML: &str = "
joints:
  - translation: [0.0, 0.0, 0.4]
    axis: [0.0, 0.0, 1.0]
    limits: [deg(-180.0), deg(180.0)]
  - axis: [0.0, 1.0, 0.0]
    limits: [deg(-90.0), deg(90.0)]
  - translation: [0.0, 0.0, 0.5]
    axis: [0.0, 1.0, 0.0]
    limits: [deg(-90.0), deg(90.0)]
  - translation: [0.0, 0.0, 0.5]
    axis: [0.0, 0.0, 1.0]
    limits: [deg(-180.0), deg(180.0)]
  - translation: [0.0, 0.0, 0.3]
    axis: [0.0, 1.0, 0.0]
    limits: [deg(-90.0), deg(90.0)]
  - axis: [0.0, 0.0, 1.0]
    limits: [deg(-180.0), deg(180.0)]
tool:
  translation: [0.0, 0.0, 0.2]
";

    #[test]
    fn test_loaded_chain_matches_preset() {
        let loaded = LinkChain::from_yaml(SIMULATOR_YAML).expect("must parse");
        let preset = LinkChain::simulator_arm();
        assert!((loaded.max_reach() - preset.max_reach()).abs() < 1e-12);

        let loaded_pose = SerialKinematics::new(loaded).forward(&JOINTS_AT_ZERO);
        let preset_pose = SerialKinematics::new(preset).forward(&JOINTS_AT_ZERO);
        assert!(
            (loaded_pose.translation.vector - preset_pose.translation.vector).norm() < 1e-12
        );
    }

    #[test]
    fn test_deg_limits_become_radians() {
        let chain = LinkChain::from_yaml(SIMULATOR_YAML).expect("must parse");
        let (min, max) = chain.limits(0);
        assert!((min + PI).abs() < 1e-9);
        assert!((max - PI).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_joint_count_is_rejected() {
        let five_joints = "
joints:
  - axis: [0.0, 0.0, 1.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 0.0, 1.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
";
        match LinkChain::from_yaml(five_joints) {
            Err(ConfigError::JointCount { expected, found }) => {
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            other => panic!("expected joint count error, got {:?}", other),
        }
    }

    #[test]
    fn test_swapped_limits_are_rejected() {
        let swapped = "
joints:
  - axis: [0.0, 0.0, 1.0]
    limits: [1.0, -1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 0.0, 1.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 0.0, 1.0]
    limits: [-1.0, 1.0]
";
        assert!(matches!(
            LinkChain::from_yaml(swapped),
            Err(ConfigError::LimitOrder { joint: 0, .. })
        ));
    }

    #[test]
    fn test_zero_axis_is_rejected() {
        let zero_axis = "
joints:
  - axis: [0.0, 0.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 0.0, 1.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 1.0, 0.0]
    limits: [-1.0, 1.0]
  - axis: [0.0, 0.0, 1.0]
    limits: [-1.0, 1.0]
";
        assert!(matches!(
            LinkChain::from_yaml(zero_axis),
            Err(ConfigError::ZeroAxis { joint: 0 })
        ));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        assert!(matches!(
            LinkChain::from_yaml("joints: not even a list"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_base_transform_is_applied() {
        let raised = format!("{SIMULATOR_YAML}base:\n  translation: [0.0, 0.0, 1.0]\n");
        let chain = LinkChain::from_yaml(&raised).expect("must parse");
        let pose = SerialKinematics::new(chain).forward(&JOINTS_AT_ZERO);
        // One meter higher than the table mounted preset.
        assert!((pose.translation.vector.z - 2.9).abs() < 1e-12);
    }
}
