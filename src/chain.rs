//! Static description of the manipulator geometry: six revolute joints
//! between a fixed base and a fixed tool transform.

use crate::errors::ConfigError;
use crate::kinematic_traits::Joints;
use nalgebra::{Isometry3, Unit, Vector3};

/// Kind of a joint. Only revolute joints are modeled by this library; the
/// variant exists so chain descriptions state what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointType {
    Revolute,
}

/// Geometry and limits of a single joint.
#[derive(Debug, Clone, Copy)]
pub struct JointSpec {
    pub joint_type: JointType,

    /// Fixed transform from the previous link frame to this joint frame
    /// (the static link geometry: translation plus rotation offset).
    pub offset: Isometry3<f64>,

    /// Rotation axis in the local frame of the joint. Does not need to be
    /// unit length on input; the chain normalizes it during validation.
    pub axis: Vector3<f64>,

    /// Lower angle limit, radians.
    pub min: f64,

    /// Upper angle limit, radians.
    pub max: f64,
}

impl JointSpec {
    pub fn revolute(offset: Isometry3<f64>, axis: Vector3<f64>, min: f64, max: f64) -> Self {
        JointSpec {
            joint_type: JointType::Revolute,
            offset,
            axis,
            min,
            max,
        }
    }
}

/// The serial chain. Link i attaches to link i - 1 only; the chain is
/// validated once at construction and immutable afterwards, so it can be
/// shared between any number of concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct LinkChain {
    joints: [JointSpec; 6],

    /// World to robot base transform.
    base: Isometry3<f64>,

    /// Flange to tool center point transform.
    tool: Isometry3<f64>,

    /// Upper bound on the distance the tool center point can travel from
    /// the base origin, precomputed from the link and tool translations.
    max_reach: f64,
}

impl LinkChain {
    /// Validates the joint list and builds the chain with identity base and
    /// tool transforms. Use `with_base` and `with_tool` to attach those.
    pub fn new(joints: Vec<JointSpec>) -> Result<Self, ConfigError> {
        if joints.len() != 6 {
            return Err(ConfigError::JointCount {
                expected: 6,
                found: joints.len(),
            });
        }

        let mut validated: Vec<JointSpec> = Vec::with_capacity(6);
        for (i, spec) in joints.into_iter().enumerate() {
            if !finite_isometry(&spec.offset) {
                return Err(ConfigError::NonFinite(format!("joint {} offset", i + 1)));
            }
            if !spec.axis.iter().all(|v| v.is_finite()) {
                return Err(ConfigError::NonFinite(format!("joint {} axis", i + 1)));
            }
            let axis =
                Unit::try_new(spec.axis, 1e-12).ok_or(ConfigError::ZeroAxis { joint: i })?;
            if !spec.min.is_finite() || !spec.max.is_finite() {
                return Err(ConfigError::NonFinite(format!("joint {} limits", i + 1)));
            }
            if spec.min > spec.max {
                return Err(ConfigError::LimitOrder {
                    joint: i,
                    min: spec.min,
                    max: spec.max,
                });
            }
            validated.push(JointSpec {
                axis: axis.into_inner(),
                ..spec
            });
        }

        let joints: [JointSpec; 6] = std::array::from_fn(|i| validated[i]);
        Ok(Self::from_validated(
            joints,
            Isometry3::identity(),
            Isometry3::identity(),
        ))
    }

    /// Places the chain on a base (pedestal, wall or ceiling mount).
    pub fn with_base(self, base: Isometry3<f64>) -> Result<Self, ConfigError> {
        if !finite_isometry(&base) {
            return Err(ConfigError::NonFinite("base transform".to_string()));
        }
        Ok(Self::from_validated(self.joints, base, self.tool))
    }

    /// Attaches a fixed tool; poses then refer to the tool center point
    /// rather than the flange of the last joint.
    pub fn with_tool(self, tool: Isometry3<f64>) -> Result<Self, ConfigError> {
        if !finite_isometry(&tool) {
            return Err(ConfigError::NonFinite("tool transform".to_string()));
        }
        Ok(Self::from_validated(self.joints, self.base, tool))
    }

    // Callers must pass normalized axes; chain_robots builds presets
    // through here with literal unit axes.
    pub(crate) fn from_validated(
        joints: [JointSpec; 6],
        base: Isometry3<f64>,
        tool: Isometry3<f64>,
    ) -> Self {
        let max_reach = joints
            .iter()
            .map(|j| j.offset.translation.vector.norm())
            .sum::<f64>()
            + tool.translation.vector.norm();
        LinkChain {
            joints,
            base,
            tool,
            max_reach,
        }
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn joints(&self) -> &[JointSpec; 6] {
        &self.joints
    }

    /// Limit pair (min, max) of the given joint, 0 based index.
    pub fn limits(&self, joint: usize) -> (f64, f64) {
        (self.joints[joint].min, self.joints[joint].max)
    }

    pub fn base(&self) -> &Isometry3<f64> {
        &self.base
    }

    pub fn tool(&self) -> &Isometry3<f64> {
        &self.tool
    }

    /// Upper bound on the tool center point distance from the base origin.
    /// Joint limits may restrict the workspace further; a target beyond this
    /// bound is provably unreachable.
    pub fn max_reach(&self) -> f64 {
        self.max_reach
    }

    /// True when every joint angle is within its declared limits.
    pub fn compliant(&self, angles: &Joints) -> bool {
        (0..6).all(|i| angles[i] >= self.joints[i].min && angles[i] <= self.joints[i].max)
    }

    /// Clamps every joint angle to its declared limits, in place.
    pub fn clamp(&self, angles: &mut Joints) {
        for i in 0..6 {
            angles[i] = angles[i].clamp(self.joints[i].min, self.joints[i].max);
        }
    }

    /// Returns a copy of the angles with every joint clamped to its limits.
    pub fn clamped(&self, angles: &Joints) -> Joints {
        let mut out = *angles;
        self.clamp(&mut out);
        out
    }
}

fn finite_isometry(t: &Isometry3<f64>) -> bool {
    t.translation.vector.iter().all(|v| v.is_finite())
        && t.rotation.quaternion().coords.iter().all(|v| v.is_finite())
}
