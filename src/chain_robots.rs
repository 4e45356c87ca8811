//! Hardcoded chain geometry for a few arms

use crate::chain::{JointSpec, LinkChain};
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};

fn offset_z(z: f64) -> Isometry3<f64> {
    Isometry3::from_parts(Translation3::new(0.0, 0.0, z), UnitQuaternion::identity())
}

#[allow(dead_code)]
impl LinkChain {
    /// The arm of the interactive simulator this library grew out of:
    /// Z-up, shoulder 0.4 m above the base, two 0.5 m arm segments, a
    /// 0.3 m wrist segment and a 0.2 m tool. At the zero configuration it
    /// stands fully extended with the tool center point at (0, 0, 1.9);
    /// maximum reach is 1.9 m. Roll joints (J1, J4, J6) turn a full circle,
    /// pitch joints (J2, J3, J5) are limited to half of it.
    pub fn simulator_arm() -> Self {
        let quarter = FRAC_PI_2;
        Self::from_validated(
            [
                JointSpec::revolute(offset_z(0.4), Vector3::z(), -PI, PI),
                JointSpec::revolute(offset_z(0.0), Vector3::y(), -quarter, quarter),
                JointSpec::revolute(offset_z(0.5), Vector3::y(), -quarter, quarter),
                JointSpec::revolute(offset_z(0.5), Vector3::z(), -PI, PI),
                JointSpec::revolute(offset_z(0.3), Vector3::y(), -quarter, quarter),
                JointSpec::revolute(offset_z(0.0), Vector3::z(), -PI, PI),
            ],
            Isometry3::identity(),
            offset_z(0.2),
        )
    }

    /// A small desk arm on a 0.1 m pedestal with a 5 cm tool, used in tests
    /// for exercising non-trivial base and tool transforms. Zero
    /// configuration tool center point: (0, 0, 1.06); reach 0.96 m from the
    /// base origin.
    pub fn bench_arm() -> Self {
        Self::from_validated(
            [
                JointSpec::revolute(offset_z(0.05), Vector3::z(), -PI, PI),
                JointSpec::revolute(offset_z(0.2), Vector3::y(), -1.5708, 2.356),
                JointSpec::revolute(offset_z(0.3), Vector3::y(), -2.356, 2.356),
                JointSpec::revolute(offset_z(0.1), Vector3::z(), -PI, PI),
                JointSpec::revolute(offset_z(0.2), Vector3::y(), -2.094, 2.094),
                JointSpec::revolute(offset_z(0.06), Vector3::z(), -PI, PI),
            ],
            offset_z(0.1),
            offset_z(0.05),
        )
    }
}
