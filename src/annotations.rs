use crate::kinematic_traits::Pose;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Flags marking joints whose input angle was outside the declared
    /// limits when a pose was computed. Informational: forward kinematics
    /// is defined for any finite angle, so an out of limits input still
    /// produces a pose and these flags are the side channel reporting it.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct LimitFlags: u32 {
        const NONE = 0b0000_0000;

        const J1_OUT = 0b0000_0001;
        const J2_OUT = 0b0000_0010;
        const J3_OUT = 0b0000_0100;
        const J4_OUT = 0b0000_1000;
        const J5_OUT = 0b0001_0000;
        const J6_OUT = 0b0010_0000;

        /// Any joint out of its declared limits.
        const ANY_OUT = Self::J1_OUT.bits() | Self::J2_OUT.bits() | Self::J3_OUT.bits()
            | Self::J4_OUT.bits() | Self::J5_OUT.bits() | Self::J6_OUT.bits();
    }
}

impl LimitFlags {
    /// The flag of the given joint, 0 based index.
    pub fn for_joint(index: usize) -> LimitFlags {
        LimitFlags::from_bits_truncate(1 << index)
    }
}

/// A pose together with the limit flags of the configuration it was
/// computed from. Empty flags mean the input was fully within limits.
#[derive(Clone, Copy)]
pub struct AnnotatedPose {
    pub pose: Pose,
    pub flags: LimitFlags,
}

impl AnnotatedPose {
    pub fn within_limits(&self) -> bool {
        self.flags.is_empty()
    }
}

fn flag_representation(flags: &LimitFlags) -> String {
    const FLAG_MAP: &[(LimitFlags, &str)] = &[
        (LimitFlags::J1_OUT, "J1_OUT"),
        (LimitFlags::J2_OUT, "J2_OUT"),
        (LimitFlags::J3_OUT, "J3_OUT"),
        (LimitFlags::J4_OUT, "J4_OUT"),
        (LimitFlags::J5_OUT, "J5_OUT"),
        (LimitFlags::J6_OUT, "J6_OUT"),
    ];

    if flags.is_empty() {
        return "NONE".to_string();
    }
    FLAG_MAP
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" | ")
}

impl fmt::Debug for LimitFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", flag_representation(self))
    }
}

impl fmt::Debug for AnnotatedPose {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let translation = self.pose.translation.vector;
        let rotation = self.pose.rotation;
        write!(
            formatter,
            "{}: [{:.3}, {:.3}, {:.3}], quat {{ w: {:.3}, i: {:.3}, j: {:.3}, k: {:.3} }}",
            flag_representation(&self.flags),
            translation.x,
            translation.y,
            translation.z,
            rotation.w,
            rotation.i,
            rotation.j,
            rotation.k
        )
    }
}
