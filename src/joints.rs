use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::constants::{JOINTS, JOINT_TABLE, NUM_JOINT};
use crate::error::{ConfigError, Result};

/// Kinematic chain a joint belongs to, in joint-order sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JointGroup {
    LeftLeg,
    RightLeg,
    Waist,
    LeftArm,
    RightArm,
    Neck,
}

impl JointGroup {
    pub const ALL: [JointGroup; 6] = [
        JointGroup::LeftLeg,
        JointGroup::RightLeg,
        JointGroup::Waist,
        JointGroup::LeftArm,
        JointGroup::RightArm,
        JointGroup::Neck,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JointGroup::LeftLeg => "left_leg",
            JointGroup::RightLeg => "right_leg",
            JointGroup::Waist => "waist",
            JointGroup::LeftArm => "left_arm",
            JointGroup::RightArm => "right_arm",
            JointGroup::Neck => "neck",
        }
    }

    /// Arms and neck. These are the joints listed in `UPPER_BODY_JOINTS`.
    pub fn is_upper_body(&self) -> bool {
        matches!(
            self,
            JointGroup::LeftArm | JointGroup::RightArm | JointGroup::Neck
        )
    }
}

impl fmt::Display for JointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointGroup {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        JointGroup::ALL
            .iter()
            .find(|group| group.as_str() == s)
            .copied()
            .ok_or_else(|| ConfigError::UnknownGroup(s.to_string()))
    }
}

/// Everything the tracking task knows about a single actuated joint.
///
/// Angles are in radians, velocities in rad/s and torques in N·m.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JointSpec {
    pub name: &'static str,
    pub group: JointGroup,
    /// Restricted `(min, max)` position range.
    pub range: (f32, f32),
    pub max_velocity: f32,
    pub max_torque: f32,
    pub kp: f32,
    pub kd: f32,
    /// Joint angle in the default standing pose.
    pub default_position: f32,
}

impl JointSpec {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        name: &'static str,
        group: JointGroup,
        range: (f32, f32),
        max_velocity: f32,
        max_torque: f32,
        kp: f32,
        kd: f32,
        default_position: f32,
    ) -> Self {
        Self {
            name,
            group,
            range,
            max_velocity,
            max_torque,
            kp,
            kd,
            default_position,
        }
    }

    /// First problem with this record's numbers, if any. Usable in const
    /// context so the shipped table is checked at compile time.
    pub const fn limits_violation(&self) -> Option<&'static str> {
        let (min, max) = self.range;
        if !(min <= max) || min == f32::NEG_INFINITY || max == f32::INFINITY {
            return Some("inverted or non-finite range");
        }
        if !is_finite_non_negative(self.max_velocity) {
            return Some("velocity limit");
        }
        if !is_finite_non_negative(self.max_torque) {
            return Some("torque limit");
        }
        if !is_finite_non_negative(self.kp) {
            return Some("kp");
        }
        if !is_finite_non_negative(self.kd) {
            return Some("kd");
        }
        if !(self.default_position >= min && self.default_position <= max) {
            return Some("default position outside range");
        }
        None
    }

    pub fn min(&self) -> f32 {
        self.range.0
    }

    pub fn max(&self) -> f32 {
        self.range.1
    }

    pub fn contains(&self, position: f32) -> bool {
        position >= self.range.0 && position <= self.range.1
    }

    pub fn clamp_position(&self, position: f32) -> f32 {
        position.clamp(self.range.0, self.range.1)
    }

    pub fn clamp_torque(&self, torque: f32) -> f32 {
        torque.clamp(-self.max_torque, self.max_torque)
    }
}

// NaN fails both comparisons.
const fn is_finite_non_negative(value: f32) -> bool {
    value >= 0.0 && value < f32::INFINITY
}

pub fn joint_index(name: &str) -> Result<usize> {
    JOINTS
        .iter()
        .position(|joint| joint.name == name)
        .ok_or_else(|| {
            debug!("Joint lookup failed for {}", name);
            ConfigError::UnknownJoint(name.to_string())
        })
}

pub fn joint(name: &str) -> Result<&'static JointSpec> {
    joint_index(name).map(|idx| &JOINT_TABLE[idx])
}

/// Indices into the joint order for a list of joint names, in the order given.
pub fn joint_indices<S: AsRef<str>>(names: &[S]) -> Result<Vec<usize>> {
    names.iter().map(|name| joint_index(name.as_ref())).collect()
}

pub fn joints_in(group: JointGroup) -> impl Iterator<Item = &'static JointSpec> {
    JOINT_TABLE.iter().filter(move |joint| joint.group == group)
}

pub fn group_indices(group: JointGroup) -> Vec<usize> {
    (0..NUM_JOINT)
        .filter(|&idx| JOINTS[idx].group == group)
        .collect()
}
