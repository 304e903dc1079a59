use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown task: {0} (expected \"flat_terrain\" or \"rough_terrain\")")]
    UnknownTask(String),

    #[error("unknown joint: {0}")]
    UnknownJoint(String),

    #[error("unknown joint group: {0}")]
    UnknownGroup(String),

    #[error("joint {joint} has an inverted range: min {min} > max {max}")]
    InvalidRange { joint: String, min: f32, max: f32 },

    #[error("joint {joint} has a negative or non-finite {field}: {value}")]
    NegativeLimit {
        joint: String,
        field: &'static str,
        value: f32,
    },

    #[error("duplicate name {name} in {set}")]
    DuplicateName { set: &'static str, name: String },

    /// Default joint angle sits outside the joint's restricted range.
    #[error("default position {value} of joint {joint} is outside [{min}, {max}]")]
    DefaultOutOfRange {
        joint: String,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("{name} in {set} is not part of the joint order")]
    NotInJointOrder { set: &'static str, name: String },

    #[error("default root quaternion is not unit length (norm {0})")]
    InvalidQuaternion(f32),

    #[error("invalid LAFAN1 clip name: {0}")]
    InvalidClipName(String),

    #[error("scene file does not exist: {}", .0.display())]
    MissingSceneFile(PathBuf),

    #[error("start and end commands cover different joints: {0}")]
    CommandMismatch(String),

    #[error("torque scale must be finite and non-negative, got {0}")]
    InvalidTorqueScale(f32),

    #[error("number of interpolation steps must be greater than zero")]
    ZeroSteps,

    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
