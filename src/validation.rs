//! Integrity checks over the joint, pose and name tables.
//!
//! Per-joint arrays cannot drift out of alignment since they are all derived
//! from `JOINTS`. What remains to check are the values themselves and the
//! name sets that refer back into the joint order.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::joints::{joint, JointSpec};

const QUAT_NORM_TOLERANCE: f32 = 1e-4;

/// Read-only view of every table, handed out once it has been validated.
#[derive(Debug, Serialize)]
pub struct RobotTable {
    pub joints: &'static [JointSpec],
    pub default_qpos: &'static [f32],
    pub scene_files: [&'static str; 2],
    pub root_body: &'static str,
    pub feet_sites: &'static [&'static str],
    pub feet_all_sites: &'static [&'static str],
    pub hand_sites: &'static [&'static str],
    pub feet_geoms: &'static [&'static str],
    pub sensors: &'static [&'static str],
    pub upper_body_links: &'static [&'static str],
    pub lower_body_links: &'static [&'static str],
    pub upper_body_joints: &'static [&'static str],
    pub feet_links: &'static [&'static str],
    pub shoulder_links: &'static [&'static str],
    pub lafan1_datasets: &'static [&'static str],
}

impl RobotTable {
    fn new() -> Self {
        Self {
            joints: &JOINT_TABLE,
            default_qpos: &DEFAULT_QPOS,
            scene_files: [FEET_ONLY_FLAT_TERRAIN_XML, FEET_ONLY_ROUGH_TERRAIN_XML],
            root_body: ROOT_BODY,
            feet_sites: &FEET_SITES,
            feet_all_sites: &FEET_ALL_SITES,
            hand_sites: &HAND_SITES,
            feet_geoms: &FEET_GEOMS,
            sensors: &SENSORS,
            upper_body_links: &UPPER_BODY_LINKS,
            lower_body_links: &LOWER_BODY_LINKS,
            upper_body_joints: &UPPER_BODY_JOINTS,
            feet_links: &FEET_LINKS,
            shoulder_links: &SHOULDER_LINKS,
            lafan1_datasets: &LAFAN1_DATASETS,
        }
    }
}

static TABLE: LazyLock<Result<RobotTable>> = LazyLock::new(|| {
    validate()?;
    info!(
        "Taks_T1 table validated: {} joints, {} LAFAN1 clips",
        NUM_JOINT,
        LAFAN1_DATASETS.len()
    );
    Ok(RobotTable::new())
});

/// The validated table, or the first integrity error found.
pub fn try_table() -> Result<&'static RobotTable> {
    TABLE.as_ref().map_err(Clone::clone)
}

/// The validated table. A table that fails validation is unusable, so this
/// panics with the integrity error.
pub fn table() -> &'static RobotTable {
    match try_table() {
        Ok(table) => table,
        Err(e) => {
            error!("Taks_T1 table failed validation: {}", e);
            panic!("Taks_T1 table failed validation: {e}");
        }
    }
}

pub fn validate() -> Result<()> {
    validate_joints(&JOINTS)?;
    validate_root_pose(&DEFAULT_ROOT_QUAT)?;

    check_unique("ACTION_JOINT_NAMES", &ACTION_JOINT_NAMES)?;
    check_unique("OBS_JOINT_NAMES", &OBS_JOINT_NAMES)?;
    check_unique("FEET_SITES", &FEET_SITES)?;
    check_unique("FEET_ALL_SITES", &FEET_ALL_SITES)?;
    check_unique("HAND_SITES", &HAND_SITES)?;
    check_unique("FEET_GEOMS", &FEET_GEOMS)?;
    check_unique("SENSORS", &SENSORS)?;
    check_unique("UPPER_BODY_LINKS", &UPPER_BODY_LINKS)?;
    check_unique("LOWER_BODY_LINKS", &LOWER_BODY_LINKS)?;
    check_unique("UPPER_BODY_JOINTS", &UPPER_BODY_JOINTS)?;
    check_unique("FEET_LINKS", &FEET_LINKS)?;
    check_unique("SHOULDER_LINKS", &SHOULDER_LINKS)?;
    check_unique("LAFAN1_DATASETS", &LAFAN1_DATASETS)?;

    check_upper_body_joints(&UPPER_BODY_JOINTS)?;

    debug!("All Taks_T1 integrity checks passed");
    Ok(())
}

pub(crate) fn validate_joints(joints: &[JointSpec]) -> Result<()> {
    for joint in joints {
        let (min, max) = joint.range;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::InvalidRange {
                joint: joint.name.to_string(),
                min,
                max,
            });
        }

        for (field, value) in [
            ("velocity limit", joint.max_velocity),
            ("torque limit", joint.max_torque),
            ("kp", joint.kp),
            ("kd", joint.kd),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeLimit {
                    joint: joint.name.to_string(),
                    field,
                    value,
                });
            }
        }

        if !joint.contains(joint.default_position) {
            return Err(ConfigError::DefaultOutOfRange {
                joint: joint.name.to_string(),
                value: joint.default_position,
                min,
                max,
            });
        }
    }
    Ok(())
}

pub(crate) fn validate_root_pose(quat: &[f32; 4]) -> Result<()> {
    let norm = quat.iter().map(|q| q * q).sum::<f32>().sqrt();
    if (norm - 1.0).abs() > QUAT_NORM_TOLERANCE {
        return Err(ConfigError::InvalidQuaternion(norm));
    }
    Ok(())
}

pub(crate) fn check_unique(set: &'static str, names: &[&str]) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(*name) {
            return Err(ConfigError::DuplicateName {
                set,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn check_upper_body_joints(names: &[&str]) -> Result<()> {
    for name in names {
        let spec = joint(name).map_err(|_| ConfigError::NotInJointOrder {
            set: "UPPER_BODY_JOINTS",
            name: name.to_string(),
        })?;
        if !spec.group.is_upper_body() {
            return Err(ConfigError::NotInJointOrder {
                set: "UPPER_BODY_JOINTS",
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
