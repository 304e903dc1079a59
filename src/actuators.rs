use std::collections::{HashMap, HashSet};

use ndarray::{Array1, ArrayView1};
use serde::Serialize;
use tracing::{debug, trace};

use crate::constants::{JOINTS, NUM_JOINT};
use crate::error::{ConfigError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActuatorCommand {
    /// Index into the joint order.
    pub joint: usize,
    pub position: Option<f32>,
    pub velocity: Option<f32>,
    pub torque: Option<f32>,
}

impl ActuatorCommand {
    pub fn position(joint: usize, position: f32) -> Self {
        Self {
            joint,
            position: Some(position),
            velocity: None,
            torque: None,
        }
    }
}

/// PD and limit settings for one joint's position controller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigureRequest {
    pub joint: &'static str,
    pub kp: f32,
    pub kd: f32,
    pub max_torque: f32,
    pub max_velocity: f32,
    pub torque_enabled: bool,
}

/// One request per joint, in joint order. `torque_scale` scales every torque
/// limit, e.g. 0.5 while bringing up a new robot.
pub fn configure_requests(
    torque_enabled: bool,
    torque_scale: f32,
) -> Result<Vec<ConfigureRequest>> {
    if !torque_scale.is_finite() || torque_scale < 0.0 {
        return Err(ConfigError::InvalidTorqueScale(torque_scale));
    }
    Ok(JOINTS
        .iter()
        .map(|joint| ConfigureRequest {
            joint: joint.name,
            kp: joint.kp,
            kd: joint.kd,
            max_torque: joint.max_torque * torque_scale,
            max_velocity: joint.max_velocity,
            torque_enabled,
        })
        .collect())
}

/// Position commands that put every joint at its default pose angle.
pub fn home_commands() -> Vec<ActuatorCommand> {
    JOINTS
        .iter()
        .enumerate()
        .map(|(idx, joint)| ActuatorCommand::position(idx, joint.default_position))
        .collect()
}

pub fn default_joint_positions() -> Array1<f32> {
    JOINTS.iter().map(|joint| joint.default_position).collect()
}

fn commands_by_joint<'a>(
    side: &str,
    commands: &'a [ActuatorCommand],
) -> Result<HashMap<usize, &'a ActuatorCommand>> {
    let mut by_joint = HashMap::with_capacity(commands.len());
    for command in commands {
        if by_joint.insert(command.joint, command).is_some() {
            return Err(ConfigError::CommandMismatch(format!(
                "joint {} appears twice in {} commands",
                command.joint, side
            )));
        }
    }
    Ok(by_joint)
}

fn lerp(start: Option<f32>, end: Option<f32>, t: f32) -> Option<f32> {
    match (start, end) {
        (Some(start), Some(end)) => Some(start * (1.0 - t) + end * t),
        (Some(start), None) => Some(start),
        (None, Some(end)) => Some(end),
        (None, None) => None,
    }
}

/// Plans a slowed move from `start` to `end` as `num_steps` batches of
/// commands. The last batch equals `end`. Each joint may appear at most once
/// in `start` and once in `end`.
pub fn interpolate_commands(
    start: &[ActuatorCommand],
    end: &[ActuatorCommand],
    num_steps: usize,
) -> Result<Vec<Vec<ActuatorCommand>>> {
    if num_steps == 0 {
        return Err(ConfigError::ZeroSteps);
    }

    let start_map = commands_by_joint("start", start)?;
    let end_map = commands_by_joint("end", end)?;

    if start_map.keys().collect::<HashSet<_>>() != end_map.keys().collect::<HashSet<_>>() {
        return Err(ConfigError::CommandMismatch(format!(
            "{} start joints vs {} end joints",
            start_map.len(),
            end_map.len()
        )));
    }

    let mut joints: Vec<usize> = start_map.keys().copied().collect();
    joints.sort_unstable();

    let steps = (0..num_steps)
        .map(|step| {
            let t = if num_steps == 1 {
                1.0
            } else {
                step as f32 / (num_steps - 1) as f32
            };
            joints
                .iter()
                .map(|joint| {
                    let (s, e) = (start_map[joint], end_map[joint]);
                    ActuatorCommand {
                        joint: *joint,
                        position: lerp(s.position, e.position, t),
                        velocity: lerp(s.velocity, e.velocity, t),
                        torque: lerp(s.torque, e.torque, t),
                    }
                })
                .collect()
        })
        .collect();
    debug!("Planned {} interpolation steps over {} joints", num_steps, joints.len());
    Ok(steps)
}

fn check_len(values: &ArrayView1<f32>) -> Result<()> {
    if values.len() != NUM_JOINT {
        return Err(ConfigError::ShapeMismatch {
            expected: NUM_JOINT,
            actual: values.len(),
        });
    }
    Ok(())
}

/// `kp * (target - q) - kd * qd` per joint, clamped to the torque limit.
pub fn pd_torques(
    targets: ArrayView1<f32>,
    positions: ArrayView1<f32>,
    velocities: ArrayView1<f32>,
) -> Result<Array1<f32>> {
    check_len(&targets)?;
    check_len(&positions)?;
    check_len(&velocities)?;

    let torques: Array1<f32> = JOINTS
        .iter()
        .enumerate()
        .map(|(i, joint)| {
            let torque = joint.kp * (targets[i] - positions[i]) - joint.kd * velocities[i];
            joint.clamp_torque(torque)
        })
        .collect();
    trace!("Computed PD torques {:?}", torques);
    Ok(torques)
}

/// Clamps position targets into each joint's restricted range.
pub fn clamp_action(action: ArrayView1<f32>) -> Result<Array1<f32>> {
    check_len(&action)?;
    Ok(JOINTS
        .iter()
        .zip(action.iter())
        .map(|(joint, target)| joint.clamp_position(*target))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_QPOS, TORQUE_LIMIT};

    #[test]
    fn configure_requests_scale_torque() {
        let requests = configure_requests(true, 0.5).unwrap();
        assert_eq!(requests.len(), NUM_JOINT);
        assert_eq!(requests[0].joint, "left_hip_pitch_joint");
        assert_eq!(requests[0].max_torque, 60.0);
        assert_eq!(requests[3].kp, 200.0);
        assert!(requests.iter().all(|r| r.torque_enabled));
    }

    #[test]
    fn bad_torque_scale_is_an_error() {
        assert!(matches!(
            configure_requests(true, f32::NAN),
            Err(ConfigError::InvalidTorqueScale(scale)) if scale.is_nan()
        ));
        assert_eq!(
            configure_requests(false, -1.0),
            Err(ConfigError::InvalidTorqueScale(-1.0))
        );
        assert!(configure_requests(false, f32::INFINITY).is_err());
        assert!(configure_requests(false, 0.0).is_ok());
    }

    #[test]
    fn home_commands_follow_default_pose() {
        let commands = home_commands();
        for (idx, command) in commands.iter().enumerate() {
            assert_eq!(command.joint, idx);
            assert_eq!(command.position, Some(DEFAULT_QPOS[7 + idx]));
        }
        assert_eq!(default_joint_positions().as_slice().unwrap(), &DEFAULT_QPOS[7..]);
    }

    #[test]
    fn interpolation_ends_at_target() {
        let start = vec![ActuatorCommand::position(3, 0.0)];
        let end = vec![ActuatorCommand::position(3, 1.0)];
        let steps = interpolate_commands(&start, &end, 5).unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0][0].position, Some(0.0));
        assert_eq!(steps[2][0].position, Some(0.5));
        assert_eq!(steps[4][0].position, Some(1.0));
        assert_eq!(steps[4][0].velocity, None);
    }

    #[test]
    fn single_step_jumps_to_target() {
        let start = vec![ActuatorCommand::position(0, -1.0)];
        let end = vec![ActuatorCommand::position(0, 1.0)];
        let steps = interpolate_commands(&start, &end, 1).unwrap();
        assert_eq!(steps[0][0].position, Some(1.0));
    }

    #[test]
    fn zero_steps_is_an_error() {
        let start = vec![ActuatorCommand::position(0, 0.0)];
        let end = vec![ActuatorCommand::position(0, 1.0)];
        assert_eq!(
            interpolate_commands(&start, &end, 0),
            Err(ConfigError::ZeroSteps)
        );
    }

    #[test]
    fn duplicate_joints_are_rejected() {
        let start = vec![
            ActuatorCommand::position(0, 0.0),
            ActuatorCommand::position(0, 0.5),
        ];
        let end = vec![ActuatorCommand::position(0, 1.0)];
        assert!(matches!(
            interpolate_commands(&start, &end, 3),
            Err(ConfigError::CommandMismatch(_))
        ));
        assert!(matches!(
            interpolate_commands(&end, &start, 3),
            Err(ConfigError::CommandMismatch(_))
        ));
    }

    #[test]
    fn interpolation_requires_matching_joints() {
        let start = vec![ActuatorCommand::position(0, 0.0)];
        let end = vec![ActuatorCommand::position(1, 0.0)];
        assert!(matches!(
            interpolate_commands(&start, &end, 3),
            Err(ConfigError::CommandMismatch(_))
        ));
    }

    #[test]
    fn pd_torques_saturate_at_limits() {
        let targets = Array1::from_elem(NUM_JOINT, 10.0);
        let positions = Array1::zeros(NUM_JOINT);
        let velocities = Array1::zeros(NUM_JOINT);
        let torques = pd_torques(targets.view(), positions.view(), velocities.view()).unwrap();
        assert_eq!(torques.as_slice().unwrap(), &TORQUE_LIMIT[..]);
    }

    #[test]
    fn pd_torques_damp_velocity() {
        let zeros = Array1::zeros(NUM_JOINT);
        let velocities = Array1::from_elem(NUM_JOINT, 1.0);
        let torques = pd_torques(zeros.view(), zeros.view(), velocities.view()).unwrap();
        // Left knee: kd = 4.
        assert_eq!(torques[3], -4.0);
    }

    #[test]
    fn wrong_length_is_a_shape_error() {
        let short = Array1::<f32>::zeros(12);
        assert_eq!(
            clamp_action(short.view()),
            Err(ConfigError::ShapeMismatch {
                expected: NUM_JOINT,
                actual: 12
            })
        );
    }

    #[test]
    fn clamp_action_keeps_targets_in_range() {
        let action = Array1::from_elem(NUM_JOINT, 5.0);
        let clamped = clamp_action(action.view()).unwrap();
        for (joint, value) in JOINTS.iter().zip(clamped.iter()) {
            assert_eq!(*value, joint.max());
        }
    }
}
