use crate::joints::JointGroup::{LeftArm, LeftLeg, Neck, RightArm, RightLeg, Waist};
use crate::joints::JointSpec;

// 12 leg + 3 waist + 14 arm + 3 neck.
pub const NUM_JOINT: usize = 32;

// Root position (3) + root quaternion (4) + joint angles.
pub const QPOS_DIM: usize = 7 + NUM_JOINT;

pub const FEET_ONLY_FLAT_TERRAIN_XML: &str = "scene_mjx_feetonly_flat_terrain.xml";
pub const FEET_ONLY_ROUGH_TERRAIN_XML: &str = "scene_mjx_feetonly_rough_terrain.xml";

// Tracking-task joint table, in action/observation order.
// Columns: name, group, range, max velocity, torque limit, kp, kd, default.
#[rustfmt::skip]
pub const JOINTS: [JointSpec; NUM_JOINT] = [
    JointSpec::new("left_hip_pitch_joint", LeftLeg, (-2.5307, 2.8798), 32.0, 120.0, 100.0, 2.0, -0.1),
    JointSpec::new("left_hip_roll_joint", LeftLeg, (-0.5236, 2.9671), 32.0, 97.0, 100.0, 2.0, 0.0),
    JointSpec::new("left_hip_yaw_joint", LeftLeg, (-2.7576, 2.7576), 32.0, 97.0, 100.0, 2.0, 0.0),
    JointSpec::new("left_knee_joint", LeftLeg, (-0.087267, 2.8798), 20.0, 120.0, 200.0, 4.0, 0.3),
    JointSpec::new("left_ankle_pitch_joint", LeftLeg, (-0.87267, 0.5236), 37.0, 27.0, 80.0, 2.0, -0.2),
    JointSpec::new("left_ankle_roll_joint", LeftLeg, (-0.2618, 0.2618), 37.0, 27.0, 20.0, 1.0, 0.0),
    JointSpec::new("right_hip_pitch_joint", RightLeg, (-2.5307, 2.8798), 32.0, 120.0, 100.0, 2.0, -0.1),
    JointSpec::new("right_hip_roll_joint", RightLeg, (-2.9671, 0.5236), 32.0, 97.0, 100.0, 2.0, 0.0),
    JointSpec::new("right_hip_yaw_joint", RightLeg, (-2.7576, 2.7576), 32.0, 97.0, 100.0, 2.0, 0.0),
    JointSpec::new("right_knee_joint", RightLeg, (-0.087267, 2.8798), 20.0, 120.0, 200.0, 4.0, 0.3),
    JointSpec::new("right_ankle_pitch_joint", RightLeg, (-0.87267, 0.5236), 37.0, 27.0, 80.0, 2.0, -0.2),
    JointSpec::new("right_ankle_roll_joint", RightLeg, (-0.2618, 0.2618), 37.0, 27.0, 20.0, 1.0, 0.0),
    // Waist and above are only actuated by the tracking policy.
    JointSpec::new("waist_yaw_joint", Waist, (-2.618, 2.618), 32.0, 97.0, 300.0, 10.0, 0.0),
    JointSpec::new("waist_roll_joint", Waist, (-0.52, 0.52), 37.0, 97.0, 300.0, 10.0, 0.0),
    JointSpec::new("waist_pitch_joint", Waist, (-0.52, 0.52), 37.0, 97.0, 300.0, 10.0, 0.0),
    JointSpec::new("left_shoulder_pitch_joint", LeftArm, (-3.0, 2.0), 37.0, 27.0, 90.0, 2.0, 0.2),
    JointSpec::new("left_shoulder_roll_joint", LeftArm, (-0.2, 2.2515), 37.0, 27.0, 60.0, 2.0, 0.2),
    JointSpec::new("left_shoulder_yaw_joint", LeftArm, (-2.58, 2.58), 37.0, 27.0, 20.0, 1.0, 0.0),
    JointSpec::new("left_elbow_joint", LeftArm, (-0.7, 1.57), 37.0, 27.0, 60.0, 1.0, 0.5),
    JointSpec::new("left_wrist_roll_joint", LeftArm, (-2.67, 2.67), 37.0, 7.0, 20.0, 1.0, 0.0),
    JointSpec::new("left_wrist_yaw_joint", LeftArm, (-0.9, 0.9), 37.0, 7.0, 20.0, 1.0, 0.0),
    JointSpec::new("left_wrist_pitch_joint", LeftArm, (-0.9, 0.9), 37.0, 7.0, 20.0, 1.0, 0.0),
    JointSpec::new("right_shoulder_pitch_joint", RightArm, (-2.0, 2.0), 37.0, 27.0, 90.0, 2.0, 0.2),
    JointSpec::new("right_shoulder_roll_joint", RightArm, (-2.2515, 0.2), 37.0, 27.0, 60.0, 2.0, -0.2),
    JointSpec::new("right_shoulder_yaw_joint", RightArm, (-2.58, 2.58), 37.0, 27.0, 20.0, 1.0, 0.0),
    JointSpec::new("right_elbow_joint", RightArm, (-0.7, 1.57), 37.0, 27.0, 60.0, 1.0, 0.5),
    JointSpec::new("right_wrist_roll_joint", RightArm, (-2.67, 2.67), 37.0, 7.0, 20.0, 1.0, 0.0),
    JointSpec::new("right_wrist_yaw_joint", RightArm, (-0.9, 0.9), 37.0, 7.0, 20.0, 1.0, 0.0),
    JointSpec::new("right_wrist_pitch_joint", RightArm, (-0.9, 0.9), 37.0, 7.0, 20.0, 1.0, 0.0),
    JointSpec::new("neck_yaw_joint", Neck, (-1.57, 1.57), 20.0, 3.0, 20.0, 1.0, 0.0),
    JointSpec::new("neck_roll_joint", Neck, (-0.873, 0.873), 20.0, 3.0, 20.0, 1.0, 0.0),
    JointSpec::new("neck_pitch_joint", Neck, (-0.873, 0.873), 20.0, 3.0, 20.0, 1.0, 0.0),
];

// A bad table edit fails the build rather than the first lookup.
const _: () = {
    let mut i = 0;
    while i < NUM_JOINT {
        assert!(
            JOINTS[i].limits_violation().is_none(),
            "a JOINTS row fails JointSpec::limits_violation"
        );
        i += 1;
    }
};

// Addressable copy of `JOINTS` for handing out `&'static` records.
pub static JOINT_TABLE: [JointSpec; NUM_JOINT] = JOINTS;

macro_rules! per_joint {
    ($field:ident, $zero:expr) => {{
        let mut out = [$zero; NUM_JOINT];
        let mut i = 0;
        while i < NUM_JOINT {
            out[i] = JOINTS[i].$field;
            i += 1;
        }
        out
    }};
}

// Flat per-joint views, indexed like `JOINTS`.
pub const ACTION_JOINT_NAMES: [&str; NUM_JOINT] = per_joint!(name, "");
pub const OBS_JOINT_NAMES: [&str; NUM_JOINT] = per_joint!(name, "");
pub const RESTRICTED_JOINT_RANGE: [(f32, f32); NUM_JOINT] = per_joint!(range, (0.0, 0.0));
pub const DOF_VEL_LIMITS: [f32; NUM_JOINT] = per_joint!(max_velocity, 0.0);
pub const TORQUE_LIMIT: [f32; NUM_JOINT] = per_joint!(max_torque, 0.0);
pub const KPS: [f32; NUM_JOINT] = per_joint!(kp, 0.0);
pub const KDS: [f32; NUM_JOINT] = per_joint!(kd, 0.0);

pub const DEFAULT_ROOT_POS: [f32; 3] = [0.0, 0.0, 0.793];
// (w, x, y, z)
pub const DEFAULT_ROOT_QUAT: [f32; 4] = [1.0, 0.0, 0.0, 0.0];

pub const DEFAULT_QPOS: [f32; QPOS_DIM] = {
    let mut out = [0.0; QPOS_DIM];
    let mut i = 0;
    while i < 3 {
        out[i] = DEFAULT_ROOT_POS[i];
        i += 1;
    }
    let mut i = 0;
    while i < 4 {
        out[3 + i] = DEFAULT_ROOT_QUAT[i];
        i += 1;
    }
    let mut i = 0;
    while i < NUM_JOINT {
        out[7 + i] = JOINTS[i].default_position;
        i += 1;
    }
    out
};

pub const FEET_SITES: [&str; 2] = ["left_foot", "right_foot"];

pub const FEET_ALL_SITES: [&str; 4] = [
    "left_foot",
    "right_foot",
    "left_foot_top",
    "right_foot_top",
];

pub const HAND_SITES: [&str; 2] = ["left_palm", "right_palm"];

pub const LEFT_FEET_GEOMS: [&str; 1] = ["left_foot"];
pub const RIGHT_FEET_GEOMS: [&str; 1] = ["right_foot"];
pub const FEET_GEOMS: [&str; 2] = [LEFT_FEET_GEOMS[0], RIGHT_FEET_GEOMS[0]];

pub const ROOT_BODY: &str = "torso_link";

pub const GRAVITY_SENSOR: &str = "upvector";
pub const GLOBAL_LINVEL_SENSOR: &str = "global_linvel";
pub const GLOBAL_ANGVEL_SENSOR: &str = "global_angvel";
pub const LOCAL_LINVEL_SENSOR: &str = "local_linvel";
pub const ACCELEROMETER_SENSOR: &str = "accelerometer";
pub const GYRO_SENSOR: &str = "gyro";

pub const SENSORS: [&str; 6] = [
    GRAVITY_SENSOR,
    GLOBAL_LINVEL_SENSOR,
    GLOBAL_ANGVEL_SENSOR,
    LOCAL_LINVEL_SENSOR,
    ACCELEROMETER_SENSOR,
    GYRO_SENSOR,
];

pub const UPPER_BODY_LINKS: [&str; 17] = [
    "left_shoulder_pitch_link",
    "left_shoulder_roll_link",
    "left_shoulder_yaw_link",
    "left_elbow_link",
    "left_wrist_roll_link",
    "left_wrist_yaw_link",
    "left_wrist_pitch_link",
    "right_shoulder_pitch_link",
    "right_shoulder_roll_link",
    "right_shoulder_yaw_link",
    "right_elbow_link",
    "right_wrist_roll_link",
    "right_wrist_yaw_link",
    "right_wrist_pitch_link",
    "neck_yaw_link",
    "neck_roll_link",
    "neck_pitch_link",
];

pub const LOWER_BODY_LINKS: [&str; 16] = [
    "pelvis",
    "left_hip_pitch_link",
    "left_hip_roll_link",
    "left_hip_yaw_link",
    "left_knee_link",
    "left_ankle_pitch_link",
    "left_ankle_roll_link",
    "right_hip_pitch_link",
    "right_hip_roll_link",
    "right_hip_yaw_link",
    "right_knee_link",
    "right_ankle_pitch_link",
    "right_ankle_roll_link",
    "waist_yaw_link",
    "waist_roll_link",
    "torso_link",
];

pub const UPPER_BODY_JOINTS: [&str; 17] = [
    // Left arm
    "left_shoulder_pitch_joint",
    "left_shoulder_roll_joint",
    "left_shoulder_yaw_joint",
    "left_elbow_joint",
    "left_wrist_roll_joint",
    "left_wrist_yaw_joint",
    "left_wrist_pitch_joint",
    // Right arm
    "right_shoulder_pitch_joint",
    "right_shoulder_roll_joint",
    "right_shoulder_yaw_joint",
    "right_elbow_joint",
    "right_wrist_roll_joint",
    "right_wrist_yaw_joint",
    "right_wrist_pitch_joint",
    // Neck
    "neck_yaw_joint",
    "neck_roll_joint",
    "neck_pitch_joint",
];

pub const FEET_LINKS: [&str; 2] = ["left_ankle_roll_link", "right_ankle_roll_link"];

pub const SHOULDER_LINKS: [&str; 2] = ["right_shoulder_pitch_link", "left_shoulder_pitch_link"];

pub const LAFAN1_DATASETS: [&str; 37] = [
    "dance1_subject1",
    "dance1_subject2",
    "dance1_subject3",
    "dance2_subject1",
    "dance2_subject2",
    "dance2_subject3",
    "dance2_subject4",
    "dance2_subject5",
    "fallAndGetUp1_subject1",
    "fallAndGetUp1_subject5",
    "fallAndGetUp2_subject2",
    "fallAndGetUp3_subject1",
    "fight1_subject2",
    "fight1_subject3",
    "fight1_subject5",
    "fightAndSports1_subject1",
    "fightAndSports1_subject4",
    "jumps1_subject1",
    "jumps1_subject2",
    "jumps1_subject5",
    "run1_subject2",
    "run1_subject5",
    "run2_subject1",
    "run2_subject4",
    "sprint1_subject2",
    "sprint1_subject4",
    "walk1_subject1",
    "walk1_subject2",
    "walk1_subject5",
    "walk2_subject1",
    "walk2_subject4",
    "walk3_subject1",
    "walk3_subject2",
    "walk3_subject3",
    "walk3_subject4",
    "walk3_subject5",
    "walk4_subject1",
];
