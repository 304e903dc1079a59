use std::collections::HashSet;

use taks_t1::constants::*;
use taks_t1::{resolve_scene_path, table, validate, ConfigError, SceneConfig, Task};

#[test]
fn per_joint_arrays_have_joint_length() {
    assert_eq!(ACTION_JOINT_NAMES.len(), NUM_JOINT);
    assert_eq!(OBS_JOINT_NAMES.len(), NUM_JOINT);
    assert_eq!(RESTRICTED_JOINT_RANGE.len(), NUM_JOINT);
    assert_eq!(DOF_VEL_LIMITS.len(), NUM_JOINT);
    assert_eq!(TORQUE_LIMIT.len(), NUM_JOINT);
    assert_eq!(KPS.len(), NUM_JOINT);
    assert_eq!(KDS.len(), NUM_JOINT);
    assert_eq!(DEFAULT_QPOS[7..].len(), NUM_JOINT);
    assert_eq!(NUM_JOINT, 32);
}

#[test]
fn default_pose_has_root_and_joints() {
    assert_eq!(DEFAULT_QPOS.len(), 7 + 32);
    assert_eq!(QPOS_DIM, 39);
}

#[test]
fn ranges_are_ordered() {
    for (name, (min, max)) in ACTION_JOINT_NAMES.iter().zip(RESTRICTED_JOINT_RANGE) {
        assert!(min <= max, "{name}: {min} > {max}");
    }
}

#[test]
fn limits_and_gains_are_non_negative() {
    for values in [DOF_VEL_LIMITS, TORQUE_LIMIT, KPS, KDS] {
        assert!(values.iter().all(|v| *v >= 0.0));
    }
}

#[test]
fn action_and_observation_orders_agree() {
    assert_eq!(ACTION_JOINT_NAMES, OBS_JOINT_NAMES);
    assert_eq!(ACTION_JOINT_NAMES[12], "waist_yaw_joint");
}

#[test]
fn scene_paths_are_distinct_xml_files() {
    let flat = resolve_scene_path("flat_terrain").unwrap();
    let rough = resolve_scene_path("rough_terrain").unwrap();
    assert_ne!(flat, rough);
    for path in [&flat, &rough] {
        assert!(!path.as_os_str().is_empty());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xml"));
    }
    assert!(flat.ends_with("scene_mjx_feetonly_flat_terrain.xml"));
    assert!(rough.ends_with("scene_mjx_feetonly_rough_terrain.xml"));
}

#[test]
fn unknown_task_is_reported_by_name() {
    assert_eq!(
        resolve_scene_path("unknown"),
        Err(ConfigError::UnknownTask("unknown".to_string()))
    );
    assert!(matches!(
        resolve_scene_path(""),
        Err(ConfigError::UnknownTask(_))
    ));
}

#[test]
fn resolve_existing_checks_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let scenes = SceneConfig::with_data_root(dir.path());

    assert!(matches!(
        scenes.resolve_existing("flat_terrain"),
        Err(ConfigError::MissingSceneFile(_))
    ));

    let flat = scenes.task_to_xml(Task::FlatTerrain);
    std::fs::write(&flat, "<mujoco/>").unwrap();
    assert_eq!(scenes.resolve_existing("flat_terrain").unwrap(), flat);
    assert!(scenes.resolve_existing("rough_terrain").is_err());
}

#[test]
fn dataset_catalog_is_unique_and_complete() {
    let unique: HashSet<&str> = LAFAN1_DATASETS.iter().copied().collect();
    assert_eq!(unique.len(), LAFAN1_DATASETS.len());
    assert_eq!(LAFAN1_DATASETS.len(), 37);
}

#[test]
fn name_sets_reference_the_joint_order() {
    for name in UPPER_BODY_JOINTS {
        assert!(ACTION_JOINT_NAMES.contains(&name), "{name}");
    }
    for site in FEET_SITES {
        assert!(FEET_ALL_SITES.contains(&site));
    }
    assert!(LOWER_BODY_LINKS.contains(&ROOT_BODY));
    assert_eq!(UPPER_BODY_LINKS.len() + LOWER_BODY_LINKS.len(), 33);
}

#[test]
fn shipped_table_validates() {
    assert_eq!(validate(), Ok(()));
    let table = table();
    assert_eq!(table.joints.len(), NUM_JOINT);
    assert_eq!(table.default_qpos.len(), QPOS_DIM);
    assert_eq!(table.lafan1_datasets.len(), LAFAN1_DATASETS.len());
}
