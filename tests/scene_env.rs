//! The data root override is process-wide, so everything touching it lives in
//! one test in its own binary.

use std::env;
use std::fs;

use taks_t1::scene::DATA_ROOT_ENV;
use taks_t1::{resolve_scene_path, task_to_xml, SceneConfig, Task};

#[test]
fn data_root_env_overrides_scene_paths() {
    let dir = tempfile::tempdir().unwrap();
    env::set_var(DATA_ROOT_ENV, dir.path());

    let flat = resolve_scene_path("flat_terrain").unwrap();
    assert!(flat.starts_with(dir.path()));
    assert!(flat.ends_with("scene_mjx_feetonly_flat_terrain.xml"));
    assert!(task_to_xml(Task::RoughTerrain).starts_with(dir.path()));
    assert_eq!(SceneConfig::from_env().data_root(), dir.path());

    // Not a directory: warned about, still used.
    let file = dir.path().join("not_a_dir");
    fs::write(&file, b"").unwrap();
    env::set_var(DATA_ROOT_ENV, &file);
    assert_eq!(SceneConfig::from_env().data_root(), file.as_path());
    assert!(resolve_scene_path("rough_terrain")
        .unwrap()
        .starts_with(&file));

    env::remove_var(DATA_ROOT_ENV);
    assert_ne!(SceneConfig::from_env().data_root(), file.as_path());
}
