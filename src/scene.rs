use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::constants::{FEET_ONLY_FLAT_TERRAIN_XML, FEET_ONLY_ROUGH_TERRAIN_XML};
use crate::error::{ConfigError, Result};

pub const DATA_ROOT_ENV: &str = "TAKS_T1_DATA_ROOT";

/// Terrain scenario for the tracking task. Each one selects a scene file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    FlatTerrain,
    RoughTerrain,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::FlatTerrain, Task::RoughTerrain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Task::FlatTerrain => "flat_terrain",
            Task::RoughTerrain => "rough_terrain",
        }
    }

    pub fn scene_file(&self) -> &'static str {
        match self {
            Task::FlatTerrain => FEET_ONLY_FLAT_TERRAIN_XML,
            Task::RoughTerrain => FEET_ONLY_ROUGH_TERRAIN_XML,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flat_terrain" => Ok(Task::FlatTerrain),
            "rough_terrain" => Ok(Task::RoughTerrain),
            other => Err(ConfigError::UnknownTask(other.to_string())),
        }
    }
}

/// Where the robot description files live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    data_root: PathBuf,
}

impl SceneConfig {
    /// Uses `TAKS_T1_DATA_ROOT` when set, otherwise `data/xmls/Taks_T1`
    /// under the crate directory.
    pub fn from_env() -> Self {
        match env::var_os(DATA_ROOT_ENV) {
            Some(root) => {
                let data_root = PathBuf::from(root);
                if !data_root.is_dir() {
                    warn!(
                        "{} points at {}, which is not a directory",
                        DATA_ROOT_ENV,
                        data_root.display()
                    );
                }
                Self { data_root }
            }
            None => Self::default(),
        }
    }

    pub fn with_data_root(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    pub fn task_to_xml(&self, task: Task) -> PathBuf {
        self.data_root.join(task.scene_file())
    }

    pub fn resolve(&self, task_name: &str) -> Result<PathBuf> {
        let task = task_name.parse::<Task>()?;
        let path = self.task_to_xml(task);
        debug!("Resolved task {} to {}", task, path.display());
        Ok(path)
    }

    /// Like [`SceneConfig::resolve`], but also requires the file to exist.
    /// The file is never opened.
    pub fn resolve_existing(&self, task_name: &str) -> Result<PathBuf> {
        let path = self.resolve(task_name)?;
        if !path.is_file() {
            return Err(ConfigError::MissingSceneFile(path));
        }
        Ok(path)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            data_root: Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("data")
                .join("xmls")
                .join("Taks_T1"),
        }
    }
}

pub fn task_to_xml(task: Task) -> PathBuf {
    SceneConfig::from_env().task_to_xml(task)
}

/// Maps `"flat_terrain"` or `"rough_terrain"` to its scene file under the
/// configured data root.
pub fn resolve_scene_path(task_name: &str) -> Result<PathBuf> {
    SceneConfig::from_env().resolve(task_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_round_trip_through_names() {
        for task in Task::ALL {
            assert_eq!(task.as_str().parse::<Task>(), Ok(task));
        }
    }

    #[test]
    fn default_root_ends_in_robot_dir() {
        let config = SceneConfig::default();
        assert!(config.data_root().ends_with("data/xmls/Taks_T1"));
    }

    #[test]
    fn explicit_root_is_used() {
        let config = SceneConfig::with_data_root("/srv/robots");
        assert_eq!(
            config.resolve("rough_terrain").unwrap(),
            PathBuf::from("/srv/robots/scene_mjx_feetonly_rough_terrain.xml")
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(
            "Flat_Terrain".parse::<Task>(),
            Err(ConfigError::UnknownTask("Flat_Terrain".to_string()))
        );
    }
}
