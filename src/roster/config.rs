use crate::error::{Result, RosterError};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "roster.json";
const DEFAULT_STUDENTS_FILE: &str = "students.csv";
const DEFAULT_COURSES_FILE: &str = "courses.csv";

/// File locations for roster, stored in roster.json
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Student store
    #[serde(default = "default_students_file")]
    pub students_file: PathBuf,

    /// Course catalog
    #[serde(default = "default_courses_file")]
    pub courses_file: PathBuf,
}

fn default_students_file() -> PathBuf {
    PathBuf::from(DEFAULT_STUDENTS_FILE)
}

fn default_courses_file() -> PathBuf {
    PathBuf::from(DEFAULT_COURSES_FILE)
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
            courses_file: default_courses_file(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig = serde_json::from_str(&content).map_err(|e| {
            RosterError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `work_dir`, falling back to the user config directory.
    pub fn discover<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref();
        if work_dir.join(CONFIG_FILENAME).exists() {
            return Self::load(work_dir);
        }
        match user_config_dir() {
            Some(dir) => Self::load(dir),
            None => Ok(Self::default()),
        }
    }

    /// Student store path, relative paths resolved against `base`.
    pub fn students_path(&self, base: &Path) -> PathBuf {
        base.join(&self.students_file)
    }

    /// Course catalog path, relative paths resolved against `base`.
    pub fn courses_path(&self, base: &Path) -> PathBuf {
        base.join(&self.courses_file)
    }
}

fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "roster", "roster").map(|d| d.config_dir().to_path_buf())
}
