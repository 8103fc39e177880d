use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CampopsConfig {
    pub system: SystemSection,
    pub paths: PathsSection,
}

impl CampopsConfig {
    pub fn resolve_path<P: AsRef<Path>>(&self, candidate: P) -> PathBuf {
        let path = candidate.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.paths.base_dir).join(path)
        }
    }

    /// Default location of the trips database inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.resolve_path(&self.paths.data_dir).join("campops.sqlite")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemSection {
    pub app_name: String,
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsSection {
    pub base_dir: String,
    pub data_dir: String,
}

pub fn load_campops_config<P: AsRef<Path>>(path: P) -> Result<CampopsConfig> {
    load_toml(path)
}

fn load_toml<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        source,
        path: path.to_path_buf(),
    })
}
