// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for Tumble tools (platform config dir or
//! a caller-chosen directory).

use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tumble_app_core::config::{ConfigError, ConfigStore};

/// Store configs as `<key>.json` files under one directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/Tumble`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "Tumble")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Self::in_dir(proj.config_dir())
    }

    /// Create a store rooted at `dir`, creating it if needed.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base = dir.into();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}
