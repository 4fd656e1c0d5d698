use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Config;

const LOCAL_CONFIG_NAME: &str = ".style-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for style-guard.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "style-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.style-guard.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()` if no config is found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse(&self, path: &Path) -> Result<Config> {
        let content = self.fs.read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let local = self.fs.current_dir()?.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.parse(&local);
        }

        if let Some(user_dir) = self.fs.config_dir() {
            let user = user_dir.join(USER_CONFIG_NAME);
            if self.fs.exists(&user) {
                return self.parse(&user);
            }
        }

        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        self.parse(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
