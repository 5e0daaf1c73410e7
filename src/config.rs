//! Traversal settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/simple-tree/simple-tree.toml`
//! 3. Explicit config file passed by the caller
//! 4. Environment variables: `SIMPLE_TREE_*` prefix
//!
//! Settings only affect the guarded operations in [`crate::guard`]; the
//! plain [`crate::SimpleTree`] operations never read them.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::TreeResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeSettings {
    /// Deepest level a guarded traversal may descend to, counted in edges
    /// from the node it started at. `None` means unbounded.
    pub max_depth: Option<usize>,
}

/// Get the XDG config directory for simple-tree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "simple-tree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("simple-tree.toml"))
}

impl TreeSettings {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Load settings from defaults, the global config file, an optional
    /// explicit file and `SIMPLE_TREE_*` environment variables.
    ///
    /// Missing files are skipped; a file that exists but does not parse is
    /// an error.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> TreeResult<Self> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("Using global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("SIMPLE_TREE").try_parsing(true));

        let settings: Self = builder.build()?.try_deserialize()?;
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Parse settings from an in-memory TOML document, without consulting
    /// files or the environment.
    pub fn from_toml_str(content: &str) -> TreeResult<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(TreeSettings::default().max_depth, None);
    }

    #[test]
    fn test_global_config_path_ends_with_file_name() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("simple-tree.toml"));
        }
    }
}
