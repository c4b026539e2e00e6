//! Sidebar config loading

use crate::types::SidebarConfig;
use crate::{defaults, parser, Result};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no path is given
pub const DEFAULT_FILE: &str = "sidebars.toml";

/// Default sidebar file path relative to the current directory
pub fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

/// Load sidebar config from `path`, or from `./sidebars.toml`, or fall back
/// to the built-in tree.
///
/// An explicitly given path must load; errors from it propagate.
pub fn load_or_default(path: Option<&Path>) -> Result<SidebarConfig> {
    match path {
        Some(path) => {
            tracing::info!("Loading sidebars from {}", path.display());
            parser::load_from_file(path)
        }
        None => load_from_dir_or_builtin(&default_file()),
    }
}

fn load_from_dir_or_builtin(candidate: &Path) -> Result<SidebarConfig> {
    if candidate.is_file() {
        tracing::info!("Loading sidebars from {}", candidate.display());
        parser::load_from_file(candidate)
    } else {
        tracing::debug!("No {} found, using built-in sidebars", candidate.display());
        Ok(defaults::build())
    }
}

impl SidebarConfig {
    /// The built-in site navigation
    pub fn builtin() -> Self {
        defaults::build()
    }

    /// Load from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        parser::load_from_file(path)
    }

    /// Save to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        crate::writer::save_to_file(self, path)
    }
}
