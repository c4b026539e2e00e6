//! Sidebar config serialization
//!
//! Output uses the same shape the parser reads: bare strings for documents,
//! `{ type = "category", label, items }` tables for categories.

use crate::parser::Format;
use crate::types::SidebarConfig;
use crate::Result;
use std::path::Path;

/// Serialize config to a TOML string
pub fn to_toml_string(config: &SidebarConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Serialize config to a pretty-printed JSON string
pub fn to_json_string(config: &SidebarConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Serialize config in the given format
pub fn to_string(config: &SidebarConfig, format: Format) -> Result<String> {
    match format {
        Format::Toml => to_toml_string(config),
        Format::Json => to_json_string(config),
    }
}

/// Save config to a file, format chosen by extension
pub fn save_to_file(config: &SidebarConfig, path: &Path) -> Result<()> {
    let format = Format::from_path(path)?;
    let content = to_string(config, format)?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    std::fs::write(path, content)?;
    tracing::info!("Wrote {} sidebar(s) to {}", config.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn test_toml_output_shape() {
        let toml_str = to_toml_string(&defaults::build()).unwrap();
        assert!(toml_str.contains("tutorialSidebar"));
        assert!(toml_str.contains("type = \"category\""));
        assert!(toml_str.contains("\"overview/quick-start\""));
    }

    #[test]
    fn test_json_output_shape() {
        let json = to_json_string(&defaults::build()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tutorialSidebar"][0]["label"], "Getting Started");
        assert_eq!(value["tutorialSidebar"][0]["items"][2], "overview/quick-start");
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/sidebars.json");
        save_to_file(&defaults::build(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebars.yaml");
        assert!(save_to_file(&defaults::build(), &path).is_err());
        assert!(!path.exists());
    }
}
