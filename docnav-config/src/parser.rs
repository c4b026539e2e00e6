//! Sidebar file parsing and validation

use crate::types::{Entry, Sidebar, SidebarConfig};
use crate::{Result, SidebarError};
use std::collections::BTreeMap;
use std::path::Path;

/// Structured text formats a sidebar config can be read from and written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    #[allow(clippy::should_implement_trait)]
    /// Parse format from its name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_str)
            .ok_or_else(|| SidebarError::UnsupportedFormat(path.display().to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Json => "json",
        }
    }
}

/// Raw decoded document: sidebar name -> untyped entries
pub(crate) type RawConfig = BTreeMap<String, Vec<serde_json::Value>>;

/// Parse sidebar config from TOML string
pub fn parse_toml(content: &str) -> Result<SidebarConfig> {
    let raw: RawConfig = toml::from_str(content).map_err(SidebarError::TomlParse)?;
    from_raw(raw)
}

/// Parse sidebar config from JSON string
pub fn parse_json(content: &str) -> Result<SidebarConfig> {
    let raw: RawConfig = serde_json::from_str(content).map_err(SidebarError::Json)?;
    from_raw(raw)
}

/// Parse sidebar config in the given format
pub fn parse(content: &str, format: Format) -> Result<SidebarConfig> {
    match format {
        Format::Toml => parse_toml(content),
        Format::Json => parse_json(content),
    }
}

/// Load sidebar config from a file, format chosen by extension
pub fn load_from_file(path: &Path) -> Result<SidebarConfig> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let config = parse(&content, format)?;
    tracing::debug!(
        "Parsed {} sidebar(s) from {} as {}",
        config.len(),
        path.display(),
        format.name()
    );
    Ok(config)
}

/// Convert the raw document into a typed config, checking structure
pub(crate) fn from_raw(raw: RawConfig) -> Result<SidebarConfig> {
    if raw.is_empty() {
        return Err(SidebarError::MalformedEntry(
            "config defines no sidebars".to_string(),
        ));
    }

    let mut config = SidebarConfig::new();
    for (name, values) in raw {
        let sidebar = sidebar_from_raw(&name, &values)?;
        config.insert(name, sidebar);
    }

    Ok(config)
}

/// Convert one sidebar's untyped entries, naming positions after `name`
pub(crate) fn sidebar_from_raw(name: &str, values: &[serde_json::Value]) -> Result<Sidebar> {
    if values.is_empty() {
        return Err(SidebarError::MalformedEntry(format!(
            "{}: sidebar has no entries",
            name
        )));
    }

    let entries = values
        .iter()
        .enumerate()
        .map(|(i, value)| Entry::from_value(value, &format!("{}[{}]", name, i)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Sidebar::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("sidebars.toml")).unwrap(), Format::Toml);
        assert_eq!(Format::from_path(Path::new("a/b.JSON")).unwrap(), Format::Json);
        assert!(matches!(
            Format::from_path(Path::new("sidebars.ts")),
            Err(SidebarError::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(Path::new("sidebars")).is_err());
    }

    #[test]
    fn test_parse_toml_mixed_entries() {
        let content = r#"
docs = [
    "intro",
    { type = "doc", id = "setup" },
    { type = "category", label = "Guides", items = ["guides/one", "guides/two"] },
]
"#;
        let config = parse_toml(content).unwrap();
        let sidebar = config.get("docs").unwrap();
        assert_eq!(
            sidebar.entries(),
            &[
                Entry::doc("intro"),
                Entry::doc("setup"),
                Entry::category("Guides", vec![Entry::doc("guides/one"), Entry::doc("guides/two")]),
            ]
        );
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{"api": [{"type": "category", "label": "Reference", "items": []}]}"#;
        let config = parse_json(content).unwrap();
        assert_eq!(
            config.get("api").unwrap().entries(),
            &[Entry::category("Reference", vec![])]
        );
    }

    #[test]
    fn test_empty_config_rejected() {
        assert!(matches!(parse_json("{}"), Err(SidebarError::MalformedEntry(_))));
        assert!(matches!(parse_toml(""), Err(SidebarError::MalformedEntry(_))));
    }

    #[test]
    fn test_empty_sidebar_rejected() {
        let err = parse_toml("docs = []").unwrap_err();
        assert!(err.to_string().contains("docs: sidebar has no entries"));
    }

    #[test]
    fn test_malformed_entry_path() {
        let err = parse_json(r#"{"docs": ["a", {"type": "category", "label": ""}]}"#).unwrap_err();
        match err {
            SidebarError::MalformedEntry(msg) => assert!(msg.starts_with("docs[1]"), "{}", msg),
            other => panic!("expected MalformedEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_syntax_errors_keep_their_kind() {
        assert!(matches!(parse_toml("docs = ["), Err(SidebarError::TomlParse(_))));
        assert!(matches!(parse_json("{"), Err(SidebarError::Json(_))));
        assert!(matches!(parse_toml("docs = \"intro\""), Err(SidebarError::TomlParse(_))));
    }
}
