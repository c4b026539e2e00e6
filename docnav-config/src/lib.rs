//! Docnav Sidebar Configuration
//!
//! A small library describing the navigation sidebar of a documentation
//! site with support for:
//! - A typed, immutable sidebar tree (`DocId`, `Entry`, `Category`, `Sidebar`)
//! - The built-in site navigation returned by [`defaults::build`]
//! - TOML and JSON sidebar files in the same shape a docs generator consumes
//! - Opt-in checks for duplicate and missing document identifiers
//!
//! # Architecture
//!
//! - [`types`] - Data structures for sidebars and entries
//! - [`defaults`] - The built-in sidebar literal
//! - [`parser`] - Decoding and structural validation of sidebar files
//! - [`writer`] - Serialization back to TOML/JSON
//! - [`config`] - Loading from a file, or falling back to the built-in tree
//! - [`check`] - Document identifier diagnostics
//! - [`display`] - Indented outline rendering

pub mod check;
pub mod config;
pub mod defaults;
pub mod display;
pub mod parser;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use check::{check, CheckOptions, Diagnostic, Report, Severity};
pub use defaults::{build, DEFAULT_SIDEBAR};
pub use parser::Format;
pub use types::{Category, DocId, DocLocation, Entry, Sidebar, SidebarConfig};

/// Errors that can occur during sidebar config operations
#[derive(thiserror::Error, Debug)]
pub enum SidebarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sidebar not found: {0}")]
    NotFound(String),

    #[error("Malformed entry: {0}")]
    MalformedEntry(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, SidebarError>;
