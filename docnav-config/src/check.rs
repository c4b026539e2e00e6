//! Document identifier checks
//!
//! Nothing in here runs on [`build`](crate::defaults::build) or
//! [`SidebarConfig::get`]. Callers opt in by running [`check`], typically
//! right before handing the config to the docs generator.

use crate::types::{Entry, SidebarConfig};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// Extensions a document id may resolve to under the docs root
const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Directory holding the content documents. When set, every id must
    /// resolve to `<root>/<id>.md` or `<root>/<id>.mdx`.
    pub docs_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The same document is referenced twice in one sidebar
    DuplicateDoc {
        sidebar: String,
        id: String,
        first: String,
        second: String,
    },
    /// Two sibling categories share a label
    DuplicateLabel {
        sidebar: String,
        parent: String,
        label: String,
    },
    /// No file under the docs root matches the id
    MissingDoc { sidebar: String, id: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::DuplicateDoc { .. } | Diagnostic::DuplicateLabel { .. } => {
                Severity::Warning
            }
            Diagnostic::MissingDoc { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.severity())?;
        match self {
            Diagnostic::DuplicateDoc {
                sidebar,
                id,
                first,
                second,
            } => write!(
                f,
                "[{}] document `{}` listed twice ({} and {})",
                sidebar, id, first, second
            ),
            Diagnostic::DuplicateLabel {
                sidebar,
                parent,
                label,
            } => write!(
                f,
                "[{}] category label `{}` repeated under {}",
                sidebar, label, parent
            ),
            Diagnostic::MissingDoc { sidebar, id } => {
                write!(f, "[{}] document `{}` not found", sidebar, id)
            }
        }
    }
}

/// Outcome of [`check`]
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}

/// Run every check against `config`
pub fn check(config: &SidebarConfig, options: &CheckOptions) -> Report {
    let mut report = Report::default();

    for (name, sidebar) in config.iter() {
        let docs = sidebar.docs();

        let mut seen: HashMap<&str, String> = HashMap::new();
        for location in &docs {
            let here = location.to_string();
            if let Some(first) = seen.get(location.id.as_str()) {
                report.diagnostics.push(Diagnostic::DuplicateDoc {
                    sidebar: name.to_string(),
                    id: location.id.to_string(),
                    first: first.clone(),
                    second: here,
                });
            } else {
                seen.insert(location.id.as_str(), here);
            }
        }

        check_sibling_labels(name, "top level", sidebar.entries(), &mut report);

        if let Some(root) = &options.docs_root {
            let mut reported = HashSet::new();
            for location in &docs {
                let id = location.id.as_str();
                if !resolves(root, id) && reported.insert(id) {
                    report.diagnostics.push(Diagnostic::MissingDoc {
                        sidebar: name.to_string(),
                        id: id.to_string(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        "Checked {} sidebar(s): {} error(s), {} warning(s)",
        config.len(),
        report.count(Severity::Error),
        report.count(Severity::Warning)
    );
    report
}

fn check_sibling_labels(sidebar: &str, parent: &str, entries: &[Entry], report: &mut Report) {
    let mut labels = HashSet::new();
    for entry in entries {
        if let Entry::Category(category) = entry {
            if !labels.insert(category.label.as_str()) {
                report.diagnostics.push(Diagnostic::DuplicateLabel {
                    sidebar: sidebar.to_string(),
                    parent: parent.to_string(),
                    label: category.label.clone(),
                });
            }
            check_sibling_labels(
                sidebar,
                &format!("`{}`", category.label),
                &category.items,
                report,
            );
        }
    }
}

fn resolves(root: &Path, id: &str) -> bool {
    DOC_EXTENSIONS
        .iter()
        .any(|ext| root.join(format!("{}.{}", id, ext)).is_file())
}
