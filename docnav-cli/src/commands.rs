use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use docnav_config::{config, writer, CheckOptions, Format, Severity, SidebarConfig};

pub fn load(file: Option<&Path>) -> Result<SidebarConfig> {
    let sidebars = config::load_or_default(file).with_context(|| match file {
        Some(path) => format!("Failed to load sidebars from {}", path.display()),
        None => "Failed to load sidebars".to_string(),
    })?;
    tracing::debug!(
        "Loaded {} sidebar(s), {} document reference(s)",
        sidebars.len(),
        sidebars.doc_count()
    );
    Ok(sidebars)
}

fn parse_format(name: &str) -> Result<Format> {
    Format::from_str(name).ok_or_else(|| anyhow!("Unknown format `{}` (use toml or json)", name))
}

/// Narrow the config to one sidebar, or keep all of it
fn select(sidebars: &SidebarConfig, name: Option<&str>) -> Result<SidebarConfig> {
    match name {
        Some(name) => {
            let sidebar = sidebars.get(name)?;
            Ok(SidebarConfig::new().with_sidebar(name, sidebar.clone()))
        }
        None => Ok(sidebars.clone()),
    }
}

pub fn show(sidebars: &SidebarConfig, name: Option<&str>) -> Result<()> {
    print!("{}", select(sidebars, name)?);
    Ok(())
}

pub fn get(sidebars: &SidebarConfig, name: &str, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let single = select(sidebars, Some(name))?;
    print!("{}", writer::to_string(&single, format)?);
    Ok(())
}

pub fn export(sidebars: &SidebarConfig, format: Option<&str>, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => writer::save_to_file(sidebars, path)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let text = writer::to_string(sidebars, parse_format(format.unwrap_or("toml"))?)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                writeln!(stdout)?;
            }
            Ok(())
        }
    }
}

pub fn docs(sidebars: &SidebarConfig, name: Option<&str>) -> Result<()> {
    let selected = select(sidebars, name)?;
    for (sidebar_name, sidebar) in selected.iter() {
        for location in sidebar.docs() {
            println!("{}\t{}", sidebar_name, location);
        }
    }
    Ok(())
}

pub fn check(sidebars: &SidebarConfig, docs_root: Option<PathBuf>, strict: bool) -> Result<()> {
    if let Some(root) = &docs_root {
        if !root.is_dir() {
            bail!("Docs root is not a directory: {}", root.display());
        }
    }

    let report = docnav_config::check(sidebars, &CheckOptions { docs_root });
    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let errors = report.count(Severity::Error);
    let warnings = report.count(Severity::Warning);
    if errors > 0 || (strict && warnings > 0) {
        bail!("Check failed: {} error(s), {} warning(s)", errors, warnings);
    }

    println!(
        "OK: {} sidebar(s), {} document reference(s), {} warning(s)",
        sidebars.len(),
        sidebars.doc_count(),
        warnings
    );
    Ok(())
}
