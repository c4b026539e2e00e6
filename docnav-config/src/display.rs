//! Outline rendering for sidebars

use crate::types::{Entry, Sidebar, SidebarConfig};
use std::fmt;

const INDENT: &str = "  ";

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[Entry], depth: usize) -> fmt::Result {
    for entry in entries {
        let pad = INDENT.repeat(depth);
        match entry {
            Entry::Doc(id) => writeln!(f, "{}- {}", pad, id)?,
            Entry::Category(category) => {
                writeln!(f, "{}▸ {}", pad, category.label)?;
                write_entries(f, &category.items, depth + 1)?;
            }
        }
    }
    Ok(())
}

impl fmt::Display for Sidebar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.entries(), 0)
    }
}

impl fmt::Display for SidebarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, sidebar)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", name)?;
            write_entries(f, sidebar.entries(), 1)?;
        }
        Ok(())
    }
}
