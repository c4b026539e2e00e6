//! docnav - inspect, export and check documentation sidebars

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Inspect, export and check documentation sidebars")]
struct Cli {
    /// Sidebar file to load (default: ./sidebars.toml, else the built-in sidebars)
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print sidebars as an indented outline
    Show {
        /// Only print this sidebar
        #[arg(long)]
        sidebar: Option<String>,
    },
    /// Print one sidebar in a structured format
    Get {
        name: String,
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Serialize the whole config
    Export {
        /// Output format for stdout (default: toml)
        #[arg(long, conflicts_with = "output")]
        format: Option<String>,
        /// Write to this file instead of stdout (format taken from its extension)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List document ids in sidebar order
    Docs {
        #[arg(long)]
        sidebar: Option<String>,
    },
    /// Check for duplicate and missing document ids
    Check {
        /// Directory holding the .md/.mdx documents
        #[arg(long)]
        docs_root: Option<PathBuf>,
        /// Fail on warnings too
        #[arg(long)]
        strict: bool,
    },
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "docnav=debug"
    } else {
        "docnav=info"
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::load(cli.file.as_deref())?;

    match cli.command {
        Commands::Show { sidebar } => commands::show(&config, sidebar.as_deref()),
        Commands::Get { name, format } => commands::get(&config, &name, &format),
        Commands::Export { format, output } => {
            commands::export(&config, format.as_deref(), output.as_deref())
        }
        Commands::Docs { sidebar } => commands::docs(&config, sidebar.as_deref()),
        Commands::Check { docs_root, strict } => commands::check(&config, docs_root, strict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_conflicts_with_output() {
        let result = Cli::try_parse_from([
            "docnav", "export", "--format", "json", "--output", "sidebars.toml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_accepts_format_or_output_alone() {
        assert!(Cli::try_parse_from(["docnav", "export", "--format", "json"]).is_ok());
        assert!(Cli::try_parse_from(["docnav", "export", "-o", "out.json"]).is_ok());
    }

    #[test]
    fn test_default_directive_parses() {
        for verbose in [false, true] {
            let directive = default_directive(verbose);
            assert!(directive
                .parse::<tracing_subscriber::filter::Directive>()
                .is_ok());
        }
        assert_eq!(default_directive(true), "docnav=debug");
    }
}
