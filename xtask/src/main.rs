use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for the docnav project")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and install the docnav binary
    Install {
        /// Custom installation path (default: ~/.cargo/bin or ~/.local/bin)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Write the built-in sidebars to a file for the docs site build
    Sidebars {
        /// Output file; .json or .toml (default: website/sidebars.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Install { path } => install(path),
        Commands::Sidebars { out } => write_sidebars(out),
    }
}

fn install(custom_path: Option<PathBuf>) -> Result<()> {
    println!("Building docnav (release)...");
    let status = Command::new("cargo")
        .args(["build", "--release", "-p", "docnav-cli"])
        .status()
        .context("Failed to run cargo build")?;

    if !status.success() {
        bail!("Build failed");
    }

    let install_dir = determine_install_dir(custom_path)?;
    fs::create_dir_all(&install_dir)
        .with_context(|| format!("Failed to create directory: {}", install_dir.display()))?;

    let src = project_root()?.join("target/release/docnav");
    if !src.exists() {
        bail!("Binary not found: {}", src.display());
    }
    let dst = install_dir.join("docnav");
    copy_executable(&src, &dst)?;
    println!("Installed: {}", dst.display());

    if let Ok(path_env) = std::env::var("PATH") {
        let install_dir_str = install_dir.to_string_lossy();
        if !path_env.split(':').any(|p| p == install_dir_str) {
            println!();
            println!("Note: {} is not in your PATH.", install_dir.display());
            println!("  export PATH=\"{}:$PATH\"", install_dir.display());
        }
    }

    Ok(())
}

fn write_sidebars(out: Option<PathBuf>) -> Result<()> {
    let out = match out {
        Some(out) => out,
        None => project_root()?.join("website/sidebars.json"),
    };

    let sidebars = docnav_config::build();
    let report = docnav_config::check(&sidebars, &docnav_config::CheckOptions::default());
    for diagnostic in &report.diagnostics {
        println!("{}", diagnostic);
    }

    sidebars
        .save_to_file(&out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!(
        "Wrote {} document reference(s) to {}",
        sidebars.doc_count(),
        out.display()
    );
    Ok(())
}

fn copy_executable(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;

    let mut perms = fs::metadata(dst)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(dst, perms)?;
    Ok(())
}

fn determine_install_dir(custom_path: Option<PathBuf>) -> Result<PathBuf> {
    // custom path > ~/.cargo/bin > ~/.local/bin
    if let Some(path) = custom_path {
        return Ok(path);
    }

    let home = PathBuf::from(std::env::var("HOME").context("HOME environment variable not set")?);
    let cargo_bin = home.join(".cargo/bin");
    let local_bin = home.join(".local/bin");

    if !cargo_bin.exists() && local_bin.exists() {
        return Ok(local_bin);
    }
    Ok(cargo_bin)
}

fn project_root() -> Result<PathBuf> {
    // CARGO_MANIFEST_DIR points at xtask/ under `cargo run`
    if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
        if let Some(parent) = Path::new(&dir).parent() {
            return Ok(parent.to_path_buf());
        }
    }

    let mut current = std::env::current_dir()?;
    loop {
        let cargo_toml = current.join("Cargo.toml");
        if cargo_toml.exists() && fs::read_to_string(&cargo_toml)?.contains("[workspace]") {
            return Ok(current);
        }
        if !current.pop() {
            bail!("Could not find workspace root");
        }
    }
}
