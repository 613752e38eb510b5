//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Add-on Installer - place a browser extension into an install directory
#[derive(Parser, Debug)]
#[command(name = "addon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a packed .xpi archive or an expanded extension directory
    pub extension: PathBuf,

    /// Directory the extension is installed into
    pub install_dir: PathBuf,
}
