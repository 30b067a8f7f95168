//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::markdown::theme_exists;

/// Command line configuration for mdpdf.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdpdf", version, about, long_about = None)]
pub struct Config {
    /// Directory containing markdown files
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Output directory for PDFs (defaults to the input directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File stem to skip, may be repeated
    #[arg(long = "exclude", value_name = "STEM", default_value = "convert_to_pdf")]
    pub exclude: Vec<String>,

    /// Code highlighting theme (InspiredGitHub, base16-ocean.light, etc.)
    #[arg(long, default_value = "InspiredGitHub")]
    pub theme: String,

    /// Chromium or Chrome executable (auto-detected when omitted)
    #[arg(long, value_name = "PATH")]
    pub chrome: Option<PathBuf>,

    /// Launch the browser without its sandbox
    #[arg(long)]
    pub no_sandbox: bool,

    /// Open the output directory when done
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input directory does not exist, is not a
    /// directory, or the highlighting theme is unknown.
    pub fn validate(&self) -> Result<()> {
        if !self.dir.exists() {
            bail!("Input directory does not exist: {}", self.dir.display());
        }
        if !self.dir.is_dir() {
            bail!("Input path is not a directory: {}", self.dir.display());
        }
        if !theme_exists(&self.theme) {
            bail!("Unknown highlighting theme: {}", self.theme);
        }

        Ok(())
    }

    /// Returns the directory PDFs are written to.
    pub fn output_dir(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.dir)
    }
}
