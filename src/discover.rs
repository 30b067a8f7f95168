//! Markdown source discovery and output path planning.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension matched during discovery (case sensitive).
const MARKDOWN_EXTENSION: &str = "md";

/// One markdown source and the PDF it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    source: PathBuf,
    output: PathBuf,
    stem: String,
}

impl Job {
    /// Markdown file to read.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// PDF file to write.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Source file name without extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Output file name shown in status lines.
    pub fn display_name(&self) -> String {
        format!("{}.pdf", self.stem)
    }
}

/// Lists markdown files directly inside a directory.
///
/// Only regular files with a `.md` extension are returned. Dot-files (editor
/// drafts, macOS `._*` resource forks) and files whose stem appears in
/// `exclude` are skipped. The result is sorted by file name so
/// conversions run in a stable, lexicographic order.
///
/// # Arguments
///
/// * `dir`: Directory to scan (not recursive)
/// * `exclude`: File stems to skip
///
/// # Errors
///
/// Returns error if the directory or one of its entries cannot be read.
pub fn find_markdown_files(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
        let path = entry.path();

        if is_hidden(&path) || !path.is_file() || !is_markdown(&path) {
            continue;
        }

        let excluded = file_stem(&path)
            .map(|stem| exclude.iter().any(|e| e == stem))
            .unwrap_or(false);
        if excluded {
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Pairs each source with its PDF path inside `output_dir`.
///
/// # Errors
///
/// Returns error if a source path has no UTF8 file stem.
pub fn plan_jobs(files: &[PathBuf], output_dir: &Path) -> Result<Vec<Job>> {
    files
        .iter()
        .map(|source| {
            let stem = file_stem(source)
                .with_context(|| format!("Invalid file name: {}", source.display()))?
                .to_string();
            Ok(Job {
                source: source.clone(),
                output: output_dir.join(format!("{}.pdf", stem)),
                stem,
            })
        })
        .collect()
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}
