//! Sequential markdown to PDF conversion.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::discover::Job;
use crate::markdown::MarkdownRenderer;
use crate::pdf::PrintEngine;
use crate::template::document;

/// PDF written for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    path: PathBuf,
    name: String,
    size: u64,
}

impl Converted {
    /// Location of the written PDF.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// PDF file name, e.g. `plan.pdf`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the PDF on disk in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Converts markdown files to PDFs with a shared print engine.
pub struct Converter<'a, E> {
    engine: E,
    renderer: MarkdownRenderer<'a>,
    stylesheet: String,
}

impl<'a, E: PrintEngine> Converter<'a, E> {
    pub fn new(engine: E, renderer: MarkdownRenderer<'a>, stylesheet: impl Into<String>) -> Self {
        Self {
            engine,
            renderer,
            stylesheet: stylesheet.into(),
        }
    }

    /// Builds the complete HTML document for a markdown source.
    ///
    /// # Errors
    ///
    /// Returns error if the source cannot be read or rendered.
    pub fn html_for(&self, job: &Job) -> Result<String> {
        let body = self.renderer.render_file(job.source())?;
        Ok(document(job.stem(), &self.stylesheet, &body).into_string())
    }

    /// Converts one job, replacing any existing PDF.
    ///
    /// # Errors
    ///
    /// Returns error if reading, rendering, printing or writing fails.
    pub fn convert(&self, job: &Job) -> Result<Converted> {
        let html = self.html_for(job)?;
        let pdf = self.engine.print(&html)?;

        fs::write(job.output(), &pdf)
            .with_context(|| format!("Failed to write PDF: {}", job.output().display()))?;

        let size = fs::metadata(job.output())
            .with_context(|| format!("Failed to stat PDF: {}", job.output().display()))?
            .len();

        Ok(Converted {
            path: job.output().to_path_buf(),
            name: job.display_name(),
            size,
        })
    }

    /// Converts jobs in order, stopping at the first failure.
    ///
    /// `on_converted` runs after each PDF is written, before the next job
    /// starts. Jobs after a failing one are not attempted.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error, naming the failing source file.
    pub fn run<F>(&self, jobs: &[Job], mut on_converted: F) -> Result<Vec<Converted>>
    where
        F: FnMut(&Converted),
    {
        let mut done = Vec::with_capacity(jobs.len());
        for job in jobs {
            let converted = self
                .convert(job)
                .with_context(|| format!("Failed to convert {}", job.source().display()))?;
            on_converted(&converted);
            done.push(converted);
        }
        Ok(done)
    }

    /// Returns the print engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
