//! PDF printing through a headless Chromium browser.

use anyhow::{Context, Result, anyhow};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::io::Write;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

const MM_PER_INCH: f64 = 25.4;

/// Time the browser may sit without DevTools traffic before it is shut down.
///
/// Large documents can keep the renderer busy well past headless_chrome's
/// 30 second default.
const IDLE_TIMEOUT: Duration = Duration::from_secs(120);

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Paper geometry used when printing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    /// Paper width in millimetres.
    pub width: f64,
    /// Paper height in millimetres.
    pub height: f64,
    pub margins: Margins,
    pub print_background: bool,
}

impl PageSetup {
    /// A4 portrait with 20mm margins and a 25mm bottom margin.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margins: Margins {
                top: 20.0,
                right: 20.0,
                bottom: 25.0,
                left: 20.0,
            },
            print_background: true,
        }
    }

    /// Converts to DevTools print parameters, which are given in inches.
    pub fn print_options(&self) -> PrintToPdfOptions {
        PrintToPdfOptions {
            landscape: Some(false),
            print_background: Some(self.print_background),
            paper_width: Some(mm_to_inches(self.width)),
            paper_height: Some(mm_to_inches(self.height)),
            margin_top: Some(mm_to_inches(self.margins.top)),
            margin_right: Some(mm_to_inches(self.margins.right)),
            margin_bottom: Some(mm_to_inches(self.margins.bottom)),
            margin_left: Some(mm_to_inches(self.margins.left)),
            ..Default::default()
        }
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}

fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Turns a complete HTML document into PDF bytes.
pub trait PrintEngine {
    /// Renders `html` and returns the PDF file contents.
    ///
    /// # Errors
    ///
    /// Returns error if the document cannot be loaded or printed.
    fn print(&self, html: &str) -> Result<Vec<u8>>;
}

/// Browser launch settings.
#[derive(Debug, Clone, Default)]
pub struct ChromeOptions {
    /// Browser executable; detected automatically when `None`.
    pub executable: Option<PathBuf>,
    pub sandbox: bool,
    pub page: PageSetup,
}

/// Print engine backed by one headless Chromium process.
///
/// The browser is launched once and shared by every [`PrintEngine::print`]
/// call. Each call works in its own tab, closed before the call returns.
/// Documents are staged in a temporary `.html` file and loaded by `file://`
/// URL, so their size is not bound by the browser's URL length limit.
pub struct ChromeEngine {
    browser: Browser,
    page: PageSetup,
}

impl ChromeEngine {
    /// Launches a headless browser.
    ///
    /// # Errors
    ///
    /// Returns error if no browser executable is found or it fails to start.
    pub fn launch(options: ChromeOptions) -> Result<Self> {
        let launch = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(options.sandbox)
            .path(options.executable)
            .idle_browser_timeout(IDLE_TIMEOUT)
            .build()
            .map_err(|e| anyhow!("Invalid browser launch options: {}", e))?;

        let browser = Browser::new(launch).context("Failed to launch headless browser")?;

        Ok(Self {
            browser,
            page: options.page,
        })
    }
}

impl PrintEngine for ChromeEngine {
    fn print(&self, html: &str) -> Result<Vec<u8>> {
        let tab = ScopedTab(
            self.browser
                .new_tab()
                .context("Failed to open browser tab")?,
        );

        let staged = stage_document(html)?;

        tab.navigate_to(&file_url(staged.path()))
            .context("Failed to load document")?
            .wait_until_navigated()
            .context("Document did not finish loading")?;

        tab.print_to_pdf(Some(self.page.print_options()))
            .context("Failed to print document")
    }
}

/// Closes the wrapped tab when dropped.
struct ScopedTab(Arc<Tab>);

impl Deref for ScopedTab {
    type Target = Tab;

    fn deref(&self) -> &Tab {
        &self.0
    }
}

impl Drop for ScopedTab {
    fn drop(&mut self) {
        if let Err(e) = self.0.close(true) {
            eprintln!("Warning: Failed to close browser tab: {:#}", e);
        }
    }
}

/// Writes a document to a temporary file, removed when the handle drops.
fn stage_document(html: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("mdpdf-")
        .suffix(".html")
        .tempfile()
        .context("Failed to create temporary document")?;
    file.write_all(html.as_bytes())
        .and_then(|_| file.flush())
        .context("Failed to write temporary document")?;
    Ok(file)
}

/// Builds a `file://` URL for an absolute path.
///
/// Characters outside the unreserved URL set are percent-encoded byte by
/// byte; Windows separators become `/`.
pub fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let mut url = String::from("file://");
    if !raw.starts_with('/') {
        url.push('/');
    }
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' | b':' => {
                url.push(byte as char)
            }
            _ => url.push_str(&format!("%{:02X}", byte)),
        }
    }
    url
}
