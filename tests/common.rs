//! Shared test utilities for integration tests.
//!
//! Provides markdown fixtures, a browser-free print engine, and a helper
//! that launches Chromium when one is available.

#![allow(dead_code)]

use anyhow::Result;
use mdpdf::{ChromeEngine, ChromeOptions, PageSetup, PrintEngine};
use std::cell::RefCell;
use std::path::Path;
use tempfile::TempDir;

/// Markdown exercising tables and fenced code.
pub const SAMPLE: &str = r#"# Finanzplan

Kurze **Zusammenfassung** des Vorhabens.

| Jahr | Umsatz | Kosten |
|------|-------:|-------:|
| 2025 | 48.000 | 31.500 |
| 2026 | 96.000 | 52.000 |

```rust
fn main() {
    println!("hello");
}
```

> Alle Angaben ohne Gewähr.
"#;

/// Creates a directory holding the given markdown files.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn markdown_dir(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (name, content) in files {
        write_file(dir.path(), name, content)?;
    }
    Ok(dir)
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Print engine that keeps every document and returns a stub PDF.
#[derive(Default)]
pub struct FakeEngine {
    pub documents: RefCell<Vec<String>>,
}

impl PrintEngine for FakeEngine {
    fn print(&self, html: &str) -> Result<Vec<u8>> {
        self.documents.borrow_mut().push(html.to_string());
        Ok(b"%PDF-1.7\n%fake\n%%EOF\n".to_vec())
    }
}

/// Launches headless Chromium, or returns `None` when none can be started.
pub fn try_chrome() -> Option<ChromeEngine> {
    let options = ChromeOptions {
        executable: None,
        sandbox: false,
        page: PageSetup::a4(),
    };
    match ChromeEngine::launch(options) {
        Ok(engine) => Some(engine),
        Err(e) => {
            println!("Skipping: no headless browser available: {:#}", e);
            None
        }
    }
}

/// Reads the width and height of the first `/MediaBox` in a PDF, in points.
pub fn media_box(pdf: &[u8]) -> Option<(f64, f64)> {
    const KEY: &[u8] = b"/MediaBox";
    let start = pdf.windows(KEY.len()).position(|w| w == KEY)? + KEY.len();
    let rest = &pdf[start..];
    let open = rest.iter().position(|&b| b == b'[')?;
    let close = rest.iter().position(|&b| b == b']')?;
    let numbers: Vec<f64> = std::str::from_utf8(rest.get(open + 1..close)?)
        .ok()?
        .split_whitespace()
        .map(|n| n.parse().ok())
        .collect::<Option<_>>()?;
    match numbers.as_slice() {
        [x0, y0, x1, y1] => Some((x1 - x0, y1 - y0)),
        _ => None,
    }
}

/// Reports whether a page size in points is A4 (595.28 x 841.89).
pub fn is_a4(size: (f64, f64)) -> bool {
    (size.0 - 595.28).abs() < 1.0 && (size.1 - 841.89).abs() < 1.0
}
