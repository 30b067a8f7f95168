//! Utility functions for mdpdf

/// Formats a byte count as kibibytes with one decimal place.
///
/// Status lines always use KB, so a 3 MB file reads "3072.0 KB".
///
/// # Arguments
///
/// * `bytes`: File size in bytes
///
/// # Returns
///
/// Formatted string like "0.5 KB" or "48.2 KB"
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Formats the status line printed after a PDF is written.
pub fn status_line(name: &str, bytes: u64) -> String {
    format!("  OK  {} ({})", name, format_size_kb(bytes))
}
