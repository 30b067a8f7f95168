//! Batch converter from markdown files to styled PDF documents.

mod assets;
mod config;
mod convert;
mod discover;
mod markdown;
mod pdf;
mod template;
mod util;

pub use assets::stylesheet;
pub use config::Config;
pub use convert::{Converted, Converter};
pub use discover::{Job, find_markdown_files, plan_jobs};
pub use markdown::{DEFAULT_THEME, MarkdownRenderer, theme_css, theme_exists};
pub use pdf::{ChromeEngine, ChromeOptions, Margins, PageSetup, PrintEngine, file_url};
pub use template::document;
pub use util::{format_size_kb, status_line};
