use anyhow::{Context, Result};
use mdpdf::{ChromeEngine, ChromeOptions, Config, Converter, MarkdownRenderer, PageSetup};
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let files = mdpdf::find_markdown_files(&config.dir, &config.exclude)
        .context("Failed to find markdown files")?;

    let output_dir = config.output_dir();
    fs::create_dir_all(output_dir).context("Failed to create output directory")?;

    let jobs = mdpdf::plan_jobs(&files, output_dir)?;

    // No browser is launched for an empty batch
    if !jobs.is_empty() {
        let stylesheet = mdpdf::stylesheet(&config.theme)?;

        let engine = ChromeEngine::launch(ChromeOptions {
            executable: config.chrome.clone(),
            sandbox: !config.no_sandbox,
            page: PageSetup::a4(),
        })?;

        let converter = Converter::new(engine, MarkdownRenderer::new(), stylesheet);
        converter.run(&jobs, |converted| {
            println!("{}", mdpdf::status_line(converted.name(), converted.size()));
        })?;
    }

    println!("\nDone! All PDFs generated.");

    if config.open {
        if let Err(e) = open::that(output_dir) {
            eprintln!("Warning: Failed to open {}: {}", output_dir.display(), e);
        }
    }

    Ok(())
}
