//! # kuro-sitegen
//!
//! Renders the Kuro Panel info page and writes it to disk.
//!
//! ## Usage
//!
//! ```bash
//! # Write index.html to the current directory
//! kuro-sitegen
//!
//! # Custom output path (parent directories are created)
//! kuro-sitegen --out dist/index.html
//!
//! # Print the document to stdout instead
//! kuro-sitegen --stdout
//!
//! # Dump the content tables as JSON
//! kuro-sitegen --json --stdout
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use kuro_page::content;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kuro-sitegen")]
#[command(about = "Static site generator for the Kuro Panel info page")]
#[command(version)]
struct Args {
    /// Output file for the rendered page
    #[arg(short, long, default_value = "index.html")]
    out: PathBuf,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Emit the page content tables as JSON instead of HTML
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("kuro-sitegen v{}", env!("CARGO_PKG_VERSION"));

    let output = if args.json {
        content_json()?
    } else {
        kuro_page::render_page()
    };

    if args.stdout {
        println!("{output}");
        return Ok(());
    }

    write_output(&args.out, &output)?;
    info!("Wrote {} ({} bytes)", args.out.display(), output.len());

    Ok(())
}

/// Write the document, creating parent directories as needed.
fn write_output(path: &Path, output: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    fs::write(path, output).with_context(|| format!("writing {}", path.display()))
}

/// Machine-readable dump of the content tables.
fn content_json() -> Result<String> {
    let value = serde_json::json!({
        "title": content::PAGE_TITLE,
        "tagline": content::PAGE_TAGLINE,
        "features": content::FEATURES,
        "commands": content::COMMANDS,
        "tech_stack": content::TECH_STACK,
        "install_command": content::INSTALL_COMMAND,
    });
    serde_json::to_string_pretty(&value).context("serializing page content")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_page_creating_parent_dirs() {
        let tmp_dir = tempdir().expect("tmp dir");
        let out_path = tmp_dir.path().join("dist").join("index.html");

        let html = kuro_page::render_page();
        write_output(&out_path, &html).expect("write page");

        let written = fs::read_to_string(&out_path).expect("read page");
        assert_eq!(written, html);
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn content_dump_round_trips() {
        let dump = content_json().expect("serialize content");
        let value: serde_json::Value = serde_json::from_str(&dump).expect("valid json");

        assert_eq!(value["features"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["commands"].as_array().map(Vec::len), Some(10));
        assert_eq!(value["tech_stack"].as_array().map(Vec::len), Some(6));
        assert_eq!(
            value["install_command"],
            "pip install mysql-connector-python python-telegram-bot Flask"
        );
    }
}
