use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_engine::{parse_resume_with_links, HyperlinkAnchor};

/// Structure an already-extracted resume text file into JSON.
#[derive(Parser, Debug)]
#[command(name = "resume-engine", version)]
struct Args {
    /// Path to the extracted resume text (UTF-8)
    input: PathBuf,

    /// Write the structured record here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON file of harvested hyperlink anchors: [{"text": "...", "url": "..."}]
    #[arg(long)]
    links: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // The file read is the extraction-collaborator boundary: a missing or
    // unreadable input is fatal, matching the engine's empty-input rule.
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read extracted text from {}", args.input.display()))?;

    let anchors: Vec<HyperlinkAnchor> = match &args.links {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read links file {}", path.display()))?;
            serde_json::from_str(&raw).context("links file is not a valid anchor list")?
        }
        None => Vec::new(),
    };

    let record = parse_resume_with_links(&text, &anchors)?;
    info!(
        sections = record.raw_sections.len(),
        experience = record.experience.len(),
        education = record.education.len(),
        projects = record.projects.len(),
        other = record.other.len(),
        "resume structured"
    );

    let json = serde_json::to_string_pretty(&record)?;
    match &args.out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(out = %path.display(), "structured resume saved");
        }
        None => println!("{json}"),
    }

    Ok(())
}
