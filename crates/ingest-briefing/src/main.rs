use anyhow::{Context, Result};
use chrono::DateTime;
use clap::Parser;
use shared::{BriefingPipeline, BriefingStore, Config, DeleteOutcome};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ingest-briefing")]
#[command(about = "Turn a local document into a stored briefing")]
struct Args {
    /// Document to ingest (.pdf, .doc/.docx, or plain text)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// List stored briefings
    #[arg(short, long)]
    list: bool,

    /// Delete the briefing with this id
    #[arg(short, long)]
    delete: Option<i64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;
    let store = BriefingStore::file(&config.data_path);

    if args.list {
        return list_briefings(&store);
    }

    if let Some(id) = args.delete {
        return delete_briefing(&store, id);
    }

    if let Some(path) = args.file {
        return ingest_file(store, &path);
    }

    anyhow::bail!(
        "Nothing to do. Pass --file to ingest a document, --list to show stored briefings, \
         or --delete <id> to remove one."
    );
}

fn ingest_file(store: BriefingStore, path: &Path) -> Result<()> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?
        .to_string();

    println!("📄 Reading {}...", path.display());
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    println!("📝 Generating briefing...");
    let pipeline = BriefingPipeline::new(store);
    let briefing = pipeline
        .ingest(&bytes, &filename)
        .context("Failed to process document")?;

    println!("✓ Stored briefing {} for {}\n", briefing.id, briefing.filename);
    println!("{}", briefing.summary);

    Ok(())
}

fn list_briefings(store: &BriefingStore) -> Result<()> {
    let briefings = store.list();

    if briefings.is_empty() {
        println!("No briefings stored yet.");
        return Ok(());
    }

    println!("Stored briefings:\n");
    for briefing in &briefings {
        let date = DateTime::parse_from_rfc3339(&briefing.date)
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| briefing.date.clone());
        println!("  {}  {}  {}", briefing.id, date, briefing.filename);
    }

    Ok(())
}

fn delete_briefing(store: &BriefingStore, id: i64) -> Result<()> {
    match store.delete(id)? {
        DeleteOutcome::Deleted => println!("✓ Deleted briefing {}", id),
        DeleteOutcome::NoSuchRecord => println!("⚠ No briefing with id {}", id),
        DeleteOutcome::NoCollection => println!("No briefings stored yet."),
    }

    Ok(())
}
