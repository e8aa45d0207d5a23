// src/main.rs
mod extractors;
mod profiles;
mod storage;
mod utils;

use std::path::Path;

use clap::Parser;

use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the policy extraction engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Insurer profile to apply (nia, uiic, icici, reliance, bajaj)
    #[arg(short, long)]
    insurer: String,

    /// Path to the plain-text policy document
    #[arg(long)]
    input: String,

    /// Output directory for extracted records
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Print the extracted record as JSON to stdout as well
    #[arg(long)]
    stdout: bool,

    /// Debug mode - save the raw input text alongside the extraction
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    // 3. Resolve the insurer profile
    let profile = profiles::for_insurer(&args.insurer).ok_or_else(|| {
        AppError::Config(format!(
            "Unknown insurer '{}'. Known insurers: {}",
            args.insurer,
            profiles::known_insurers().join(", ")
        ))
    })?;

    // 4. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    let stem = Path::new(&args.input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string();

    // 5. Read the document. A failed read still produces a record carrying
    //    the error, so downstream consumers always see the full schema.
    let text = match std::fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to read input {}: {}", args.input, e);
            let record = profile.empty_record(e.to_string());
            storage.save_record(&record, &args.input, &stem)?;
            return Err(AppError::Io(e));
        }
    };
    tracing::info!("Read {} bytes from {}", text.len(), args.input);

    // 6. Run the extraction
    let record = extractors::extract(&text, profile);

    // 7. Persist the record (and optionally the raw text)
    let path = storage.save_record(&record, &args.input, &stem)?;
    tracing::info!("Extraction complete: {}", path.display());

    if args.debug {
        storage.save_raw_text(&record, &stem, &text)?;
    }

    if args.stdout {
        let body = serde_json::to_string_pretty(&record)
            .map_err(|e| utils::error::StorageError::SerializationError(e.to_string()))
            .map_err(AppError::Storage)?;
        println!("{body}");
    }

    Ok(())
}
