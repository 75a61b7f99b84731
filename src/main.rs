// src/main.rs
mod convert;
mod extractors;
mod pipeline;
mod profile;
mod remote;
mod storage;
mod utils;

use std::path::Path;

use clap::Parser;

use convert::DocumentTextConverter;
use extractors::ExtractorConfig;
use pipeline::ExtractionPipeline;
use remote::RemoteClient;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the resume extraction pipeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the resume document (.pdf, .docx, .doc)
    #[arg(short, long)]
    file: String,

    /// Base URL of the AI parsing service; falls back to the
    /// AI_SERVICE_URL environment variable when omitted
    #[arg(long)]
    ai_service_url: Option<String>,

    /// Skip the AI service entirely and parse with the local heuristics
    #[arg(long)]
    local_only: bool,

    /// Output directory for the extracted profile
    #[arg(short, long, default_value = "./output")]
    output_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    // 3. Read the input document
    let bytes = std::fs::read(&args.file)?;
    let filename = Path::new(&args.file)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Config(format!("Invalid input path: {}", args.file)))?
        .to_string();
    tracing::info!("Read {} bytes from {}", bytes.len(), args.file);

    // 4. Resolve the remote endpoint, unless running local-only
    let remote = if args.local_only {
        None
    } else {
        args.ai_service_url
            .or_else(|| std::env::var("AI_SERVICE_URL").ok())
            .map(RemoteClient::new)
    };
    if remote.is_none() {
        tracing::info!("No AI service configured, using local extraction only");
    }

    // 5. Build and run the pipeline
    let pipeline = ExtractionPipeline::new(
        Box::new(DocumentTextConverter),
        remote,
        &ExtractorConfig::default(),
    );
    let candidate = pipeline.extract(&bytes, &filename).await?;

    tracing::info!(
        "Extracted profile: {} experience, {} education, {} skills, {} certificates",
        candidate.experience.len(),
        candidate.education.len(),
        candidate.skills.technical.len(),
        candidate.certificates.len()
    );

    // 6. Persist the profile and its metadata
    let storage = StorageManager::new(&args.output_dir)?;

    match storage.save_profile(&candidate, &filename) {
        Ok(path) => tracing::info!("Saved profile to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save profile: {}", e),
    }

    match storage.save_metadata(&candidate, &filename) {
        Ok(path) => tracing::info!("Saved metadata to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save metadata: {}", e),
    }

    Ok(())
}
