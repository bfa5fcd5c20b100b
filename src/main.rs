use anyhow::Result;

mod config;
mod error;
mod logging;
mod models;
mod services;

use services::excel::WorkOrderExtractor;

fn main() -> Result<()> {
    // Initialize logging
    logging::init_logging()?;

    // Load configuration
    let config = config::Config::new()?;

    let start = std::time::Instant::now();
    let mut extractor = WorkOrderExtractor::open(&config.workbook_path)?;
    let chunks = extractor.extract_all();
    tracing::info!("Extracted {} chunks in {:?}", chunks.len(), start.elapsed());

    println!("Extracted {} chunks from work order", chunks.len());
    if let Some(chunk) = chunks.first() {
        println!("Sample chunk:");
        println!("{}", "=".repeat(50));
        println!("{}", chunk.content);
        println!("{}", "=".repeat(50));
        println!("Metadata: {}", serde_json::to_string_pretty(&chunk.metadata)?);
    }

    services::export::write_chunks(&chunks, &config.output_path)?;
    println!("\nSaved {} chunks to {}", chunks.len(), config.output_path);

    Ok(())
}
