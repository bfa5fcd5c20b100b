use std::fs;

use crate::error::AppError;
use crate::models::Chunk;

/// Write the full chunk list to disk as a pretty-printed JSON array.
pub fn write_chunks(chunks: &[Chunk], path: &str) -> Result<(), AppError> {
    let payload = serde_json::to_string_pretty(chunks)?;
    fs::write(path, payload)?;
    tracing::info!("Saved {} chunks to {}", chunks.len(), path);
    Ok(())
}
