use std::path::Path;

use thiserror::Error;

use windage_shared::Transcript;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a transcript JSON written by `run --output`.
pub fn load(path: &Path) -> Result<Transcript, TranscriptError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
