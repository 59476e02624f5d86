use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::candidate::CandidateProfile;

/// Loads the candidate corpus wholesale from the version-controlled JSON
/// fixture. This is static input to the ranking core, not a persistence
/// layer: it is read once at startup and never written.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<CandidateProfile>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidate data from {}", path.display()))?;

    let corpus: Vec<CandidateProfile> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse candidate data in {}", path.display()))?;

    info!("Loaded {} candidate profiles from {}", corpus.len(), path.display());
    Ok(corpus)
}
