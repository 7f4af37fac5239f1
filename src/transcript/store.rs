use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Default file name for the saved French transcript
pub const FRENCH_TRANSCRIPT_FILE: &str = "french_transcript.txt";

/// Default file name for the saved English translation
pub const ENGLISH_TRANSCRIPT_FILE: &str = "english_transcript.txt";

/// Write a transcript to disk, overwriting any previous run
pub async fn save_transcript<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    tokio::fs::write(path.as_ref(), content)
        .await
        .with_context(|| format!("failed to write {}", path.as_ref().display()))?;
    info!("💾 Saved transcript: {}", path.as_ref().display());
    Ok(())
}

/// Read a whole transcript file as UTF-8
pub async fn load_transcript<P: AsRef<Path>>(path: P) -> Result<String> {
    tokio::fs::read_to_string(path.as_ref())
        .await
        .with_context(|| format!("failed to read {}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FRENCH_TRANSCRIPT_FILE);

        save_transcript(&path, "Bonjour le monde.").await.unwrap();
        let loaded = load_transcript(&path).await.unwrap();
        assert_eq!(loaded, "Bonjour le monde.");
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(ENGLISH_TRANSCRIPT_FILE);

        save_transcript(&path, "First run.").await.unwrap();
        save_transcript(&path, "Second run.").await.unwrap();

        let loaded = load_transcript(&path).await.unwrap();
        assert_eq!(loaded, "Second run.");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_transcript(dir.path().join("missing.txt")).await;
        assert!(result.is_err());
    }
}
