use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Fetches spoken French audio for practice sentences
///
/// Failures are reported to the caller and logged as captions; audio is
/// never required for the practice flow to continue.
#[derive(Clone)]
pub struct SpeechFetcher {
    client: Client,
}

impl SpeechFetcher {
    /// Create a new fetcher with the given request timeout
    pub fn new(timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch MP3 audio for a French sentence
    pub async fn fetch_french_audio(&self, text: &str) -> Result<Vec<u8>> {
        if text.trim().is_empty() {
            return Err(anyhow!("no text to speak"));
        }

        let url = format!(
            "{}?ie=UTF-8&tl=fr&client=tw-ob&q={}",
            TTS_ENDPOINT,
            urlencoding::encode(text)
        );

        debug!("Fetching TTS audio ({} chars)", text.chars().count());

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("TTS endpoint error {}", response.status()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_text_is_rejected_before_any_request() {
        let fetcher = SpeechFetcher::new(5);
        assert!(fetcher.fetch_french_audio("").await.is_err());
        assert!(fetcher.fetch_french_audio("   ").await.is_err());
    }
}
