use anyhow::Result;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced while fetching a transcript
///
/// Transcript unavailability is non-fatal and carries no retry; callers
/// show the message and move on.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("transcripts are disabled for this video")]
    TranscriptsDisabled,

    #[error("no French transcript available for this video")]
    NoFrenchTranscript,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not read caption data: {0}")]
    CaptionData(String),
}

/// Extract the 11-character video id from the common YouTube URL formats
pub fn extract_video_id(url: &str) -> Option<String> {
    let patterns = [
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})",
        r"(?:youtube\.com/watch\?.*v=)([a-zA-Z0-9_-]{11})",
    ];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(url) {
                return caps.get(1).map(|m| m.as_str().to_string());
            }
        }
    }

    None
}

/// Caption track entry embedded in the watch-page player response
#[derive(Debug, Clone, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
    /// "asr" marks auto-generated tracks
    kind: Option<String>,
}

/// Fetches French transcripts from YouTube watch pages
#[derive(Clone)]
pub struct TranscriptFetcher {
    client: Client,
}

impl TranscriptFetcher {
    /// Create a new fetcher with the given request timeout
    pub fn new(timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch the French transcript for a video as one flat text
    ///
    /// Manual French tracks are preferred over auto-generated ones; snippet
    /// texts are joined with single spaces.
    pub async fn fetch_french(&self, video_id: &str) -> Result<String, TranscriptError> {
        info!("🎬 Fetching transcript for video: {}", video_id);

        let watch_url = format!("https://www.youtube.com/watch?v={}", video_id);
        let page = self
            .client
            .get(&watch_url)
            .send()
            .await?
            .text()
            .await?;

        let tracks = extract_caption_tracks(&page)?;
        debug!("Found {} caption tracks", tracks.len());

        let french = tracks
            .iter()
            .find(|t| t.language_code == "fr" && t.kind.as_deref() != Some("asr"))
            .or_else(|| tracks.iter().find(|t| t.language_code == "fr"))
            .ok_or(TranscriptError::NoFrenchTranscript)?;

        if french.kind.as_deref() == Some("asr") {
            debug!("Using auto-generated French track");
        }

        let timed_text = self
            .client
            .get(&french.base_url)
            .send()
            .await?
            .text()
            .await?;

        let transcript = flatten_timed_text(&timed_text);
        if transcript.is_empty() {
            warn!("Caption track for {} was empty", video_id);
            return Err(TranscriptError::NoFrenchTranscript);
        }

        info!("✅ Transcript fetched ({} chars)", transcript.len());
        Ok(transcript)
    }
}

/// Locate the caption track list inside the embedded player response
fn extract_caption_tracks(page: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let re = Regex::new(r#""captionTracks":(\[.*?\])"#)
        .map_err(|e| TranscriptError::CaptionData(e.to_string()))?;

    let caps = re
        .captures(page)
        .ok_or(TranscriptError::TranscriptsDisabled)?;

    let raw = caps.get(1).map(|m| m.as_str()).unwrap_or("[]");
    serde_json::from_str(raw).map_err(|e| TranscriptError::CaptionData(e.to_string()))
}

/// Strip timed-text XML down to the plain snippet texts, space-joined
fn flatten_timed_text(xml: &str) -> String {
    let text_re = match Regex::new(r"(?s)<text[^>]*>(.*?)</text>") {
        Ok(re) => re,
        Err(_) => return String::new(),
    };

    let snippets: Vec<String> = text_re
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|m| decode_entities(m.as_str()))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    snippets.join(" ")
}

/// Decode the entities YouTube timed-text actually emits
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
}
