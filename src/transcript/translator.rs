use crate::llm::{create_llm, ChatMessage, LLMConfig, LLM};
use anyhow::Result;
use tracing::{debug, info};

/// Character window size for translation requests
pub const MAX_CHUNK_SIZE: usize = 4000;

const TRANSLATOR_SYSTEM_PROMPT: &str = "You are a professional translator. Translate the following French text to English. Provide only the translation, no explanations.";

/// French→English translator over an LLM client
pub struct Translator {
    llm: Box<dyn LLM>,
}

impl Translator {
    /// Create a translator around an existing LLM client
    pub fn new(llm: Box<dyn LLM>) -> Self {
        Self { llm }
    }

    /// Create a translator from provider configuration
    pub fn from_config(config: &LLMConfig) -> Result<Self> {
        Ok(Self {
            llm: create_llm(config)?,
        })
    }

    /// Translate French text to English
    ///
    /// Long texts are cut into fixed 4000-character windows to respect
    /// request-size limits and the chunk outputs are joined with single
    /// spaces, in order. Chunk boundaries take no account of sentence
    /// structure; a sentence split across two windows is translated in two
    /// parts.
    pub async fn translate(&self, french_text: &str) -> Result<String> {
        let chunks = chunk_by_chars(french_text, MAX_CHUNK_SIZE);
        info!("🌍 Translating {} chunk(s)", chunks.len());

        let mut translated = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            debug!("Translating chunk {}/{} ({} chars)", i + 1, chunks.len(), chunk.chars().count());

            let messages = vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: TRANSLATOR_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: chunk.clone(),
                },
            ];

            let response = self.llm.chat(messages).await?;
            translated.push(response.content);
        }

        Ok(translated.join(" "))
    }
}

/// Cut text into windows of at most `size` characters, preserving UTF-8
fn chunk_by_chars(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
