use crate::llm::{LLMConfig, LLMProvider};
use crate::sentence::FRENCH_ABBREVIATIONS;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the French Trainer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sentence segmentation settings
    pub segmenter: SegmenterConfig,

    /// LLM settings shared by translation and evaluation
    pub llm: LLMConfig,

    /// Transcript fetch settings
    pub fetch: FetchConfig,

    /// Output and storage settings
    pub output: OutputConfig,

    /// Practice loop settings
    pub practice: PracticeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Abbreviations whose trailing period never ends a sentence.
    /// The same set is applied to both languages.
    pub abbreviations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// HTTP request timeout in seconds
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where transcripts and audio are written
    pub transcript_dir: PathBuf,

    /// File name for the saved French transcript
    pub french_file: String,

    /// File name for the saved English translation
    pub english_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeConfig {
    /// Fetch spoken audio for practiced sentences
    pub enable_audio: bool,
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_paths = [
            "french-trainer.toml",
            "config/french-trainer.toml",
            "~/.config/french-trainer/config.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str::<Config>(&config_str) {
                    Ok(mut config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        config.apply_env();
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// The API key is always taken from the environment when present, so a
    /// checked-in config file never needs to carry a credential.
    pub fn apply_env(&mut self) {
        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            if !api_key.is_empty() {
                self.llm.api_key = Some(api_key);
            }
        }

        if let Ok(model) = std::env::var("FRENCH_TRAINER_MODEL") {
            self.llm.model = model;
        }

        if let Ok(dir) = std::env::var("FRENCH_TRAINER_OUTPUT_DIR") {
            self.output.transcript_dir = PathBuf::from(dir);
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path);
        Ok(())
    }

    /// Validate configuration
    ///
    /// A missing credential is a configuration error raised here, before
    /// any network call is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.segmenter.abbreviations.is_empty() {
            return Err(anyhow!("abbreviation set must not be empty"));
        }

        if self.fetch.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }

        match self.llm.provider {
            LLMProvider::Groq => {
                if self.llm.api_key.is_none() {
                    return Err(anyhow!(
                        "GROQ_API_KEY not found in environment variables"
                    ));
                }
            }
            LLMProvider::OpenAI => {
                if self.llm.api_key.is_none() {
                    return Err(anyhow!("API key required for OpenAI provider"));
                }
            }
            LLMProvider::LMStudio => {
                if self.llm.endpoint.is_none() {
                    return Err(anyhow!("endpoint required for LMStudio provider"));
                }
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig {
                abbreviations: FRENCH_ABBREVIATIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            llm: LLMConfig::default(),
            fetch: FetchConfig {
                request_timeout_seconds: 30,
            },
            output: OutputConfig {
                transcript_dir: PathBuf::from("."),
                french_file: crate::transcript::FRENCH_TRANSCRIPT_FILE.to_string(),
                english_file: crate::transcript::ENGLISH_TRANSCRIPT_FILE.to_string(),
            },
            practice: PracticeConfig { enable_audio: true },
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_provider(mut self, provider: LLMProvider) -> Self {
        self.config.llm.provider = provider;
        self
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.config.llm.api_key = Some(api_key);
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.config.llm.model = model;
        self
    }

    pub fn with_transcript_dir(mut self, dir: PathBuf) -> Self {
        self.config.output.transcript_dir = dir;
        self
    }

    pub fn with_abbreviations(mut self, abbreviations: Vec<String>) -> Self {
        self.config.segmenter.abbreviations = abbreviations;
        self
    }

    pub fn enable_audio(mut self, enable: bool) -> Self {
        self.config.practice.enable_audio = enable;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
