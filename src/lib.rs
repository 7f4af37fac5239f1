/// French Trainer
///
/// Extracts French transcripts from YouTube videos, translates them to
/// English, and drives an LLM-graded writing-practice loop over the aligned
/// sentence pairs.

pub mod audio;
pub mod config;
pub mod evaluation;
pub mod llm;
pub mod practice;
pub mod sentence;
pub mod transcript;

// Re-export main types for easy access
pub use crate::audio::SpeechFetcher;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::evaluation::{
    calculate_score, extract_json, ErrorEntry, EvaluationRecord, TranslationEvaluator,
};
pub use crate::llm::{LLMConfig, LLMProvider};
pub use crate::practice::{PracticeSession, SessionStats};
pub use crate::sentence::{align_sentences, load_sentence_pairs, Segmenter, SentencePair};
pub use crate::transcript::{extract_video_id, TranscriptError, TranscriptFetcher, Translator};
