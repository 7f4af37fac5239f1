use super::response::{extract_json, EvaluationRecord};
use crate::llm::{create_llm, ChatMessage, LLMConfig, LLM};
use anyhow::Result;
use tracing::{debug, warn};

/// Longest prefix of a raw model response kept in diagnostic logs
const RAW_RESPONSE_LOG_LIMIT: usize = 500;

const EVALUATION_PROMPT: &str = r#"You are a French language teacher evaluating a student's translation.

ORIGINAL FRENCH SENTENCE:
{french_sentence}

REFERENCE ENGLISH TRANSLATION:
{reference_english}

STUDENT'S FRENCH TRANSLATION:
{user_french}

Evaluate the student's French translation against the original. Respond in JSON format:

{
  "overall_score": <0-100>,
  "meaning_preserved": <true/false>,
  "critical_errors": [
    {
      "type": "WRONG_WORD|NEGATION|SUBJECT_OBJECT|VERB_TENSE|GENDER",
      "original": "<correct text>",
      "student_wrote": "<what student wrote>",
      "explanation": "<brief explanation>"
    }
  ],
  "minor_errors": [
    {
      "type": "SPELLING|ARTICLE|WORD_ORDER|ACCENT|CONJUGATION",
      "original": "<correct text>",
      "student_wrote": "<what student wrote>",
      "explanation": "<brief explanation>"
    }
  ],
  "feedback": "<2-3 sentence constructive feedback>",
  "corrected_version": "<student's text with corrections applied>"
}

Scoring guidelines:
- 90-100: Near perfect, minor stylistic differences only
- 70-89: Good understanding, minor grammatical errors
- 50-69: Core meaning preserved but significant errors
- 30-49: Partial understanding, critical errors present
- 0-29: Major meaning errors or incomprehensible

Be encouraging but accurate. Focus on learning."#;

/// LLM-backed translation evaluator
///
/// Owns an explicitly constructed LLM client; every failure on the model
/// path is absorbed into a well-formed [`EvaluationRecord`], so display
/// code never branches on errors.
pub struct TranslationEvaluator {
    llm: Box<dyn LLM>,
}

impl TranslationEvaluator {
    /// Create an evaluator around an existing LLM client
    pub fn new(llm: Box<dyn LLM>) -> Self {
        Self { llm }
    }

    /// Create an evaluator from provider configuration
    pub fn from_config(config: &LLMConfig) -> Result<Self> {
        Ok(Self {
            llm: create_llm(config)?,
        })
    }

    /// Evaluate a learner's French translation attempt
    ///
    /// The reported `overall_score` is authoritative when parsing succeeds.
    /// On a parse failure the raw response is logged truncated and a
    /// score-50 record substituted; on a call failure a score-0 record
    /// carries the error detail.
    pub async fn evaluate(
        &self,
        french_sentence: &str,
        reference_english: &str,
        user_french: &str,
    ) -> EvaluationRecord {
        let prompt = EVALUATION_PROMPT
            .replace("{french_sentence}", french_sentence)
            .replace("{reference_english}", reference_english)
            .replace("{user_french}", user_french);

        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: "You are a French language evaluation assistant. Always respond with valid JSON only.".to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: prompt,
            },
        ];

        let response = match self.llm.chat(messages).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Evaluation call failed: {}", e);
                return EvaluationRecord::evaluation_error(&e.to_string(), user_french);
            }
        };

        debug!(
            "Evaluation response received (tokens: {:?})",
            response.tokens_used
        );

        let cleaned = extract_json(&response.content);
        match serde_json::from_str::<EvaluationRecord>(&cleaned) {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    "Failed to parse evaluation JSON ({}); raw response: {}",
                    e,
                    truncate(&response.content, RAW_RESPONSE_LOG_LIMIT)
                );
                EvaluationRecord::unparseable(user_french)
            }
        }
    }

    /// Check whether the underlying provider is reachable
    pub async fn is_available(&self) -> bool {
        self.llm.is_available().await
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
