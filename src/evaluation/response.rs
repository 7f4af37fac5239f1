use serde::{Deserialize, Serialize};

/// A single translation error reported by the evaluator
///
/// The `type` tag is an open vocabulary; whatever string the model emits is
/// kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorEntry {
    #[serde(rename = "type")]
    pub error_type: String,
    pub original: String,
    pub student_wrote: String,
    pub explanation: String,
}

/// Structured evaluation of a learner's translation attempt
///
/// Every field deserializes with a typed default, so a record is always
/// fully populated even when the model omits keys. Display code indexes all
/// fields unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationRecord {
    pub overall_score: i32,
    pub meaning_preserved: bool,
    pub critical_errors: Vec<ErrorEntry>,
    pub minor_errors: Vec<ErrorEntry>,
    pub feedback: String,
    pub corrected_version: String,
}

impl EvaluationRecord {
    /// Fallback record when the model response could not be parsed as JSON
    pub fn unparseable(user_french: &str) -> Self {
        Self {
            overall_score: 50,
            meaning_preserved: true,
            critical_errors: Vec::new(),
            minor_errors: Vec::new(),
            feedback: "Unable to parse evaluation. Please try again.".to_string(),
            corrected_version: user_french.to_string(),
        }
    }

    /// Fallback record when the evaluation call itself failed
    pub fn evaluation_error(detail: &str, user_french: &str) -> Self {
        Self {
            overall_score: 0,
            meaning_preserved: false,
            critical_errors: Vec::new(),
            minor_errors: Vec::new(),
            feedback: format!("Evaluation error: {}", detail),
            corrected_version: user_french.to_string(),
        }
    }

    /// A perfect sentence for session-stat purposes
    pub fn is_perfect(&self) -> bool {
        self.overall_score >= 95
    }
}

/// Isolate a JSON payload embedded in arbitrary surrounding text
///
/// Handles markdown code fences (with or without a `json` tag) and
/// leading/trailing prose. The brace scan always runs, including after
/// fence extraction, and is what handles fence-less responses. No
/// validation or parsing happens here: if no brace pair exists the trimmed
/// text is returned unchanged and the caller's JSON parse fails as an
/// error.
pub fn extract_json(text: &str) -> String {
    let mut text = text;

    if let Some(idx) = text.find("```json") {
        let after = &text[idx + "```json".len()..];
        text = match after.find("```") {
            Some(end) => &after[..end],
            None => after,
        };
    } else if text.contains("```") {
        let parts: Vec<&str> = text.split("```").collect();
        if parts.len() >= 2 {
            text = parts[1];
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if end > start {
            text = &text[start..=end];
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bare_json() {
        assert_eq!(extract_json(r#"{"a":1}"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_extract_trailing_prose() {
        assert_eq!(extract_json(r#"{"a":1} trailing"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_extract_leading_prose() {
        assert_eq!(extract_json(r#"leading {"a":1}"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_extract_json_fence() {
        let text = "Here is the result:\n```json\n{\"overall_score\": 85}\n```\nHope that helps!";
        assert_eq!(extract_json(text), "{\"overall_score\": 85}");
    }

    #[test]
    fn test_extract_plain_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), "{\"a\": 1}");
    }

    #[test]
    fn test_no_braces_returns_trimmed_text() {
        assert_eq!(extract_json("  not json at all  "), "not json at all");
    }

    #[test]
    fn test_round_trip_through_serde() {
        let original = serde_json::json!({"overall_score": 90, "feedback": "Bien."});
        let embedded = format!("Sure!\n```json\n{}\n```", original);
        let extracted = extract_json(&embedded);
        let parsed: serde_json::Value = serde_json::from_str(&extracted).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let record: EvaluationRecord =
            serde_json::from_str(r#"{"overall_score": 70, "feedback": "Pas mal."}"#).unwrap();
        assert_eq!(record.overall_score, 70);
        assert!(!record.meaning_preserved);
        assert!(record.critical_errors.is_empty());
        assert!(record.minor_errors.is_empty());
        assert_eq!(record.feedback, "Pas mal.");
        assert_eq!(record.corrected_version, "");
    }

    #[test]
    fn test_unknown_error_type_accepted() {
        let json = r#"{
            "overall_score": 60,
            "meaning_preserved": true,
            "critical_errors": [
                {"type": "SOMETHING_NEW", "original": "le", "student_wrote": "la", "explanation": "gender"}
            ]
        }"#;
        let record: EvaluationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.critical_errors.len(), 1);
        assert_eq!(record.critical_errors[0].error_type, "SOMETHING_NEW");
    }

    #[test]
    fn test_fallback_records() {
        let parse_fb = EvaluationRecord::unparseable("ma phrase");
        assert_eq!(parse_fb.overall_score, 50);
        assert!(parse_fb.meaning_preserved);
        assert_eq!(parse_fb.corrected_version, "ma phrase");

        let call_fb = EvaluationRecord::evaluation_error("timeout", "ma phrase");
        assert_eq!(call_fb.overall_score, 0);
        assert!(!call_fb.meaning_preserved);
        assert!(call_fb.feedback.contains("timeout"));
    }

    #[test]
    fn test_perfect_threshold() {
        let mut record = EvaluationRecord::default();
        record.overall_score = 95;
        assert!(record.is_perfect());
        record.overall_score = 94;
        assert!(!record.is_perfect());
    }
}
