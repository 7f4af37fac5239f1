use crate::evaluation::EvaluationRecord;
use crate::sentence::SentencePair;
use serde::{Deserialize, Serialize};

/// Accumulated statistics for one practice session
///
/// Counters only grow; `total_score` is a sum, not an average. A fresh
/// accumulator replaces this one on session reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub sentences_completed: u32,
    pub total_score: i64,
    pub critical_errors: u32,
    pub minor_errors: u32,
    pub perfect_count: u32,
}

impl SessionStats {
    /// Fold one completed evaluation into the session totals
    pub fn record(&mut self, evaluation: &EvaluationRecord) {
        self.sentences_completed += 1;
        self.total_score += evaluation.overall_score as i64;
        self.critical_errors += evaluation.critical_errors.len() as u32;
        self.minor_errors += evaluation.minor_errors.len() as u32;
        if evaluation.is_perfect() {
            self.perfect_count += 1;
        }
    }

    /// Average score over completed sentences, if any
    pub fn average_score(&self) -> Option<f64> {
        if self.sentences_completed == 0 {
            None
        } else {
            Some(self.total_score as f64 / self.sentences_completed as f64)
        }
    }
}

/// Sequential controller over an aligned sentence-pair sequence
///
/// Owns the pairs and the stats for one session lifetime. Strictly
/// sequential: one sentence is in flight at a time, and skipped sentences
/// leave the stats untouched.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    pairs: Vec<SentencePair>,
    current_index: usize,
    stats: SessionStats,
}

impl PracticeSession {
    /// Start a session over aligned sentence pairs
    pub fn new(pairs: Vec<SentencePair>) -> Self {
        Self {
            pairs,
            current_index: 0,
            stats: SessionStats::default(),
        }
    }

    /// The pair currently being practiced, if the session is not complete
    pub fn current(&self) -> Option<&SentencePair> {
        self.pairs.get(self.current_index)
    }

    /// Fold a completed evaluation into the stats without advancing
    pub fn submit(&mut self, evaluation: &EvaluationRecord) {
        self.stats.record(evaluation);
    }

    /// Move to the next sentence
    pub fn advance(&mut self) {
        if self.current_index < self.pairs.len() {
            self.current_index += 1;
        }
    }

    /// Move to the next sentence without recording anything
    pub fn skip(&mut self) {
        self.advance();
    }

    /// Restart from the first sentence with a fresh accumulator
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.stats = SessionStats::default();
    }

    /// (1-based position, total) for progress display
    pub fn progress(&self) -> (usize, usize) {
        let total = self.pairs.len();
        ((self.current_index + 1).min(total), total)
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.pairs.len()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: usize) -> Vec<SentencePair> {
        (0..n)
            .map(|i| SentencePair::new(format!("F{}.", i), format!("E{}.", i)))
            .collect()
    }

    fn record_with_score(score: i32) -> EvaluationRecord {
        EvaluationRecord {
            overall_score: score,
            ..EvaluationRecord::default()
        }
    }

    #[test]
    fn test_walks_pairs_in_order() {
        let mut session = PracticeSession::new(pairs(2));
        assert_eq!(session.current().unwrap().french, "F0.");
        session.advance();
        assert_eq!(session.current().unwrap().french, "F1.");
        session.advance();
        assert!(session.is_complete());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_submit_accumulates_stats() {
        let mut session = PracticeSession::new(pairs(3));

        let mut good = record_with_score(97);
        session.submit(&good);

        good.overall_score = 60;
        good.critical_errors.push(Default::default());
        good.minor_errors.push(Default::default());
        good.minor_errors.push(Default::default());
        session.submit(&good);

        let stats = session.stats();
        assert_eq!(stats.sentences_completed, 2);
        assert_eq!(stats.total_score, 157);
        assert_eq!(stats.critical_errors, 1);
        assert_eq!(stats.minor_errors, 2);
        assert_eq!(stats.perfect_count, 1);
        assert_eq!(stats.average_score(), Some(78.5));
    }

    #[test]
    fn test_skip_leaves_stats_untouched() {
        let mut session = PracticeSession::new(pairs(2));
        session.skip();
        assert_eq!(session.stats(), &SessionStats::default());
        assert_eq!(session.current().unwrap().french, "F1.");
    }

    #[test]
    fn test_reset_recreates_stats() {
        let mut session = PracticeSession::new(pairs(2));
        session.submit(&record_with_score(80));
        session.advance();

        session.reset();
        assert_eq!(session.stats(), &SessionStats::default());
        assert_eq!(session.current().unwrap().french, "F0.");
        assert_eq!(session.stats().average_score(), None);
    }

    #[test]
    fn test_progress_clamps_at_end() {
        let mut session = PracticeSession::new(pairs(2));
        assert_eq!(session.progress(), (1, 2));
        session.advance();
        assert_eq!(session.progress(), (2, 2));
        session.advance();
        assert_eq!(session.progress(), (2, 2));
    }

    #[test]
    fn test_perfect_threshold_is_95() {
        let mut session = PracticeSession::new(pairs(2));
        session.submit(&record_with_score(95));
        session.submit(&record_with_score(94));
        assert_eq!(session.stats().perfect_count, 1);
    }
}
