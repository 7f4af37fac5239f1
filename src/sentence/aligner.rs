use serde::{Deserialize, Serialize};

/// A positionally aligned French/English sentence pair
///
/// Pairs are linked strictly by index; no semantic correspondence is
/// guaranteed beyond position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    /// Original French sentence
    pub french: String,
    /// Reference English translation
    pub english: String,
}

impl SentencePair {
    pub fn new(french: String, english: String) -> Self {
        Self { french, english }
    }
}

/// Pair two sentence sequences by index, truncating the longer one
///
/// Sentences that merge or split differently across the two languages are
/// not detected; this is a known precision limitation.
pub fn align_sentences(french: &[String], english: &[String]) -> Vec<SentencePair> {
    let min_len = french.len().min(english.len());

    (0..min_len)
        .map(|i| SentencePair::new(french[i].clone(), english[i].clone()))
        .collect()
}
