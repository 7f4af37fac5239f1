pub mod aligner;
pub mod segmenter;

pub use aligner::{align_sentences, SentencePair};
pub use segmenter::{Segmenter, FRENCH_ABBREVIATIONS};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Load a transcript file pair, segment both sides and align them
///
/// The whole files are read as UTF-8 and fed through the segmenter; pairing
/// is positional (see [`align_sentences`]).
pub async fn load_sentence_pairs<P: AsRef<Path>>(
    segmenter: &Segmenter,
    french_path: P,
    english_path: P,
) -> Result<Vec<SentencePair>> {
    let french_text = tokio::fs::read_to_string(french_path.as_ref())
        .await
        .with_context(|| format!("failed to read {}", french_path.as_ref().display()))?;
    let english_text = tokio::fs::read_to_string(english_path.as_ref())
        .await
        .with_context(|| format!("failed to read {}", english_path.as_ref().display()))?;

    let french_sentences = segmenter.segment(&french_text);
    let english_sentences = segmenter.segment(&english_text);

    let pairs = align_sentences(&french_sentences, &english_sentences);
    info!(
        "📚 Aligned {} sentence pairs ({} French / {} English sentences)",
        pairs.len(),
        french_sentences.len(),
        english_sentences.len()
    );

    Ok(pairs)
}
