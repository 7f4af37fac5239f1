pub mod store;
pub mod translator;
pub mod youtube;

pub use store::{
    load_transcript, save_transcript, ENGLISH_TRANSCRIPT_FILE, FRENCH_TRANSCRIPT_FILE,
};
pub use translator::Translator;
pub use youtube::{extract_video_id, TranscriptError, TranscriptFetcher};
