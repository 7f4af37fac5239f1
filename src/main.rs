use anyhow::{anyhow, Result};
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing::{error, info, warn};

use french_trainer::audio::SpeechFetcher;
use french_trainer::config::Config;
use french_trainer::evaluation::TranslationEvaluator;
use french_trainer::practice::{run_loop, PracticeSession};
use french_trainer::sentence::{load_sentence_pairs, Segmenter};
use french_trainer::transcript::{
    extract_video_id, save_transcript, TranscriptError, TranscriptFetcher, Translator,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("french_trainer=info,warn")
        .init();

    let matches = Command::new("French Trainer")
        .version("0.1.0")
        .about("French YouTube transcript extraction, translation and writing practice")
        .subcommand_required(true)
        .subcommand(
            Command::new("fetch")
                .about("Extract a French transcript from a YouTube video and translate it")
                .arg(
                    Arg::new("url")
                        .short('u')
                        .long("url")
                        .value_name("URL")
                        .help("YouTube video URL")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("practice")
                .about("Practice translating English prompts back into French")
                .arg(
                    Arg::new("french-file")
                        .short('f')
                        .long("french-file")
                        .value_name("FILE")
                        .help("French transcript file (defaults to the configured output)"),
                )
                .arg(
                    Arg::new("english-file")
                        .short('e')
                        .long("english-file")
                        .value_name("FILE")
                        .help("English transcript file (defaults to the configured output)"),
                )
                .arg(
                    Arg::new("no-audio")
                        .long("no-audio")
                        .help("Skip fetching spoken audio for practiced sentences")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .get_matches();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        let mut config = Config::default();
        config.apply_env();
        config
    });

    match matches.subcommand() {
        Some(("fetch", sub)) => {
            let url = sub.get_one::<String>("url").expect("url is required");
            run_fetch(&config, url).await
        }
        Some(("practice", sub)) => {
            let french_path = sub
                .get_one::<String>("french-file")
                .map(PathBuf::from)
                .unwrap_or_else(|| config.output.transcript_dir.join(&config.output.french_file));
            let english_path = sub
                .get_one::<String>("english-file")
                .map(PathBuf::from)
                .unwrap_or_else(|| config.output.transcript_dir.join(&config.output.english_file));
            let audio = config.practice.enable_audio && !sub.get_flag("no-audio");
            run_practice(&config, french_path, english_path, audio).await
        }
        _ => unreachable!("subcommand is required"),
    }
}

/// Fetch the French transcript for a video, translate it and save both files
async fn run_fetch(config: &Config, url: &str) -> Result<()> {
    config.validate()?;

    let video_id = extract_video_id(url)
        .ok_or_else(|| anyhow!("Invalid YouTube URL: {}", url))?;

    info!("🚀 Processing video: {}", video_id);

    let fetcher = TranscriptFetcher::new(config.fetch.request_timeout_seconds);
    let french_text = match fetcher.fetch_french(&video_id).await {
        Ok(text) => text,
        Err(e @ (TranscriptError::TranscriptsDisabled | TranscriptError::NoFrenchTranscript)) => {
            error!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    tokio::fs::create_dir_all(&config.output.transcript_dir).await?;
    let french_path = config.output.transcript_dir.join(&config.output.french_file);
    save_transcript(&french_path, &french_text).await?;

    let translator = Translator::from_config(&config.llm)?;
    let english_text = translator.translate(&french_text).await?;

    let english_path = config.output.transcript_dir.join(&config.output.english_file);
    save_transcript(&english_path, &english_text).await?;

    info!(
        "🎉 Transcripts ready: {} and {}",
        french_path.display(),
        english_path.display()
    );

    Ok(())
}

/// Load the transcript pair and run the interactive practice loop
async fn run_practice(
    config: &Config,
    french_path: PathBuf,
    english_path: PathBuf,
    audio: bool,
) -> Result<()> {
    config.validate()?;

    let segmenter = Segmenter::with_abbreviations(config.segmenter.abbreviations.clone())?;
    let pairs = load_sentence_pairs(&segmenter, &french_path, &english_path).await?;

    if pairs.is_empty() {
        error!("Could not parse any sentence pairs from the transcripts");
        return Ok(());
    }

    let evaluator = TranslationEvaluator::from_config(&config.llm)?;
    let speech = audio.then(|| SpeechFetcher::new(config.fetch.request_timeout_seconds));
    let session = PracticeSession::new(pairs);

    run_loop(
        session,
        &evaluator,
        speech.as_ref(),
        &config.output.transcript_dir,
    )
    .await
}
