use super::session::{PracticeSession, SessionStats};
use crate::audio::SpeechFetcher;
use crate::evaluation::{EvaluationRecord, TranslationEvaluator};
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// Interactive terminal loop over a practice session
///
/// One sentence is in flight at a time; the loop blocks on the evaluation
/// call before accepting the next submission.
pub async fn run_loop(
    mut session: PracticeSession,
    evaluator: &TranslationEvaluator,
    speech: Option<&SpeechFetcher>,
    audio_dir: &Path,
) -> Result<()> {
    println!("French Writing Practice: translate each English sentence into French.");
    println!("Commands: :skip  :show  :reset  :quit");

    while let Some(pair) = session.current().cloned() {
        let (position, total) = session.progress();
        println!("\n─── Sentence {}/{} ───", position, total);
        println!("Translate to French: {}", pair.english);

        let input = prompt_line("> ")?;
        let input = input.trim();

        match input {
            "" => continue,
            ":quit" => break,
            ":skip" => {
                session.skip();
                continue;
            }
            ":show" => {
                println!("Original French: {}", pair.french);
                continue;
            }
            ":reset" => {
                session.reset();
                continue;
            }
            attempt => {
                println!("Evaluating your translation...");
                let record = evaluator.evaluate(&pair.french, &pair.english, attempt).await;
                display_evaluation(&record, &pair.french, attempt);
                session.submit(&record);

                if let Some(speech) = speech {
                    save_sentence_audio(speech, &pair.french, audio_dir).await;
                }

                session.advance();
            }
        }
    }

    display_summary(session.stats());
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn display_evaluation(record: &EvaluationRecord, french_original: &str, attempt: &str) {
    let score = record.overall_score;
    let verdict = if score >= 90 {
        "Excellent!"
    } else if score >= 70 {
        "Good job!"
    } else if score >= 50 {
        "Keep practicing!"
    } else {
        "Needs improvement"
    };
    println!("\nScore: {}/100 - {}", score, verdict);

    println!("Original French:  {}", french_original);
    println!("Your translation: {}", attempt);

    if record.critical_errors.is_empty() && record.minor_errors.is_empty() {
        println!("No errors found! Great job!");
    } else {
        if !record.critical_errors.is_empty() {
            println!("\nCritical errors:");
            for error in &record.critical_errors {
                println!(
                    "  [{}] you wrote \"{}\", should be \"{}\" ({})",
                    error.error_type, error.student_wrote, error.original, error.explanation
                );
            }
        }
        if !record.minor_errors.is_empty() {
            println!("\nMinor errors:");
            for error in &record.minor_errors {
                println!(
                    "  [{}] you wrote \"{}\", should be \"{}\" ({})",
                    error.error_type, error.student_wrote, error.original, error.explanation
                );
            }
        }
    }

    if !record.feedback.is_empty() {
        println!("\nFeedback: {}", record.feedback);
    }
    if !record.corrected_version.is_empty() {
        println!("Suggested correction: {}", record.corrected_version);
    }
}

async fn save_sentence_audio(speech: &SpeechFetcher, text: &str, audio_dir: &Path) {
    match speech.fetch_french_audio(text).await {
        Ok(bytes) => {
            let path = audio_dir.join("sentence_audio.mp3");
            match tokio::fs::write(&path, &bytes).await {
                Ok(()) => println!("Audio saved: {}", path.display()),
                Err(e) => warn!("Could not save audio: {}", e),
            }
        }
        Err(e) => warn!("Audio unavailable: {}", e),
    }
}

fn display_summary(stats: &SessionStats) {
    println!("\n═══ Session complete ═══");
    println!("Sentences completed: {}", stats.sentences_completed);
    match stats.average_score() {
        Some(avg) => println!("Average score:       {:.1}%", avg),
        None => println!("No sentences were evaluated this session."),
    }
    println!("Perfect sentences:   {}", stats.perfect_count);
    println!("Critical errors:     {}", stats.critical_errors);
    println!("Minor errors:        {}", stats.minor_errors);
}
