//! Replay recorded landmark frames through a workout session.
//!
//! Input is JSON lines: one frame per line, each frame an array of
//! `{x, y, z?, visibility?}` records in body-part index order.
//! Usage: cargo run --bin form-replay -- --frames session.jsonl --exercise squat

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use form_engine::{EngineConfig, Landmark, WorkoutSession};

#[derive(Parser, Debug)]
#[command(name = "form-replay")]
#[command(about = "Replay recorded pose landmarks through the form analyzer")]
struct Args {
    /// JSON-lines file with one landmark frame per line
    #[arg(short, long)]
    frames: PathBuf,

    /// Exercise to analyze (squat or deadlift); overrides the config file
    #[arg(short, long)]
    exercise: Option<String>,

    /// Engine config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every frame's phase and issues
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(exercise) = args.exercise {
        config.exercise = exercise;
    }

    let mut session = WorkoutSession::from_config(&config)?;

    let file = File::open(&args.frames)
        .with_context(|| format!("opening {}", args.frames.display()))?;

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let landmarks: Vec<Landmark> = serde_json::from_str(&line)
            .with_context(|| format!("line {}: malformed frame", line_no + 1))?;

        let Some(report) = session.process(&landmarks) else {
            log::debug!("line {}: skipped (low visibility)", line_no + 1);
            continue;
        };

        if args.verbose {
            let issues: Vec<&str> = report.analysis.issues.iter().map(|i| i.id()).collect();
            println!(
                "{:>6}  {:<10} knee {:>6.1}  hip {:>6.1}  {}",
                line_no + 1,
                report.analysis.phase.name(),
                report.analysis.angles.knee,
                report.analysis.angles.hip,
                issues.join(",")
            );
        }

        if let Some(rep) = &report.rep {
            let verdict = if rep.good_form { "good" } else { "bad" };
            println!("rep {:>3}: {}", rep.number, verdict);
        }
        if let Some(phrase) = report.cue_phrase {
            println!("  cue: {}", phrase);
        }
    }

    println!("{}", serde_json::to_string_pretty(&session.summary())?);

    Ok(())
}
