//! siraj — command-line front-end for siraj-core
//!
//! Usage examples
//! --------------
//!
//! - Show catalog stats
//!   $ siraj --catalog restaurants.csv stats
//!
//! - Answer one utterance (spoken reply, or the structured result)
//!   $ siraj ask "خذني إلى مطعم الديوان"
//!   $ siraj ask --json "خذني إلى مطعم الديوان"
//!
//! - Inspect fuzzy candidates
//!   $ siraj resolve "الديوان" --top 5
//!
//! - Exact route lookup / dialog-manager tool reply
//!   $ siraj route "مطعم الديوان"
//!   $ siraj tool "الديوان"
//!
//! - Drive the wake-word session from stdin, one transcript per line
//!   $ siraj listen
//!
//! Configuration
//! -------------
//!
//! Settings come from `--config <file.toml>` (or `SIRAJ_CONFIG`); the
//! catalog path and threshold can be overridden with `--catalog`
//! (`CSV_PATH`) and `--threshold` (`SIRAJ_THRESHOLD`). Logs go to stderr;
//! raise verbosity with `-v` or set `RUST_LOG`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use siraj_core::voice::{Synthesizer, TextSynthesizer, TextTranscriber};
use siraj_core::{resolve_top, Assistant, Catalog, Session, Settings};
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(path) = args.catalog {
        settings.catalog_path = path;
    }
    if let Some(threshold) = args.threshold {
        settings.threshold = threshold;
    }

    // Without a catalog there is nothing to answer from: fail here.
    let catalog = Catalog::load_from_path(&settings.catalog_path, &settings.columns)
        .with_context(|| format!("loading catalog {}", settings.catalog_path.display()))?;
    let assistant = Assistant::from_settings(&catalog, &settings)?;

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Entries: {}", stats.entries);
            println!("  With route: {}", stats.with_route);
            println!("  Unnamed: {}", stats.unnamed);
        }

        Commands::Ask { utterance, json } => {
            if json {
                let value = match assistant.answer(&utterance) {
                    Ok(result) => serde_json::json!({ "found": result.found(), "result": result }),
                    Err(err) => serde_json::json!({ "found": false, "error": err.to_string() }),
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", assistant.reply(&utterance));
            }
        }

        Commands::Resolve { name, top } => {
            let candidates = resolve_top(&name, &catalog, top.max(1));
            if candidates.is_empty() {
                println!("Catalog has no named entries");
            }
            for c in candidates {
                let mark = if c.score >= settings.threshold { "✓" } else { " " };
                println!("{mark} {:>3}  {}", c.score, c.name);
            }
        }

        Commands::Route { name } => match catalog.lookup(&name) {
            "" => eprintln!("No route stored for: {name}"),
            route => println!("{route}"),
        },

        Commands::Tool { restaurant } => {
            println!("{}", assistant.route_tool_reply(&restaurant));
        }

        Commands::Listen => listen(Session::new(assistant, &settings.wake_word))?,
    }

    Ok(())
}

fn listen(mut session: Session<'_>) -> anyhow::Result<()> {
    let mut stt = TextTranscriber;
    let mut tts = TextSynthesizer;
    let mut out = std::io::stdout().lock();

    out.write_all(&tts.synthesize(session.greeting())?)?;
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if let Some(audio) = session.run_turn(line.as_bytes(), &mut stt, &mut tts)? {
            out.write_all(&audio)?;
            out.flush()?;
        }
    }
    out.write_all(&tts.synthesize(session.farewell())?)?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
