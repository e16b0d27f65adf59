//! Syllabet CLI — syllabify ARPABET pronunciations and score complexity.
//!
//! Pronunciations arrive as plain data: command-line arguments for single
//! words, or one whitespace-separated pronunciation per line for batches.
//! Dictionary lookup is somebody else's job.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use syllabet_core::{complexity_score, destress, pretty_print, syllabify};

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "syllabet",
    about = "ARPABET syllabification and word-complexity scoring",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Syllabify a single pronunciation
    Syllabify(SyllabifyArgs),
    /// Compute the Word Complexity Measure of a single pronunciation
    Score(ScoreArgs),
    /// Syllabify and score pronunciations line by line
    Batch(BatchArgs),
}

// ─── Shared arguments (embedded in each subcommand) ──────────────

#[derive(Parser, Debug)]
struct SharedArgs {
    /// Keep medial S-clusters as onsets after stressed lax vowels
    #[arg(long, default_value_t = false)]
    no_alaska: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl SharedArgs {
    fn alaska_rule(&self) -> bool {
        !self.no_alaska
    }
}

// ─── Syllabify ───────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Syllabify one ARPABET pronunciation")]
struct SyllabifyArgs {
    /// ARPABET phonemes, e.g.: AH0 L AE1 S K AH0
    #[arg(required = true)]
    phonemes: Vec<String>,

    #[command(flatten)]
    shared: SharedArgs,

    /// Strip stress digits from nuclei before printing
    #[arg(long, default_value_t = false)]
    destress: bool,

    /// Emit syllable records as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

// ─── Score ───────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Compute the Word Complexity Measure")]
struct ScoreArgs {
    /// ARPABET phonemes, e.g.: K AE1 T
    #[arg(required = true)]
    phonemes: Vec<String>,

    #[command(flatten)]
    shared: SharedArgs,
}

// ─── Batch ───────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Process a file of pronunciations, one per line")]
struct BatchArgs {
    /// Input file of whitespace-separated phonemes ("-" for stdin)
    input: PathBuf,

    #[command(flatten)]
    shared: SharedArgs,

    /// Emit one JSON object per line instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let log_level = match &cli.command {
        Command::Syllabify(a) if a.shared.verbose => "debug",
        Command::Score(a) if a.shared.verbose => "debug",
        Command::Batch(a) if a.shared.verbose => "debug",
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Syllabify(args) => run_syllabify(args),
        Command::Score(args) => run_score(args),
        Command::Batch(args) => run_batch(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Runners ─────────────────────────────────────────────────────

fn run_syllabify(args: SyllabifyArgs) -> Result<()> {
    let mut syllables = syllabify(&args.phonemes, args.shared.alaska_rule())
        .with_context(|| format!("Failed to syllabify {:?}", args.phonemes))?;

    if args.destress {
        syllables = destress(&syllables);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&syllables)?);
    } else {
        println!("{}", pretty_print(&syllables));
    }
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<()> {
    let syllables = syllabify(&args.phonemes, args.shared.alaska_rule())
        .with_context(|| format!("Failed to syllabify {:?}", args.phonemes))?;
    let score = complexity_score(&syllables)?;
    println!("{score}");
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = if args.input == PathBuf::from("-") {
        Box::new(std::io::stdin().lock())
    } else {
        if !args.input.exists() {
            bail!("File not found: {}", args.input.display());
        }
        let file = std::fs::File::open(&args.input)
            .with_context(|| format!("Failed to open {}", args.input.display()))?;
        Box::new(std::io::BufReader::new(file))
    };

    let alaska_rule = args.shared.alaska_rule();
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let pron = parse_pron(&line);
        if pron.is_empty() {
            continue;
        }

        // An unsyllabifiable pronunciation skips the line, never the batch.
        let syllables = match syllabify(&pron, alaska_rule) {
            Ok(syllables) => syllables,
            Err(e) => {
                log::warn!("line {}: {}", lineno + 1, e);
                skipped += 1;
                continue;
            }
        };
        let score = complexity_score(&syllables)?;

        if args.json {
            let record = serde_json::json!({
                "pronunciation": pron,
                "syllables": syllables,
                "wcm": score,
            });
            println!("{record}");
        } else {
            println!("{}\t{}", pretty_print(&syllables), score);
        }
        processed += 1;
    }

    log::info!("Processed {processed} pronunciation(s), skipped {skipped}");
    Ok(())
}

/// Split a batch line into phonemes. Blank lines and `#` comments are empty.
fn parse_pron(line: &str) -> Vec<String> {
    let line = line.trim();
    if line.starts_with('#') {
        return Vec::new();
    }
    line.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pron_splits_whitespace() {
        assert_eq!(parse_pron("  K  AE1\tT "), vec!["K", "AE1", "T"]);
    }

    #[test]
    fn test_parse_pron_blank_and_comment() {
        assert!(parse_pron("").is_empty());
        assert!(parse_pron("   ").is_empty());
        assert!(parse_pron("# CAT K AE1 T").is_empty());
    }
}
