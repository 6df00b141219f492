//! Caesar Cipher Breaker - CLI
//!
//! Breaks single-shift substitution ciphers by letter-frequency analysis,
//! and encrypts, decrypts, analyzes, or benchmarks on request.

use anyhow::{Context, Result, bail};
use caesar_breaker::{
    analysis::{Cracker, StatisticKind},
    commands::{analyze_text, crack_text, decrypt_text, encrypt_text, run_benchmark},
    core::ReferenceDistribution,
    output::{print_analysis_result, print_benchmark_result, print_crack_result},
    reference::{ENGLISH, SAMPLE_TEXT, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "caesar_breaker",
    about = "Break Caesar ciphers by comparing letter frequencies against English statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Statistic: chi-squared (default) or dot-product
    #[arg(short, long, global = true, default_value = "chi-squared")]
    statistic: String,

    /// Reference distribution: 'english' (default) or path to a frequency file
    #[arg(short = 'r', long, global = true, default_value = "english")]
    reference: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Count letter frequencies in a text
    Analyze {
        /// Text to analyze (or use --file)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Recover the key of a Caesar-enciphered text and decrypt it
    Crack {
        /// Ciphertext to break (or use --file)
        text: Option<String>,

        /// Read the ciphertext from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Show the score for every candidate shift
        #[arg(short, long)]
        verbose: bool,
    },

    /// Encrypt a text under a known shift
    Encrypt {
        /// Text to encrypt (or use --file)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Shift to apply, 0-25
        #[arg(short, long)]
        key: u8,
    },

    /// Decrypt a text under a known shift
    Decrypt {
        /// Text to decrypt (or use --file)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Shift that was applied, 0-25
        #[arg(short, long)]
        key: u8,
    },

    /// Benchmark key recovery on random corpus windows
    Benchmark {
        /// Number of trials to run
        #[arg(short = 'n', long, default_value = "100")]
        trials: usize,

        /// Window size in characters for each trial
        #[arg(short, long, default_value = "400")]
        window: usize,

        /// Corpus file to sample from (default: embedded English prose)
        #[arg(short, long)]
        corpus: Option<PathBuf>,
    },
}

/// Load the reference distribution selected by the -r flag
///
/// - "english": embedded published English statistics
/// - "<path>": load a custom `letter weight` table from file
fn load_reference(reference_mode: &str) -> Result<ReferenceDistribution> {
    match reference_mode {
        "english" => Ok(ENGLISH.clone()),
        path => load_from_file(path)
            .with_context(|| format!("loading reference distribution from '{path}'")),
    }
}

/// Resolve a command's text input from its argument or file flag
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
        }
        (Some(_), Some(_)) => bail!("Give either a text argument or --file, not both"),
        (None, None) => bail!("Nothing to process: give a text argument or --file"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let reference = load_reference(&cli.reference)?;
    let statistic = StatisticKind::from_name(&cli.statistic);

    match cli.command {
        Commands::Analyze { text, file } => {
            let input = read_input(text, file)?;
            let result = analyze_text(&input);
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Crack {
            text,
            file,
            verbose,
        } => {
            let input = read_input(text, file)?;
            let cracker = Cracker::new(statistic, &reference);
            let result = crack_text(&input, &cracker).map_err(|e| anyhow::anyhow!(e))?;
            print_crack_result(&result, verbose);
            Ok(())
        }
        Commands::Encrypt { text, file, key } => {
            let input = read_input(text, file)?;
            let output = encrypt_text(&input, key).map_err(|e| anyhow::anyhow!(e))?;
            println!("{output}");
            Ok(())
        }
        Commands::Decrypt { text, file, key } => {
            let input = read_input(text, file)?;
            let output = decrypt_text(&input, key).map_err(|e| anyhow::anyhow!(e))?;
            println!("{output}");
            Ok(())
        }
        Commands::Benchmark {
            trials,
            window,
            corpus,
        } => {
            let corpus_text = match corpus {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("reading corpus {}", path.display()))?,
                None => SAMPLE_TEXT.to_string(),
            };

            let cracker = Cracker::new(statistic, &reference);
            let result = run_benchmark(&cracker, &corpus_text, trials, window);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
