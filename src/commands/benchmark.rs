//! Benchmark command
//!
//! Measures key-recovery accuracy and throughput by encrypting random
//! windows of an English corpus under random keys and breaking them.

use crate::analysis::{Cracker, Statistic};
use crate::cipher;
use crate::core::Key;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub trials: usize,
    pub recovered: usize,
    pub accuracy: f64,
    /// Window size each trial was cut to, in characters
    pub window_chars: usize,
    /// How often each wrongly-recovered key appeared
    pub miss_distribution: HashMap<u8, usize>,
    pub duration: Duration,
    pub trials_per_second: f64,
}

/// Run recovery trials against windows of a corpus
///
/// Each trial slices a random `window_chars`-sized window out of the
/// corpus, encrypts it under a random key, and checks whether the cracker
/// recovers that key. Windows shorter than the corpus allows are clamped
/// to the corpus itself.
pub fn run_benchmark<S: Statistic + Sync>(
    cracker: &Cracker<'_, S>,
    corpus: &str,
    trials: usize,
    window_chars: usize,
) -> BenchmarkResult {
    let chars: Vec<char> = corpus.chars().collect();
    let window_chars = window_chars.min(chars.len());

    let pb = ProgressBar::new(trials as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut rng = rand::rng();
    let mut recovered = 0;
    let mut miss_distribution: HashMap<u8, usize> = HashMap::new();

    let start = Instant::now();

    for trial in 0..trials {
        let offset = if chars.len() > window_chars {
            rng.random_range(0..=chars.len() - window_chars)
        } else {
            0
        };
        let window: String = chars[offset..offset + window_chars].iter().collect();

        let key = Key::new(rng.random_range(0..Key::COUNT as u8))
            .expect("sampled inside the key space");
        let ciphertext = cipher::encrypt(&window, key);

        match cracker.crack(&ciphertext) {
            Ok(crack) if crack.selection.key == key => recovered += 1,
            Ok(crack) => {
                *miss_distribution.entry(crack.selection.key.value()).or_insert(0) += 1;
            }
            Err(_) => {
                // A letterless window carries no signal; count it as a miss
                *miss_distribution.entry(key.value()).or_insert(0) += 1;
            }
        }

        if trial % 16 == 0 && trial > 0 {
            let rate = recovered as f64 / trial as f64 * 100.0;
            pb.set_message(format!("Recovery: {rate:.1}%"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();

    BenchmarkResult {
        trials,
        recovered,
        accuracy: if trials > 0 {
            recovered as f64 / trials as f64
        } else {
            0.0
        },
        window_chars,
        miss_distribution,
        duration,
        trials_per_second: trials as f64 / duration.as_secs_f64(),
    }
}
