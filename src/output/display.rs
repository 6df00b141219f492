//! Display functions for command results

use super::formatters::frequency_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, CrackResult};
use crate::core::alphabet::{LetterCase, letter};
use colored::Colorize;

/// Print the result of a frequency analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "FREQUENCY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} letters, {} distinct",
        result.total_letters, result.distinct_letters
    );

    if result.total_letters == 0 {
        println!("{}", "   No letters found - nothing to analyze.".yellow());
        return;
    }

    let chart_max = result
        .proportions
        .as_ref()
        .map_or(0.0, |p| p.values().copied().fold(0.0_f64, f64::max));

    println!();
    for ord in 0..26u8 {
        let c = letter(ord, LetterCase::Lower);
        let count = result.counts[&c];
        let proportion = result
            .proportions
            .as_ref()
            .map_or(0.0, |p| p[&c]);

        let bar = frequency_bar(proportion, chart_max, 30);
        println!(
            "   {} [{}] {:4}  {}",
            c.to_ascii_uppercase(),
            bar.green(),
            count,
            format!("{:.1}%", proportion * 100.0).bright_yellow()
        );
    }
}

/// Print the result of breaking a ciphertext
pub fn print_crack_result(result: &CrackResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Recovered key: {}",
        result.key.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n   Letters analyzed: {}",
        result.total_letters.to_string().bright_yellow()
    );
    println!("   Best score:       {:.6} (lower fits better)", result.score);

    if !result.near_ties.is_empty() {
        let ties: Vec<String> = result.near_ties.iter().map(u8::to_string).collect();
        println!(
            "{}",
            format!(
                "   ⚠ Shifts {} scored within tolerance of the winner",
                ties.join(", ")
            )
            .yellow()
        );
    }

    if verbose {
        println!("\n   {}", "Score per candidate shift:".bright_cyan());
        for (shift, score) in result.scores.iter().enumerate() {
            let marker = if shift == result.key as usize {
                "◀ best".green().to_string()
            } else {
                String::new()
            };
            println!("   {shift:2}: {score:>12.6} {marker}");
        }
    }

    println!("\n{}", "Plaintext:".bright_cyan().bold());
    println!("{}", result.plaintext);
}

/// Print the result of a benchmark run
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Recovery:".bright_cyan().bold());
    println!("   Trials:           {}", result.trials);
    println!(
        "   Keys recovered:   {} {}",
        result.recovered,
        format!("({:.1}%)", result.accuracy * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Window size:      {} chars", result.window_chars);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Trials/second:    {:.1}", result.trials_per_second);

    if !result.miss_distribution.is_empty() {
        println!("\n😰 {}", "Wrong keys returned:".yellow().bold());
        let mut misses: Vec<(u8, usize)> = result
            .miss_distribution
            .iter()
            .map(|(&key, &count)| (key, count))
            .collect();
        misses.sort_by_key(|&(key, _)| key);
        for (key, count) in misses {
            println!("   shift {key:2}: {count} trial(s)");
        }
    }
}
