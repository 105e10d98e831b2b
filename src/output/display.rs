//! Display functions for command results

use colored::Colorize;

use super::formatters::{feedback_symbols, histogram_bar};
use crate::commands::{BenchmarkResult, CrackResult};

/// Print the deduction trace for a cracked secret
pub fn print_crack_result(result: &CrackResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Cracking: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nAttempt {}: {}  {}",
            i + 1,
            step.guess,
            feedback_symbols(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Feedback:   {}", step.feedback);

            if let Some(expected) = step.expected {
                println!("  Expected:   {expected:.1} candidates");
            }
            if let Some(worst) = step.worst_case {
                println!("  Worst case: {worst} candidates");
            }
        }
    }

    let rounds = if result.attempts == 1 {
        "attempt"
    } else {
        "attempts"
    };
    println!(
        "\n{}",
        format!("Cracked in {} {rounds}!", result.attempts)
            .green()
            .bold()
    );
}

/// Print aggregated benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:    {}", result.total_secrets);
    println!(
        "   Average attempts:  {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:         {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:        {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:    {:.1}", result.secrets_per_second);

    if result.total_secrets == 0 {
        return;
    }

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for attempts in result.min_attempts..=result.max_attempts {
        let count = result.distribution.get(&attempts).copied().unwrap_or(0);
        let share = count as f64 / result.total_secrets as f64;
        let bar = histogram_bar(share, 1.0, 40);
        println!("   {attempts}: {bar} {count:4} ({:5.1}%)", share * 100.0);
    }
}
