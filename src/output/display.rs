//! Display functions for command results

use super::formatters::{colored_tiles, entropy_bar, format_delta, share_grid};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, Suggestion};
use crate::core::{Dictionary, GameStatus, code_letter};
use crate::solver::RankedGuess;
use colored::Colorize;

/// Candidate words listed in full up to this many
const LIST_LIMIT: usize = 30;

/// Print the constraint state and both recommendation tracks
pub fn print_suggestion(suggestion: &Suggestion, dictionary: &Dictionary, top: usize) {
    let filter = &suggestion.filter;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ({} left)",
        "BOARD:".bright_cyan().bold(),
        match suggestion.status {
            GameStatus::InProgress => "in progress".normal(),
            GameStatus::Won => "won".green().bold(),
            GameStatus::Lost => "lost".red().bold(),
        },
        suggestion.guesses_left
    );
    println!("{}", "═".repeat(60).cyan());

    if let Some(warning) = &filter.warning {
        println!("\n⚠️  {}", warning.yellow());
    }

    if !filter.constraints.per_guess.is_empty() {
        println!("\n📝 {}", "Learned:".bright_cyan().bold());
        for delta in &filter.constraints.per_guess {
            println!("   {}", format_delta(delta));
        }
        print_letter_summary(suggestion);
    }

    let count = filter.candidates.len();
    println!(
        "\n🎯 {} {}",
        "Candidates:".bright_cyan().bold(),
        count.to_string().bright_yellow().bold()
    );
    if !filter.unconstrained && count > 0 {
        let words: Vec<&str> = filter
            .candidates
            .iter()
            .take(LIST_LIMIT)
            .map(|&i| dictionary[i].text())
            .collect();
        let more = if count > LIST_LIMIT { " …" } else { "" };
        println!("   {}{more}", words.join(" "));
    }

    print_track("Best information", &suggestion.rankings.best_info, top, count, false);
    print_track("Best answer", &suggestion.rankings.best_answer, top, count, true);
}

fn print_letter_summary(suggestion: &Suggestion) {
    let constraints = &suggestion.filter.constraints;

    let pattern: String = constraints
        .per_position
        .iter()
        .map(|position| {
            position
                .required
                .map_or('_', |code| code_letter(code).to_ascii_uppercase())
        })
        .collect();

    let mut present = String::new();
    let mut absent = String::new();
    for (code, constraint) in constraints.per_letter.iter() {
        let letter = code_letter(code).to_ascii_uppercase();
        if constraint.is_absent() {
            absent.push(letter);
        } else if constraint.min_count > 0 {
            present.push(letter);
        }
    }

    println!("   Pattern: {}", pattern.green().bold());
    if !present.is_empty() {
        println!("   Present: {}", present.yellow());
    }
    if !absent.is_empty() {
        println!("   Absent:  {}", absent.bright_black());
    }
}

fn print_track(title: &str, ranked: &[RankedGuess], top: usize, total: usize, blended: bool) {
    println!("\n💡 {}", format!("{title}:").bright_cyan().bold());
    if ranked.is_empty() {
        println!("   {}", "(none)".bright_black());
        return;
    }

    for (rank, guess) in ranked.iter().take(top).enumerate() {
        let score = if blended {
            format!("score {:.3}", guess.blended)
        } else {
            format!("{:.3} bits", guess.entropy)
        };
        println!(
            "   {}. {} [{}] {}",
            rank + 1,
            guess.word.to_uppercase().bright_yellow().bold(),
            entropy_bar(guess.entropy, total, 20).green(),
            score
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}",
            i + 1,
            colored_tiles(&step.word, step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
    println!("\n{}", share_grid(result.guesses.iter().map(|step| step.pattern)));
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} dictionary words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.max_partition);
    match result.commonness {
        Some(score) => println!("   Commonness:  {score:.4}"),
        None => println!("   {}", "Not in the dictionary".yellow()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Seed:             {}", result.seed);
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for guess_count in 1..=result.max_guesses {
            let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failed_words.is_empty() {
        println!(
            "\n{} {}",
            "Failed:".red().bold(),
            result.failed_words.join(" ")
        );
    }
}

