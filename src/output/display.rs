//! Display functions for command results

use colored::Colorize;
use rustc_hash::FxHashMap;

use crate::commands::BenchmarkStats;
use crate::game::ROUNDS;

/// Print the summary of a benchmark run
///
/// `guess_counts` holds the robot's per-round guess frequencies, used to show
/// the most common guess in each round.
pub fn print_benchmark_stats(stats: &BenchmarkStats, guess_counts: &[FxHashMap<String, usize>]) {
    if stats.games == 0 {
        println!("no games played");
        return;
    }

    let win_rate = percent(stats.wins, stats.games);
    let loss_rate = percent(stats.losses, stats.games);
    println!(
        "{} games, {} ({win_rate:.1}%), {} ({loss_rate:.1}%) in {:.2}s",
        stats.games,
        format!("{} wins", stats.wins).green(),
        format!("{} losses", stats.losses).red(),
        stats.duration.as_secs_f64()
    );

    if stats.wins == 0 {
        return;
    }
    println!(
        "wins took {} guesses on average",
        format!("{:.1}", stats.average_win_rounds()).bold()
    );

    for round in 1..=ROUNDS as usize {
        let round_wins = stats.round_wins[round - 1];
        print!(
            "round {round}:\t{round_wins} wins ({:.1}% of wins)",
            percent(round_wins, stats.wins)
        );
        if let Some((guess, count)) = most_common(guess_counts.get(round - 1)) {
            print!(", most common guess: {guess} ({count}x)");
        }
        println!();
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    part as f64 * 100.0 / whole as f64
}

fn most_common(counts: Option<&FxHashMap<String, usize>>) -> Option<(&str, usize)> {
    counts?
        .iter()
        .filter(|&(_, count)| *count > 0)
        // Break count ties by word so the report is stable.
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .map(|(word, count)| (word.as_str(), *count))
}
