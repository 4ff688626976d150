//! Benchmark command
//!
//! Runs the robot against a set of solutions and collects win/loss and
//! per-round statistics.

use std::io;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::Word;
use crate::game::{Game, PlayOptions, ROUNDS};
use crate::output::formatters::colored_guess;
use crate::solver::RobotPlayer;

/// Result of a benchmark run
pub struct BenchmarkStats {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Wins per round; index 0 is round 1.
    pub round_wins: [usize; ROUNDS as usize],
    /// Sum of the winning round numbers, for the average.
    pub total_win_rounds: usize,
    pub duration: Duration,
}

impl BenchmarkStats {
    #[must_use]
    pub fn average_win_rounds(&self) -> f64 {
        if self.wins == 0 {
            return 0.0;
        }
        self.total_win_rounds as f64 / self.wins as f64
    }
}

/// Run the robot against every word in `solutions`
///
/// Losses are reported as they happen, with the robot's colored guess rows.
///
/// # Errors
/// Propagates player I/O errors; the robot itself only fails on an empty
/// word list.
pub fn run_benchmark(
    game: &Game,
    robot: &mut RobotPlayer<'_>,
    solutions: &[Word],
) -> io::Result<BenchmarkStats> {
    let progress = ProgressBar::new(solutions.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut stats = BenchmarkStats {
        games: 0,
        wins: 0,
        losses: 0,
        round_wins: [0; ROUNDS as usize],
        total_win_rounds: 0,
        duration: Duration::ZERO,
    };

    let start = Instant::now();
    for solution in solutions {
        let result = game.play(robot, solution, PlayOptions::default())?;

        stats.games += 1;
        match result {
            Some(round) => {
                stats.wins += 1;
                stats.total_win_rounds += round as usize;
                stats.round_wins[round as usize - 1] += 1;
            }
            None => {
                stats.losses += 1;
                let rows: Vec<String> = robot
                    .history()
                    .iter()
                    .map(|(guess, feedback)| colored_guess(guess, feedback))
                    .collect();
                progress.println(format!("LOSS: {solution} guessed: {}", rows.join(" ")));
            }
        }
        progress.inc(1);
    }
    stats.duration = start.elapsed();

    progress.finish_and_clear();
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|text| Word::new(text).unwrap()).collect()
    }

    #[test]
    fn benchmark_counts_wins_and_rounds() {
        let bank = words(&["APPLE", "GRAPE", "LEMON", "MANGO", "PEACH", "BERRY"]);
        let game = Game::new(Dictionary::new(bank, vec![]));
        let mut robot = RobotPlayer::with_openers(game.dictionary().guesses(), Vec::new());

        let stats = run_benchmark(&game, &mut robot, game.dictionary().solutions()).unwrap();

        assert_eq!(stats.games, 6);
        assert_eq!(stats.wins, 6);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.round_wins.iter().sum::<usize>(), 6);
        assert!(stats.average_win_rounds() >= 1.0);
        assert!(stats.average_win_rounds() <= f64::from(ROUNDS));
    }

    #[test]
    fn benchmark_empty_solution_list() {
        let bank = words(&["APPLE", "GRAPE"]);
        let game = Game::new(Dictionary::new(bank, vec![]));
        let mut robot = RobotPlayer::new(game.dictionary().guesses());

        let stats = run_benchmark(&game, &mut robot, &[]).unwrap();

        assert_eq!(stats.games, 0);
        assert_eq!(stats.wins, 0);
        assert!((stats.average_win_rounds() - 0.0).abs() < f64::EPSILON);
    }

    /// Full-dictionary regression: the robot must beat every shipped
    /// solution. Expensive, so run explicitly with `cargo test -- --ignored`.
    #[test]
    #[ignore = "runs the robot against the entire shipped solution list"]
    fn benchmark_shipped_dictionary_has_no_losses() {
        let dictionary = Dictionary::load(
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/solutions.txt"),
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/guesses.txt"),
        )
        .unwrap();
        let game = Game::new(dictionary);
        let mut robot = RobotPlayer::new(game.dictionary().guesses());

        let stats = run_benchmark(&game, &mut robot, game.dictionary().solutions()).unwrap();

        assert_eq!(stats.games, game.dictionary().solutions().len());
        assert_eq!(stats.losses, 0, "robot lost {} games", stats.losses);
    }
}
