//! Wordle Robot - CLI
//!
//! Play Wordle on the terminal, or benchmark the robot against the solution
//! list.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_robot::{
    commands::{SolutionPick, run_benchmark, run_play},
    core::Word,
    game::Game,
    output::print_benchmark_stats,
    solver::RobotPlayer,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_robot",
    about = "Wordle on the terminal, with an automated minimax robot",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the solution word list
    #[arg(long, global = true, default_value = "data/solutions.txt")]
    solutions: PathBuf,

    /// Path to the accepted-guess word list
    #[arg(long, global = true, default_value = "data/guesses.txt")]
    guesses: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// After each guess, report the number of possible words remaining
        #[arg(long)]
        hints: bool,

        /// Play against a specific solution
        #[arg(long, conflicts_with = "day")]
        solution: Option<String>,

        /// Play against the solution for a given day number
        #[arg(long)]
        day: Option<usize>,
    },

    /// Run the robot against the solution list
    Benchmark {
        /// Benchmark a single solution instead of the whole list
        word: Option<String>,

        /// Limit the number of solutions tested
        #[arg(short = 'n', long, conflicts_with = "word")]
        limit: Option<usize>,

        /// Seed the robot's candidate pool from the solution list only.
        /// Faster and stronger, but the robot knows more than a player could.
        #[arg(long)]
        restrict_pool: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = Dictionary::load(&cli.solutions, &cli.guesses).with_context(|| {
        format!(
            "failed to load word lists from {} and {}",
            cli.solutions.display(),
            cli.guesses.display()
        )
    })?;
    if dictionary.solutions().is_empty() {
        bail!("no valid solutions in {}", cli.solutions.display());
    }
    let game = Game::new(dictionary);

    let command = cli.command.unwrap_or(Commands::Play {
        hints: false,
        solution: None,
        day: None,
    });

    match command {
        Commands::Play {
            hints,
            solution,
            day,
        } => {
            let pick = match (solution, day) {
                (Some(word), _) => SolutionPick::Given(word),
                (None, Some(day)) => SolutionPick::Day(day),
                (None, None) => SolutionPick::Random,
            };
            run_play(&game, &pick, hints)
        }
        Commands::Benchmark {
            word,
            limit,
            restrict_pool,
        } => run_benchmark_command(&game, word.as_deref(), limit, restrict_pool),
    }
}

fn run_benchmark_command(
    game: &Game,
    word: Option<&str>,
    limit: Option<usize>,
    restrict_pool: bool,
) -> Result<()> {
    let all_solutions = game.dictionary().solutions();
    let targets: Vec<Word> = match word {
        Some(text) => {
            let target =
                Word::new(text).map_err(|err| anyhow::anyhow!("invalid solution: {err}"))?;
            if !all_solutions.contains(&target) {
                bail!("{target} is not in the solution list");
            }
            vec![target]
        }
        None => all_solutions
            .iter()
            .take(limit.unwrap_or(all_solutions.len()))
            .cloned()
            .collect(),
    };

    let pool = if restrict_pool {
        game.dictionary().solutions()
    } else {
        game.dictionary().guesses()
    };
    let mut robot = RobotPlayer::new(pool);

    println!(
        "Iterating {} solution(s), with {} words in the robot's pool",
        targets.len(),
        pool.len()
    );

    let stats = run_benchmark(game, &mut robot, &targets)?;
    print_benchmark_stats(&stats, robot.guess_counts());
    Ok(())
}
