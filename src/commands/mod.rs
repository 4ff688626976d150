//! Command implementations

pub mod benchmark;
pub mod play;

pub use benchmark::{BenchmarkStats, run_benchmark};
pub use play::{SolutionPick, run_play};
