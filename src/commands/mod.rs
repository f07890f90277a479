//! Command implementations

pub mod analyze;
pub mod assistant;
pub mod benchmark;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use assistant::{Assistant, Suggestion};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{parse_guess_arg, suggest};
