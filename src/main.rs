//! Wordle Assist - CLI
//!
//! Suggests guesses for a board, analyzes single words, and self-plays for
//! benchmarking, all against a word list supplied on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_assist::{
    commands::{Assistant, SolveConfig, analyze_word, run_benchmark, solve_word, suggest},
    core::DEFAULT_ROWS,
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_suggestion},
    persist::{BlobStore, DirStore, MemoryStore},
    solver::EngineConfig,
    wordlists::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant using exact constraint filtering and entropy ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// JSON file overriding engine settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the per-dictionary session cache
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next guess for a board
    Suggest {
        /// Observed guess as WORD:PATTERN, e.g. crane:-Y-G- (repeatable, in order)
        #[arg(short, long = "guess")]
        guesses: Vec<String>,

        /// Rows on the board
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,

        /// Entries shown per recommendation track
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per turn
        #[arg(short = 'd', long)]
        details: bool,
    },

    /// Benchmark on a random sample of dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Sampling seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut assistant = start_assistant(&cli)?;

    match cli.command {
        Commands::Suggest { guesses, rows, top } => {
            let suggestion =
                suggest(&mut assistant, &guesses, rows).map_err(|e| anyhow::anyhow!(e))?;
            print_suggestion(&suggestion, assistant.dictionary(), top);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&assistant, &word).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
        }
        Commands::Solve { word, details } => {
            let result = solve_word(&mut assistant, SolveConfig::new(word))
                .map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, details);
        }
        Commands::Benchmark { count, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("Running benchmark on {count} random words (seed {seed})...");
            let result =
                run_benchmark(&mut assistant, count, seed, true).map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` picks the level
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn start_assistant(cli: &Cli) -> Result<Assistant> {
    let path = cli
        .wordlist
        .as_deref()
        .context("No word list given; pass --wordlist or set WORDLE_WORDLIST")?;
    let dictionary = load_dictionary(path)
        .with_context(|| format!("Failed to load word list {}", path.display()))?;
    info!(
        words = dictionary.len(),
        fingerprint = dictionary.fingerprint(),
        "Dictionary loaded"
    );

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };

    let mut store: Box<dyn BlobStore> = match &cli.cache_dir {
        Some(dir) => Box::new(
            DirStore::open(dir)
                .with_context(|| format!("Failed to open cache directory {}", dir.display()))?,
        ),
        None => Box::new(MemoryStore::new()),
    };

    Ok(Assistant::start(dictionary, config, store.as_mut())?)
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}
