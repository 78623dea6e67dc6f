use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use search_cli::{load_config, run_console, run_search, run_stats, SearchOptions};
use search_core::{EngineConfig, TopKStrategy};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "TF-IDF search over a small in-memory corpus", long_about = None)]
struct Cli {
    /// JSON file with engine settings (max_results, strategy)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read stop words, documents and queries from stdin (the default)
    Console,
    /// Load a corpus from disk and run queries against it
    Search {
        /// Corpus path (.txt, .json, .jsonl or a directory)
        #[arg(long)]
        corpus: PathBuf,
        /// Space-separated stop words
        #[arg(long, default_value = "")]
        stop_words: String,
        /// Query to run; may be repeated
        #[arg(long, short)]
        query: Vec<String>,
        /// Number of results per query
        #[arg(short)]
        k: Option<usize>,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
        /// Print JSON instead of console records
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print corpus statistics
    Stats {
        #[arg(long)]
        corpus: PathBuf,
        #[arg(long, default_value = "")]
        stop_words: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    FullSort,
    BoundedHeap,
}

impl From<StrategyArg> for TopKStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FullSort => TopKStrategy::FullSort,
            StrategyArg::BoundedHeap => TopKStrategy::BoundedHeap,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => run_console(io::stdin().lock(), io::stdout().lock(), config),
        Commands::Search { corpus, stop_words, query, k, strategy, json } => {
            let options = SearchOptions { corpus, stop_words, queries: query, k, strategy: strategy.map(Into::into), json };
            run_search(io::stdout().lock(), &options, config)
        }
        Commands::Stats { corpus, stop_words } => run_stats(io::stdout().lock(), &corpus, &stop_words, config),
    }
}
