//! Command line front end.
//!
//! Usage:
//!   sort-bench --input films.csv sort --strategy quick-iterative --key votes
//!   sort-bench --input films.csv search --target 8.5
//!   sort-bench --synthetic 5000 bench --sizes 100,500,1000 --csv out.csv
//!   sort-bench list
//!   sort-bench verify

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sort_search_bench::config::{parse_ceiling, parse_sizes, HarnessConfig};
use sort_search_bench::engine::{search_records, sort_records};
use sort_search_bench::loader::load_csv;
use sort_search_bench::record::{Key, RecordSet};
use sort_search_bench::registry::build_registry;
use sort_search_bench::run_benchmarks_with_progress;
use sort_search_bench::sorting::{RecursionBudget, SortStrategy, DEFAULT_MAX_DEPTH};
use sort_search_bench::tui;
use sort_search_bench::utils::PinStrategy;

const DEFAULT_SYNTHETIC: usize = 2000;

/// Descending sorts, binary search and size-sweep benchmarks over film records
#[derive(Parser)]
#[command(name = "sort-bench")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV file with title, rating, year, votes and genre columns
    #[arg(long, global = true, conflicts_with = "synthetic")]
    input: Option<PathBuf>,

    /// Generate N random records instead of reading a file
    #[arg(long, global = true, value_name = "N")]
    synthetic: Option<usize>,

    /// Seed for generated records
    #[arg(long, global = true, default_value_t = 42)]
    seed: u64,

    /// Maximum recursion depth for the recursive sorts
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort the records and print the first rows
    Sort {
        #[arg(short, long)]
        strategy: SortStrategy,

        #[arg(short, long, default_value = "rating")]
        key: Key,

        /// Number of sorted records to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Sort descending, then binary search for a key value
    Search {
        #[arg(short, long)]
        target: f64,

        #[arg(short, long, default_value = "rating")]
        key: Key,
    },

    /// Time every algorithm across a list of input sizes
    Bench(BenchArgs),

    /// List registered algorithms and their variants
    List,

    /// Check every algorithm against its reference
    Verify,
}

#[derive(clap::Args)]
struct BenchArgs {
    /// JSON harness configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated input sizes (e.g. 100,500,1000)
    #[arg(long)]
    sizes: Option<String>,

    #[arg(long)]
    key: Option<Key>,

    /// Value the binary search looks for
    #[arg(long)]
    target: Option<f64>,

    /// Largest N for insertion-iterative, or `none`
    #[arg(long)]
    insertion_iterative_ceiling: Option<Ceiling>,

    /// Largest N for insertion-recursive, or `none`
    #[arg(long)]
    insertion_recursive_ceiling: Option<Ceiling>,

    /// Timed runs per cell (median reported)
    #[arg(long)]
    runs: Option<usize>,

    /// Untimed runs before measuring
    #[arg(long)]
    warmup: Option<usize>,

    #[arg(long, value_enum)]
    pin: Option<PinArg>,

    /// Stop starting new cells after this many seconds
    #[arg(long)]
    deadline_secs: Option<f64>,

    /// Export raw samples as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Export the whole result as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Size ceiling flag value; `none` clears the ceiling
#[derive(Clone, Copy, Debug, PartialEq)]
struct Ceiling(Option<usize>);

impl FromStr for Ceiling {
    type Err = sort_search_bench::error::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_ceiling(s).map(Ceiling)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PinArg {
    Global,
    PerExecution,
    Off,
}

impl From<PinArg> for PinStrategy {
    fn from(arg: PinArg) -> Self {
        match arg {
            PinArg::Global => PinStrategy::Global,
            PinArg::PerExecution => PinStrategy::PerExecution,
            PinArg::Off => PinStrategy::Off,
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_source(cli: &Cli) -> Result<RecordSet> {
    match &cli.input {
        Some(path) => {
            let report = load_csv(path).with_context(|| format!("loading {}", path.display()))?;
            if report.dropped > 0 {
                eprintln!(
                    "Dropped {} incomplete rows from {}",
                    report.dropped,
                    path.display()
                );
            }
            Ok(report.records)
        }
        None => {
            let n = cli.synthetic.unwrap_or(DEFAULT_SYNTHETIC);
            info!(n, seed = cli.seed, "generating synthetic records");
            Ok(RecordSet::synthetic(n, cli.seed))
        }
    }
}

fn harness_config(args: &BenchArgs, max_depth: Option<usize>) -> Result<HarnessConfig> {
    let mut config = match &args.config {
        Some(path) => HarnessConfig::from_json_file(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => HarnessConfig::default(),
    };

    if let Some(sizes) = &args.sizes {
        config.sizes = parse_sizes(sizes)?;
    }
    if let Some(key) = args.key {
        config.key = key;
    }
    if let Some(target) = args.target {
        config.search_target = target;
    }
    if let Some(Ceiling(ceiling)) = args.insertion_iterative_ceiling {
        config.insertion_iterative_ceiling = ceiling;
    }
    if let Some(Ceiling(ceiling)) = args.insertion_recursive_ceiling {
        config.insertion_recursive_ceiling = ceiling;
    }
    if let Some(runs) = args.runs {
        config.timing.runs_per_cell = runs;
    }
    if let Some(warmup) = args.warmup {
        config.timing.warmup_runs = warmup;
    }
    if let Some(pin) = args.pin {
        config.timing.pin_strategy = pin.into();
    }
    if let Some(secs) = args.deadline_secs {
        config.deadline_secs = Some(secs);
    }
    if let Some(depth) = max_depth {
        config.recursion = RecursionBudget::new(depth);
    }

    config.validate()?;
    Ok(config)
}

fn run_bench(source: &RecordSet, args: &BenchArgs, max_depth: Option<usize>) -> Result<()> {
    let config = harness_config(args, max_depth)?;

    tui::print_header();
    let result = run_benchmarks_with_progress(source, &config, |p| {
        eprintln!("  [{}/{}] N = {} done", p.completed, p.total, p.row.size);
    })?;
    tui::print_benchmark_table(&result);

    if let Some(path) = &args.csv {
        result
            .export_csv(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Raw samples written to {}", path.display());
    }
    if let Some(path) = &args.json {
        result
            .export_json(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Result written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let budget = RecursionBudget::try_new(cli.max_depth.unwrap_or(DEFAULT_MAX_DEPTH))?;

    match &cli.command {
        Commands::Sort {
            strategy,
            key,
            limit,
        } => {
            let records = load_source(&cli)?;
            let report = sort_records(records, *strategy, *key, &budget)?;
            tui::print_sort_report(&report, *limit);
        }
        Commands::Search { target, key } => {
            let records = load_source(&cli)?;
            let report = search_records(records, *target, *key, &budget)?;
            tui::print_search_report(&report);
        }
        Commands::Bench(args) => {
            let source = load_source(&cli)?;
            run_bench(&source, args, cli.max_depth)?;
        }
        Commands::List => tui::print_available_algorithms(&build_registry()),
        Commands::Verify => {
            if !tui::print_verification(&build_registry()) {
                bail!("verification failed");
            }
        }
    }

    Ok(())
}
