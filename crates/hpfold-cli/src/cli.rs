use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hpfold - score and evolve 2-D HP lattice protein folds.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a single fold given as a turn string against an HP sequence.
    Evaluate(EvaluateArgs),
    /// Search for a high-scoring fold of an HP sequence with a genetic algorithm.
    Evolve(EvolveArgs),
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Residue sequence; '1' marks a hydrophobic residue, anything else a polar one.
    #[arg(short, long, required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// Relative turns, one per bond, as L/S/R letters (e.g. 'LLSRL').
    #[arg(short, long, required = true, value_name = "TURNS")]
    pub turns: String,

    /// Do not print the lattice drawing of the fold.
    #[arg(long)]
    pub no_render: bool,
}

/// Arguments for the `evolve` subcommand.
#[derive(Args, Debug)]
pub struct EvolveArgs {
    // --- Core Arguments ---
    /// Residue sequence; '1' marks a hydrophobic residue, anything else a polar one.
    #[arg(short, long, required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path to a search configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a TOML report of the best fold and the generation history.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not print the lattice drawing of the best fold.
    #[arg(long)]
    pub no_render: bool,

    // --- Search Overrides ---
    /// Override the number of folds per generation.
    #[arg(short = 'n', long, value_name = "INT")]
    pub population_size: Option<usize>,

    /// Override the maximum number of generations.
    #[arg(short = 'g', long, value_name = "INT")]
    pub generations: Option<usize>,

    /// Stop once the best fold reaches this fitness.
    #[arg(long, value_name = "FLOAT")]
    pub target_fitness: Option<f64>,

    /// Override the crossover probability per parent pair.
    #[arg(long, value_name = "FLOAT")]
    pub crossover_rate: Option<f64>,

    /// Override the mutation probability per offspring.
    #[arg(long, value_name = "FLOAT")]
    pub mutation_rate: Option<f64>,

    /// Override the number of contestants per tournament.
    #[arg(long, value_name = "INT")]
    pub tournament_size: Option<usize>,

    /// Override the number of best folds copied unchanged into the next generation.
    #[arg(long, value_name = "INT")]
    pub elite_count: Option<usize>,

    /// Seed for the random number generator, for reproducible runs.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,
}
