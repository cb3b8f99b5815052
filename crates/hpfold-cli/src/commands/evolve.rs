use crate::cli::EvolveArgs;
use crate::config::{PartialEvolutionConfig, RunConfig};
use crate::error::{CliError, Result};
use crate::render::render;
use crate::utils::progress::CliProgressHandler;
use hpfold::core::models::direction::Direction;
use hpfold::core::models::sequence::HpSequence;
use hpfold::engine::progress::ProgressReporter;
use hpfold::engine::state::GenerationStats;
use hpfold::workflows::evolve::{self, EvolutionResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct EvolutionReport<'a> {
    sequence: String,
    turns: String,
    fitness: f64,
    contacts: usize,
    overlaps: usize,
    generations: usize,
    reached_target: bool,
    seed: Option<u64>,
    history: &'a [GenerationStats],
}

pub fn run(args: EvolveArgs, quiet: bool) -> Result<()> {
    let partial = match &args.config {
        Some(path) => PartialEvolutionConfig::from_file(path)?,
        None => PartialEvolutionConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let run_config = partial.merge_with_cli(&args)?;

    let sequence = HpSequence::from(args.sequence.as_str());
    if sequence.hydrophobic_count() == 0 {
        warn!("Sequence has no hydrophobic residues; every fold scores 0.");
    }

    let handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let result = search(&sequence, &run_config, &reporter)?;
    let best = &result.best;

    println!(
        "Best fold after {} generation(s): fitness {:.4} (contacts: {}, overlaps: {})",
        result.generations, best.score.fitness, best.score.energy, best.score.overlaps
    );
    println!("Turns: {}", Direction::format_turns(best.fold.directions()));
    if !args.no_render {
        println!("\n{}", render(&best.fold, &sequence)?);
    }

    if let Some(path) = &args.output {
        write_report(path, &sequence, &result, run_config.seed)?;
        println!("Report written to: {}", path.display());
    }
    Ok(())
}

fn search(
    sequence: &HpSequence,
    run_config: &RunConfig,
    reporter: &ProgressReporter,
) -> Result<EvolutionResult> {
    info!(seed = ?run_config.seed, "Invoking the evolution workflow...");
    let result = match run_config.seed {
        Some(seed) => evolve::run(
            sequence,
            &run_config.evolution,
            reporter,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => evolve::run(
            sequence,
            &run_config.evolution,
            reporter,
            &mut rand::thread_rng(),
        )?,
    };
    Ok(result)
}

fn write_report(
    path: &Path,
    sequence: &HpSequence,
    result: &EvolutionResult,
    seed: Option<u64>,
) -> Result<()> {
    let report = EvolutionReport {
        sequence: sequence.to_string(),
        turns: Direction::format_turns(result.best.fold.directions()),
        fitness: result.best.score.fitness,
        contacts: result.best.score.energy,
        overlaps: result.best.score.overlaps,
        generations: result.generations,
        reached_target: result.reached_target,
        seed,
        history: &result.history,
    };
    let content = toml::to_string(&report).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    std::fs::write(path, content)?;
    Ok(())
}
