use crate::core::models::fold::Fold;
use crate::core::models::sequence::HpSequence;
use crate::core::scoring::Score;
use crate::engine::config::EvolutionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection;
use crate::engine::state::{GenerationStats, Solution};
use rand::Rng;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// Fittest fold seen in any generation, with its cached evaluation.
    pub best: Solution,
    pub history: Vec<GenerationStats>,
    pub generations: usize,
    pub reached_target: bool,
}

/// Runs a generational genetic search for the fittest fold of `sequence`.
///
/// Every generation is scored, summarised in the history, and then replaced by
/// elites plus tournament-selected offspring produced by single-point crossover
/// and point mutation. The search stops after `max_generations` or once the
/// best fitness reaches `target_fitness`.
#[instrument(skip_all, name = "evolution_workflow", fields(residues = sequence.len()))]
pub fn run<R: Rng + ?Sized>(
    sequence: &HpSequence,
    config: &EvolutionConfig,
    reporter: &ProgressReporter,
    rng: &mut R,
) -> Result<EvolutionResult, EngineError> {
    if sequence.len() < 2 {
        return Err(EngineError::Initialization(format!(
            "sequence must contain at least 2 residues, got {}",
            sequence.len()
        )));
    }

    // === Phase 1: Random initial population ===
    reporter.report(Progress::PhaseStart {
        name: "Initialization",
    });
    let turns = sequence.bond_count();
    let mut population: Vec<Fold> = (0..config.population_size)
        .map(|_| Fold::random(turns, rng))
        .collect();
    info!(
        population = config.population_size,
        turns,
        hydrophobic = sequence.hydrophobic_count(),
        "Initial population created."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Generational loop ===
    reporter.report(Progress::PhaseStart { name: "Evolution" });
    reporter.report(Progress::TaskStart {
        total_steps: config.max_generations as u64,
    });

    let mut best: Option<Solution> = None;
    let mut history = Vec::with_capacity(config.max_generations);
    let mut reached_target = false;

    for generation in 0..config.max_generations {
        let scores = population
            .iter_mut()
            .map(|fold| fold.evaluated_score(sequence))
            .collect::<Result<Vec<Score>, _>>()?;

        let stats = GenerationStats::from_scores(generation, &scores)
            .ok_or_else(|| EngineError::Internal("population is empty".to_string()))?;
        update_best(&mut best, &population, &scores);
        debug!(
            generation,
            best = stats.best_fitness,
            mean = stats.mean_fitness,
            self_avoiding = stats.self_avoiding,
            "Generation scored."
        );
        history.push(stats);
        reporter.report(Progress::TaskIncrement);

        if let Some(target) = config.target_fitness {
            if stats.best_fitness >= target {
                info!(generation, target, "Target fitness reached.");
                reporter.report(Progress::Message(format!(
                    "Target fitness {target} reached in generation {generation}."
                )));
                reached_target = true;
                break;
            }
        }

        if generation + 1 < config.max_generations {
            let fitness: Vec<f64> = scores.iter().map(|s| s.fitness).collect();
            population = next_generation(&population, &fitness, config, rng)?;
        }
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let best = best.ok_or_else(|| EngineError::Internal("no generation was scored".to_string()))?;
    info!(
        fitness = best.score.fitness,
        overlaps = best.score.overlaps,
        energy = best.score.energy,
        generations = history.len(),
        "Evolution finished."
    );

    Ok(EvolutionResult {
        best,
        generations: history.len(),
        history,
        reached_target,
    })
}

fn update_best(best: &mut Option<Solution>, population: &[Fold], scores: &[Score]) {
    let Some((index, score)) = scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.fitness.total_cmp(&b.fitness))
    else {
        return;
    };

    let improved = best
        .as_ref()
        .is_none_or(|current| score.fitness > current.score.fitness);
    if improved {
        *best = Some(Solution {
            score: *score,
            fold: population[index].clone(),
        });
    }
}

fn next_generation<R: Rng + ?Sized>(
    population: &[Fold],
    fitness: &[f64],
    config: &EvolutionConfig,
    rng: &mut R,
) -> Result<Vec<Fold>, EngineError> {
    let size = config.population_size;
    let tournament_size = config.selection.tournament_size;

    // Elites are cloned with their cached evaluation and are not rescored.
    let mut next: Vec<Fold> = selection::elites(fitness, config.selection.elite_count)
        .into_iter()
        .map(|i| population[i].clone())
        .collect();

    while next.len() < size {
        let mut first = population[selection::tournament(fitness, tournament_size, rng)].clone();
        let mut second = population[selection::tournament(fitness, tournament_size, rng)].clone();

        if rng.gen_bool(config.variation.crossover_rate) {
            let cut_point = rng.gen_range(0..=first.len());
            first.crossover(&mut second, cut_point)?;
        }

        for mut child in [first, second] {
            if next.len() == size {
                break;
            }
            if rng.gen_bool(config.variation.mutation_rate) {
                child.mutate_with(rng);
            }
            next.push(child);
        }
    }

    Ok(next)
}
