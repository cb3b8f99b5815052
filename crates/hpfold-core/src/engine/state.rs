use crate::core::models::fold::Fold;
use crate::core::scoring::Score;
use serde::Serialize;
use std::cmp::Ordering;

/// A scored fold kept as the best-so-far result of a search.
#[derive(Debug, Clone)]
pub struct Solution {
    pub score: Score,
    pub fold: Fold,
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.score.fitness == other.score.fitness
    }
}
impl Eq for Solution {}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.fitness.total_cmp(&other.score.fitness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub best_overlaps: usize,
    pub best_energy: usize,
    /// Folds in the generation without any self-overlap.
    pub self_avoiding: usize,
}

impl GenerationStats {
    pub fn from_scores(generation: usize, scores: &[Score]) -> Option<Self> {
        let best = scores
            .iter()
            .max_by(|a, b| a.fitness.total_cmp(&b.fitness))?;
        let mean_fitness = scores.iter().map(|s| s.fitness).sum::<f64>() / scores.len() as f64;
        Some(Self {
            generation,
            best_fitness: best.fitness,
            mean_fitness,
            best_overlaps: best.overlaps,
            best_energy: best.energy,
            self_avoiding: scores.iter().filter(|s| s.is_self_avoiding()).count(),
        })
    }
}
