use serde::{Deserialize, Serialize};

/// Value returned by [`crate::core::models::fold::Fold::score`] when a fold
/// cannot be scored against the given sequence.
pub const NOT_EVALUABLE: f64 = -1.0;

/// Outcome of one contact/overlap scan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    pub fitness: f64,
    /// Pairs of residues occupying the same lattice cell.
    pub overlaps: usize,
    /// Hydrophobic pairs, not bonded to each other, on neighbouring cells.
    pub energy: usize,
}

impl Score {
    pub fn from_counts(overlaps: usize, energy: usize) -> Self {
        Self {
            fitness: energy as f64 / (overlaps + 1) as f64,
            overlaps,
            energy,
        }
    }

    #[inline]
    pub fn is_self_avoiding(&self) -> bool {
        self.overlaps == 0
    }
}

/// Cached evaluation state of a fold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Evaluation {
    #[default]
    Unevaluated,
    Evaluated(Score),
}

impl Evaluation {
    pub fn score(&self) -> Option<&Score> {
        match self {
            Evaluation::Evaluated(score) => Some(score),
            Evaluation::Unevaluated => None,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        matches!(self, Evaluation::Evaluated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitness_divides_energy_by_overlaps_plus_one() {
        let score = Score::from_counts(3, 6);
        assert_eq!(score.fitness, 1.5);
    }

    #[test]
    fn zero_overlaps_keeps_energy_as_fitness() {
        let score = Score::from_counts(0, 4);
        assert_eq!(score.fitness, 4.0);
        assert!(score.is_self_avoiding());
    }

    #[test]
    fn zero_energy_gives_zero_fitness_regardless_of_overlaps() {
        assert_eq!(Score::from_counts(5, 0).fitness, 0.0);
    }

    #[test]
    fn unevaluated_has_no_score() {
        assert!(Evaluation::default().score().is_none());
        assert!(!Evaluation::Unevaluated.is_evaluated());
    }

    #[test]
    fn evaluated_exposes_its_score() {
        let score = Score::from_counts(1, 2);
        let evaluation = Evaluation::Evaluated(score);
        assert!(evaluation.is_evaluated());
        assert_eq!(evaluation.score(), Some(&score));
    }
}
