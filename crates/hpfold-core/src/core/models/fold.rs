use super::direction::Direction;
use super::point::LatticePoint;
use super::sequence::HpSequence;
use crate::core::lattice::walk::{BoundingBox, Walk, walker_at};
use crate::core::scoring::{Evaluation, NOT_EVALUABLE, Score, contact};
use rand::Rng;
use rand::distributions::Standard;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FoldError {
    #[error("Fold with {turns} turns cannot be scored against {residues} residues")]
    SequenceLengthMismatch { turns: usize, residues: usize },

    #[error("Residue index {index} is out of range for a fold of {len} residues")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot cross over folds of different lengths ({left} and {right} turns)")]
    CrossoverLengthMismatch { left: usize, right: usize },

    #[error("Cut point {cut_point} exceeds fold length {len}")]
    CutPointOutOfRange { cut_point: usize, len: usize },
}

/// One candidate conformation: the relative turn taken at every bond.
///
/// A fold with `L` turns describes `L + 1` residues. Its score is computed lazily
/// by [`Fold::evaluate`] and cached until the turns change.
#[derive(Debug, Clone, PartialEq)]
pub struct Fold {
    turns: Vec<Direction>,
    evaluation: Evaluation,
}

impl Fold {
    pub fn new(turns: Vec<Direction>) -> Self {
        Self {
            turns,
            evaluation: Evaluation::Unevaluated,
        }
    }

    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self::new((0..len).map(|_| rng.sample(Standard)).collect())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn residue_count(&self) -> usize {
        self.turns.len() + 1
    }

    pub fn directions(&self) -> &[Direction] {
        &self.turns
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn fitness(&self) -> Option<f64> {
        self.evaluation.score().map(|s| s.fitness)
    }

    pub fn overlaps(&self) -> Option<usize> {
        self.evaluation.score().map(|s| s.overlaps)
    }

    pub fn energy(&self) -> Option<usize> {
        self.evaluation.score().map(|s| s.energy)
    }

    /// Returns the fitness of this fold for `sequence`, scanning only on the first call
    /// after construction or after the last change to the turns.
    ///
    /// # Errors
    ///
    /// Returns [`FoldError::SequenceLengthMismatch`] unless the sequence has exactly
    /// one residue more than the fold has turns. The cached state is left as is.
    pub fn evaluate(&mut self, sequence: &HpSequence) -> Result<f64, FoldError> {
        self.evaluated_score(sequence).map(|score| score.fitness)
    }

    /// Like [`Fold::evaluate`], but reports a length mismatch as [`NOT_EVALUABLE`].
    pub fn score(&mut self, sequence: &HpSequence) -> f64 {
        self.evaluate(sequence).unwrap_or(NOT_EVALUABLE)
    }

    /// Evaluates if needed and returns the full score.
    pub fn evaluated_score(&mut self, sequence: &HpSequence) -> Result<Score, FoldError> {
        if sequence.len() != self.residue_count() {
            return Err(FoldError::SequenceLengthMismatch {
                turns: self.turns.len(),
                residues: sequence.len(),
            });
        }

        if let Evaluation::Evaluated(score) = self.evaluation {
            trace!(fitness = score.fitness, "Serving cached evaluation.");
            return Ok(score);
        }

        let score = contact::scan(&self.turns, sequence);
        debug!(
            overlaps = score.overlaps,
            energy = score.energy,
            fitness = score.fitness,
            "Fold evaluated."
        );
        self.evaluation = Evaluation::Evaluated(score);
        Ok(score)
    }

    /// Absolute coordinate of residue `index` (`0..=len()`), replaying the walk.
    pub fn position_at(&self, index: usize) -> Result<LatticePoint, FoldError> {
        self.check_residue_index(index)?;
        Ok(walker_at(&self.turns, index).position)
    }

    pub fn positions(&self) -> Vec<LatticePoint> {
        Walk::new(&self.turns).collect()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::of(&self.turns)
    }

    /// Number of other residues sharing the cell of residue `index`. Not cached.
    pub fn overlaps_at_position(&self, index: usize) -> Result<usize, FoldError> {
        let target = self.position_at(index)?;
        Ok(Walk::new(&self.turns)
            .enumerate()
            .filter(|&(i, p)| i != index && p == target)
            .count())
    }

    /// Replaces one uniformly chosen turn with a uniformly random direction.
    ///
    /// The new direction may equal the old one. An empty fold is left untouched.
    pub fn mutate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.turns.is_empty() {
            return;
        }
        let index = rng.gen_range(0..self.turns.len());
        let direction: Direction = rng.sample(Standard);
        trace!(index, from = %self.turns[index], to = %direction, "Mutating turn.");
        self.turns[index] = direction;
        self.invalidate();
    }

    pub fn mutate(&mut self) {
        self.mutate_with(&mut rand::thread_rng());
    }

    /// Single-point crossover: swaps the turns from `cut_point` to the end between
    /// `self` and `other` and invalidates both scores.
    ///
    /// # Errors
    ///
    /// Fails without modifying either fold if the lengths differ or
    /// `cut_point > len()`.
    pub fn crossover(&mut self, other: &mut Fold, cut_point: usize) -> Result<(), FoldError> {
        if self.turns.len() != other.turns.len() {
            return Err(FoldError::CrossoverLengthMismatch {
                left: self.turns.len(),
                right: other.turns.len(),
            });
        }
        if cut_point > self.turns.len() {
            return Err(FoldError::CutPointOutOfRange {
                cut_point,
                len: self.turns.len(),
            });
        }

        self.turns[cut_point..].swap_with_slice(&mut other.turns[cut_point..]);
        self.invalidate();
        other.invalidate();
        Ok(())
    }

    fn invalidate(&mut self) {
        self.evaluation = Evaluation::Unevaluated;
    }

    fn check_residue_index(&self, index: usize) -> Result<(), FoldError> {
        if index > self.turns.len() {
            return Err(FoldError::IndexOutOfRange {
                index,
                len: self.residue_count(),
            });
        }
        Ok(())
    }
}

impl From<&[Direction]> for Fold {
    fn from(turns: &[Direction]) -> Self {
        Self::new(turns.to_vec())
    }
}

impl From<Vec<Direction>> for Fold {
    fn from(turns: Vec<Direction>) -> Self {
        Self::new(turns)
    }
}
