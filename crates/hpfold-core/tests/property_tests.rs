//! Property-based tests for hpfold
//!
//! Uses proptest to check geometric and scoring invariants of folds.

use hpfold::core::models::direction::Direction;
use hpfold::core::models::fold::Fold;
use hpfold::core::models::sequence::HpSequence;
use hpfold::core::scoring::{Evaluation, NOT_EVALUABLE};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Straight),
        Just(Direction::Right),
    ]
}

fn turns(max_len: usize) -> impl Strategy<Value = Vec<Direction>> {
    prop::collection::vec(direction(), 0..max_len)
}

/// Turns and a matching HP string (one residue more than turns).
fn fold_and_sequence(max_len: usize) -> impl Strategy<Value = (Vec<Direction>, String)> {
    turns(max_len).prop_flat_map(|t| {
        let residues = t.len() + 1;
        (
            Just(t),
            prop::collection::vec(prop_oneof![Just('0'), Just('1')], residues)
                .prop_map(|chars| chars.into_iter().collect::<String>()),
        )
    })
}

/// The same chain walked from the other end: the first turn only fixes the global
/// orientation, the remaining turns are reversed and mirrored.
fn reversed_turns(turns: &[Direction]) -> Vec<Direction> {
    let mut reversed = vec![Direction::Straight];
    reversed.extend(turns.iter().skip(1).rev().map(|d| d.inverse()));
    reversed.truncate(turns.len());
    reversed
}

proptest! {
    // ==================== Geometry ====================

    #[test]
    fn bounding_box_is_ordered_and_contains_every_residue(t in turns(40)) {
        let fold = Fold::new(t);
        let bbox = fold.bounding_box();
        prop_assert!(bbox.min.x <= bbox.max.x);
        prop_assert!(bbox.min.y <= bbox.max.y);
        for i in 0..=fold.len() {
            let p = fold.position_at(i).unwrap();
            prop_assert!(bbox.contains(p));
        }
    }

    #[test]
    fn consecutive_residues_are_lattice_neighbours(t in turns(40)) {
        let positions = Fold::new(t).positions();
        for pair in positions.windows(2) {
            prop_assert!(pair[0].is_adjacent(pair[1]));
        }
    }

    #[test]
    fn position_past_the_last_residue_is_rejected(t in turns(20), extra in 1usize..5) {
        let fold = Fold::new(t);
        prop_assert!(fold.position_at(fold.len() + extra).is_err());
        prop_assert!(fold.overlaps_at_position(fold.len() + extra).is_err());
    }

    #[test]
    fn per_position_overlaps_sum_to_twice_the_overlapping_pairs((t, s) in fold_and_sequence(30)) {
        let mut fold = Fold::new(t);
        fold.evaluate(&HpSequence::from(s.as_str())).unwrap();
        let total: usize = (0..=fold.len())
            .map(|i| fold.overlaps_at_position(i).unwrap())
            .sum();
        prop_assert_eq!(total, 2 * fold.overlaps().unwrap());
    }

    // ==================== Scoring ====================

    #[test]
    fn evaluate_is_idempotent((t, s) in fold_and_sequence(30)) {
        let sequence = HpSequence::from(s.as_str());
        let mut fold = Fold::new(t);
        let first = fold.evaluate(&sequence).unwrap();
        let snapshot = *fold.evaluation();
        let second = fold.evaluate(&sequence).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(snapshot, *fold.evaluation());
    }

    #[test]
    fn fitness_follows_from_the_counters((t, s) in fold_and_sequence(30)) {
        let mut fold = Fold::new(t);
        let fitness = fold.evaluate(&HpSequence::from(s.as_str())).unwrap();
        let expected = fold.energy().unwrap() as f64 / (fold.overlaps().unwrap() + 1) as f64;
        prop_assert_eq!(fitness, expected);
        prop_assert!(fitness >= 0.0);
    }

    #[test]
    fn mismatched_lengths_are_never_evaluable(t in turns(20), residues in 0usize..25) {
        prop_assume!(residues != t.len() + 1);
        let mut fold = Fold::new(t);
        let sequence = HpSequence::from("1".repeat(residues).as_str());
        prop_assert_eq!(fold.score(&sequence), NOT_EVALUABLE);
        prop_assert_eq!(*fold.evaluation(), Evaluation::Unevaluated);
    }

    #[test]
    fn counts_do_not_depend_on_which_end_the_chain_is_walked_from((t, s) in fold_and_sequence(30)) {
        let sequence = HpSequence::from(s.as_str());
        let mut forward = Fold::new(t.clone());
        let mut backward = Fold::new(reversed_turns(&t));
        forward.evaluate(&sequence).unwrap();
        backward.evaluate(&sequence.reversed()).unwrap();
        prop_assert_eq!(forward.overlaps(), backward.overlaps());
        prop_assert_eq!(forward.energy(), backward.energy());
    }

    #[test]
    fn first_turn_only_rotates_the_fold((t, s) in fold_and_sequence(30), first in direction()) {
        prop_assume!(!t.is_empty());
        let sequence = HpSequence::from(s.as_str());
        let mut rotated_turns = t.clone();
        rotated_turns[0] = first;
        let mut original = Fold::new(t);
        let mut rotated = Fold::new(rotated_turns);
        prop_assert_eq!(original.evaluate(&sequence), rotated.evaluate(&sequence));
    }

    // ==================== Operators ====================

    #[test]
    fn mutation_invalidates_and_preserves_length((t, s) in fold_and_sequence(30), seed in any::<u64>()) {
        prop_assume!(!t.is_empty());
        let mut fold = Fold::new(t.clone());
        fold.evaluate(&HpSequence::from(s.as_str())).unwrap();
        fold.mutate_with(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(fold.len(), t.len());
        prop_assert!(fold.fitness().is_none());
        let changed = fold.directions().iter().zip(&t).filter(|(a, b)| a != b).count();
        prop_assert!(changed <= 1);
    }

    #[test]
    fn crossover_swaps_suffixes_exactly(
        (a, b, cut) in (1usize..30).prop_flat_map(|len| (
            prop::collection::vec(direction(), len),
            prop::collection::vec(direction(), len),
            0..=len,
        ))
    ) {
        let mut left = Fold::new(a.clone());
        let mut right = Fold::new(b.clone());
        left.crossover(&mut right, cut).unwrap();

        prop_assert_eq!(&left.directions()[..cut], &a[..cut]);
        prop_assert_eq!(&right.directions()[..cut], &b[..cut]);
        prop_assert_eq!(&left.directions()[cut..], &b[cut..]);
        prop_assert_eq!(&right.directions()[cut..], &a[cut..]);
        prop_assert!(!left.evaluation().is_evaluated());
        prop_assert!(!right.evaluation().is_evaluated());
    }

    #[test]
    fn crossover_of_unequal_lengths_is_rejected(a in turns(20), b in turns(20), cut in 0usize..20) {
        prop_assume!(a.len() != b.len());
        let mut left = Fold::new(a.clone());
        let mut right = Fold::new(b.clone());
        prop_assert!(left.crossover(&mut right, cut).is_err());
        prop_assert_eq!(left.directions(), a.as_slice());
        prop_assert_eq!(right.directions(), b.as_slice());
    }
}
