use crate::domain::model::{Candidate, RoundSelection};
use crate::utils::error::{QuizError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Draws one round's choice set: a target picked uniformly from the
/// candidates that have not yet been a target, plus `choice_count - 1`
/// distinct decoys from the rest of the roster, in a uniformly shuffled
/// order so the target's position is unpredictable.
///
/// Pure apart from the injected RNG. The caller records `target.id` into
/// `used_targets` after a successful call.
pub fn select_round<R: Rng + ?Sized>(
    roster: &[Candidate],
    used_targets: &HashSet<u32>,
    choice_count: usize,
    rng: &mut R,
) -> Result<RoundSelection> {
    if choice_count < 1 || choice_count > roster.len() {
        return Err(QuizError::ConfigError {
            message: format!(
                "choice count {} is out of range for a roster of {}",
                choice_count,
                roster.len()
            ),
        });
    }

    let eligible: Vec<&Candidate> = roster
        .iter()
        .filter(|c| !used_targets.contains(&c.id))
        .collect();
    let target = (*eligible.choose(rng).ok_or(QuizError::ExhaustionError)?).clone();

    // Decoys come from the whole roster minus the target; a partial
    // Fisher-Yates gives a uniform draw without replacement.
    let mut pool: Vec<&Candidate> = roster.iter().filter(|c| c.id != target.id).collect();
    let (decoys, _) = pool.partial_shuffle(rng, choice_count - 1);

    let mut choices: Vec<Candidate> = decoys.iter().map(|c| (*c).clone()).collect();
    choices.push(target.clone());
    choices.shuffle(rng);

    Ok(RoundSelection { choices, target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(n: u32) -> Vec<Candidate> {
        (1..=n)
            .map(|id| Candidate {
                id,
                display_name: format!("Candidate {}", id),
                years_in_service: String::new(),
                image_ref: format!("portraits/{}.jpg", id),
                order: id,
            })
            .collect()
    }

    #[test]
    fn test_target_appears_exactly_once() {
        let roster = roster(20);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let selection = select_round(&roster, &HashSet::new(), 12, &mut rng).unwrap();
            assert_eq!(selection.choices.len(), 12);
            let hits = selection
                .choices
                .iter()
                .filter(|c| c.id == selection.target.id)
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_no_duplicate_choice_ids() {
        let roster = roster(20);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let selection = select_round(&roster, &HashSet::new(), 12, &mut rng).unwrap();
            let ids: HashSet<u32> = selection.choices.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), selection.choices.len());
        }
    }

    #[test]
    fn test_used_targets_are_never_redrawn() {
        let roster = roster(10);
        let mut rng = StdRng::seed_from_u64(3);
        let mut used = HashSet::new();
        for _ in 0..10 {
            let selection = select_round(&roster, &used, 4, &mut rng).unwrap();
            assert!(!used.contains(&selection.target.id));
            let _ = used.insert(selection.target.id);
        }
        assert_eq!(used.len(), 10);
    }

    #[test]
    fn test_exhausted_roster_fails() {
        let roster = roster(3);
        let used: HashSet<u32> = roster.iter().map(|c| c.id).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let err = select_round(&roster, &used, 2, &mut rng).unwrap_err();
        assert!(matches!(err, QuizError::ExhaustionError));
    }

    #[test]
    fn test_choice_count_larger_than_roster_is_rejected() {
        let roster = roster(5);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_round(&roster, &HashSet::new(), 6, &mut rng).is_err());
        assert!(select_round(&roster, &HashSet::new(), 0, &mut rng).is_err());
    }

    #[test]
    fn test_used_targets_may_still_appear_as_decoys() {
        // Only the target draw excludes used ids; the decoy pool is the
        // whole roster minus the target, same as the original board.
        let roster = roster(5);
        let mut rng = StdRng::seed_from_u64(9);
        let used: HashSet<u32> = [1, 2, 3, 4].into_iter().collect();
        let selection = select_round(&roster, &used, 5, &mut rng).unwrap();
        assert_eq!(selection.target.id, 5);
        let ids: HashSet<u32> = selection.choices.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 5);
    }
}
