//! Random team sequence generation.
//!
//! Every participant is first assigned to a net round-robin, so participant
//! `i` plays on net `(i % net_count) + 1`. The assignment list is then
//! permuted with a Fisher-Yates shuffle, which keeps the per-net group sizes
//! balanced while making the order uniformly random.
//!
//! # Example
//!
//! ```
//! use volleyball_matcher::sequence::{build_assignments, generate_sequence};
//!
//! let assignments = build_assignments(13, 2)?;
//! assert_eq!(assignments, vec![1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1]);
//!
//! let sequence = generate_sequence(13, 2)?;
//! assert_eq!(sequence.iter().filter(|&&net| net == 1).count(), 7);
//! assert_eq!(sequence.iter().filter(|&&net| net == 2).count(), 6);
//! # Ok::<(), volleyball_matcher::AppError>(())
//! ```

use crate::error::AppError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Checks the generator inputs and converts them to sizes.
///
/// Inputs are signed so that negative values coming from a form or the
/// command line can be rejected instead of wrapping around.
fn validate_inputs(number_of_people: i64, net_count: i64) -> Result<(usize, usize), AppError> {
    if net_count <= 0 {
        return Err(AppError::invalid_configuration(
            number_of_people,
            net_count,
            "net count must be at least 1",
        ));
    }
    if number_of_people < 0 {
        return Err(AppError::invalid_configuration(
            number_of_people,
            net_count,
            "number of people cannot be negative",
        ));
    }

    let people = usize::try_from(number_of_people).map_err(|_| {
        AppError::invalid_configuration(
            number_of_people,
            net_count,
            "number of people does not fit in memory",
        )
    })?;
    let nets = usize::try_from(net_count).map_err(|_| {
        AppError::invalid_configuration(number_of_people, net_count, "net count is too large")
    })?;

    Ok((people, nets))
}

/// Returns the round-robin net assignment for every participant, in order.
///
/// Participant `i` gets net `(i % net_count) + 1`. Deterministic.
///
/// # Errors
/// `AppError::InvalidConfiguration` when `net_count <= 0` or
/// `number_of_people < 0`.
pub fn build_assignments(number_of_people: i64, net_count: i64) -> Result<Vec<usize>, AppError> {
    let (people, nets) = validate_inputs(number_of_people, net_count)?;
    Ok((0..people).map(|i| (i % nets) + 1).collect())
}

/// Number of participants assigned to each net, indexed from net 1.
///
/// The first `number_of_people % net_count` nets get one extra participant.
pub fn net_sizes(number_of_people: i64, net_count: i64) -> Result<Vec<usize>, AppError> {
    let (people, nets) = validate_inputs(number_of_people, net_count)?;
    let base = people / nets;
    let remainder = people % nets;
    Ok((0..nets)
        .map(|net| if net < remainder { base + 1 } else { base })
        .collect())
}

/// Returns a shuffled copy of `items` using the thread-local generator.
///
/// The input slice is never modified.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Returns a shuffled copy of `items` drawing randomness from `rng`.
///
/// Fisher-Yates: walk `i` from the last index down to 1, pick `j` uniformly
/// from `0..=i` and swap. Every permutation is equally likely given an
/// unbiased generator.
pub fn shuffle_with<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Builds the round-robin assignments and returns them in random order.
pub fn generate_sequence(number_of_people: i64, net_count: i64) -> Result<Vec<usize>, AppError> {
    generate_sequence_with(number_of_people, net_count, &mut rand::rng())
}

/// Same as [`generate_sequence`] with an explicit random source.
pub fn generate_sequence_with<R: Rng>(
    number_of_people: i64,
    net_count: i64,
    rng: &mut R,
) -> Result<Vec<usize>, AppError> {
    let assignments = build_assignments(number_of_people, net_count)?;
    debug!(
        "Generating sequence for {} people over {} nets",
        number_of_people, net_count
    );
    Ok(shuffle_with(&assignments, rng))
}

/// Random source for a UI session. A fixed seed makes every regenerate
/// reproducible; otherwise the generator is seeded from the thread-local one.
pub fn session_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => {
            debug!("Using fixed shuffle seed {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<usize>) -> Vec<usize> {
        values.sort_unstable();
        values
    }

    #[test]
    fn test_build_assignments_round_robin() {
        assert_eq!(
            build_assignments(13, 2).unwrap(),
            vec![1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1]
        );
        assert_eq!(build_assignments(7, 3).unwrap(), vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_build_assignments_fewer_people_than_nets() {
        assert_eq!(build_assignments(2, 5).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_zero_people_is_empty_for_any_net_count() {
        for nets in 1..=6 {
            assert!(build_assignments(0, nets).unwrap().is_empty());
            assert!(generate_sequence(0, nets).unwrap().is_empty());
        }
    }

    #[test]
    fn test_single_net_gives_all_ones() {
        let sequence = generate_sequence(9, 1).unwrap();
        assert_eq!(sequence, vec![1; 9]);
    }

    #[test]
    fn test_zero_nets_is_rejected() {
        let err = generate_sequence(5, 0).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_negative_inputs_are_rejected() {
        assert!(matches!(
            build_assignments(5, -2),
            Err(AppError::InvalidConfiguration { net_count: -2, .. })
        ));
        assert!(matches!(
            generate_sequence(-1, 2),
            Err(AppError::InvalidConfiguration {
                number_of_people: -1,
                ..
            })
        ));
        assert!(net_sizes(-3, 2).is_err());
    }

    #[test]
    fn test_generate_sequence_keeps_multiset() {
        let sequence = generate_sequence(13, 2).unwrap();
        assert_eq!(sequence.len(), 13);
        assert_eq!(sequence.iter().filter(|&&n| n == 1).count(), 7);
        assert_eq!(sequence.iter().filter(|&&n| n == 2).count(), 6);
        assert_eq!(
            sorted(sequence),
            sorted(build_assignments(13, 2).unwrap())
        );
    }

    #[test]
    fn test_net_sizes_remainder_goes_to_lowest_nets() {
        assert_eq!(net_sizes(13, 2).unwrap(), vec![7, 6]);
        assert_eq!(net_sizes(11, 4).unwrap(), vec![3, 3, 3, 2]);
        assert_eq!(net_sizes(0, 3).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let copy = original.clone();
        let shuffled = shuffle(&original);
        assert_eq!(original, copy);
        assert_eq!(sorted(shuffled), copy);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&["only"]), vec!["only"]);
    }

    #[test]
    fn test_shuffle_with_same_seed_is_reproducible() {
        let items: Vec<usize> = (0..50).collect();
        let first = shuffle_with(&items, &mut SmallRng::seed_from_u64(7));
        let second = shuffle_with(&items, &mut SmallRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_repeated_shuffles_change_order() {
        let items: Vec<usize> = (0..50).collect();
        let mut rng = SmallRng::seed_from_u64(99);
        let first = shuffle_with(&items, &mut rng);
        let second = shuffle_with(&items, &mut rng);
        assert_ne!(first, second);
        assert_eq!(sorted(first), sorted(second));
    }

    #[test]
    fn test_session_rng_with_seed_is_reproducible() {
        let mut first = session_rng(Some(42));
        let mut second = session_rng(Some(42));
        assert_eq!(
            generate_sequence_with(20, 3, &mut first).unwrap(),
            generate_sequence_with(20, 3, &mut second).unwrap()
        );
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // Each of the 6 permutations of three items should show up about
        // 1/6 of the time.
        let items = [0u8, 1, 2];
        let mut rng = SmallRng::seed_from_u64(2024);
        let mut counts = std::collections::HashMap::new();
        let trials = 60_000;
        for _ in 0..trials {
            *counts.entry(shuffle_with(&items, &mut rng)).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!(
                (9_000..=11_000).contains(count),
                "permutation count {count} is far from {}",
                trials / 6
            );
        }
    }
}
