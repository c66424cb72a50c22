//! State behind the team generator view.
//!
//! The view owns the two inputs and the last generated sequence. The
//! sequence is only replaced by a successful regenerate; an invalid input
//! keeps the previous sequence and records the error for display.

use crate::constants::limits::{MAX_NETS, MAX_PEOPLE};
use crate::error::AppError;
use crate::sequence::{generate_sequence_with, net_sizes};
use rand::Rng;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct TeamGeneratorState {
    number_of_people: i64,
    net_count: i64,
    sequence: Vec<usize>,
    /// Inputs that produced `sequence`.
    generated_from: Option<(i64, i64)>,
    last_error: Option<String>,
}

impl TeamGeneratorState {
    /// Creates the state without generating anything yet.
    pub fn new(number_of_people: i64, net_count: i64) -> Self {
        Self {
            number_of_people,
            net_count,
            sequence: Vec::new(),
            generated_from: None,
            last_error: None,
        }
    }

    /// Creates the state and generates the first sequence, the way the view
    /// does when it is first shown.
    pub fn mount<R: Rng>(number_of_people: i64, net_count: i64, rng: &mut R) -> Self {
        let mut state = Self::new(number_of_people, net_count);
        // A failure is recorded in `last_error` and shown by the view.
        let _ = state.regenerate_with(rng);
        state
    }

    pub fn number_of_people(&self) -> i64 {
        self.number_of_people
    }

    pub fn net_count(&self) -> i64 {
        self.net_count
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the sequence with a fresh shuffle of the current inputs.
    ///
    /// On invalid inputs the previous sequence is kept and the error message
    /// is stored until the next successful regenerate.
    pub fn regenerate_with<R: Rng>(&mut self, rng: &mut R) -> Result<(), AppError> {
        match generate_sequence_with(self.number_of_people, self.net_count, rng) {
            Ok(sequence) => {
                info!(
                    "Generated team sequence: {} people over {} nets",
                    self.number_of_people, self.net_count
                );
                self.sequence = sequence;
                self.generated_from = Some((self.number_of_people, self.net_count));
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Keeping previous sequence: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Sets both inputs. Takes effect on the next regenerate.
    pub fn set_inputs(&mut self, number_of_people: i64, net_count: i64) {
        self.number_of_people = number_of_people;
        self.net_count = net_count;
    }

    /// Adjusts the number of people by `delta`, staying within 0..=MAX_PEOPLE.
    pub fn adjust_people(&mut self, delta: i64) {
        self.number_of_people = (self.number_of_people + delta).clamp(0, MAX_PEOPLE);
    }

    /// Adjusts the net count by `delta`, staying within 0..=MAX_NETS.
    /// Zero is allowed; regenerating with it reports the invalid configuration.
    pub fn adjust_nets(&mut self, delta: i64) {
        self.net_count = (self.net_count + delta).clamp(0, MAX_NETS);
    }

    /// Players per net in the current sequence, indexed from net 1.
    ///
    /// Covers every net the sequence was generated for, including nets left
    /// empty. Empty until a sequence has been generated.
    pub fn players_per_net(&self) -> Vec<usize> {
        self.generated_from
            .and_then(|(people, nets)| net_sizes(people, nets).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_mount_generates_initial_sequence() {
        let mut rng = SmallRng::seed_from_u64(1);
        let state = TeamGeneratorState::mount(13, 2, &mut rng);
        assert_eq!(state.sequence().len(), 13);
        assert_eq!(state.players_per_net(), vec![7, 6]);
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_mount_with_invalid_inputs_records_error() {
        let mut rng = SmallRng::seed_from_u64(1);
        let state = TeamGeneratorState::mount(5, 0, &mut rng);
        assert!(state.sequence().is_empty());
        assert!(state.last_error().unwrap().contains("net count"));
    }

    #[test]
    fn test_failed_regenerate_keeps_previous_sequence() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut state = TeamGeneratorState::mount(8, 2, &mut rng);
        let before = state.sequence().to_vec();

        state.adjust_nets(-2);
        assert_eq!(state.net_count(), 0);
        let err = state.regenerate_with(&mut rng).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert_eq!(state.sequence(), before.as_slice());
        assert!(state.last_error().is_some());

        state.adjust_nets(3);
        state.regenerate_with(&mut rng).unwrap();
        assert!(state.last_error().is_none());
        assert_eq!(state.players_per_net(), vec![3, 3, 2]);
    }

    #[test]
    fn test_players_per_net_includes_empty_nets() {
        let mut rng = SmallRng::seed_from_u64(4);
        let state = TeamGeneratorState::mount(2, 5, &mut rng);
        assert_eq!(state.players_per_net(), vec![1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_players_per_net_follows_generated_inputs() {
        let mut rng = SmallRng::seed_from_u64(6);
        let mut state = TeamGeneratorState::mount(7, 2, &mut rng);
        assert!(TeamGeneratorState::new(7, 2).players_per_net().is_empty());

        // Pending edits do not change the summary until regenerated
        state.set_inputs(7, 4);
        assert_eq!(state.players_per_net(), vec![4, 3]);
        state.adjust_nets(-4);
        let _ = state.regenerate_with(&mut rng);
        assert_eq!(state.players_per_net(), vec![4, 3]);
    }

    #[test]
    fn test_adjustments_are_clamped() {
        let mut state = TeamGeneratorState::new(1, 1);
        state.adjust_people(-5);
        assert_eq!(state.number_of_people(), 0);
        state.adjust_people(MAX_PEOPLE + 10);
        assert_eq!(state.number_of_people(), MAX_PEOPLE);
        state.adjust_nets(-5);
        assert_eq!(state.net_count(), 0);
        state.adjust_nets(MAX_NETS * 2);
        assert_eq!(state.net_count(), MAX_NETS);
    }

    #[test]
    fn test_set_inputs_applies_on_regenerate() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut state = TeamGeneratorState::mount(4, 2, &mut rng);
        state.set_inputs(6, 3);
        assert_eq!(state.sequence().len(), 4);
        state.regenerate_with(&mut rng).unwrap();
        assert_eq!(state.sequence().len(), 6);
        assert_eq!(state.players_per_net(), vec![2, 2, 2]);
    }

    #[test]
    fn test_zero_people_gives_empty_sequence() {
        let mut rng = SmallRng::seed_from_u64(9);
        let state = TeamGeneratorState::mount(0, 4, &mut rng);
        assert!(state.sequence().is_empty());
        assert_eq!(state.players_per_net(), vec![0, 0, 0, 0]);
        assert!(state.last_error().is_none());
    }
}
