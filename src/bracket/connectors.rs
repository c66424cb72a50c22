use super::models::Bracket;

/// Lines drawn after a round that join pairs of matches into the next round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorGroup {
    /// Index of the round the connectors start from
    pub round_index: usize,
    /// Number of matches in that round
    pub match_count: usize,
    /// Pairs of seed indices joined by one connector. The second element is
    /// `None` for the trailing match of an odd-sized round.
    pub pairs: Vec<(usize, Option<usize>)>,
}

impl Bracket {
    /// Connector groups to draw between rounds.
    ///
    /// Connectors follow rounds that have at least two later columns, sit
    /// at an even round index and hold more than one match. Odd match counts
    /// get a final single-arm connector.
    pub fn connectors(&self) -> Vec<ConnectorGroup> {
        let round_count = self.rounds.len();
        self.rounds
            .iter()
            .enumerate()
            .filter(|&(index, round)| {
                index + 2 < round_count && index % 2 == 0 && round.seeds.len() > 1
            })
            .map(|(index, round)| {
                let match_count = round.seeds.len();
                let pairs = (0..match_count.div_ceil(2))
                    .map(|pair| {
                        let upper = pair * 2;
                        let lower = upper + 1;
                        (upper, (lower < match_count).then_some(lower))
                    })
                    .collect();
                ConnectorGroup {
                    round_index: index,
                    match_count,
                    pairs,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::models::{Round, Seed, Team};

    fn round_with(matches: usize) -> Round {
        Round {
            title: format!("{matches} matches"),
            seeds: (0..matches)
                .map(|i| Seed {
                    id: i as u32,
                    teams: vec![Team::new("A", Some(1)), Team::new("B", Some(0))],
                })
                .collect(),
        }
    }

    #[test]
    fn test_sample_bracket_connects_quarter_finals_only() {
        let connectors = Bracket::sample().connectors();
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].round_index, 0);
        assert_eq!(connectors[0].match_count, 4);
        assert_eq!(connectors[0].pairs, vec![(0, Some(1)), (2, Some(3))]);
    }

    #[test]
    fn test_odd_round_gets_single_arm_connector() {
        let bracket = Bracket {
            rounds: vec![round_with(3), round_with(2), round_with(1), round_with(1)],
        };
        let connectors = bracket.connectors();
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].pairs.len(), 2);
        assert_eq!(connectors[0].pairs[1], (2, None));
    }

    #[test]
    fn test_last_two_rounds_never_get_connectors() {
        let bracket = Bracket {
            rounds: vec![round_with(4), round_with(2)],
        };
        assert!(bracket.connectors().is_empty());
    }

    #[test]
    fn test_single_match_round_has_no_connector() {
        let bracket = Bracket {
            rounds: vec![round_with(1), round_with(1), round_with(1)],
        };
        assert!(bracket.connectors().is_empty());
    }

    #[test]
    fn test_odd_round_index_is_skipped() {
        let bracket = Bracket {
            rounds: vec![
                round_with(8),
                round_with(4),
                round_with(2),
                round_with(1),
                round_with(1),
            ],
        };
        let indices: Vec<usize> = bracket.connectors().iter().map(|c| c.round_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
