use serde::{Deserialize, Serialize};

/// A participant in a single match. A team without a score is shown
/// without a score badge (the final winner column, or a bye).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl Team {
    pub fn new(name: impl Into<String>, score: Option<u32>) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// One match slot in a round. Holds two teams for a played match, or a
/// single team for a bye or a team that has advanced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub id: u32,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Seed {
    /// Index into `teams` of the winning team.
    ///
    /// A lone team always wins. With two teams the first wins only on a
    /// strictly higher score, so ties go to the second team. A missing score
    /// counts as zero.
    pub fn winner_index(&self) -> Option<usize> {
        match self.teams.as_slice() {
            [] => None,
            [_] => Some(0),
            [first, second, ..] => {
                if first.score.unwrap_or(0) > second.score.unwrap_or(0) {
                    Some(0)
                } else {
                    Some(1)
                }
            }
        }
    }

    pub fn winner(&self) -> Option<&Team> {
        self.winner_index().and_then(|index| self.teams.get(index))
    }

    /// True when the slot holds a single team.
    pub fn is_bye(&self) -> bool {
        self.teams.len() == 1
    }
}

/// A column in the bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub title: String,
    #[serde(default)]
    pub seeds: Vec<Seed>,
}

/// The whole tournament bracket, rounds ordered from first to final.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Bracket {
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Total number of seeds over all rounds
    pub fn seed_count(&self) -> usize {
        self.rounds.iter().map(|round| round.seeds.len()).sum()
    }

    /// The team in the last round's first seed, if the bracket is decided.
    pub fn champion(&self) -> Option<&Team> {
        self.rounds
            .last()
            .and_then(|round| round.seeds.first())
            .filter(|seed| seed.is_bye())
            .and_then(Seed::winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(teams: Vec<Team>) -> Seed {
        Seed { id: 1, teams }
    }

    #[test]
    fn test_higher_first_score_wins() {
        let s = seed(vec![
            Team::new("Team Alpha", Some(4)),
            Team::new("Team Bravo", Some(2)),
        ]);
        assert_eq!(s.winner_index(), Some(0));
        assert_eq!(s.winner().map(|t| t.name.as_str()), Some("Team Alpha"));
    }

    #[test]
    fn test_higher_second_score_wins() {
        let s = seed(vec![
            Team::new("Team Charlie", Some(1)),
            Team::new("Team Delta", Some(5)),
        ]);
        assert_eq!(s.winner_index(), Some(1));
    }

    #[test]
    fn test_tie_goes_to_second_team() {
        let s = seed(vec![Team::new("A", Some(3)), Team::new("B", Some(3))]);
        assert_eq!(s.winner_index(), Some(1));
    }

    #[test]
    fn test_missing_score_counts_as_zero() {
        let s = seed(vec![Team::new("A", Some(0)), Team::new("B", None)]);
        assert_eq!(s.winner_index(), Some(1));
        let s = seed(vec![Team::new("A", Some(3)), Team::new("B", None)]);
        assert_eq!(s.winner_index(), Some(0));
        let s = seed(vec![Team::new("A", None), Team::new("B", Some(0))]);
        assert_eq!(s.winner_index(), Some(1));
        let s = seed(vec![Team::new("A", None), Team::new("B", None)]);
        assert_eq!(s.winner_index(), Some(1));
    }

    #[test]
    fn test_single_team_is_bye_winner() {
        let s = seed(vec![Team::new("Team Hotel", None)]);
        assert!(s.is_bye());
        assert_eq!(s.winner_index(), Some(0));
    }

    #[test]
    fn test_empty_seed_has_no_winner() {
        let s = seed(vec![]);
        assert_eq!(s.winner_index(), None);
        assert!(s.winner().is_none());
    }

    #[test]
    fn test_champion_requires_single_team_final_column() {
        let mut bracket = Bracket {
            rounds: vec![Round {
                title: "Finals".to_string(),
                seeds: vec![seed(vec![Team::new("A", Some(2)), Team::new("B", Some(1))])],
            }],
        };
        assert!(bracket.champion().is_none());

        bracket.rounds.push(Round {
            title: "Winner".to_string(),
            seeds: vec![seed(vec![Team::new("A", None)])],
        });
        assert_eq!(bracket.champion().map(|t| t.name.as_str()), Some("A"));
        assert_eq!(bracket.seed_count(), 2);
    }
}
