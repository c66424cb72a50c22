//! Built-in bracket shown when no bracket file is configured.

use super::models::{Bracket, Round, Seed, Team};

fn played(id: u32, home: (&str, u32), away: (&str, u32)) -> Seed {
    Seed {
        id,
        teams: vec![
            Team::new(home.0, Some(home.1)),
            Team::new(away.0, Some(away.1)),
        ],
    }
}

impl Bracket {
    /// Eight-team single elimination bracket with every result filled in.
    pub fn sample() -> Self {
        Bracket {
            rounds: vec![
                Round {
                    title: "Quarter-finals".to_string(),
                    seeds: vec![
                        played(1, ("Team Alpha", 4), ("Team Bravo", 2)),
                        played(2, ("Team Charlie", 1), ("Team Delta", 5)),
                        played(3, ("Team Echo", 3), ("Team Foxtrot", 2)),
                        played(4, ("Team Golf", 0), ("Team Hotel", 3)),
                    ],
                },
                Round {
                    title: "Semi-finals".to_string(),
                    seeds: vec![
                        played(5, ("Team Alpha", 3), ("Team Delta", 2)),
                        played(6, ("Team Echo", 1), ("Team Hotel", 4)),
                    ],
                },
                Round {
                    title: "Finals".to_string(),
                    seeds: vec![played(7, ("Team Alpha", 2), ("Team Hotel", 5))],
                },
                Round {
                    title: "Winner".to_string(),
                    seeds: vec![Seed {
                        id: 8,
                        teams: vec![Team::new("Team Hotel", None)],
                    }],
                },
            ],
        }
    }
}
