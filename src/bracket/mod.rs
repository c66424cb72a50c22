//! Static tournament bracket data.
//!
//! Brackets are displayed as given: match results are never advanced or
//! recomputed, the only derived value is the winner of each match.

pub mod connectors;
pub mod models;
pub mod sample;

pub use connectors::ConnectorGroup;
pub use models::{Bracket, Round, Seed, Team};

use crate::error::AppError;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

impl Bracket {
    /// Parses a bracket from TOML text and checks its structure.
    ///
    /// # Example
    /// ```
    /// use volleyball_matcher::bracket::Bracket;
    ///
    /// let bracket = Bracket::from_toml_str(r#"
    /// [[rounds]]
    /// title = "Finals"
    ///
    /// [[rounds.seeds]]
    /// id = 1
    /// teams = [{ name = "Sand Sharks", score = 2 }, { name = "Net Ninjas", score = 1 }]
    /// "#)?;
    /// assert_eq!(bracket.rounds[0].seeds[0].winner().unwrap().name, "Sand Sharks");
    /// # Ok::<(), volleyball_matcher::AppError>(())
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let bracket: Bracket = toml::from_str(content)?;
        bracket.validate()?;
        Ok(bracket)
    }

    /// Loads a bracket from a TOML file.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let bracket = Self::from_toml_str(&content)?;
        info!(
            "Loaded bracket from {} ({} rounds, {} seeds)",
            path,
            bracket.rounds.len(),
            bracket.seed_count()
        );
        Ok(bracket)
    }

    /// Loads the configured bracket file, or the built-in sample when no file
    /// is configured or the file cannot be used.
    pub async fn load_or_sample(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::sample();
        };
        if !Path::new(path).exists() {
            warn!("Bracket file {} does not exist, using sample bracket", path);
            return Self::sample();
        }
        match Self::load_from_path(path).await {
            Ok(bracket) => bracket,
            Err(e) => {
                warn!("Failed to load bracket file {}: {}, using sample bracket", path, e);
                Self::sample()
            }
        }
    }

    /// Checks that every seed has one or two teams and that seed ids are unique.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen_ids = HashSet::new();
        for round in &self.rounds {
            if round.title.trim().is_empty() {
                return Err(AppError::bracket_error("round title cannot be empty"));
            }
            for seed in &round.seeds {
                if seed.teams.is_empty() || seed.teams.len() > 2 {
                    return Err(AppError::bracket_error(format!(
                        "seed {} in '{}' must have one or two teams, found {}",
                        seed.id,
                        round.title,
                        seed.teams.len()
                    )));
                }
                if !seen_ids.insert(seed.id) {
                    return Err(AppError::bracket_error(format!(
                        "duplicate seed id {}",
                        seed.id
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_ROUNDS: &str = r#"
[[rounds]]
title = "Semi-finals"

[[rounds.seeds]]
id = 1
teams = [{ name = "Block Party", score = 21 }, { name = "Dig Deep", score = 17 }]

[[rounds.seeds]]
id = 2
teams = [{ name = "Spike Force", score = 15 }, { name = "Ace Ventura", score = 21 }]

[[rounds]]
title = "Finals"

[[rounds.seeds]]
id = 3
teams = [{ name = "Block Party" }, { name = "Ace Ventura" }]
"#;

    #[test]
    fn test_from_toml_str_parses_rounds_and_optional_scores() {
        let bracket = Bracket::from_toml_str(TWO_ROUNDS).unwrap();
        assert_eq!(bracket.rounds.len(), 2);
        assert_eq!(bracket.rounds[0].seeds[1].winner_index(), Some(1));
        assert_eq!(bracket.rounds[1].seeds[0].teams[0].score, None);
    }

    #[test]
    fn test_empty_document_is_empty_bracket() {
        let bracket = Bracket::from_toml_str("").unwrap();
        assert!(bracket.is_empty());
    }

    #[test]
    fn test_validate_rejects_three_team_seed() {
        let content = r#"
[[rounds]]
title = "Pool"
[[rounds.seeds]]
id = 1
teams = [{ name = "A" }, { name = "B" }, { name = "C" }]
"#;
        let err = Bracket::from_toml_str(content).unwrap_err();
        assert!(matches!(err, AppError::Bracket(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut bracket = Bracket::sample();
        bracket.rounds[1].seeds[0].id = 1;
        let err = bracket.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate seed id 1"));
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(Bracket::sample().validate().is_ok());
    }

    #[tokio::test]
    async fn test_load_from_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bracket.toml");
        tokio::fs::write(&path, TWO_ROUNDS).await.unwrap();

        let bracket = Bracket::load_from_path(&path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(bracket.seed_count(), 3);
    }

    #[tokio::test]
    async fn test_load_or_sample_falls_back() {
        assert_eq!(Bracket::load_or_sample(None).await, Bracket::sample());
        assert_eq!(
            Bracket::load_or_sample(Some("/definitely/not/here.toml")).await,
            Bracket::sample()
        );

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.toml");
        tokio::fs::write(&path, "rounds = [").await.unwrap();
        let path = path.to_string_lossy().to_string();
        assert_eq!(Bracket::load_or_sample(Some(&path)).await, Bracket::sample());
    }
}
