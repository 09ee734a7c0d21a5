use crate::consts::{MAX_EXHAUSTIVE_ROSTER, WEIGHT_SUM_TOLERANCE};
use crate::error::{StatsError, StatsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    #[command(flatten)]
    pub selection: SelectionParams,
    #[command(flatten)]
    pub chemistry: ChemistryWeights,
}

/// Eligibility floors and result sizes for the rankings.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectionParams {
    #[arg(long, default_value_t = 3)]
    pub draft_min_games: i32,
    #[arg(long, default_value_t = 1)]
    pub similar_min_games: i32,
    #[arg(long, default_value_t = 5)]
    pub similar_top_n: usize,
    #[arg(long, default_value_t = 2)]
    pub comparables_min_games: i32,
    #[arg(long, default_value_t = 3)]
    pub comparables_top_n: usize,
    #[arg(long, default_value_t = 100)]
    pub ranking_limit: usize,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            draft_min_games: 3,
            similar_min_games: 1,
            similar_top_n: 5,
            comparables_min_games: 2,
            comparables_top_n: 3,
            ranking_limit: 100,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChemistryWeights {
    /// Share of the team score given to mean pair synergy.
    #[arg(long, default_value_t = 0.7)]
    pub synergy_weight: f64,
    /// Share of the team score given to role diversity.
    #[arg(long, default_value_t = 0.3)]
    pub diversity_weight: f64,
    /// Largest roster searched exhaustively for the best lineup.
    #[arg(long, default_value_t = 20)]
    pub lineup_exhaustive_limit: usize,
}

impl Default for ChemistryWeights {
    fn default() -> Self {
        Self {
            synergy_weight: 0.7,
            diversity_weight: 0.3,
            lineup_exhaustive_limit: 20,
        }
    }
}

impl ChemistryWeights {
    pub fn validate(&self) -> StatsResult<()> {
        let invalid = |reason: String| StatsError::InvalidWeights {
            profile: "chemistry".to_string(),
            reason,
        };
        for (name, w) in [
            ("synergy_weight", self.synergy_weight),
            ("diversity_weight", self.diversity_weight),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(invalid(format!("{} must be a finite non-negative number, got {}", name, w)));
            }
        }
        let sum = self.synergy_weight + self.diversity_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid(format!("weights sum to {}, expected 1.0", sum)));
        }
        if self.lineup_exhaustive_limit > MAX_EXHAUSTIVE_ROSTER {
            return Err(invalid(format!(
                "lineup_exhaustive_limit is {}, at most {} players can be searched exhaustively",
                self.lineup_exhaustive_limit, MAX_EXHAUSTIVE_ROSTER
            )));
        }
        Ok(())
    }
}

impl EngineConfig {
    pub fn validate(&self) -> StatsResult<()> {
        self.chemistry.validate()?;
        let s = &self.selection;
        if s.draft_min_games < 0 || s.similar_min_games < 0 || s.comparables_min_games < 0 {
            return Err(StatsError::Config(
                "game floors must not be negative".to_string(),
            ));
        }
        if s.similar_top_n == 0 || s.comparables_top_n == 0 {
            return Err(StatsError::Config("top-N sizes must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StatsError::Config(format!("failed to read config '{}': {}", path.display(), e))
        })?;
        let cfg: Self = serde_json::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Overlays arguments that were typed on the command line onto a
    /// file-loaded config. Defaults from clap never overwrite file values.
    pub fn merge_from_cli(&mut self, cli: &EngineConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(selection.draft_min_games);
        update_if_present!(selection.similar_min_games);
        update_if_present!(selection.similar_top_n);
        update_if_present!(selection.comparables_min_games);
        update_if_present!(selection.comparables_top_n);
        update_if_present!(selection.ranking_limit);

        update_if_present!(chemistry.synergy_weight);
        update_if_present!(chemistry.diversity_weight);
        update_if_present!(chemistry.lineup_exhaustive_limit);
    }
}
