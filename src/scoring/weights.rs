use crate::consts::WEIGHT_SUM_TOLERANCE;
use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// How a raw column is brought onto [0, 100] before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scaling {
    /// Min-max over the active candidate set.
    MinMax,
    /// Already on [0, 100] (percentiles). Passed through.
    Identity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    pub weight: f64,
    pub direction: Direction,
    pub scaling: Scaling,
}

impl Component {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            direction: Direction::HigherIsBetter,
            scaling: Scaling::MinMax,
        }
    }

    pub fn lower_is_better(mut self) -> Self {
        self.direction = Direction::LowerIsBetter;
        self
    }

    pub fn identity(mut self) -> Self {
        self.scaling = Scaling::Identity;
        self
    }
}

/// Named set of weighted components. Weights are calibrated constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightProfile {
    pub name: String,
    pub components: Vec<Component>,
}

impl WeightProfile {
    pub fn new(name: impl Into<String>, components: Vec<Component>) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }

    pub fn validate(&self) -> StatsResult<()> {
        let invalid = |reason: String| StatsError::InvalidWeights {
            profile: self.name.clone(),
            reason,
        };

        if self.components.is_empty() {
            return Err(invalid("profile has no components".to_string()));
        }

        let mut seen = HashSet::new();
        for c in &self.components {
            if !c.weight.is_finite() || c.weight < 0.0 {
                return Err(invalid(format!(
                    "component '{}' has weight {}",
                    c.name, c.weight
                )));
            }
            if !seen.insert(c.name.as_str()) {
                return Err(invalid(format!("duplicate component '{}'", c.name)));
            }
        }

        let sum: f64 = self.components.iter().map(|c| c.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid(format!("weights sum to {:.6}, expected 1.0", sum)));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn power_rating() -> Self {
        Self::new(
            "power_rating",
            vec![
                Component::new("win_pct", 0.40),
                Component::new("point_diff", 0.25),
                Component::new("top5_scoring", 0.20),
                Component::new("bench_depth", 0.15),
            ],
        )
    }

    pub fn draft_board() -> Self {
        Self::new(
            "draft_board",
            vec![
                Component::new("per", 0.40),
                Component::new("scoring_trend", 0.20),
                Component::new("consistency", 0.20).lower_is_better(),
                Component::new("availability", 0.20),
            ],
        )
    }

    pub fn report_card() -> Self {
        Self::new(
            "report_card",
            vec![
                Component::new("scoring", 0.30).identity(),
                Component::new("efficiency", 0.20).identity(),
                Component::new("three_point", 0.15).identity(),
                Component::new("experience", 0.20).identity(),
                Component::new("discipline", 0.15).identity(),
            ],
        )
    }
}
