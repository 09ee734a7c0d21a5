pub mod draft;
pub mod per;
pub mod power;
pub mod report_card;
pub mod weights;

pub use self::weights::{Component, Direction, Scaling, WeightProfile};

use crate::error::{StatsError, StatsResult};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScore {
    pub name: String,
    pub raw: f64,
    /// Value on [0, 100] after scaling, before weighting.
    pub scaled: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScore {
    pub total: f64,
    pub components: Vec<ComponentScore>,
}

impl CompositeScore {
    pub fn component(&self, name: &str) -> Option<&ComponentScore> {
        self.components.iter().find(|c| c.name == name)
    }
}

/// Weighted sum of normalized components, driven by a validated profile.
#[derive(Debug, Clone)]
pub struct CompositeScorer {
    profile: WeightProfile,
}

impl CompositeScorer {
    pub fn new(profile: WeightProfile) -> StatsResult<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    pub fn profile(&self) -> &WeightProfile {
        &self.profile
    }

    fn check_arity(&self, found: usize) -> StatsResult<()> {
        if found != self.profile.len() {
            return Err(StatsError::Validation(format!(
                "profile '{}' expects {} components, got {}",
                self.profile.name,
                self.profile.len(),
                found
            )));
        }
        Ok(())
    }

    /// Σ weight·value over already-normalized values, clamped to [0, 100].
    pub fn combine(&self, values: &[f64]) -> StatsResult<f64> {
        self.check_arity(values.len())?;
        let total: f64 = self
            .profile
            .components
            .iter()
            .zip(values)
            .map(|(c, v)| c.weight * v)
            .sum();
        Ok(total.clamp(0.0, 100.0))
    }

    /// Scales every column across `rows` and combines each row.
    ///
    /// Rows must already be filtered to the eligible candidates; the result
    /// is in input order. An empty slice yields an empty result.
    pub fn score_candidates<R: AsRef<[f64]>>(&self, rows: &[R]) -> StatsResult<Vec<CompositeScore>> {
        for row in rows {
            self.check_arity(row.as_ref().len())?;
        }
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let scaled_columns: Vec<Vec<f64>> = self
            .profile
            .components
            .iter()
            .enumerate()
            .map(|(col, c)| {
                let column: Vec<f64> = rows.iter().map(|r| r.as_ref()[col]).collect();
                match c.scaling {
                    Scaling::MinMax => min_max_scale(&column, c.direction),
                    Scaling::Identity => column.iter().map(|v| v.clamp(0.0, 100.0)).collect(),
                }
            })
            .collect();

        debug!(
            "Scored {} candidates with profile '{}'",
            rows.len(),
            self.profile.name
        );

        let mut out = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let scaled: Vec<f64> = scaled_columns.iter().map(|col| col[i]).collect();
            let total = self.combine(&scaled)?;
            let components = self
                .profile
                .components
                .iter()
                .zip(row.as_ref())
                .zip(&scaled)
                .map(|((c, &raw), &scaled)| ComponentScore {
                    name: c.name.clone(),
                    raw,
                    scaled,
                    weight: c.weight,
                })
                .collect();
            out.push(CompositeScore { total, components });
        }
        Ok(out)
    }
}

/// Min-max scales a column onto [0, 100]. A flat column maps every member
/// to 100.
pub fn min_max_scale(values: &[f64], direction: Direction) -> Vec<f64> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = max - min;
    if values.is_empty() || span <= 0.0 || span.is_nan() {
        return vec![100.0; values.len()];
    }
    values
        .iter()
        .map(|&v| match direction {
            Direction::HigherIsBetter => 100.0 * (v - min) / span,
            Direction::LowerIsBetter => 100.0 * (max - v) / span,
        })
        .collect()
}
