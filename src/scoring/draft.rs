use super::per::{raw_efficiency, PerScale};
use super::{CompositeScorer, WeightProfile};
use crate::error::StatsResult;
use crate::model::{Cohort, PlayerAggregate};
use crate::rates::rates;
use crate::util::{sample_stddev, serialize_as_label};
use serde::Serialize;
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DraftTier {
    Elite,
    Star,
    Starter,
    Rotation,
    Bench,
}

serialize_as_label!(DraftTier);

impl DraftTier {
    /// Tier from a 1-based rank within `total` prospects.
    pub fn from_rank(rank: usize, total: usize) -> Self {
        if total == 0 {
            return Self::Bench;
        }
        let pct = rank as f64 / total as f64 * 100.0;
        match pct {
            p if p <= 5.0 => Self::Elite,
            p if p <= 15.0 => Self::Star,
            p if p <= 30.0 => Self::Starter,
            p if p <= 50.0 => Self::Rotation,
            _ => Self::Bench,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRow {
    pub rank: usize,
    pub player_id: String,
    pub player_name: String,
    pub team_name: String,
    pub grade_id: String,
    pub grade_name: String,
    pub composite: f64,
    /// PER rescaled over the draft pool.
    pub per: f64,
    pub ppg: f64,
    pub games_played: i32,
    pub tier: DraftTier,
}

/// Share of made baskets that are threes, times ppg. Without any makes
/// half the ppg is used.
pub fn scoring_trend(p: &PlayerAggregate) -> f64 {
    let ppg = rates(&p.line).ppg;
    let makes = p.line.made_baskets();
    if makes > 0 {
        f64::from(p.line.three_point) / f64::from(makes) * ppg
    } else {
        ppg * 0.5
    }
}

/// Spread of the player's per-entry ppg. Lower is steadier.
pub fn consistency(p: &PlayerAggregate) -> f64 {
    sample_stddev(&p.entry_ppgs)
}

pub fn draft_board(cohort: &Cohort, min_games: i32) -> StatsResult<Vec<DraftRow>> {
    let scorer = CompositeScorer::new(WeightProfile::draft_board())?;
    let pool: Vec<PlayerAggregate> = cohort
        .players()
        .into_iter()
        .filter(|p| p.line.games_played > 0 && p.line.games_played >= min_games)
        .collect();
    debug!(
        "Draft: {} prospects with at least {} games in {}",
        pool.len(),
        min_games,
        cohort.key()
    );
    if pool.is_empty() {
        return Ok(Vec::new());
    }

    let raws: Vec<f64> = pool.iter().map(|p| raw_efficiency(&rates(&p.line))).collect();
    let per_scale = PerScale::from_raw(&raws);

    let rows: Vec<[f64; 4]> = pool
        .iter()
        .zip(&raws)
        .map(|(p, &raw)| {
            [
                raw,
                scoring_trend(p),
                consistency(p),
                f64::from(p.line.games_played),
            ]
        })
        .collect();
    let scores = scorer.score_candidates(&rows)?;

    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .total
            .partial_cmp(&scores[a].total)
            .unwrap_or(Ordering::Equal)
    });

    let total = order.len();
    Ok(order
        .into_iter()
        .enumerate()
        .map(|(pos, i)| {
            let line = &pool[i].line;
            DraftRow {
                rank: pos + 1,
                player_id: line.player_id.clone(),
                player_name: line.player_name.clone(),
                team_name: line.team_name.clone(),
                grade_id: line.grade_id.clone(),
                grade_name: line.grade_name.clone(),
                composite: scores[i].total,
                per: per_scale.apply(raws[i]),
                ppg: rates(line).ppg,
                games_played: line.games_played,
                tier: DraftTier::from_rank(pos + 1, total),
            }
        })
        .collect())
}
