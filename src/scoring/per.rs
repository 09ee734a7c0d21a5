use crate::consts::{PER_LEAGUE_AVERAGE, PER_MIN_GAMES};
use crate::model::{aggregate_players, Cohort, PlayerAggregate, StatLine};
use crate::percentile::SortedColumn;
use crate::rates::{rates, RateVector};
use crate::util::{mean, serialize_as_label};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use strum_macros::{Display, EnumIter};
use tracing::{debug, warn};

const TWO_POINT_BONUS: f64 = 0.5;
const THREE_POINT_BONUS: f64 = 1.0;
const FOUL_PENALTY: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PerTier {
    #[strum(serialize = "MVP")]
    Mvp,
    Elite,
    #[strum(serialize = "All-Star")]
    AllStar,
    #[strum(serialize = "Above Average")]
    AboveAverage,
    Average,
    #[strum(serialize = "Below Average")]
    BelowAverage,
    Developing,
}

serialize_as_label!(PerTier);

impl PerTier {
    pub fn from_per(per: f64) -> Self {
        match per {
            p if p >= 30.0 => Self::Mvp,
            p if p >= 25.0 => Self::Elite,
            p if p >= 20.0 => Self::AllStar,
            p if p >= 15.0 => Self::AboveAverage,
            p if p >= 10.0 => Self::Average,
            p if p >= 5.0 => Self::BelowAverage,
            _ => Self::Developing,
        }
    }
}

/// Unscaled efficiency: scoring with a bonus for made baskets, minus a
/// foul penalty, per game.
#[inline(always)]
pub fn raw_efficiency(r: &RateVector) -> f64 {
    r.ppg + TWO_POINT_BONUS * r.two_pt_pg + THREE_POINT_BONUS * r.three_pt_pg
        - FOUL_PENALTY * r.fouls_pg
}

/// Rescale factor that moves a pool's mean raw efficiency to 15.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerScale {
    mean_raw: f64,
}

impl PerScale {
    pub fn from_raw(raws: &[f64]) -> Self {
        Self { mean_raw: mean(raws) }
    }

    pub fn mean_raw(&self) -> f64 {
        self.mean_raw
    }

    pub fn is_degenerate(&self) -> bool {
        self.mean_raw <= 0.0 || !self.mean_raw.is_finite()
    }

    /// A degenerate pool (mean ≤ 0) puts everyone at the league average.
    pub fn apply(&self, raw: f64) -> f64 {
        if self.is_degenerate() {
            PER_LEAGUE_AVERAGE
        } else {
            raw * PER_LEAGUE_AVERAGE / self.mean_raw
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerRow {
    pub rank: usize,
    pub player_id: String,
    pub player_name: String,
    pub team_name: String,
    pub grade_id: String,
    pub grade_name: String,
    pub games_played: i32,
    pub total_points: i32,
    pub rates: RateVector,
    pub raw: f64,
    pub per: f64,
    pub percentile: u8,
    pub tier: PerTier,
    pub grade_rank: usize,
    pub grade_total: usize,
}

fn eligible(players: Vec<PlayerAggregate>) -> Vec<PlayerAggregate> {
    let before = players.len();
    let kept: Vec<PlayerAggregate> = players
        .into_iter()
        .filter(|p| p.line.games_played >= PER_MIN_GAMES)
        .collect();
    if kept.len() < before {
        debug!(
            "PER: dropped {} players under {} games",
            before - kept.len(),
            PER_MIN_GAMES
        );
    }
    kept
}

/// Ranked PER table for every eligible player in the cohort.
pub fn per_table(cohort: &Cohort) -> Vec<PerRow> {
    let players = eligible(cohort.players());
    if players.is_empty() {
        return Vec::new();
    }

    let rate_rows: Vec<RateVector> = players.iter().map(|p| rates(&p.line)).collect();
    let raws: Vec<f64> = rate_rows.iter().map(raw_efficiency).collect();
    let scale = PerScale::from_raw(&raws);
    if scale.is_degenerate() {
        warn!(
            "PER: non-positive mean raw efficiency ({:.3}) for {}, every player set to {}",
            scale.mean_raw(),
            cohort.key(),
            PER_LEAGUE_AVERAGE
        );
    }
    let pers: Vec<f64> = raws.iter().map(|&r| scale.apply(r)).collect();

    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by(|&a, &b| {
        pers[b]
            .partial_cmp(&pers[a])
            .unwrap_or(Ordering::Equal)
            .then(players[b].line.total_points.cmp(&players[a].line.total_points))
    });

    let column = SortedColumn::new(pers.iter().copied());
    let mut grade_seen: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<PerRow> = order
        .iter()
        .enumerate()
        .map(|(pos, &i)| {
            let line = &players[i].line;
            let grade_rank = grade_seen.entry(line.grade_id.as_str()).or_insert(0);
            *grade_rank += 1;
            PerRow {
                rank: pos + 1,
                player_id: line.player_id.clone(),
                player_name: line.player_name.clone(),
                team_name: line.team_name.clone(),
                grade_id: line.grade_id.clone(),
                grade_name: line.grade_name.clone(),
                games_played: line.games_played,
                total_points: line.total_points,
                rates: rate_rows[i],
                raw: raws[i],
                per: pers[i],
                percentile: column.percentile(pers[i]),
                tier: PerTier::from_per(pers[i]),
                grade_rank: *grade_rank,
                grade_total: 0,
            }
        })
        .collect();

    for row in rows.iter_mut() {
        row.grade_total = grade_seen.get(row.grade_id.as_str()).copied().unwrap_or(0);
    }

    debug!("PER: rated {} players for {}", rows.len(), cohort.key());
    rows
}

/// Rescaled PER of one player against a cohort, or `None` when the player
/// is under the games floor.
///
/// Lines of the same player already in the cohort are summed first, so
/// passing any one of a player's entries yields their career value.
pub fn per(stat: &StatLine, cohort: &Cohort) -> Option<f64> {
    let players = eligible(aggregate_players(cohort.members()));
    let subject = players
        .iter()
        .find(|p| p.player_id() == stat.player_id)
        .map(|p| p.line.clone())
        .unwrap_or_else(|| stat.clone());
    if subject.games_played < PER_MIN_GAMES {
        return None;
    }

    let raws: Vec<f64> = players.iter().map(|p| raw_efficiency(&rates(&p.line))).collect();
    let scale = if raws.is_empty() {
        PerScale::from_raw(&[raw_efficiency(&rates(&subject))])
    } else {
        PerScale::from_raw(&raws)
    };
    Some(scale.apply(raw_efficiency(&rates(&subject))))
}
