use crate::model::StatLine;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-game rates derived from a [`StatLine`].
///
/// Values keep full precision; use [`RateVector::rounded`] only when
/// presenting them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateVector {
    pub ppg: f64,
    pub one_pt_pg: f64,
    pub two_pt_pg: f64,
    pub three_pt_pg: f64,
    pub fouls_pg: f64,
}

impl RateVector {
    /// One-decimal copy for display.
    pub fn rounded(&self) -> Self {
        Self {
            ppg: round1(self.ppg),
            one_pt_pg: round1(self.one_pt_pg),
            two_pt_pg: round1(self.two_pt_pg),
            three_pt_pg: round1(self.three_pt_pg),
            fouls_pg: round1(self.fouls_pg),
        }
    }

    /// Feature order shared by both similarity metrics.
    pub fn profile_vector(&self) -> [f64; 4] {
        [self.ppg, self.fouls_pg, self.two_pt_pg, self.three_pt_pg]
    }
}

#[inline(always)]
fn per_game(total: i32, games: i32) -> f64 {
    if games <= 0 {
        return 0.0;
    }
    f64::from(total.max(0)) / f64::from(games)
}

pub fn rates(stat: &StatLine) -> RateVector {
    let gp = stat.games_played;
    RateVector {
        ppg: per_game(stat.total_points, gp),
        one_pt_pg: per_game(stat.one_point, gp),
        two_pt_pg: per_game(stat.two_point, gp),
        three_pt_pg: per_game(stat.three_point, gp),
        fouls_pg: per_game(stat.total_fouls, gp),
    }
}

/// Rates for a whole slice, in input order.
pub fn rates_for(lines: &[StatLine]) -> Vec<RateVector> {
    lines.par_iter().map(rates).collect()
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
