use super::{CompositeScorer, WeightProfile};
use crate::consts::{POWER_MIN_GAMES, POWER_TOP_SCORERS};
use crate::error::StatsResult;
use crate::model::{StatLine, TeamLine};
use crate::rates::rates;
use crate::util::mean;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Scaled component values of a power rating, each on [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerBreakdown {
    pub win_pct: f64,
    pub point_diff: f64,
    pub top5_scoring: f64,
    pub bench_depth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerRow {
    pub rank: usize,
    pub team_id: String,
    pub name: String,
    pub season_id: String,
    pub wins: i32,
    pub losses: i32,
    pub games_played: i32,
    pub power_rating: f64,
    pub breakdown: PowerBreakdown,
    pub avg_point_diff: f64,
    pub roster_size: usize,
}

/// Raw inputs of one team before scaling.
struct TeamInputs<'a> {
    team: &'a TeamLine,
    top5_avg: f64,
    bench_avg: f64,
    roster_size: usize,
}

/// Player ppg per team, highest first. Zero-game lines are ignored.
fn roster_ppgs<'a>(players: &'a [StatLine]) -> HashMap<(&'a str, &'a str), Vec<f64>> {
    let mut by_team: HashMap<(&str, &str), Vec<f64>> = HashMap::new();
    for p in players.iter().filter(|p| p.games_played > 0) {
        by_team
            .entry((p.team_id.as_str(), p.season_id.as_str()))
            .or_default()
            .push(rates(p).ppg);
    }
    for ppgs in by_team.values_mut() {
        ppgs.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    }
    by_team
}

/// Power rankings for teams with at least three games.
///
/// `players` supplies the roster scoring used by the top-five and bench
/// components; players are matched to teams by team and season id.
pub fn power_rankings(teams: &[TeamLine], players: &[StatLine]) -> StatsResult<Vec<PowerRow>> {
    for t in teams {
        t.validate()?;
    }
    for p in players {
        p.validate()?;
    }
    let scorer = CompositeScorer::new(WeightProfile::power_rating())?;
    let rosters = roster_ppgs(players);

    let inputs: Vec<TeamInputs> = teams
        .iter()
        .filter(|t| t.games_played >= POWER_MIN_GAMES)
        .map(|team| {
            let ppgs = rosters
                .get(&(team.team_id.as_str(), team.season_id.as_str()))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let top = ppgs.len().min(POWER_TOP_SCORERS);
            TeamInputs {
                team,
                top5_avg: mean(&ppgs[..top]),
                bench_avg: mean(&ppgs[top..]),
                roster_size: ppgs.len(),
            }
        })
        .collect();

    debug!(
        "Power: {} of {} teams eligible",
        inputs.len(),
        teams.len()
    );

    let rows: Vec<[f64; 4]> = inputs
        .iter()
        .map(|i| {
            [
                i.team.win_pct(),
                i.team.avg_point_diff(),
                i.top5_avg,
                i.bench_avg,
            ]
        })
        .collect();
    let scores = scorer.score_candidates(&rows)?;

    let mut ranked: Vec<PowerRow> = inputs
        .iter()
        .zip(scores)
        .map(|(i, score)| {
            let scaled = |n: usize| score.components[n].scaled;
            PowerRow {
                rank: 0,
                team_id: i.team.team_id.clone(),
                name: i.team.name.clone(),
                season_id: i.team.season_id.clone(),
                wins: i.team.wins,
                losses: i.team.losses,
                games_played: i.team.games_played,
                power_rating: score.total,
                breakdown: PowerBreakdown {
                    win_pct: scaled(0),
                    point_diff: scaled(1),
                    top5_scoring: scaled(2),
                    bench_depth: scaled(3),
                },
                avg_point_diff: i.team.avg_point_diff(),
                roster_size: i.roster_size,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.power_rating
            .partial_cmp(&a.power_rating)
            .unwrap_or(Ordering::Equal)
    });
    for (pos, row) in ranked.iter_mut().enumerate() {
        row.rank = pos + 1;
    }
    Ok(ranked)
}
