use crate::error::{StatsError, StatsResult};
use crate::model::{aggregate_players, StatLine};
use crate::percentile::{PercentileDimension, PercentileProfile};
use crate::rates::{rates, RateVector};
use crate::scoring::report_card::LetterGrade;
use crate::similarity::{comparables, SimilarityResult};
use crate::trend::{summarize, TrendSummary};
use serde::Serialize;
use std::collections::HashSet;

pub const SCOUTING_DIMENSIONS: [PercentileDimension; 4] = [
    PercentileDimension::Scoring,
    PercentileDimension::Inside,
    PercentileDimension::ThreePoint,
    PercentileDimension::Discipline,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPpg {
    pub season_id: String,
    pub season_name: String,
    pub games_played: i32,
    pub ppg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingReport {
    pub player_id: String,
    pub player_name: String,
    pub team_name: String,
    pub games_played: i32,
    pub career: RateVector,
    pub percentiles: PercentileProfile,
    pub strengths: Vec<PercentileDimension>,
    pub weaknesses: Vec<PercentileDimension>,
    pub comparables: Vec<SimilarityResult>,
    pub seasons: Vec<SeasonPpg>,
    pub season_trend: TrendSummary,
    pub mean_percentile: f64,
    pub grade: LetterGrade,
}

/// Games and points summed per season, in first-seen order.
fn season_ppgs(entries: &[StatLine]) -> Vec<SeasonPpg> {
    let mut out: Vec<(SeasonPpg, i32)> = Vec::new();
    for line in entries {
        match out.iter_mut().find(|(s, _)| s.season_id == line.season_id) {
            Some((s, points)) => {
                s.games_played += line.games_played;
                *points += line.total_points;
            }
            None => out.push((
                SeasonPpg {
                    season_id: line.season_id.clone(),
                    season_name: line.season_name.clone(),
                    games_played: line.games_played,
                    ppg: 0.0,
                },
                line.total_points,
            )),
        }
    }
    out.into_iter()
        .map(|(mut s, points)| {
            s.ppg = if s.games_played > 0 {
                f64::from(points) / f64::from(s.games_played)
            } else {
                0.0
            };
            s
        })
        .collect()
}

/// Scouting report for one player against peers from the same grades.
///
/// Peers (and the percentile pool) are limited to players with at least
/// `min_games`; the subject is always ranked within that pool.
pub fn scouting_report(
    subject_lines: &[StatLine],
    snapshot: &[StatLine],
    min_games: i32,
    top_n: usize,
) -> StatsResult<ScoutingReport> {
    for line in subject_lines {
        line.validate()?;
    }
    let mut subjects = aggregate_players(subject_lines);
    if subjects.len() > 1 {
        return Err(StatsError::Validation(
            "scouting report entries mix several players".to_string(),
        ));
    }
    let career = subjects
        .pop()
        .map(|p| p.line)
        .ok_or_else(|| StatsError::Validation("scouting report needs at least one entry".to_string()))?;

    let grades: HashSet<&str> = subject_lines.iter().map(|l| l.grade_id.as_str()).collect();
    let in_grades: Vec<StatLine> = snapshot
        .iter()
        .filter(|l| grades.contains(l.grade_id.as_str()))
        .cloned()
        .collect();
    for line in &in_grades {
        line.validate()?;
    }
    let mut pool: Vec<StatLine> = aggregate_players(&in_grades)
        .into_iter()
        .map(|p| p.line)
        .filter(|l| l.games_played >= min_games && l.player_id != career.player_id)
        .collect();
    let peers_only = pool.clone();
    pool.push(career.clone());

    let percentiles = PercentileProfile::compute(&career, &pool, &SCOUTING_DIMENSIONS);
    let mean_percentile = percentiles.mean();
    let seasons = season_ppgs(subject_lines);
    let series: Vec<f64> = seasons.iter().map(|s| s.ppg).collect();

    Ok(ScoutingReport {
        player_id: career.player_id.clone(),
        player_name: career.player_name.clone(),
        team_name: subject_lines
            .last()
            .map(|l| l.team_name.clone())
            .unwrap_or_default(),
        games_played: career.games_played,
        career: rates(&career),
        strengths: percentiles.strengths(),
        weaknesses: percentiles.weaknesses(),
        comparables: comparables(&career, &peers_only, min_games, top_n),
        percentiles,
        season_trend: summarize(&series),
        seasons,
        mean_percentile,
        grade: LetterGrade::from_score(mean_percentile),
    })
}
