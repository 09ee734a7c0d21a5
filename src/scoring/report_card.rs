use super::{CompositeScorer, WeightProfile};
use crate::archetype::{classify, Archetype};
use crate::error::{StatsError, StatsResult};
use crate::model::{aggregate_players, StatLine};
use crate::percentile::{PercentileDimension, PercentileProfile};
use crate::rates::{rates, RateVector};
use crate::trend::{annotate, TrendPoint};
use crate::util::serialize_as_label;
use serde::Serialize;
use std::collections::HashSet;
use strum_macros::{Display, EnumIter};
use tracing::debug;

/// Dimensions graded on a report card, in weight-profile order.
pub const REPORT_CARD_DIMENSIONS: [PercentileDimension; 5] = [
    PercentileDimension::Scoring,
    PercentileDimension::Efficiency,
    PercentileDimension::ThreePoint,
    PercentileDimension::Experience,
    PercentileDimension::Discipline,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter)]
pub enum LetterGrade {
    #[strum(serialize = "A+")]
    APlus,
    A,
    #[strum(serialize = "B+")]
    BPlus,
    B,
    #[strum(serialize = "C+")]
    CPlus,
    C,
    D,
    F,
}

serialize_as_label!(LetterGrade);

impl LetterGrade {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::APlus,
            s if s >= 80.0 => Self::A,
            s if s >= 70.0 => Self::BPlus,
            s if s >= 60.0 => Self::B,
            s if s >= 50.0 => Self::CPlus,
            s if s >= 40.0 => Self::C,
            s if s >= 30.0 => Self::D,
            _ => Self::F,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeEntry {
    pub season_id: String,
    pub season_name: String,
    pub grade_name: String,
    pub archetype: Archetype,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonProgress {
    pub label: String,
    pub games_played: i32,
    pub rates: RateVector,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub player_id: String,
    pub player_name: String,
    pub total_games: i32,
    pub total_points: i32,
    pub career: RateVector,
    pub current_archetype: Archetype,
    pub archetype_history: Vec<ArchetypeEntry>,
    /// Last entry's ppg minus the one before it.
    pub ppg_growth: f64,
    pub percentiles: PercentileProfile,
    pub strengths: Vec<PercentileDimension>,
    pub weaknesses: Vec<PercentileDimension>,
    pub composite: u8,
    pub grade: LetterGrade,
    pub progression: Vec<SeasonProgress>,
    pub ppg_trend: Vec<TrendPoint>,
}

fn season_label(line: &StatLine) -> String {
    let label = format!("{} {}", line.season_name, line.grade_name);
    let label = label.trim();
    if label.is_empty() {
        line.season_id.clone()
    } else {
        label.to_string()
    }
}

/// Grades one player against everyone who played in the same grades.
///
/// `subject_lines` are the player's entries in chronological order;
/// `snapshot` is searched for peers. Entries without games are ignored.
pub fn report_card(subject_lines: &[StatLine], snapshot: &[StatLine]) -> StatsResult<ReportCard> {
    for line in subject_lines {
        line.validate()?;
    }
    let entries: Vec<&StatLine> = subject_lines.iter().filter(|l| l.games_played > 0).collect();
    let Some(first) = entries.first() else {
        return Err(StatsError::Validation(
            "report card needs at least one entry with games played".to_string(),
        ));
    };
    for line in &entries {
        if line.player_id != first.player_id {
            return Err(StatsError::Validation(format!(
                "report card entries mix players '{}' and '{}'",
                first.player_id, line.player_id
            )));
        }
    }

    let owned: Vec<StatLine> = entries.iter().map(|&l| l.clone()).collect();
    let career_line = aggregate_players(&owned)
        .into_iter()
        .next()
        .map(|p| p.line)
        .ok_or_else(|| StatsError::UnknownEntity(first.player_id.clone()))?;
    let career = rates(&career_line);

    let archetype_history = entries
        .iter()
        .map(|l| {
            let r = rates(l);
            ArchetypeEntry {
                season_id: l.season_id.clone(),
                season_name: l.season_name.clone(),
                grade_name: l.grade_name.clone(),
                archetype: classify(r.ppg, r.three_pt_pg, r.two_pt_pg, r.fouls_pg),
            }
        })
        .collect();
    let current_archetype = classify(career.ppg, career.three_pt_pg, career.two_pt_pg, career.fouls_pg);

    let ppg_series: Vec<f64> = entries.iter().map(|l| rates(l).ppg).collect();
    let ppg_growth = match ppg_series.as_slice() {
        [.., prev, last] => last - prev,
        _ => 0.0,
    };

    let grades: HashSet<&str> = entries.iter().map(|l| l.grade_id.as_str()).collect();
    let mut peer_lines: Vec<StatLine> = Vec::new();
    for line in snapshot.iter().filter(|l| grades.contains(l.grade_id.as_str())) {
        line.validate()?;
        if line.games_played > 0 {
            peer_lines.push(line.clone());
        }
    }
    let mut peers: Vec<StatLine> = aggregate_players(&peer_lines)
        .into_iter()
        .map(|p| p.line)
        .collect();
    if !peers.iter().any(|p| p.player_id == career_line.player_id) {
        peers.push(career_line.clone());
    }
    debug!(
        "Report card for '{}': {} peers over {} grades",
        career_line.player_id,
        peers.len(),
        grades.len()
    );

    let percentiles = PercentileProfile::compute(&career_line, &peers, &REPORT_CARD_DIMENSIONS);
    let values: Vec<f64> = REPORT_CARD_DIMENSIONS
        .iter()
        .map(|&d| f64::from(percentiles.get(d).unwrap_or(0)))
        .collect();
    let scorer = CompositeScorer::new(WeightProfile::report_card())?;
    let composite = scorer.combine(&values)?.round() as u8;

    Ok(ReportCard {
        player_id: career_line.player_id.clone(),
        player_name: career_line.player_name.clone(),
        total_games: career_line.games_played,
        total_points: career_line.total_points,
        career,
        current_archetype,
        archetype_history,
        ppg_growth,
        strengths: percentiles.strengths(),
        weaknesses: percentiles.weaknesses(),
        percentiles,
        composite,
        grade: LetterGrade::from_score(f64::from(composite)),
        progression: entries
            .iter()
            .map(|l| SeasonProgress {
                label: season_label(l),
                games_played: l.games_played,
                rates: rates(l),
            })
            .collect(),
        ppg_trend: annotate(&ppg_series),
    })
}
