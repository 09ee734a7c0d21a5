use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One player's aggregate for one (season, grade, team) tuple.
///
/// Counts are signed so that bad upstream data can be reported as a
/// validation error instead of silently wrapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLine {
    pub player_id: String,
    pub player_name: String,
    pub team_id: String,
    pub team_name: String,
    pub season_id: String,
    pub season_name: String,
    pub grade_id: String,
    pub grade_name: String,

    pub games_played: i32,
    pub total_points: i32,
    pub one_point: i32,
    pub two_point: i32,
    pub three_point: i32,
    pub total_fouls: i32,
}

impl StatLine {
    pub fn validate(&self) -> StatsResult<()> {
        let counts = [
            ("games_played", self.games_played),
            ("total_points", self.total_points),
            ("one_point", self.one_point),
            ("two_point", self.two_point),
            ("three_point", self.three_point),
            ("total_fouls", self.total_fouls),
        ];
        for (field, value) in counts {
            if value < 0 {
                return Err(StatsError::NegativeCount {
                    entity: self.player_id.clone(),
                    field,
                    value: value as i64,
                });
            }
        }
        Ok(())
    }

    /// Made baskets of every kind (free throws, twos, threes).
    pub fn made_baskets(&self) -> i32 {
        self.one_point
            .saturating_add(self.two_point)
            .saturating_add(self.three_point)
    }

    fn absorb(&mut self, other: &StatLine) {
        self.games_played = self.games_played.saturating_add(other.games_played);
        self.total_points = self.total_points.saturating_add(other.total_points);
        self.one_point = self.one_point.saturating_add(other.one_point);
        self.two_point = self.two_point.saturating_add(other.two_point);
        self.three_point = self.three_point.saturating_add(other.three_point);
        self.total_fouls = self.total_fouls.saturating_add(other.total_fouls);
    }
}

/// Team-level season record, the input to power rankings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamLine {
    pub team_id: String,
    pub name: String,
    pub season_id: String,
    pub wins: i32,
    pub losses: i32,
    pub games_played: i32,
    pub points_for: i32,
    pub points_against: i32,
}

impl TeamLine {
    pub fn validate(&self) -> StatsResult<()> {
        let counts = [
            ("wins", self.wins),
            ("losses", self.losses),
            ("games_played", self.games_played),
            ("points_for", self.points_for),
            ("points_against", self.points_against),
        ];
        for (field, value) in counts {
            if value < 0 {
                return Err(StatsError::NegativeCount {
                    entity: self.team_id.clone(),
                    field,
                    value: value as i64,
                });
            }
        }
        if i64::from(self.wins) + i64::from(self.losses) > i64::from(self.games_played) {
            return Err(StatsError::Validation(format!(
                "team '{}' has {} wins + {} losses but only {} games played",
                self.team_id, self.wins, self.losses, self.games_played
            )));
        }
        Ok(())
    }

    pub fn win_pct(&self) -> f64 {
        if self.games_played > 0 {
            self.wins as f64 / self.games_played as f64
        } else {
            0.0
        }
    }

    pub fn avg_point_diff(&self) -> f64 {
        if self.games_played > 0 {
            (self.points_for - self.points_against) as f64 / self.games_played as f64
        } else {
            0.0
        }
    }
}

/// Grouping key a cohort is built for. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub season_id: Option<String>,
    pub grade_id: Option<String>,
}

impl GroupKey {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn season(season_id: impl Into<String>) -> Self {
        Self {
            season_id: Some(season_id.into()),
            grade_id: None,
        }
    }

    pub fn grade(season_id: impl Into<String>, grade_id: impl Into<String>) -> Self {
        Self {
            season_id: Some(season_id.into()),
            grade_id: Some(grade_id.into()),
        }
    }

    pub fn matches(&self, line: &StatLine) -> bool {
        let season_ok = self
            .season_id
            .as_ref()
            .map_or(true, |s| *s == line.season_id);
        let grade_ok = self
            .grade_id
            .as_ref()
            .map_or(true, |g| *g == line.grade_id);
        season_ok && grade_ok
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "season={}, grade={}",
            self.season_id.as_deref().unwrap_or("*"),
            self.grade_id.as_deref().unwrap_or("*")
        )
    }
}

/// Immutable, validated snapshot of the lines ranked together in one pass.
#[derive(Debug, Clone)]
pub struct Cohort {
    key: GroupKey,
    members: Arc<[StatLine]>,
}

impl Cohort {
    /// Validates every member against `key` and rejects empty input.
    pub fn build(key: GroupKey, lines: Vec<StatLine>) -> StatsResult<Self> {
        if lines.is_empty() {
            return Err(StatsError::EmptyCohort);
        }
        for line in &lines {
            line.validate()?;
            if !key.matches(line) {
                return Err(StatsError::CohortMismatch {
                    entity: line.player_id.clone(),
                    expected: key.to_string(),
                    found: format!("season={}, grade={}", line.season_id, line.grade_id),
                });
            }
        }
        Ok(Self {
            key,
            members: lines.into(),
        })
    }

    /// Picks the lines matching `key` out of a larger snapshot.
    pub fn select(key: GroupKey, lines: &[StatLine]) -> StatsResult<Self> {
        let members: Vec<StatLine> = lines.iter().filter(|l| key.matches(l)).cloned().collect();
        Self::build(key, members)
    }

    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    pub fn members(&self) -> &[StatLine] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn players(&self) -> Vec<PlayerAggregate> {
        aggregate_players(&self.members)
    }
}

/// A player's lines summed across entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAggregate {
    pub line: StatLine,
    /// Points per game of each contributing entry, in input order.
    pub entry_ppgs: Vec<f64>,
}

impl PlayerAggregate {
    pub fn player_id(&self) -> &str {
        &self.line.player_id
    }

    pub fn entries(&self) -> usize {
        self.entry_ppgs.len()
    }
}

/// Sums lines per `player_id`. Output keeps first-seen order and the
/// identity fields (team, grade, season) of the first entry.
pub fn aggregate_players(lines: &[StatLine]) -> Vec<PlayerAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<PlayerAggregate> = Vec::new();

    for line in lines {
        let entry_ppg = crate::rates::rates(line).ppg;
        match index.get(line.player_id.as_str()) {
            Some(&i) => {
                out[i].line.absorb(line);
                out[i].entry_ppgs.push(entry_ppg);
            }
            None => {
                index.insert(&line.player_id, out.len());
                out.push(PlayerAggregate {
                    line: line.clone(),
                    entry_ppgs: vec![entry_ppg],
                });
            }
        }
    }
    out
}
