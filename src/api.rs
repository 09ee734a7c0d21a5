use crate::chemistry::{team_chemistry, TeamChemistry};
use crate::config::EngineConfig;
use crate::error::{StatsError, StatsResult};
use crate::model::{aggregate_players, Cohort, GroupKey, StatLine, TeamLine};
use crate::rates::rates;
use crate::scoring::draft::{draft_board, DraftRow};
use crate::scoring::per::{per_table, PerRow};
use crate::scoring::power::{power_rankings, PowerRow};
use crate::scoring::report_card::{report_card, ReportCard};
use crate::scouting::{scouting_report, ScoutingReport};
use crate::similarity::{similar_players, SimilarityResult};
use crate::trend::{summarize, TrendSummary};
use rayon::prelude::*;
use tracing::info;

/// Entry point bundling the engine configuration. Every call works on the
/// snapshot it is given and keeps nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

/// All lines of one player, in input order.
fn subject_lines(lines: &[StatLine], player_id: &str) -> StatsResult<Vec<StatLine>> {
    let found: Vec<StatLine> = lines
        .iter()
        .filter(|l| l.player_id == player_id)
        .cloned()
        .collect();
    if found.is_empty() {
        return Err(StatsError::UnknownEntity(format!("player '{}'", player_id)));
    }
    for line in &found {
        line.validate()?;
    }
    Ok(found)
}

impl Engine {
    pub fn new(config: EngineConfig) -> StatsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Service: PER table for the lines under `key`, capped at the ranking limit.
    pub fn per_rankings(&self, lines: &[StatLine], key: GroupKey) -> StatsResult<Vec<PerRow>> {
        let cohort = Cohort::select(key, lines)?;
        let mut rows = per_table(&cohort);
        info!("PER: {} rated players in {}", rows.len(), cohort.key());
        rows.truncate(self.config.selection.ranking_limit);
        Ok(rows)
    }

    /// Service: PER row of a single player within the table for `key`.
    pub fn player_per(&self, lines: &[StatLine], key: GroupKey, player_id: &str) -> StatsResult<Option<PerRow>> {
        let cohort = Cohort::select(key, lines)?;
        if !cohort.members().iter().any(|l| l.player_id == player_id) {
            return Err(StatsError::UnknownEntity(format!("player '{}'", player_id)));
        }
        Ok(per_table(&cohort).into_iter().find(|r| r.player_id == player_id))
    }

    /// Service: team power rankings, optionally for one season.
    pub fn power_rankings(
        &self,
        teams: &[TeamLine],
        players: &[StatLine],
        season_id: Option<&str>,
    ) -> StatsResult<Vec<PowerRow>> {
        let teams: Vec<TeamLine> = teams
            .iter()
            .filter(|t| season_id.map_or(true, |s| t.season_id == s))
            .cloned()
            .collect();
        let mut rows = power_rankings(&teams, players)?;
        info!("Power: ranked {} teams", rows.len());
        rows.truncate(self.config.selection.ranking_limit);
        Ok(rows)
    }

    pub fn draft_board(&self, lines: &[StatLine], key: GroupKey) -> StatsResult<Vec<DraftRow>> {
        let cohort = Cohort::select(key, lines)?;
        let mut rows = draft_board(&cohort, self.config.selection.draft_min_games)?;
        info!("Draft: {} prospects in {}", rows.len(), cohort.key());
        rows.truncate(self.config.selection.ranking_limit);
        Ok(rows)
    }

    /// Service: report card of one player against the peers in their grades.
    pub fn report_card(&self, lines: &[StatLine], player_id: &str) -> StatsResult<ReportCard> {
        let subject = subject_lines(lines, player_id)?;
        report_card(&subject, lines)
    }

    /// Report cards for several players, computed in parallel and returned
    /// in request order.
    pub fn report_cards(&self, lines: &[StatLine], player_ids: &[String]) -> StatsResult<Vec<ReportCard>> {
        player_ids
            .par_iter()
            .map(|id| self.report_card(lines, id))
            .collect()
    }

    pub fn scouting_report(&self, lines: &[StatLine], player_id: &str) -> StatsResult<ScoutingReport> {
        let subject = subject_lines(lines, player_id)?;
        let s = &self.config.selection;
        scouting_report(&subject, lines, s.comparables_min_games, s.comparables_top_n)
    }

    /// Service: cosine-similar players among the lines under `key`.
    pub fn similar_players(
        &self,
        lines: &[StatLine],
        key: GroupKey,
        player_id: &str,
    ) -> StatsResult<Vec<SimilarityResult>> {
        let cohort = Cohort::select(key, lines)?;
        let query_lines = subject_lines(cohort.members(), player_id)?;
        let query = aggregate_players(&query_lines)
            .into_iter()
            .next()
            .map(|p| p.line)
            .ok_or_else(|| StatsError::UnknownEntity(format!("player '{}'", player_id)))?;
        let s = &self.config.selection;
        Ok(similar_players(
            &query,
            cohort.members(),
            s.similar_min_games,
            s.similar_top_n,
        ))
    }

    /// Service: roster chemistry of one team, optionally within one season.
    pub fn team_chemistry(
        &self,
        lines: &[StatLine],
        team_id: &str,
        season_id: Option<&str>,
    ) -> StatsResult<TeamChemistry> {
        let roster: Vec<StatLine> = lines
            .iter()
            .filter(|l| l.team_id == team_id && season_id.map_or(true, |s| l.season_id == s))
            .cloned()
            .collect();
        if roster.is_empty() {
            return Err(StatsError::UnknownEntity(format!("team '{}'", team_id)));
        }
        team_chemistry(&roster, &self.config.chemistry)
    }

    /// Service: ppg trend across a player's entries, in input order.
    pub fn player_trend(&self, lines: &[StatLine], player_id: &str) -> StatsResult<TrendSummary> {
        let subject = subject_lines(lines, player_id)?;
        let series: Vec<f64> = subject
            .iter()
            .filter(|l| l.games_played > 0)
            .map(|l| rates(l).ppg)
            .collect();
        Ok(summarize(&series))
    }
}
