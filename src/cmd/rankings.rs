use super::{CommonArgs, Context};
use crate::reports;
use clap::Args;
use courtside::loader;
use courtside::{StatsError, StatsResult};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PerArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PowerArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run_per(ctx: &Context) -> StatsResult<()> {
    let rows = ctx.engine.per_rankings(&ctx.lines, ctx.key.clone())?;
    ctx.emit(&rows, |rows| reports::print_per_table(rows))
}

pub fn run_power(ctx: &Context, teams_path: Option<&str>) -> StatsResult<()> {
    let path = teams_path.ok_or_else(|| {
        StatsError::Config("power rankings need team records, pass --teams".to_string())
    })?;
    info!("Loading team records from {}", path);
    let teams = loader::load_team_lines_from_file(path)?;
    let rows = ctx
        .engine
        .power_rankings(&teams, &ctx.lines, ctx.key.season_id.as_deref())?;
    ctx.emit(&rows, |rows| reports::print_power_table(rows))
}

pub fn run_draft(ctx: &Context) -> StatsResult<()> {
    let rows = ctx.engine.draft_board(&ctx.lines, ctx.key.clone())?;
    ctx.emit(&rows, |rows| reports::print_draft_table(rows))
}
