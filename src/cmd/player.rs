use super::{CommonArgs, Context};
use crate::reports;
use clap::Args;
use courtside::StatsResult;

#[derive(Args, Debug, Clone)]
pub struct ReportCardArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(short, long)]
    pub player: String,
}

#[derive(Args, Debug, Clone)]
pub struct ScoutingArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(short, long)]
    pub player: String,
}

#[derive(Args, Debug, Clone)]
pub struct SimilarArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(short, long)]
    pub player: String,
}

#[derive(Args, Debug, Clone)]
pub struct TrendArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(short, long)]
    pub player: String,
}

pub fn run_report_card(ctx: &Context, args: &ReportCardArgs) -> StatsResult<()> {
    let card = ctx.engine.report_card(&ctx.lines, &args.player)?;
    ctx.emit(&card, reports::print_report_card)
}

pub fn run_scouting(ctx: &Context, args: &ScoutingArgs) -> StatsResult<()> {
    let report = ctx.engine.scouting_report(&ctx.lines, &args.player)?;
    ctx.emit(&report, reports::print_scouting_report)
}

pub fn run_similar(ctx: &Context, args: &SimilarArgs) -> StatsResult<()> {
    let results = ctx
        .engine
        .similar_players(&ctx.lines, ctx.key.clone(), &args.player)?;
    ctx.emit(&results, |r| reports::print_similarity_table(&args.player, r))
}

pub fn run_trend(ctx: &Context, args: &TrendArgs) -> StatsResult<()> {
    let summary = ctx.engine.player_trend(&ctx.lines, &args.player)?;
    ctx.emit(&summary, reports::print_trend)
}
