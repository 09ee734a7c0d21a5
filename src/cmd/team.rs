use super::{CommonArgs, Context};
use crate::reports;
use clap::Args;
use courtside::StatsResult;

#[derive(Args, Debug, Clone)]
pub struct ChemistryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long)]
    pub team: String,

    /// Number of ranked pairs to print.
    #[arg(long, default_value_t = 10)]
    pub pairs: usize,
}

pub fn run(ctx: &Context, args: &ChemistryArgs) -> StatsResult<()> {
    let chemistry = ctx
        .engine
        .team_chemistry(&ctx.lines, &args.team, ctx.key.season_id.as_deref())?;
    ctx.emit(&chemistry, |c| reports::print_chemistry(c, args.pairs))
}
