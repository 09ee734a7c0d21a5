pub mod player;
pub mod rankings;
pub mod team;

use clap::Args;
use courtside::api::Engine;
use courtside::config::EngineConfig;
use courtside::model::{GroupKey, StatLine};
use courtside::StatsResult;
use serde::Serialize;

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// Print JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub struct Context {
    pub engine: Engine,
    pub lines: Vec<StatLine>,
    pub key: GroupKey,
    pub json: bool,
}

impl Context {
    /// Renders `value` as pretty JSON or through `table`.
    pub fn emit<T: Serialize>(&self, value: &T, table: impl FnOnce(&T)) -> StatsResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            table(value);
        }
        Ok(())
    }
}
