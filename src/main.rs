use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use courtside::api::Engine;
use courtside::config::EngineConfig;
use courtside::loader;
use courtside::model::GroupKey;
use courtside::{StatsError, StatsResult};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Player stat lines (CSV, or JSON array by extension).
    #[arg(global = true, short, long, default_value = "data/player_stats.csv")]
    stats: String,

    /// Team records, needed by `power`.
    #[arg(global = true, short, long)]
    teams: Option<String>,

    /// JSON engine config. Flags typed on the command line override it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long)]
    season: Option<String>,

    #[arg(global = true, long)]
    grade: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Per(cmd::rankings::PerArgs),
    Power(cmd::rankings::PowerArgs),
    Draft(cmd::rankings::DraftArgs),
    ReportCard(cmd::player::ReportCardArgs),
    Scouting(cmd::player::ScoutingArgs),
    Similar(cmd::player::SimilarArgs),
    Trend(cmd::player::TrendArgs),
    Chemistry(cmd::team::ChemistryArgs),
}

impl Commands {
    fn common(&self) -> &cmd::CommonArgs {
        match self {
            Commands::Per(a) => &a.common,
            Commands::Power(a) => &a.common,
            Commands::Draft(a) => &a.common,
            Commands::ReportCard(a) => &a.common,
            Commands::Scouting(a) => &a.common,
            Commands::Similar(a) => &a.common,
            Commands::Trend(a) => &a.common,
            Commands::Chemistry(a) => &a.common,
        }
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_tracing(cli.debug);

    if let Err(e) = run(cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> StatsResult<()> {
    // Subcommand flags live in the subcommand's matches, not the root.
    let (_, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| StatsError::Config("no subcommand given".to_string()))?;
    let common = cli.command.common().clone();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from {}", path);
            let mut file_config = EngineConfig::load_from_file(path)?;
            file_config.merge_from_cli(&common.config, sub_matches);
            file_config
        }
        None => common.config.clone(),
    };
    let engine = Engine::new(config)?;

    info!("Loading stat lines from {}", cli.stats);
    let lines = loader::load_stat_lines_from_file(&cli.stats)?;

    let ctx = cmd::Context {
        engine,
        lines,
        key: GroupKey {
            season_id: cli.season.clone(),
            grade_id: cli.grade.clone(),
        },
        json: common.json,
    };

    match cli.command {
        Commands::Per(_) => cmd::rankings::run_per(&ctx),
        Commands::Power(_) => cmd::rankings::run_power(&ctx, cli.teams.as_deref()),
        Commands::Draft(_) => cmd::rankings::run_draft(&ctx),
        Commands::ReportCard(args) => cmd::player::run_report_card(&ctx, &args),
        Commands::Scouting(args) => cmd::player::run_scouting(&ctx, &args),
        Commands::Similar(args) => cmd::player::run_similar(&ctx, &args),
        Commands::Trend(args) => cmd::player::run_trend(&ctx, &args),
        Commands::Chemistry(args) => cmd::team::run(&ctx, &args),
    }
}
