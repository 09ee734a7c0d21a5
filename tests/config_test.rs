use clap::{CommandFactory, FromArgMatches, Parser};
use courtside::config::EngineConfig;
use courtside::StatsError;
use std::fs;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: EngineConfig,
}

fn parse(args: &[&str]) -> (EngineConfig, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args.iter().copied());
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_defaults() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.selection.draft_min_games, 3);
    assert_eq!(cfg.selection.similar_top_n, 5);
    assert_eq!(cfg.selection.comparables_min_games, 2);
    assert_eq!(cfg.chemistry.synergy_weight, 0.7);
    assert!(cfg.validate().is_ok());

    // clap defaults agree with Default.
    let (cli, _) = parse(&["test"]);
    assert_eq!(cli, cfg);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{"selection": {"draft_min_games": 7}}"#).unwrap();

    let cfg = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.selection.draft_min_games, 7);
    assert_eq!(cfg.selection.similar_top_n, 5);
    assert_eq!(cfg.chemistry.diversity_weight, 0.3);
}

#[test]
fn test_cli_overrides_only_typed_flags() {
    let mut file_cfg = EngineConfig::default();
    file_cfg.selection.draft_min_games = 7;
    file_cfg.selection.similar_top_n = 2;

    let (cli, matches) = parse(&["test", "--similar-top-n", "9"]);
    file_cfg.merge_from_cli(&cli, &matches);

    assert_eq!(file_cfg.selection.similar_top_n, 9);
    // Not typed: the file value survives the clap default of 3.
    assert_eq!(file_cfg.selection.draft_min_games, 7);
}

#[test]
fn test_invalid_files_are_rejected() {
    let dir = tempdir().unwrap();
    let weights = dir.path().join("weights.json");
    fs::write(
        &weights,
        r#"{"chemistry": {"synergy_weight": 0.5, "diversity_weight": 0.1}}"#,
    )
    .unwrap();
    assert!(matches!(
        EngineConfig::load_from_file(&weights),
        Err(StatsError::InvalidWeights { .. })
    ));

    let top_n = dir.path().join("top_n.json");
    fs::write(&top_n, r#"{"selection": {"comparables_top_n": 0}}"#).unwrap();
    assert!(matches!(
        EngineConfig::load_from_file(&top_n),
        Err(StatsError::Config(_))
    ));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "not json").unwrap();
    assert!(matches!(
        EngineConfig::load_from_file(&garbage),
        Err(StatsError::Json(_))
    ));

    assert!(matches!(
        EngineConfig::load_from_file(dir.path().join("missing.json")),
        Err(StatsError::Config(_))
    ));
}

#[test]
fn test_lineup_limit_is_capped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lineup.json");
    fs::write(&path, r#"{"chemistry": {"lineup_exhaustive_limit": 60}}"#).unwrap();
    assert!(matches!(
        EngineConfig::load_from_file(&path),
        Err(StatsError::InvalidWeights { .. })
    ));

    let mut cfg = EngineConfig::default();
    cfg.chemistry.lineup_exhaustive_limit = 30;
    assert!(cfg.validate().is_ok());
    cfg.chemistry.lineup_exhaustive_limit = 31;
    assert!(cfg.validate().is_err());
}
