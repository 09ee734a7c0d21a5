use regex::Regex;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    stats_path: PathBuf,
    teams_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let stats_path = dir.path().join("player_stats.csv");
        let teams_path = dir.path().join("teams.csv");

        let mut stats = File::create(&stats_path).unwrap();
        writeln!(
            stats,
            "player_id,player_name,team_id,team_name,season_id,season_name,grade_id,grade_name,games_played,total_points,one_point,two_point,three_point,total_fouls"
        )
        .unwrap();
        // Six regulars on the Hawks, a two-game cameo on the Owls.
        let roster = [
            ("p1", "Ava Stone", 6, 8, 26, 10, 6),
            ("p2", "Bo Reyes", 6, 4, 10, 10, 9),
            ("p3", "Cy Hart", 6, 6, 12, 6, 14),
            ("p4", "Di Marsh", 6, 6, 15, 0, 20),
            ("p5", "Ed Lowe", 6, 4, 10, 0, 4),
            ("p6", "Fay Quinn", 6, 0, 6, 0, 2),
        ];
        for (id, name, gp, one, two, three, fouls) in roster {
            writeln!(
                stats,
                "{},{},t1,Hawks,s1,Winter 2024,g1,U14 Girls,{},{},{},{},{},{}",
                id,
                name,
                gp,
                one + 2 * two + 3 * three,
                one,
                two,
                three,
                fouls
            )
            .unwrap();
        }
        writeln!(stats, "p7,Gus Finn,t2,Owls,s1,Winter 2024,g1,U14 Girls,2,10,0,5,0,1").unwrap();

        let mut teams = File::create(&teams_path).unwrap();
        writeln!(teams, "team_id,name,season_id,wins,losses,games_played,points_for,points_against").unwrap();
        writeln!(teams, "t1,Hawks,s1,5,1,6,310,250").unwrap();
        writeln!(teams, "t2,Owls,s1,1,5,6,240,300").unwrap();

        Self {
            dir,
            stats_path,
            teams_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_courtside"))
            .args(args)
            .arg("--stats")
            .arg(&self.stats_path)
            .arg("--teams")
            .arg(&self.teams_path)
            .output()
            .expect("Failed to execute binary")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut with_json = args.to_vec();
        with_json.push("--json");
        let output = self.run(&with_json);
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

#[test]
fn test_cli_per_json() {
    let ctx = TestContext::new();
    let rows = ctx.run_json(&["per"]);
    let rows = rows.as_array().unwrap();
    // p7 has two games and is not rated.
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["playerId"], "p1");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["tier"], "MVP");
}

#[test]
fn test_cli_per_table() {
    let ctx = TestContext::new();
    let output = ctx.run(&["per"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first_row = Regex::new(r"\|\s*1\s*\|\s*Ava Stone\s*\|\s*Hawks\s*\|").unwrap();
    assert!(first_row.is_match(&stdout), "STDOUT:\n{}", stdout);
    assert!(!stdout.contains("Gus Finn"));
}

#[test]
fn test_cli_power_rankings() {
    let ctx = TestContext::new();
    let rows = ctx.run_json(&["power"]);
    assert_eq!(rows[0]["teamId"], "t1");
    assert!((rows[0]["powerRating"].as_f64().unwrap() - 100.0).abs() < 1e-9);
    assert!(rows[1]["powerRating"].as_f64().unwrap().abs() < 1e-9);
}

#[test]
fn test_cli_power_needs_teams() {
    let ctx = TestContext::new();
    let output = Command::new(env!("CARGO_BIN_EXE_courtside"))
        .args(["power", "--stats"])
        .arg(&ctx.stats_path)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--teams"));
}

#[test]
fn test_cli_report_card_and_scouting() {
    let ctx = TestContext::new();
    let card = ctx.run_json(&["report-card", "-p", "p1"]);
    assert_eq!(card["playerId"], "p1");
    assert_eq!(card["grade"], "A+");
    assert_eq!(card["currentArchetype"], "High Volume");

    let output = ctx.run(&["scouting", "--player", "p4"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Comparable players:"), "STDOUT:\n{}", stdout);
}

#[test]
fn test_cli_unknown_player_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["trend", "-p", "nobody"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nobody"));
}

#[test]
fn test_cli_flags_override_config_file() {
    let ctx = TestContext::new();
    let config_path = ctx.dir.path().join("engine.json");
    std::fs::write(&config_path, r#"{"selection": {"draft_min_games": 10}}"#).unwrap();
    let config = config_path.to_str().unwrap();

    let rows = ctx.run_json(&["draft", "--config", config]);
    assert!(rows.as_array().unwrap().is_empty());

    let rows = ctx.run_json(&["draft", "--config", config, "--draft-min-games", "2"]);
    assert_eq!(rows.as_array().unwrap().len(), 7);
}

#[test]
fn test_cli_similar_top_n() {
    let ctx = TestContext::new();
    let rows = ctx.run_json(&["similar", "-p", "p2", "--similar-top-n", "2"]);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["playerId"] != "p2"));
}

#[test]
fn test_cli_chemistry() {
    let ctx = TestContext::new();
    let output = ctx.run(&["chemistry", "--team", "t1", "--pairs", "3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let score = Regex::new(r"Chemistry score: \d+ / 100").unwrap();
    assert!(score.is_match(&stdout), "STDOUT:\n{}", stdout);
    assert!(stdout.contains("Best lineup"));

    let chem = ctx.run_json(&["chemistry", "--team", "t1"]);
    assert_eq!(chem["bestLineup"].as_array().unwrap().len(), 5);
    assert_eq!(chem["lineupStrategy"], "Exhaustive");
}
