use courtside::loader::{
    load_stat_lines, load_stat_lines_from_file, load_stat_lines_json, load_team_lines,
    load_team_lines_from_file,
};
use courtside::StatsError;
use std::fs;
use tempfile::tempdir;

const STATS_CSV: &str = "\
player_id,player_name,team_id,team_name,season_id,season_name,grade_id,grade_name,games_played,total_points,one_point,two_point,three_point,total_fouls
p1, Ann Lee ,t1,Hawks,s1,Winter 2024,g1,U14 Girls,5,42,4,10,6,7
p2,Bea Cho,t1,Hawks,s1,Winter 2024,g1,U14 Girls,3,12,2,5,0,2
";

#[test]
fn test_csv_stat_lines_are_trimmed() {
    let lines = load_stat_lines(STATS_CSV.as_bytes()).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].player_name, "Ann Lee");
    assert_eq!(lines[0].three_point, 6);
    assert_eq!(lines[1].games_played, 3);
}

#[test]
fn test_missing_columns_default_to_zero() {
    let csv = "player_id,games_played,total_points\np1,4,20\n";
    let lines = load_stat_lines(csv.as_bytes()).unwrap();
    assert_eq!(lines[0].total_fouls, 0);
    assert_eq!(lines[0].grade_id, "");
}

#[test]
fn test_negative_csv_count_is_rejected() {
    let csv = "player_id,games_played,total_points,total_fouls\np1,4,20,-2\n";
    assert!(matches!(
        load_stat_lines(csv.as_bytes()),
        Err(StatsError::NegativeCount { field: "total_fouls", .. })
    ));
}

#[test]
fn test_malformed_csv_is_a_parse_error() {
    let csv = "player_id,games_played\np1,many\n";
    assert!(matches!(load_stat_lines(csv.as_bytes()), Err(StatsError::Csv(_))));
}

#[test]
fn test_json_stat_lines() {
    let json = r#"[{"player_id":"p1","games_played":2,"total_points":9,"three_point":1}]"#;
    let lines = load_stat_lines_json(json.as_bytes()).unwrap();
    assert_eq!(lines[0].total_points, 9);
    assert!(matches!(
        load_stat_lines_json("{".as_bytes()),
        Err(StatsError::Json(_))
    ));
}

#[test]
fn test_team_lines_reject_impossible_records() {
    let ok = "team_id,name,season_id,wins,losses,games_played,points_for,points_against\nt1,Hawks,s1,4,2,6,300,250\n";
    let teams = load_team_lines(ok.as_bytes()).unwrap();
    assert_eq!(teams[0].wins, 4);

    let bad = "team_id,name,season_id,wins,losses,games_played,points_for,points_against\nt1,Hawks,s1,4,4,6,300,250\n";
    assert!(matches!(load_team_lines(bad.as_bytes()), Err(StatsError::Validation(_))));
}

#[test]
fn test_files_dispatch_on_extension() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("stats.csv");
    fs::write(&csv_path, STATS_CSV).unwrap();
    assert_eq!(load_stat_lines_from_file(&csv_path).unwrap().len(), 2);

    let json_path = dir.path().join("teams.JSON");
    fs::write(
        &json_path,
        r#"[{"team_id":"t1","name":"Hawks","season_id":"s1","wins":1,"losses":0,"games_played":1}]"#,
    )
    .unwrap();
    assert_eq!(load_team_lines_from_file(&json_path).unwrap()[0].team_id, "t1");
}

#[test]
fn test_missing_file_is_a_config_error() {
    let dir = tempdir().unwrap();
    let err = load_stat_lines_from_file(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, StatsError::Config(_)));
    assert!(err.to_string().contains("nope.csv"));
}
