mod common;

use common::{approx_eq, team, LineBuilder};
use courtside::model::StatLine;
use courtside::scoring::power::power_rankings;
use courtside::StatsError;

fn player(id: &str, team_id: &str, ppg: i32) -> StatLine {
    LineBuilder::new(id).team(team_id).games(1).points(ppg).build()
}

fn league() -> (Vec<courtside::model::TeamLine>, Vec<StatLine>) {
    let teams = vec![
        team("C", 0, 5, 200, 300),
        team("A", 5, 0, 300, 200),
        team("B", 3, 2, 250, 250),
        // Only two games: not ranked.
        team("D", 2, 0, 150, 100),
    ];
    let mut players = Vec::new();
    for (i, ppg) in [20, 15, 10, 8, 6, 4].iter().enumerate() {
        players.push(player(&format!("a{}", i), "A", *ppg));
    }
    players.push(player("b0", "B", 10));
    players.push(player("b1", "B", 10));
    players.push(player("c0", "C", 5));
    (teams, players)
}

#[test]
fn test_power_order_and_eligibility() {
    let (teams, players) = league();
    let rows = power_rankings(&teams, &players).unwrap();
    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C"]);
    assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_power_breakdown() {
    let (teams, players) = league();
    let rows = power_rankings(&teams, &players).unwrap();

    let a = &rows[0];
    assert!(approx_eq(a.power_rating, 100.0, 1e-9));
    assert_eq!(a.roster_size, 6);
    assert!(approx_eq(a.avg_point_diff, 20.0, 1e-9));

    let b = &rows[1];
    assert!(approx_eq(b.breakdown.win_pct, 60.0, 1e-9));
    assert!(approx_eq(b.breakdown.point_diff, 50.0, 1e-9));
    // Top five: A 11.8, B 10, C 5.
    assert!(approx_eq(b.breakdown.top5_scoring, 100.0 * 5.0 / 6.8, 1e-9));
    assert_eq!(b.breakdown.bench_depth, 0.0);
    let expected = 0.40 * 60.0 + 0.25 * 50.0 + 0.20 * (100.0 * 5.0 / 6.8);
    assert!(approx_eq(b.power_rating, expected, 1e-9));

    let c = &rows[2];
    assert_eq!(c.power_rating, 0.0);
}

#[test]
fn test_single_team_scores_full_marks() {
    let teams = vec![team("A", 1, 2, 100, 120)];
    let rows = power_rankings(&teams, &[]).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(approx_eq(rows[0].power_rating, 100.0, 1e-9));
}

#[test]
fn test_no_eligible_teams() {
    let teams = vec![team("A", 1, 1, 100, 90)];
    assert!(power_rankings(&teams, &[]).unwrap().is_empty());
}

#[test]
fn test_inconsistent_record_is_rejected() {
    let mut t = team("A", 3, 3, 100, 100);
    t.games_played = 4;
    assert!(matches!(
        power_rankings(&[t], &[]),
        Err(StatsError::Validation(_))
    ));
}

#[test]
fn test_negative_roster_line_is_rejected() {
    let (teams, mut players) = league();
    players.push(LineBuilder::new("a9").team("A").games(1).points(-8).build());
    assert!(matches!(
        power_rankings(&teams, &players),
        Err(StatsError::NegativeCount { field: "total_points", .. })
    ));
}
