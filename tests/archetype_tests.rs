mod common;

use common::LineBuilder;
use courtside::archetype::{
    classify, classify_line, classify_role, Archetype, RoleArchetype, ShotProfile,
};
use rstest::rstest;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[rstest]
#[case(16.0, 3.0, 1.0, 0.0, Archetype::HighVolume)]
#[case(15.0, 0.0, 0.0, 6.0, Archetype::HighVolume)]
#[case(10.0, 2.5, 3.0, 1.0, Archetype::Sharpshooter)]
#[case(10.0, 2.0, 4.0, 1.0, Archetype::Balanced)]
#[case(10.0, 0.0, 5.0, 3.2, Archetype::Physical)]
#[case(6.0, 0.0, 1.0, 2.0, Archetype::Physical)]
#[case(10.0, 1.0, 4.0, 1.0, Archetype::InsideScorer)]
#[case(9.0, 0.0, 2.0, 2.5, Archetype::Balanced)]
#[case(0.0, 0.0, 0.0, 0.0, Archetype::Balanced)]
fn test_scoring_archetype_rules(
    #[case] ppg: f64,
    #[case] three: f64,
    #[case] two: f64,
    #[case] fouls: f64,
    #[case] expected: Archetype,
) {
    assert_eq!(classify(ppg, three, two, fouls), expected);
}

#[test]
fn test_classify_line_uses_per_game_rates() {
    // 2 threes and 1 two per game over 4 games.
    let line = LineBuilder::new("a").games(4).makes(0, 4, 8).build();
    assert_eq!(classify_line(&line), Archetype::Sharpshooter);

    let idle = LineBuilder::new("b").games(0).build();
    assert_eq!(classify_line(&idle), Archetype::Balanced);
}

fn profile(ppg: f64, one: f64, two: f64, three: f64, foul_rate: f64) -> ShotProfile {
    ShotProfile {
        ppg,
        one_share: one,
        two_share: two,
        three_share: three,
        foul_rate,
    }
}

#[rstest]
#[case(profile(4.0, 0.2, 0.3, 0.5, 0.9), RoleArchetype::Sharpshooter)]
#[case(profile(9.0, 0.1, 0.6, 0.3, 0.0), RoleArchetype::Scorer)]
#[case(profile(8.0, 0.1, 0.6, 0.3, 0.0), RoleArchetype::AllRounder)]
#[case(profile(5.0, 0.5, 0.3, 0.2, 0.0), RoleArchetype::FreeThrowMerchant)]
#[case(profile(5.0, 0.3, 0.4, 0.3, 0.4), RoleArchetype::Enforcer)]
#[case(profile(7.0, 0.3, 0.4, 0.3, 0.1), RoleArchetype::AllRounder)]
#[case(profile(4.0, 0.3, 0.4, 0.3, 0.1), RoleArchetype::RolePlayer)]
#[case(profile(3.0, 0.3, 0.4, 0.3, 0.1), RoleArchetype::BenchContributor)]
fn test_role_rules(#[case] p: ShotProfile, #[case] expected: RoleArchetype) {
    assert_eq!(classify_role(&p), expected);
}

#[test]
fn test_shot_profile_from_line() {
    let line = LineBuilder::new("a").games(2).makes(2, 4, 4).fouls(4).build();
    let p = ShotProfile::from_line(&line);
    assert_eq!(p.ppg, 11.0);
    assert_eq!(p.three_share, 0.4);
    assert_eq!(p.two_share, 0.4);
    assert_eq!(p.one_share, 0.2);
    assert_eq!(p.foul_rate, 0.4);

    let empty = ShotProfile::from_line(&LineBuilder::new("b").games(3).points(9).build());
    assert_eq!(empty.three_share, 0.0);
    // Exactly 3 ppg is not enough for a role player.
    assert_eq!(classify_role(&empty), RoleArchetype::BenchContributor);
}

#[test]
fn test_role_indices_follow_rule_order() {
    let indices: Vec<usize> = RoleArchetype::iter().map(RoleArchetype::index).collect();
    assert_eq!(indices, (0..RoleArchetype::COUNT).collect::<Vec<_>>());
}

#[test]
fn test_labels_round_trip_through_strings() {
    assert_eq!(Archetype::InsideScorer.to_string(), "Inside Scorer");
    assert_eq!(Archetype::from_str("High Volume").unwrap(), Archetype::HighVolume);
    assert_eq!(
        RoleArchetype::from_str("Free-Throw Merchant").unwrap(),
        RoleArchetype::FreeThrowMerchant
    );
    assert!(Archetype::from_str("Point Guard").is_err());
    assert_eq!(
        serde_json::to_string(&RoleArchetype::AllRounder).unwrap(),
        "\"All-Rounder\""
    );
}
