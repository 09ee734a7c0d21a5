mod common;

use common::approx_eq;
use courtside::trend::{annotate, moving_average, summarize};

#[test]
fn test_season_series_summary() {
    let s = summarize(&[5.0, 8.0, 12.0, 7.0, 4.0]);
    let expected = [6.5, 25.0 / 3.0, 9.0, 23.0 / 3.0, 5.5];
    for (p, e) in s.points.iter().zip(expected) {
        assert!(approx_eq(p.moving_avg, e, 1e-12));
    }
    assert_eq!(s.peak_index, Some(2));
    assert_eq!(s.valley_index, Some(4));
    assert_eq!(s.growth, -3.0);
    assert!(!s.insufficient);
    assert_eq!(s.points.iter().filter(|p| p.is_peak).count(), 1);
}

#[test]
fn test_local_extrema_that_are_not_global_are_ignored() {
    // 6 is a local peak but 9 is the maximum.
    let points = annotate(&[1.0, 6.0, 3.0, 9.0, 2.0]);
    assert!(!points[1].is_peak);
    assert!(points[3].is_peak);
    assert!(points[0].is_valley);
    assert!(!points[2].is_valley);
}

#[test]
fn test_single_point_cannot_be_flagged() {
    let s = summarize(&[11.0]);
    assert!(s.insufficient);
    assert_eq!(s.peak_index, None);
    assert_eq!(s.valley_index, None);
    assert_eq!(s.points[0].moving_avg, 11.0);
    assert_eq!(s.growth, 0.0);
}

#[test]
fn test_two_points() {
    let s = summarize(&[4.0, 10.0]);
    assert_eq!(s.valley_index, Some(0));
    assert_eq!(s.peak_index, Some(1));
    assert_eq!(s.growth, 6.0);
    assert_eq!(moving_average(&[4.0, 10.0]), vec![7.0, 7.0]);
}

#[test]
fn test_flat_series_has_no_extrema() {
    let s = summarize(&[3.0, 3.0, 3.0]);
    assert_eq!(s.peak_index, None);
    assert_eq!(s.valley_index, None);
}
