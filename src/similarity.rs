use crate::consts::STDEV_EPSILON;
use crate::model::{aggregate_players, StatLine};
use crate::rates::{rates, RateVector};
use crate::util::{mean, population_stddev, serialize_as_label};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use strum_macros::Display;
use tracing::debug;

const DIMS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SimilarityMetric {
    Cosine,
    Euclidean,
}

serialize_as_label!(SimilarityMetric);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub player_id: String,
    pub player_name: String,
    pub team_name: String,
    pub games_played: i32,
    pub rates: RateVector,
    /// On [0, 100]; 100 is identical.
    pub score: f64,
    pub metric: SimilarityMetric,
}

/// Cosine of the angle between two profiles, mapped onto [0, 100].
///
/// Two zero vectors are identical (100); a zero vector against anything
/// else is treated as orthogonal (50).
pub fn cosine_similarity(a: &[f64; DIMS], b: &[f64; DIMS]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let a_zero = norm_a <= f64::EPSILON;
    let b_zero = norm_b <= f64::EPSILON;
    match (a_zero, b_zero) {
        (true, true) => 100.0,
        (true, false) | (false, true) => 50.0,
        (false, false) => {
            let cos = (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0);
            (cos + 1.0) * 50.0
        }
    }
}

/// Per-dimension mean and population stdev over a peer cohort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStats {
    pub mean: [f64; DIMS],
    pub stdev: [f64; DIMS],
}

impl FeatureStats {
    pub fn from_vectors(vectors: &[[f64; DIMS]]) -> Self {
        let mut stats = Self {
            mean: [0.0; DIMS],
            stdev: [0.0; DIMS],
        };
        for d in 0..DIMS {
            let column: Vec<f64> = vectors.iter().map(|v| v[d]).collect();
            stats.mean[d] = mean(&column);
            stats.stdev[d] = population_stddev(&column);
        }
        stats
    }

    /// Z-scores; a flat dimension contributes 0.
    pub fn standardize(&self, v: &[f64; DIMS]) -> [f64; DIMS] {
        let mut z = [0.0; DIMS];
        for d in 0..DIMS {
            if self.stdev[d] >= STDEV_EPSILON {
                z[d] = (v[d] - self.mean[d]) / self.stdev[d];
            }
        }
        z
    }
}

/// `100 / (1 + d)` where `d` is the distance between z-scored profiles.
pub fn euclidean_similarity(a: &[f64; DIMS], b: &[f64; DIMS], stats: &FeatureStats) -> f64 {
    let za = stats.standardize(a);
    let zb = stats.standardize(b);
    let d = za
        .iter()
        .zip(&zb)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt();
    100.0 / (1.0 + d)
}

/// Career lines of every candidate other than the query that clears the
/// games floor. Zero-game players never qualify.
fn candidate_pool(query_id: &str, candidates: &[StatLine], min_games: i32) -> Vec<StatLine> {
    aggregate_players(candidates)
        .into_iter()
        .map(|p| p.line)
        .filter(|l| l.player_id != query_id && l.games_played > 0 && l.games_played >= min_games)
        .collect()
}

fn rank(mut results: Vec<SimilarityResult>, top_n: usize) -> Vec<SimilarityResult> {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results.truncate(top_n);
    results
}

fn result_for(line: &StatLine, rates: RateVector, score: f64, metric: SimilarityMetric) -> SimilarityResult {
    SimilarityResult {
        player_id: line.player_id.clone(),
        player_name: line.player_name.clone(),
        team_name: line.team_name.clone(),
        games_played: line.games_played,
        rates,
        score,
        metric,
    }
}

/// Players whose scoring profile points the same way as the query's.
pub fn similar_players(
    query: &StatLine,
    candidates: &[StatLine],
    min_games: i32,
    top_n: usize,
) -> Vec<SimilarityResult> {
    let target = rates(query).profile_vector();
    let pool = candidate_pool(&query.player_id, candidates, min_games);
    debug!(
        "Similar players for '{}': {} candidates",
        query.player_id,
        pool.len()
    );

    let results: Vec<SimilarityResult> = pool
        .par_iter()
        .map(|line| {
            let r = rates(line);
            let score = cosine_similarity(&target, &r.profile_vector());
            result_for(line, r, score, SimilarityMetric::Cosine)
        })
        .collect();
    rank(results, top_n)
}

/// Nearest peers by distance between standardized profiles.
///
/// Standardization uses the peer pool together with the query.
pub fn comparables(
    query: &StatLine,
    peers: &[StatLine],
    min_games: i32,
    top_n: usize,
) -> Vec<SimilarityResult> {
    let target = rates(query).profile_vector();
    let pool = candidate_pool(&query.player_id, peers, min_games);

    let mut vectors: Vec<[f64; DIMS]> = pool.iter().map(|l| rates(l).profile_vector()).collect();
    vectors.push(target);
    let stats = FeatureStats::from_vectors(&vectors);
    debug!(
        "Comparables for '{}': {} peers",
        query.player_id,
        pool.len()
    );

    let results: Vec<SimilarityResult> = pool
        .par_iter()
        .map(|line| {
            let r = rates(line);
            let score = euclidean_similarity(&target, &r.profile_vector(), &stats);
            result_for(line, r, score, SimilarityMetric::Euclidean)
        })
        .collect();
    rank(results, top_n)
}
