use crate::archetype::{classify_role, RoleArchetype, ShotProfile};
use crate::config::ChemistryWeights;
use crate::consts::LINEUP_SIZE;
use crate::error::StatsResult;
use crate::model::{aggregate_players, StatLine};
use crate::util::{mean, serialize_as_label};
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use strum::IntoEnumIterator;
use strum_macros::Display;
use tracing::debug;

// Symmetric, indexed by `RoleArchetype::index()`.
const SYNERGY: [[f64; RoleArchetype::COUNT]; RoleArchetype::COUNT] = [
    // SS    Sc    FTM   Enf   AR    RP    BC
    [0.50, 0.95, 0.60, 0.80, 0.85, 0.70, 0.50], // Sharpshooter
    [0.95, 0.40, 0.65, 0.85, 0.80, 0.75, 0.55], // Scorer
    [0.60, 0.65, 0.40, 0.60, 0.65, 0.60, 0.50], // Free-Throw Merchant
    [0.80, 0.85, 0.60, 0.30, 0.75, 0.70, 0.50], // Enforcer
    [0.85, 0.80, 0.65, 0.75, 0.60, 0.70, 0.60], // All-Rounder
    [0.70, 0.75, 0.60, 0.70, 0.70, 0.50, 0.55], // Role Player
    [0.50, 0.55, 0.50, 0.50, 0.60, 0.55, 0.30], // Bench Contributor
];

/// Weight of a candidate's ppg in the greedy lineup build.
const GREEDY_PPG_WEIGHT: f64 = 0.05;

#[inline(always)]
pub fn synergy(a: RoleArchetype, b: RoleArchetype) -> f64 {
    SYNERGY[a.index()][b.index()]
}

/// Bonus for pairing players with different scoring loads.
pub fn balance_bonus(ppg_a: f64, ppg_b: f64) -> f64 {
    let diff = (ppg_a - ppg_b).abs();
    if diff > 3.0 {
        0.10
    } else if diff > 1.0 {
        0.05
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMember {
    pub player_id: String,
    pub player_name: String,
    pub games_played: i32,
    pub ppg: f64,
    pub role: RoleArchetype,
}

/// Roster aggregated per player, ordered by ppg (highest first, stable).
pub fn roster(lines: &[StatLine]) -> Vec<RosterMember> {
    let mut members: Vec<RosterMember> = aggregate_players(lines)
        .into_iter()
        .map(|p| {
            let profile = ShotProfile::from_line(&p.line);
            RosterMember {
                player_id: p.line.player_id,
                player_name: p.line.player_name,
                games_played: p.line.games_played,
                ppg: profile.ppg,
                role: classify_role(&profile),
            }
        })
        .collect();
    members.sort_by(|a, b| b.ppg.partial_cmp(&a.ppg).unwrap_or(Ordering::Equal));
    members
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSynergy {
    /// `min(1, synergy + balance bonus)`.
    pub score: f64,
    pub reason: String,
}

impl PairSynergy {
    pub fn between(a: &RosterMember, b: &RosterMember) -> Self {
        let score = (synergy(a.role, b.role) + balance_bonus(a.ppg, b.ppg)).min(1.0);
        let reason = if a.role == b.role {
            format!("Both {}s, may overlap", a.role)
        } else {
            format!("{} + {}, complementary styles", a.role, b.role)
        };
        Self { score, reason }
    }
}

/// Square pair matrix over a roster; the diagonal is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChemistryMatrix {
    cells: Vec<Vec<Option<PairSynergy>>>,
}

impl ChemistryMatrix {
    pub fn build(members: &[RosterMember]) -> Self {
        let n = members.len();
        let mut cells: Vec<Vec<Option<PairSynergy>>> = vec![vec![None; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let pair = PairSynergy::between(&members[i], &members[j]);
                cells[j][i] = Some(pair.clone());
                cells[i][j] = Some(pair);
            }
        }
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&PairSynergy> {
        self.cells.get(i).and_then(|row| row.get(j)).and_then(Option::as_ref)
    }

    /// Pair scores of the upper triangle, row-major.
    pub fn pair_scores(&self) -> Vec<f64> {
        let n = self.len();
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .filter_map(|(i, j)| self.get(i, j).map(|p| p.score))
            .collect()
    }

    fn mean_over(&self, idx: &[usize]) -> f64 {
        let mut scores = Vec::with_capacity(idx.len() * idx.len() / 2);
        for (a, &i) in idx.iter().enumerate() {
            for &j in &idx[a + 1..] {
                if let Some(p) = self.get(i, j) {
                    scores.push(p.score);
                }
            }
        }
        mean(&scores)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPair {
    pub player1: String,
    pub player2: String,
    pub player1_name: String,
    pub player2_name: String,
    pub score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeCount {
    pub archetype: RoleArchetype,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LineupStrategy {
    #[strum(serialize = "Whole Roster")]
    WholeRoster,
    Exhaustive,
    Greedy,
}

serialize_as_label!(LineupStrategy);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamChemistry {
    pub members: Vec<RosterMember>,
    pub matrix: ChemistryMatrix,
    pub pairs: Vec<RankedPair>,
    pub score: f64,
    pub breakdown: Vec<ArchetypeCount>,
    pub best_lineup: Vec<RosterMember>,
    pub lineup_strategy: LineupStrategy,
}

fn distinct_roles(members: &[RosterMember], idx: &[usize]) -> usize {
    idx.iter()
        .map(|&i| members[i].role)
        .collect::<HashSet<_>>()
        .len()
}

/// Chemistry score on [0, 100]: blended mean pair score and role
/// diversity. Fewer than two players score 0.
pub fn chemistry_score(members: &[RosterMember], matrix: &ChemistryMatrix, weights: &ChemistryWeights) -> f64 {
    let n = members.len();
    if n < 2 {
        return 0.0;
    }
    let all: Vec<usize> = (0..n).collect();
    let diversity = distinct_roles(members, &all) as f64 / n.min(RoleArchetype::COUNT) as f64;
    let mean_pair = mean(&matrix.pair_scores());
    (100.0 * (weights.synergy_weight * mean_pair + weights.diversity_weight * diversity)).clamp(0.0, 100.0)
}

/// Every lineup-sized index set over a roster of `n`, in lexicographic order.
pub fn lineup_candidates(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (0..n).combinations(LINEUP_SIZE)
}

struct Candidate {
    objective: f64,
    total_ppg: f64,
    idx: Vec<usize>,
}

impl Candidate {
    /// Higher objective, then higher total ppg, then the smaller index set.
    fn better(a: Candidate, b: Candidate) -> Candidate {
        let ord = a
            .objective
            .total_cmp(&b.objective)
            .then(a.total_ppg.total_cmp(&b.total_ppg))
            .then_with(|| b.idx.cmp(&a.idx));
        if ord == Ordering::Less {
            b
        } else {
            a
        }
    }
}

fn exhaustive_lineup(members: &[RosterMember], matrix: &ChemistryMatrix, weights: &ChemistryWeights) -> Vec<usize> {
    debug!("Lineup: searching {} players exhaustively", members.len());
    lineup_candidates(members.len())
        .par_bridge()
        .map(|idx| {
            let diversity = distinct_roles(members, &idx) as f64 / LINEUP_SIZE as f64;
            Candidate {
                objective: weights.synergy_weight * matrix.mean_over(&idx)
                    + weights.diversity_weight * diversity,
                total_ppg: idx.iter().map(|&i| members[i].ppg).sum(),
                idx,
            }
        })
        .reduce_with(Candidate::better)
        .map(|c| c.idx)
        .unwrap_or_default()
}

/// Seeds with the top scorer, then repeatedly adds the candidate with the
/// best mean synergy to the current lineup plus a small ppg term.
fn greedy_lineup(members: &[RosterMember]) -> Vec<usize> {
    let mut lineup: Vec<usize> = vec![0];
    let mut remaining: Vec<usize> = (1..members.len()).collect();
    while lineup.len() < LINEUP_SIZE && !remaining.is_empty() {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &c) in remaining.iter().enumerate() {
            let syn: Vec<f64> = lineup
                .iter()
                .map(|&m| synergy(members[c].role, members[m].role))
                .collect();
            let score = mean(&syn) + GREEDY_PPG_WEIGHT * members[c].ppg;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        match best {
            Some((pos, _)) => lineup.push(remaining.remove(pos)),
            None => break,
        }
    }
    lineup
}

/// Indices (into `members`) of the suggested five, with the strategy used.
pub fn best_lineup(
    members: &[RosterMember],
    matrix: &ChemistryMatrix,
    weights: &ChemistryWeights,
) -> (Vec<usize>, LineupStrategy) {
    let n = members.len();
    if n <= LINEUP_SIZE {
        return ((0..n).collect(), LineupStrategy::WholeRoster);
    }
    if n <= weights.lineup_exhaustive_limit {
        (exhaustive_lineup(members, matrix, weights), LineupStrategy::Exhaustive)
    } else {
        (greedy_lineup(members), LineupStrategy::Greedy)
    }
}

/// Full chemistry analysis of one team's lines.
pub fn team_chemistry(lines: &[StatLine], weights: &ChemistryWeights) -> StatsResult<TeamChemistry> {
    weights.validate()?;
    for line in lines {
        line.validate()?;
    }
    let members = roster(lines);
    let matrix = ChemistryMatrix::build(&members);
    let score = chemistry_score(&members, &matrix, weights);

    let n = members.len();
    let mut pairs: Vec<RankedPair> = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(p) = matrix.get(i, j) {
                pairs.push(RankedPair {
                    player1: members[i].player_id.clone(),
                    player2: members[j].player_id.clone(),
                    player1_name: members[i].player_name.clone(),
                    player2_name: members[j].player_name.clone(),
                    score: p.score,
                    reason: p.reason.clone(),
                });
            }
        }
    }
    pairs.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let breakdown = RoleArchetype::iter()
        .map(|archetype| ArchetypeCount {
            archetype,
            count: members.iter().filter(|m| m.role == archetype).count(),
        })
        .filter(|c| c.count > 0)
        .collect();

    let (lineup_idx, lineup_strategy) = best_lineup(&members, &matrix, weights);
    debug!(
        "Chemistry: {} players, score {:.1}, lineup via {}",
        n, score, lineup_strategy
    );

    Ok(TeamChemistry {
        best_lineup: lineup_idx.iter().map(|&i| members[i].clone()).collect(),
        lineup_strategy,
        pairs,
        score,
        breakdown,
        matrix,
        members,
    })
}
