use crate::consts::{STRENGTH_PERCENTILE, WEAKNESS_PERCENTILE};
use crate::model::StatLine;
use crate::rates::rates;
use crate::util::serialize_as_label;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Inclusive percentile of `value` within `cohort_values`.
///
/// The cohort is expected to contain the ranked entity itself, so a
/// single-member cohort always yields 100. Empty input yields 0.
pub fn percentile(value: f64, cohort_values: &[f64]) -> u8 {
    if cohort_values.is_empty() {
        return 0;
    }
    let at_or_below = cohort_values.iter().filter(|&&v| v <= value).count();
    to_percent(at_or_below, cohort_values.len())
}

#[inline(always)]
fn to_percent(count: usize, total: usize) -> u8 {
    (100.0 * count as f64 / total as f64).round() as u8
}

/// A cohort column sorted once so repeated lookups within a pass are
/// `O(log n)`. Never kept past the call that built it.
#[derive(Debug, Clone)]
pub struct SortedColumn {
    values: Vec<f64>,
}

impl SortedColumn {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values.into_iter().collect();
        values.sort_by(|a, b| a.total_cmp(b));
        Self { values }
    }

    pub fn percentile(&self, value: f64) -> u8 {
        if self.values.is_empty() {
            return 0;
        }
        let at_or_below = self.values.partition_point(|&v| v <= value);
        to_percent(at_or_below, self.values.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PercentileDimension {
    Scoring,
    Efficiency,
    #[strum(serialize = "Inside Scoring")]
    Inside,
    #[strum(serialize = "3PT Shooting")]
    ThreePoint,
    Experience,
    Discipline,
}

serialize_as_label!(PercentileDimension);

impl PercentileDimension {
    /// Raw value ranked for this dimension. Discipline is negated so that
    /// fewer fouls rank higher.
    pub fn value_of(&self, line: &StatLine) -> f64 {
        let r = rates(line);
        match self {
            Self::Scoring => r.ppg,
            Self::Efficiency => {
                if r.fouls_pg > 0.0 {
                    r.ppg / r.fouls_pg
                } else {
                    r.ppg
                }
            }
            Self::Inside => r.two_pt_pg,
            Self::ThreePoint => r.three_pt_pg,
            Self::Experience => f64::from(line.games_played),
            Self::Discipline => -r.fouls_pg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionPercentile {
    pub dimension: PercentileDimension,
    pub percentile: u8,
}

/// Percentiles of one subject across several dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PercentileProfile {
    pub entries: Vec<DimensionPercentile>,
}

impl PercentileProfile {
    /// Ranks `subject` against `peers` on each dimension. `peers` should
    /// already contain the subject.
    pub fn compute(subject: &StatLine, peers: &[StatLine], dims: &[PercentileDimension]) -> Self {
        let entries = dims
            .iter()
            .map(|&dimension| {
                let column = SortedColumn::new(peers.iter().map(|p| dimension.value_of(p)));
                DimensionPercentile {
                    dimension,
                    percentile: column.percentile(dimension.value_of(subject)),
                }
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, dimension: PercentileDimension) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.dimension == dimension)
            .map(|e| e.percentile)
    }

    pub fn strengths(&self) -> Vec<PercentileDimension> {
        self.entries
            .iter()
            .filter(|e| e.percentile >= STRENGTH_PERCENTILE)
            .map(|e| e.dimension)
            .collect()
    }

    pub fn weaknesses(&self) -> Vec<PercentileDimension> {
        self.entries
            .iter()
            .filter(|e| e.percentile <= WEAKNESS_PERCENTILE)
            .map(|e| e.dimension)
            .collect()
    }

    pub fn mean(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().map(|e| f64::from(e.percentile)).sum::<f64>() / self.entries.len() as f64
    }
}
