use crate::consts::TREND_WINDOW;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub value: f64,
    pub moving_avg: f64,
    pub is_peak: bool,
    pub is_valley: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub points: Vec<TrendPoint>,
    /// Fewer than two points: nothing can be flagged.
    pub insufficient: bool,
    pub peak_index: Option<usize>,
    pub valley_index: Option<usize>,
    /// Last value minus the one before it.
    pub growth: f64,
}

/// Centred moving average; the window is truncated at both ends.
pub fn moving_average(series: &[f64]) -> Vec<f64> {
    let half = TREND_WINDOW / 2;
    (0..series.len())
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + half + 1).min(series.len());
            let window = &series[lo..hi];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// Annotates a time-ordered series with its moving average and extrema.
///
/// A peak is strictly above every existing neighbour and equal to the
/// series maximum; a valley mirrors that with the minimum.
pub fn annotate(series: &[f64]) -> Vec<TrendPoint> {
    let avg = moving_average(series);
    if series.len() < 2 {
        return series
            .iter()
            .zip(avg)
            .map(|(&value, moving_avg)| TrendPoint {
                value,
                moving_avg,
                is_peak: false,
                is_valley: false,
            })
            .collect();
    }

    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);

    series
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let prev = i.checked_sub(1).map(|j| series[j]);
            let next = series.get(i + 1).copied();
            let neighbours = [prev, next];
            let above_all = neighbours.iter().flatten().all(|&n| value > n);
            let below_all = neighbours.iter().flatten().all(|&n| value < n);
            TrendPoint {
                value,
                moving_avg: avg[i],
                is_peak: above_all && value == max,
                is_valley: below_all && value == min,
            }
        })
        .collect()
}

pub fn summarize(series: &[f64]) -> TrendSummary {
    let points = annotate(series);
    let growth = match series {
        [.., prev, last] => last - prev,
        _ => 0.0,
    };
    TrendSummary {
        peak_index: points.iter().position(|p| p.is_peak),
        valley_index: points.iter().position(|p| p.is_valley),
        insufficient: series.len() < 2,
        growth,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average_truncates_edges() {
        let avg = moving_average(&[3.0, 6.0, 9.0]);
        assert_eq!(avg, vec![4.5, 6.0, 7.5]);
    }

    #[test]
    fn test_plateau_has_no_peak() {
        let points = annotate(&[1.0, 5.0, 5.0, 2.0]);
        assert!(points.iter().all(|p| !p.is_peak));
        assert!(points[0].is_valley);
    }

    #[test]
    fn test_empty_series() {
        let s = summarize(&[]);
        assert!(s.points.is_empty());
        assert!(s.insufficient);
        assert_eq!(s.growth, 0.0);
    }
}
