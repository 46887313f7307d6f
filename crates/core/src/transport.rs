//! Transport readings shown on the dashboard chart.
//!
//! There is no sensor ingestion: every patient is served the same fixed
//! series recorded during a sample ambulance run. Tremor and shock are in
//! sensor units as reported by the on-board accelerometer.

use chrono::NaiveTime;
use serde::Serialize;

/// One reading of the on-board sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportSample {
    pub time: NaiveTime,
    pub tremor: f64,
    pub shock: f64,
}

/// Aggregates over a transport series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportSummary {
    pub average_tremor: f64,
    pub peak_shock: f64,
    pub duration_secs: i64,
    pub sample_count: usize,
}

/// (seconds from midnight, tremor, shock)
const MOCK_SERIES: [(u32, f64, f64); 10] = [
    (50_701, 5.2, 1.1),
    (50_702, 5.8, 1.5),
    (50_703, 4.5, 0.8),
    (50_704, 7.0, 3.0),
    (50_705, 6.5, 2.1),
    (50_706, 8.1, 4.5),
    (50_707, 7.9, 3.0),
    (50_708, 9.0, 2.0),
    (50_709, 8.5, 1.5),
    (50_710, 7.5, 1.2),
];

/// The fixed series rendered by the dashboard (14:05:01 to 14:05:10).
pub fn mock_samples() -> Vec<TransportSample> {
    MOCK_SERIES
        .iter()
        .filter_map(|&(secs, tremor, shock)| {
            NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).map(|time| TransportSample {
                time,
                tremor,
                shock,
            })
        })
        .collect()
}

/// Summarize a series. Returns `None` for an empty series.
///
/// Duration is measured from the first to the last sample in the order
/// given; samples are expected to be chronological.
pub fn summarize(samples: &[TransportSample]) -> Option<TransportSummary> {
    let first = samples.first()?;
    let last = samples.last()?;

    let total_tremor: f64 = samples.iter().map(|s| s.tremor).sum();
    let peak_shock = samples
        .iter()
        .map(|s| s.shock)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(TransportSummary {
        average_tremor: total_tremor / samples.len() as f64,
        peak_shock,
        duration_secs: (last.time - first.time).num_seconds(),
        sample_count: samples.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_series_spans_ten_seconds_of_readings() {
        let samples = mock_samples();
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0].time, NaiveTime::from_hms_opt(14, 5, 1).unwrap());
        assert_eq!(samples[9].time, NaiveTime::from_hms_opt(14, 5, 10).unwrap());
    }

    #[test]
    fn summary_of_mock_series() {
        let summary = summarize(&mock_samples()).unwrap();
        assert!((summary.average_tremor - 7.0).abs() < 1e-9);
        assert_eq!(summary.peak_shock, 4.5);
        assert_eq!(summary.duration_secs, 9);
        assert_eq!(summary.sample_count, 10);
    }

    #[test]
    fn single_sample_has_zero_duration() {
        let sample = TransportSample {
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            tremor: 1.5,
            shock: 0.2,
        };
        let summary = summarize(std::slice::from_ref(&sample)).unwrap();
        assert_eq!(summary.average_tremor, 1.5);
        assert_eq!(summary.peak_shock, 0.2);
        assert_eq!(summary.duration_secs, 0);
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn sample_time_serializes_as_clock_time() {
        let json = serde_json::to_value(&mock_samples()[0]).unwrap();
        assert_eq!(json["time"], "14:05:01");
        assert_eq!(json["tremor"], 5.2);
    }
}
