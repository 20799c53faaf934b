use tracing::debug;

use super::types::{Sample, Series, SeriesPoint, METRICS};

/// Projects every sample onto one series per tracked metric.
///
/// Nothing is filtered: point `i` of every series comes from sample `i`, NaN
/// values included.
pub fn build_series(samples: &[Sample]) -> Vec<Series> {
    debug!(samples = samples.len(), "building series");

    METRICS
        .iter()
        .map(|metric| Series {
            metric: (*metric).to_string(),
            points: samples
                .iter()
                .map(|sample| SeriesPoint {
                    timestamp: sample.timestamp,
                    value: sample.value(metric),
                })
                .collect(),
        })
        .collect()
}

impl Series {
    /// Last point holding a number, scanning from the end.
    pub fn last_known_point(&self) -> Option<&SeriesPoint> {
        self.points.iter().rev().find(|point| !point.value.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample(hour: u32, failed: f64, queued: f64) -> Sample {
        Sample {
            timestamp: Utc.with_ymd_and_hms(2023, 1, 1, hour, 0, 0).unwrap(),
            values: HashMap::from([
                ("failed".to_string(), failed),
                ("queued".to_string(), queued),
            ]),
        }
    }

    #[test]
    fn one_series_per_metric_in_fixed_order() {
        let series = build_series(&[sample(0, 1.0, 5.0), sample(1, 0.0, 7.0)]);

        let metrics = series.iter().map(|s| s.metric.as_str()).collect::<Vec<_>>();
        assert_eq!(metrics, ["failed", "queued"]);
        assert_eq!(series[1].points[1].value, 7.0);
    }

    #[test]
    fn keeps_nan_points_aligned() {
        let samples = [
            sample(0, 1.0, 5.0),
            sample(1, f64::NAN, 7.0),
            sample(2, 3.0, f64::NAN),
        ];

        let series = build_series(&samples);

        for series in &series {
            assert_eq!(series.points.len(), samples.len());
            for (point, sample) in series.points.iter().zip(&samples) {
                assert_eq!(point.timestamp, sample.timestamp);
            }
        }
        assert!(series[0].points[1].value.is_nan());
        assert!(series[1].points[2].value.is_nan());
    }

    #[test]
    fn last_known_point_skips_trailing_nan() {
        let series = build_series(&[
            sample(0, 1.0, 5.0),
            sample(1, 2.0, 6.0),
            sample(2, f64::NAN, 7.0),
        ]);

        let failed = series[0].last_known_point().unwrap();
        assert_eq!(failed.value, 2.0);
        assert_eq!(failed.timestamp, Utc.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap());
        assert_eq!(series[1].last_known_point().unwrap().value, 7.0);
    }

    #[test]
    fn last_known_point_of_empty_data() {
        let series = build_series(&[sample(0, f64::NAN, 1.0), sample(1, f64::NAN, 2.0)]);

        assert!(series[0].last_known_point().is_none());
    }
}
