use chrono::{DateTime, Utc};
use tracing::debug;

use super::{
    colors::ColorAssignment,
    error::ChartError,
    scales::{Dimensions, LinearScale, TimeScale},
    series::build_series,
    types::{Domain, Sample, Series, METRICS},
};

/// Everything one render needs, computed once from the full sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub dimensions: Dimensions,
    pub domain: Domain,
    pub time_scale: TimeScale,
    pub value_scale: LinearScale,
    pub series: Vec<Series>,
    pub colors: ColorAssignment,
}

impl ChartState {
    pub fn build(samples: &[Sample], dimensions: Dimensions) -> Result<Self, ChartError> {
        if samples.len() < 2 {
            return Err(ChartError::InsufficientData {
                count: samples.len(),
            });
        }

        let series = build_series(samples);
        let domain = Domain::compute(samples, &series).ok_or(ChartError::InsufficientData {
            count: samples.len(),
        })?;

        debug!(
            time_min = domain.time_min.to_rfc3339(),
            time_max = domain.time_max.to_rfc3339(),
            domain.value_min,
            domain.value_max,
            "domain computed"
        );

        let time_scale = TimeScale::new((domain.time_min, domain.time_max), dimensions.width);
        let value_scale = LinearScale::new(
            (domain.value_min, domain.value_max),
            (dimensions.height, 0.0),
        );

        Ok(Self {
            dimensions,
            domain,
            time_scale,
            value_scale,
            series,
            colors: ColorAssignment::new(METRICS),
        })
    }

    pub fn x(&self, time: DateTime<Utc>) -> f64 {
        self.time_scale.map(time)
    }

    pub fn y(&self, value: f64) -> f64 {
        self.value_scale.map(value)
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::chart::{parse::parse_samples, scales::Margin, types::RawRecord};

    pub(crate) fn records(value: serde_json::Value) -> Vec<RawRecord> {
        serde_json::from_value(value).unwrap()
    }

    pub(crate) fn dimensions() -> Dimensions {
        Dimensions::from_container(810.0, Margin::default(), 200.0).unwrap()
    }

    pub(crate) fn state(value: serde_json::Value) -> ChartState {
        let samples = parse_samples(&records(value)).unwrap();
        ChartState::build(&samples, dimensions()).unwrap()
    }

    #[test]
    fn fewer_than_two_samples_draw_nothing() {
        for value in [
            json!([]),
            json!([{"datetime": "20230101000000", "queued": "5", "failed": "1"}]),
        ] {
            let samples = parse_samples(&records(value)).unwrap();
            let count = samples.len();

            assert_eq!(
                ChartState::build(&samples, dimensions()),
                Err(ChartError::InsufficientData { count })
            );
        }
    }

    #[test]
    fn two_records_scenario() {
        let state = state(json!([
            {"datetime": "20230101000000", "queued": "5", "failed": "1"},
            {"datetime": "20230101010000", "queued": "7", "failed": "0"},
        ]));

        assert_eq!(state.series.len(), 2);
        assert!(state.series.iter().all(|series| series.points.len() == 2));
        assert_eq!(
            state.time_scale.domain(),
            (
                Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap(),
            )
        );
        assert_eq!((state.domain.value_min, state.domain.value_max), (0.0, 7.0));
        assert_eq!(state.y(7.0), 0.0);
        assert_eq!(state.y(0.0), state.dimensions.height);
        assert_eq!(state.x(state.domain.time_max), state.dimensions.width);
    }

    #[test]
    fn time_domain_matches_extreme_timestamps() {
        let state = state(json!([
            {"datetime": "20230105000000", "queued": "1", "failed": "1"},
            {"datetime": "20230101120000", "queued": "2", "failed": "1"},
            {"datetime": "20230103000000", "queued": "3", "failed": "1"},
        ]));

        assert_eq!(
            state.domain.time_min,
            Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(
            state.domain.time_max,
            Utc.with_ymd_and_hms(2023, 1, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(state.point_count(), 6);
    }

    #[test]
    fn nan_values_keep_the_domain_bounded() {
        let state = state(json!([
            {"datetime": "20230101000000", "queued": "50", "failed": "abc"},
            {"datetime": "20230101010000", "queued": "70", "failed": "40"},
        ]));

        assert!(state.domain.value_min <= 1.0);
        assert!(state.domain.value_max >= 0.0);
        assert!(state.domain.value_min.is_finite() && state.domain.value_max.is_finite());
    }

    #[test]
    fn colors_are_stable_across_builds() {
        let data = json!([
            {"datetime": "20230101000000", "queued": "5", "failed": "1"},
            {"datetime": "20230101010000", "queued": "7", "failed": "0"},
        ]);

        assert_eq!(state(data.clone()).colors, state(data).colors);
    }
}
