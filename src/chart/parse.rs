use serde_json::Value;
use tracing::{debug, warn};

use crate::datetime::parse_compact_datetime;

use super::{
    error::ChartError,
    types::{RawRecord, Sample, METRICS},
};

/// Samples for a chart, which needs at least two records to be drawn.
pub fn prepare_samples(records: &[RawRecord]) -> Result<Vec<Sample>, ChartError> {
    if records.len() < 2 {
        return Err(ChartError::InsufficientData {
            count: records.len(),
        });
    }

    parse_samples(records)
}

pub fn parse_samples(records: &[RawRecord]) -> Result<Vec<Sample>, ChartError> {
    debug!(count = records.len(), "parsing records");

    records.iter().map(parse_record).collect()
}

pub fn parse_record(record: &RawRecord) -> Result<Sample, ChartError> {
    let timestamp = parse_compact_datetime(&record.datetime)?;

    let values = METRICS
        .iter()
        .map(|metric| {
            let value = coerce_metric(record.fields.get(*metric));
            if value.is_nan() {
                warn!(
                    datetime = record.datetime,
                    metric,
                    raw = ?record.fields.get(*metric),
                    "metric value is not a number"
                );
            }

            ((*metric).to_string(), value)
        })
        .collect();

    Ok(Sample { timestamp, values })
}

/// Coerces a raw metric field to a number, anything unusable becomes NaN.
pub fn coerce_metric(value: Option<&Value>) -> f64 {
    let number = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|number| number.is_finite())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(datetime: &str, queued: Value, failed: Value) -> RawRecord {
        serde_json::from_value(json!({
            "datetime": datetime,
            "queued": queued,
            "failed": failed,
        }))
        .unwrap()
    }

    #[test]
    fn keeps_length_and_order() {
        let records = vec![
            record("20230101010000", json!("7"), json!("0")),
            record("20230101000000", json!("5"), json!("1")),
        ];

        let samples = parse_samples(&records).unwrap();

        assert_eq!(samples.len(), 2);
        assert!(samples[0].timestamp > samples[1].timestamp);
        assert_eq!(samples[0].value("queued"), 7.0);
        assert_eq!(samples[1].value("failed"), 1.0);
    }

    #[test]
    fn malformed_timestamp_fails_whole_parse() {
        let records = vec![
            record("20230101000000", json!("5"), json!("1")),
            record("2023-01-01", json!("7"), json!("0")),
        ];

        assert_eq!(
            parse_samples(&records),
            Err(ChartError::MalformedTimestamp {
                value: "2023-01-01".to_string()
            })
        );
    }

    #[test]
    fn prepare_needs_two_records() {
        assert_eq!(
            prepare_samples(&[]),
            Err(ChartError::InsufficientData { count: 0 })
        );
        assert_eq!(
            prepare_samples(&[record("20230101000000", json!("5"), json!("1"))]),
            Err(ChartError::InsufficientData { count: 1 })
        );
        // too few records is reported before any parsing
        assert_eq!(
            prepare_samples(&[record("garbage", json!("5"), json!("1"))]),
            Err(ChartError::InsufficientData { count: 1 })
        );
    }

    #[test]
    fn prepare_parses_enough_records() {
        let samples = prepare_samples(&[
            record("20230101000000", json!("5"), json!("1")),
            record("20230101010000", json!("7"), json!("0")),
        ])
        .unwrap();

        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn malformed_metric_is_soft() {
        let records = vec![record("20230101000000", json!("5"), json!("abc"))];

        let samples = parse_samples(&records).unwrap();

        assert_eq!(samples[0].value("queued"), 5.0);
        assert!(samples[0].value("failed").is_nan());
    }

    #[test]
    fn coerces_metric_fields() {
        assert_eq!(coerce_metric(Some(&json!("12"))), 12.0);
        assert_eq!(coerce_metric(Some(&json!(" 3 "))), 3.0);
        assert_eq!(coerce_metric(Some(&json!("2.5"))), 2.5);
        assert_eq!(coerce_metric(Some(&json!(4))), 4.0);
        assert!(coerce_metric(Some(&json!(""))).is_nan());
        assert!(coerce_metric(Some(&json!("inf"))).is_nan());
        assert!(coerce_metric(Some(&json!(null))).is_nan());
        assert!(coerce_metric(Some(&json!(true))).is_nan());
        assert!(coerce_metric(None).is_nan());
    }

    #[test]
    fn ignores_untracked_fields() {
        let records: Vec<RawRecord> = serde_json::from_str(
            r#"[{"datetime": "20230101000000", "queued": "1", "failed": "2", "added": "9"}]"#,
        )
        .unwrap();

        let samples = parse_samples(&records).unwrap();

        assert_eq!(samples[0].values.len(), 2);
        assert!(samples[0].values.get("added").is_none());
    }
}
