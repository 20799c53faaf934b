use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Tracked metrics, in the order series and colors are assigned.
pub const METRICS: [&str; 2] = ["failed", "queued"];

/// Reserved series name, drawn in a neutral color when present.
pub const TOTAL_METRIC: &str = "TOTAL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub datetime: String,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub values: HashMap<String, f64>,
}

impl Sample {
    /// NaN when the metric is missing or failed to parse.
    pub fn value(&self, metric: &str) -> f64 {
        self.values.get(metric).copied().unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub metric: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    pub value_min: f64,
    pub value_max: f64,
}
