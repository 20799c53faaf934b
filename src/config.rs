use std::time::Duration;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::chart::Margin;

/// Where the chart finds its data and how it lays itself out.
///
/// The host page may override any field with a JSON `data-config` attribute
/// on the chart slot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data_element_id: String,
    pub container_selector: String,
    pub margin: Margin,
    pub total_height: f64,
    #[serde(deserialize_with = "deserialize_duration")]
    pub fade_in: Duration,
    pub force_debug: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_element_id: "queue_data".to_string(),
            container_selector: ".chart-container".to_string(),
            margin: Margin::default(),
            total_height: 200.0,
            fade_in: Duration::from_millis(600),
            force_debug: false,
        }
    }
}

impl ChartConfig {
    pub fn from_overrides(overrides: Option<&str>) -> Self {
        let Some(overrides) = overrides.filter(|overrides| !overrides.trim().is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str(overrides) {
            Ok(config) => config,
            Err(err) => {
                warn!(overrides, "invalid chart config, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn show_stats(&self) -> bool {
        self.force_debug || cfg!(debug_assertions)
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    humantime::parse_duration(&value).map_err(serde::de::Error::custom)
}
