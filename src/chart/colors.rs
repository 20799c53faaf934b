use super::types::TOTAL_METRIC;

/// Ten-color categorical palette.
pub const COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub const NEUTRAL_COLOR: &str = "#666";

pub fn get_color(index: usize) -> &'static str {
    COLORS[index % COLORS.len()]
}

/// Metric to color, fixed by the order the metrics are given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    colors: Vec<(String, &'static str)>,
}

impl ColorAssignment {
    pub fn new<'a>(metrics: impl IntoIterator<Item = &'a str>) -> Self {
        let mut colors: Vec<(String, &'static str)> = Vec::new();
        for metric in metrics {
            if colors.iter().any(|(name, _)| name == metric) {
                continue;
            }

            colors.push((metric.to_string(), get_color(colors.len())));
        }

        Self { colors }
    }

    pub fn color(&self, metric: &str) -> Option<&'static str> {
        self.colors
            .iter()
            .find(|(name, _)| name == metric)
            .map(|(_, color)| *color)
    }

    /// Color of a series' end label.
    pub fn label_color(&self, metric: &str) -> &'static str {
        if metric == TOTAL_METRIC {
            return NEUTRAL_COLOR;
        }

        self.color(metric).unwrap_or(NEUTRAL_COLOR)
    }
}
