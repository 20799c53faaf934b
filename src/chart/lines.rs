use std::fmt::Write;

use super::{colors::NEUTRAL_COLOR, state::ChartState, types::Series};

const LABEL_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineWeight {
    #[default]
    Thin,
    Highlighted,
}

impl LineWeight {
    pub fn for_pointer(over: bool) -> Self {
        if over {
            Self::Highlighted
        } else {
            Self::Thin
        }
    }

    pub fn stroke_width(self) -> &'static str {
        match self {
            Self::Thin => "1.5px",
            Self::Highlighted => "4px",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub offset: f64,
    pub color: &'static str,
}

impl SeriesLabel {
    pub fn transform(&self) -> String {
        format!("translate({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine {
    pub metric: String,
    pub color: &'static str,
    pub path: String,
    pub label: SeriesLabel,
}

pub fn series_lines(state: &ChartState) -> Vec<SeriesLine> {
    state
        .series
        .iter()
        .map(|series| SeriesLine {
            metric: series.metric.clone(),
            color: state.colors.color(&series.metric).unwrap_or(NEUTRAL_COLOR),
            path: line_path(series, state),
            label: series_label(series, state),
        })
        .collect()
}

/// SVG path through the series points. A NaN point breaks the line, the next
/// present point starts a new segment.
pub fn line_path(series: &Series, state: &ChartState) -> String {
    let mut path = String::new();
    let mut pen_down = false;

    for point in &series.points {
        if point.value.is_nan() {
            pen_down = false;
            continue;
        }

        let command = if pen_down { 'L' } else { 'M' };
        // writing into a String cannot fail
        let _ = write!(
            path,
            "{command}{},{}",
            state.x(point.timestamp),
            state.y(point.value)
        );
        pen_down = true;
    }

    path
}

/// Label at the last known value, or at the drawing origin when the series has none.
pub fn series_label(series: &Series, state: &ChartState) -> SeriesLabel {
    let (x, y) = series
        .last_known_point()
        .map_or((0.0, 0.0), |point| (state.x(point.timestamp), state.y(point.value)));

    SeriesLabel {
        text: series.metric.clone(),
        x,
        y,
        offset: LABEL_OFFSET,
        color: state.colors.label_color(&series.metric),
    }
}
