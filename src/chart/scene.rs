use chrono::Duration;
use humantime::format_duration;
use tracing::{debug, error};

use super::{
    axis::{gridlines, time_axis, value_axis, Axis, Gridline},
    format::format_thousands,
    hover::{hover_targets, HoverTarget},
    lines::{series_lines, SeriesLine},
    scales::Dimensions,
    state::ChartState,
};

/// Every element of one chart, ready to be mapped onto SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub dimensions: Dimensions,
    pub time_axis: Axis,
    pub value_axis: Axis,
    pub gridlines: Vec<Gridline>,
    pub lines: Vec<SeriesLine>,
    pub targets: Vec<HoverTarget>,
    pub stats: Option<Vec<String>>,
}

impl Scene {
    pub fn new(state: &ChartState, with_stats: bool) -> Self {
        debug!("building scene");

        Self {
            dimensions: state.dimensions,
            time_axis: time_axis(state),
            value_axis: value_axis(state),
            gridlines: gridlines(state),
            lines: series_lines(state),
            targets: hover_targets(state),
            stats: with_stats.then(|| stats(state)),
        }
    }
}

fn stats(state: &ChartState) -> Vec<String> {
    let mut stats = vec![format!(
        "rendering {} points",
        format_thousands(state.point_count())
    )];

    let (begin, end) = state.time_scale.domain();
    let span: Duration = end - begin;
    match span.to_std() {
        Ok(span) => stats.push(format!("span {}", format_duration(span))),
        Err(err) => {
            error!(%span, "duration couldn't be converted to std duration: {err:?}");
        }
    }

    stats
}
