use super::{format::format_si, state::ChartState};

pub const AXIS_COLOR: &str = "#3f3f3f";
pub const GRID_COLOR: &str = "#e5e5e5";
pub const TIME_TICK_COUNT: usize = 10;
pub const VALUE_TICK_COUNT: usize = 5;
pub const VALUE_TICK_SIZE: f64 = 5.0;
pub const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

impl Tick {
    pub fn transform(&self, orientation: Orientation) -> String {
        match orientation {
            Orientation::Bottom => format!("translate({},0)", self.offset),
            Orientation::Left => format!("translate(0,{})", self.offset),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    pub dy: &'static str,
    pub transform: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub class: &'static str,
    /// Offset of the whole axis group inside the drawing area.
    pub transform: Option<String>,
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    pub domain_path: String,
    pub title: AxisTitle,
}

/// Unlabeled horizontal line at a value tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    pub y: f64,
    pub x2: f64,
}

pub fn time_axis(state: &ChartState) -> Axis {
    let width = state.dimensions.width;
    let time_ticks = state.time_scale.ticks(TIME_TICK_COUNT);

    let ticks = time_ticks
        .ticks
        .iter()
        .map(|tick| Tick {
            offset: state.x(*tick),
            label: time_ticks.label(*tick),
        })
        .collect();

    Axis {
        orientation: Orientation::Bottom,
        class: "x axis",
        transform: Some(format!("translate(0,{})", state.dimensions.height)),
        ticks,
        tick_size: 0.0,
        domain_path: format!("M0,0V0H{width}V0"),
        title: AxisTitle {
            text: "Time",
            x: width,
            y: 0.0,
            dy: "-0.71em",
            transform: None,
        },
    }
}

pub fn value_axis(state: &ChartState) -> Axis {
    let height = state.dimensions.height;

    let ticks = state
        .value_scale
        .ticks(VALUE_TICK_COUNT)
        .into_iter()
        .map(|tick| Tick {
            offset: state.y(tick),
            label: format_si(tick),
        })
        .collect();

    Axis {
        orientation: Orientation::Left,
        class: "y axis",
        transform: None,
        ticks,
        tick_size: VALUE_TICK_SIZE,
        domain_path: format!("M-{VALUE_TICK_SIZE},0H0V{height}H-{VALUE_TICK_SIZE}"),
        title: AxisTitle {
            text: "Count",
            x: 0.0,
            y: 6.0,
            dy: ".71em",
            transform: Some("rotate(-90)"),
        },
    }
}

pub fn gridlines(state: &ChartState) -> Vec<Gridline> {
    state
        .value_scale
        .ticks(VALUE_TICK_COUNT)
        .into_iter()
        .map(|tick| Gridline {
            y: state.y(tick),
            x2: state.dimensions.width,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::chart::state::tests::state;

    fn two_records() -> ChartState {
        state(json!([
            {"datetime": "20230101000000", "queued": "5", "failed": "1"},
            {"datetime": "20230101010000", "queued": "7", "failed": "0"},
        ]))
    }

    #[test]
    fn value_axis_ticks() {
        let state = two_records();
        let axis = value_axis(&state);

        let labels = axis.ticks.iter().map(|tick| tick.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["0", "2", "4", "6"]);
        assert_eq!(axis.ticks[0].offset, state.dimensions.height);
        assert_eq!(axis.title.text, "Count");
        assert_eq!(axis.title.transform, Some("rotate(-90)"));
        assert_eq!(axis.tick_size, 5.0);
        assert_eq!(axis.orientation, Orientation::Left);
    }

    #[test]
    fn time_axis_has_no_inward_ticks() {
        let state = two_records();
        let axis = time_axis(&state);

        assert_eq!(axis.tick_size, 0.0);
        assert_eq!(axis.orientation, Orientation::Bottom);
        assert_eq!(axis.title.text, "Time");
        assert_eq!(axis.title.x, state.dimensions.width);
        assert_eq!(axis.ticks.first().map(|tick| tick.offset), Some(0.0));
        assert_eq!(
            axis.ticks.last().map(|tick| tick.offset),
            Some(state.dimensions.width)
        );
        assert_eq!(axis.transform.as_deref(), Some("translate(0,160)"));
    }

    #[test]
    fn gridlines_follow_value_ticks() {
        let state = two_records();
        let axis = value_axis(&state);
        let lines = gridlines(&state);

        assert_eq!(lines.len(), axis.ticks.len());
        for (line, tick) in lines.iter().zip(&axis.ticks) {
            assert_eq!(line.y, tick.offset);
            assert_eq!(line.x2, state.dimensions.width);
        }
    }
}
