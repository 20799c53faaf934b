use std::time::Duration;

use crate::datetime::display_tooltip_date;

use super::{colors::NEUTRAL_COLOR, state::ChartState};

pub const HOVER_TRANSITION: Duration = Duration::from_millis(150);
pub const HALO_STROKE_WIDTH: f64 = 12.0;
pub const TOOLTIP_COLOR: &str = "#333";

const TOOLTIP_DX: f64 = 6.0;
const TOOLTIP_DY: f64 = -9.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

impl HoverState {
    #[must_use]
    pub fn on_event(self, event: PointerEvent) -> Self {
        match (self, event) {
            (Self::Idle | Self::Hovered, PointerEvent::Enter) => Self::Hovered,
            (Self::Idle | Self::Hovered, PointerEvent::Leave) => Self::Idle,
        }
    }

    pub fn is_hovered(self) -> bool {
        self == Self::Hovered
    }

    pub fn marker(self) -> MarkerStyle {
        match self {
            Self::Idle => MarkerStyle {
                radius: 2.0,
                halo_opacity: 0.0,
                transition: None,
            },
            Self::Hovered => MarkerStyle {
                radius: 5.0,
                halo_opacity: 0.3,
                transition: Some(HOVER_TRANSITION),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub halo_opacity: f64,
    /// Only entering animates, going back to idle is immediate.
    pub transition: Option<Duration>,
}

impl MarkerStyle {
    pub fn css_transition(&self) -> String {
        match self.transition {
            Some(duration) => {
                let millis = duration.as_millis();
                format!("r {millis}ms, stroke-opacity {millis}ms")
            }
            None => "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub metric: String,
    pub color: &'static str,
    pub cx: f64,
    pub cy: f64,
    pub tooltip: Tooltip,
}

/// One target per point of every series. Points without a value are kept
/// and drawn at coordinate 0.
pub fn hover_targets(state: &ChartState) -> Vec<HoverTarget> {
    state
        .series
        .iter()
        .flat_map(|series| {
            let color = state.colors.color(&series.metric).unwrap_or(NEUTRAL_COLOR);

            series.points.iter().map(move |point| {
                let cx = fallback_coordinate(state.x(point.timestamp));
                let cy = fallback_coordinate(state.y(point.value));

                HoverTarget {
                    metric: series.metric.clone(),
                    color,
                    cx,
                    cy,
                    tooltip: Tooltip {
                        text: format!("{}: {}", display_tooltip_date(point.timestamp), point.value),
                        x: cx + TOOLTIP_DX,
                        y: cy + TOOLTIP_DY,
                    },
                }
            })
        })
        .collect()
}

fn fallback_coordinate(coordinate: f64) -> f64 {
    if coordinate.is_finite() {
        coordinate
    } else {
        0.0
    }
}
