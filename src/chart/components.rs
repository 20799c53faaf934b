use std::rc::Rc;

use leptos::{
    component, create_signal, view, CollectView, IntoView, SignalGet, SignalSet, SignalUpdate,
};

use crate::config::ChartConfig;

use super::{
    axis::{Axis, Gridline, Orientation, AXIS_COLOR, GRID_COLOR, TICK_PADDING},
    create_chart::{create_chart, CreateChartReturn},
    hover::{HoverState, HoverTarget, PointerEvent, HALO_STROKE_WIDTH, TOOLTIP_COLOR},
    lines::{LineWeight, SeriesLine},
    scene::Scene,
    types::Sample,
};

const STATS_COLOR: &str = "#999";

#[component]
pub fn QueueChart(samples: Rc<Vec<Sample>>, config: ChartConfig) -> impl IntoView {
    let CreateChartReturn {
        area_node_ref,
        scene,
    } = create_chart(samples, config);

    view! {
        <div node_ref=area_node_ref class="queue-chart w-full">
            {move || scene.get().map(|scene| view! { <ChartSvg scene /> })}
        </div>
    }
}

#[component]
fn ChartSvg(scene: Rc<Scene>) -> impl IntoView {
    let dimensions = scene.dimensions;
    let outer_width = dimensions.outer_width();
    let outer_height = dimensions.outer_height();
    let transform = format!(
        "translate({},{})",
        dimensions.margin.left, dimensions.margin.top
    );
    let stats_x = dimensions.width + 70.0;
    let value_axis = scene.value_axis.clone();
    let time_axis = scene.time_axis.clone();
    let gridlines = scene.gridlines.clone();

    view! {
        <svg width=outer_width height=outer_height>
            <g transform=transform>
                <AxisView axis=value_axis />
                <AxisView axis=time_axis />
                <Gridlines gridlines />

                {scene
                    .lines
                    .iter()
                    .cloned()
                    .map(|line| view! { <SeriesLineView line /> })
                    .collect_view()}

                {scene
                    .targets
                    .iter()
                    .cloned()
                    .map(|target| view! { <HoverTargetView target /> })
                    .collect_view()}

                {scene
                    .stats
                    .clone()
                    .map(|stats| view! { <Stats stats x=stats_x /> })}
            </g>
        </svg>
    }
}

#[component]
fn AxisView(axis: Axis) -> impl IntoView {
    let orientation = axis.orientation;
    let spacing = axis.tick_size.max(0.0) + TICK_PADDING;
    // tick mark end, label position, label dy and anchor, relative to the tick
    let (line_x2, line_y2, label_x, label_y, dy, anchor) = match orientation {
        Orientation::Bottom => (0.0, axis.tick_size, 0.0, spacing, ".71em", "middle"),
        Orientation::Left => (-axis.tick_size, 0.0, -spacing, 0.0, ".32em", "end"),
    };

    view! {
        <g class=axis.class transform=axis.transform fill=AXIS_COLOR style:font-size="11px">
            {axis
                .ticks
                .into_iter()
                .map(|tick| {
                    view! {
                        <g class="tick" transform=tick.transform(orientation)>
                            <line x2=line_x2 y2=line_y2 stroke=AXIS_COLOR />
                            <text x=label_x y=label_y dy=dy text-anchor=anchor>
                                {tick.label}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
            <path class="domain" d=axis.domain_path fill="none" stroke=AXIS_COLOR />
            <text
                x=axis.title.x
                y=axis.title.y
                dy=axis.title.dy
                transform=axis.title.transform
                text-anchor="end"
            >
                {axis.title.text}
            </text>
        </g>
    }
}

#[component]
fn Gridlines(gridlines: Vec<Gridline>) -> impl IntoView {
    view! {
        <g class="grid">
            {gridlines
                .into_iter()
                .map(|gridline| {
                    view! {
                        <line
                            x1=0.0
                            x2=gridline.x2
                            y1=gridline.y
                            y2=gridline.y
                            stroke=GRID_COLOR
                            shape-rendering="crispEdges"
                        />
                    }
                })
                .collect_view()}
        </g>
    }
}

#[component]
fn SeriesLineView(line: SeriesLine) -> impl IntoView {
    let (weight, set_weight) = create_signal(LineWeight::default());
    let SeriesLine {
        metric,
        color,
        path,
        label,
    } = line;

    view! {
        <g class="serie" data-metric=metric>
            <path
                class="line"
                fill="none"
                d=path
                style:stroke=color
                stroke-width=move || weight.get().stroke_width()
                on:mouseenter=move |_| set_weight.set(LineWeight::for_pointer(true))
                on:mouseleave=move |_| set_weight.set(LineWeight::for_pointer(false))
            />
            <text
                transform=label.transform()
                x=label.offset
                dy=".35em"
                style:font-size="11px"
                style:fill=label.color
            >
                {label.text}
            </text>
        </g>
    }
}

#[component]
fn HoverTargetView(target: HoverTarget) -> impl IntoView {
    let (hover, set_hover) = create_signal(HoverState::default());
    let marker = move || hover.get().marker();
    let HoverTarget {
        metric,
        color,
        cx,
        cy,
        tooltip,
    } = target;

    let handle_event = move |event: PointerEvent| {
        set_hover.update(|hover| *hover = hover.on_event(event));
    };

    // The tooltip only exists while its point is hovered, leaving drops this point's tooltip
    let tooltip_view = move || {
        hover.get().is_hovered().then(|| {
            view! {
                <text
                    class="tooltip"
                    x=tooltip.x
                    y=tooltip.y
                    fill=TOOLTIP_COLOR
                    pointer-events="none"
                    style:font-size="11px"
                >
                    {tooltip.text.clone()}
                </text>
            }
        })
    };

    view! {
        <g class="hover-target" data-metric=metric>
            <circle
                cx=cx
                cy=cy
                r=move || marker().radius
                fill=color
                stroke=color
                stroke-width=HALO_STROKE_WIDTH
                stroke-opacity=move || marker().halo_opacity
                style:transition=move || marker().css_transition()
                on:mouseenter=move |_| handle_event(PointerEvent::Enter)
                on:mouseleave=move |_| handle_event(PointerEvent::Leave)
            />
            {tooltip_view}
        </g>
    }
}

#[component]
fn Stats(stats: Vec<String>, x: f64) -> impl IntoView {
    view! {
        <g class="stats" fill=STATS_COLOR style:font-size="10px">
            {stats
                .into_iter()
                .enumerate()
                .map(|(index, line)| view! { <text x=x y=stats_line_y(index)>{line}</text> })
                .collect_view()}
        </g>
    }
}

#[expect(clippy::cast_precision_loss)]
fn stats_line_y(index: usize) -> f64 {
    12.0 + index as f64 * 14.0
}
