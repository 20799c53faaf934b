use std::rc::Rc;

use leptos::{create_memo, html::Div, NodeRef, Signal, SignalGet};
use tracing::{debug, error};

use crate::{
    config::ChartConfig,
    use_chart_area::{use_chart_area, UseChartAreaReturn},
};

use super::{scales::Dimensions, scene::Scene, state::ChartState, types::Sample};

pub struct CreateChartReturn {
    pub area_node_ref: NodeRef<Div>,
    pub scene: Signal<Option<Rc<Scene>>>,
}

pub fn create_chart(samples: Rc<Vec<Sample>>, config: ChartConfig) -> CreateChartReturn {
    let UseChartAreaReturn {
        node_ref: area_node_ref,
        width,
    } = use_chart_area();

    let scene = create_scene_memo(samples, config, width);

    CreateChartReturn {
        area_node_ref,
        scene,
    }
}

/// Rebuilds the whole chart state whenever the area width changes.
fn create_scene_memo(
    samples: Rc<Vec<Sample>>,
    config: ChartConfig,
    width: Signal<f64>,
) -> Signal<Option<Rc<Scene>>> {
    create_memo(move |_| {
        let width = width.get();
        debug!(width, "chart area measured");

        let dimensions = Dimensions::from_container(width, config.margin, config.total_height)?;

        match ChartState::build(&samples, dimensions) {
            Ok(state) => Some(Rc::new(Scene::new(&state, config.show_stats()))),
            Err(err) => {
                error!("chart state failed to build: {err}");
                None
            }
        }
    })
    .into()
}
