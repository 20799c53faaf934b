use leptos::html::Div;
use leptos::{create_node_ref, NodeRef, Signal};
use leptos_use::{use_element_size, UseElementSizeReturn};

pub struct UseChartAreaReturn {
    pub node_ref: NodeRef<Div>,
    pub width: Signal<f64>,
}

pub fn use_chart_area() -> UseChartAreaReturn {
    let node_ref = create_node_ref::<Div>();
    let UseElementSizeReturn { width, .. } = use_element_size(node_ref);

    UseChartAreaReturn { node_ref, width }
}
