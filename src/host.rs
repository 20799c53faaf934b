use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use leptos::{document, mount_to, view};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::{
    chart::{prepare_samples, ChartError, QueueChart, RawRecord},
    config::ChartConfig,
};

pub const CHART_SLOT_ID: &str = "chart";

/// Reads the data embedded in the page and mounts the chart into its slot.
///
/// Too few records is not an error: the chart container simply stays hidden.
pub fn start() -> Result<()> {
    let slot = document()
        .get_element_by_id(CHART_SLOT_ID)
        .ok_or_else(|| anyhow!("chart slot #{CHART_SLOT_ID} not found"))?;
    let config = ChartConfig::from_overrides(slot.get_attribute("data-config").as_deref());

    let records = read_records(&config)?;
    let samples = match prepare_samples(&records) {
        Ok(samples) => samples,
        Err(err @ ChartError::InsufficientData { .. }) => {
            debug!("chart skipped: {err}");
            return Ok(());
        }
        Err(err) => return Err(err).context("queue data rejected"),
    };

    info!(samples = samples.len(), "mounting queue chart");

    reveal_container(&config)?;

    let slot = slot
        .dyn_into::<HtmlElement>()
        .map_err(|err| anyhow!("chart slot is not an html element: {err:?}"))?;
    let samples = Rc::new(samples);
    mount_to(slot, move || view! { <QueueChart samples config /> });

    Ok(())
}

fn read_records(config: &ChartConfig) -> Result<Vec<RawRecord>> {
    let element = document()
        .get_element_by_id(&config.data_element_id)
        .ok_or_else(|| anyhow!("data container #{} not found", config.data_element_id))?;
    let json = element.text_content().unwrap_or_default();

    serde_json::from_str(&json).context("queue data deserialization error")
}

/// Fades the wrapping container in.
fn reveal_container(config: &ChartConfig) -> Result<()> {
    let container = document()
        .query_selector(&config.container_selector)
        .map_err(|err| anyhow!("{err:?}"))?;
    let Some(container) = container else {
        warn!(
            selector = config.container_selector,
            "chart container not found"
        );
        return Ok(());
    };

    let transition = format!(
        "display: block; transition: opacity {}ms ease-in;",
        config.fade_in.as_millis()
    );

    container
        .set_attribute("style", &format!("{transition} opacity: 0;"))
        .map_err(|err| anyhow!("{err:?}"))?;
    // flushes styles so the opacity change below is animated
    let _ = container.get_bounding_client_rect();
    container
        .set_attribute("style", &format!("{transition} opacity: 1;"))
        .map_err(|err| anyhow!("{err:?}"))?;

    Ok(())
}
