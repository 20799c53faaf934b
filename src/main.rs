#![deny(clippy::all, clippy::pedantic)]
#![allow(non_snake_case, clippy::module_name_repetitions)]

use tracing::{error, Level};
use wasm_tracing::WASMLayerConfigBuilder;

mod chart;
mod config;
mod datetime;
mod host;
mod use_chart_area;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(Level::INFO)
            .build(),
    );

    if let Err(err) = host::start() {
        error!("queue chart failed to start: {err:#}");
    }
}
