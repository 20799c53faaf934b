mod axis;
mod colors;
mod components;
mod create_chart;
mod error;
mod format;
mod hover;
mod lines;
mod parse;
mod scales;
mod scene;
mod series;
mod state;
mod types;

pub use components::QueueChart;
pub use error::ChartError;
pub use parse::prepare_samples;
pub use scales::Margin;
pub use types::RawRecord;
