use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("at least two records are required to draw a chart, got {count}")]
    InsufficientData { count: usize },

    #[error("malformed timestamp {value:?}, expected YYYYMMDDHHMMSS")]
    MalformedTimestamp { value: String },
}
