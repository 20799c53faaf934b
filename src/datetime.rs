use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

use crate::chart::ChartError;

pub const COMPACT_DATETIME_FORMAT: &str = "%Y%m%d%H%M%S";

const COMPACT_DATETIME_LEN: usize = 14;

/// Parses the fixed-width `YYYYMMDDHHMMSS` timestamps the queue embeds in the page.
///
/// The timestamps carry no offset, they are read as UTC and displayed as UTC
/// so that what the page shows matches what the server wrote.
pub fn parse_compact_datetime(value: &str) -> Result<DateTime<Utc>, ChartError> {
    let malformed = || ChartError::MalformedTimestamp {
        value: value.to_string(),
    };

    // chrono accepts variable width fields, the width is enforced here
    if value.len() != COMPACT_DATETIME_LEN || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(malformed());
    }

    NaiveDateTime::parse_from_str(value, COMPACT_DATETIME_FORMAT)
        .map(|datetime| datetime.and_utc())
        .map_err(|_| malformed())
}

pub fn display_tooltip_date(datetime: DateTime<Utc>) -> String {
    datetime.format("%e %b").to_string()
}

pub fn is_midnight(datetime: DateTime<Utc>) -> bool {
    datetime.num_seconds_from_midnight() == 0
}
