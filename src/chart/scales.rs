use chrono::{DateTime, Datelike, Duration, DurationRound, Months, NaiveDate, Utc};
use serde::Deserialize;
use tracing::error;

use crate::datetime::is_midnight;

use super::types::{Domain, Sample, Series};

const MONTH_SECS: i64 = 30 * 86_400;
const YEAR_SECS: i64 = 365 * 86_400;

/// Standard time tick intervals, in seconds.
const TIME_TICK_INTERVALS: [i64; 18] = [
    1,
    5,
    15,
    30,
    60,
    5 * 60,
    15 * 60,
    30 * 60,
    3600,
    3 * 3600,
    6 * 3600,
    12 * 3600,
    86_400,
    2 * 86_400,
    7 * 86_400,
    MONTH_SECS,
    3 * MONTH_SECS,
    YEAR_SECS,
];

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 170.0,
            bottom: 20.0,
            left: 40.0,
        }
    }
}

/// Drawing area, margins excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Dimensions {
    /// `None` while the container is too narrow (or not measured yet) to hold a chart.
    pub fn from_container(container_width: f64, margin: Margin, total_height: f64) -> Option<Self> {
        let width = container_width - margin.left - margin.right;
        let height = total_height - margin.top - margin.bottom;

        if width < f64::EPSILON || height < f64::EPSILON {
            return None;
        }

        Some(Self {
            width,
            height,
            margin,
        })
    }

    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }
}

impl Domain {
    /// Bounds over the full sample set.
    ///
    /// NaN values count as 1 when looking for the minimum and as 0 when
    /// looking for the maximum.
    pub fn compute(samples: &[Sample], series: &[Series]) -> Option<Self> {
        let time_min = samples.iter().map(|sample| sample.timestamp).min()?;
        let time_max = samples.iter().map(|sample| sample.timestamp).max()?;

        let values = || series.iter().flat_map(|series| &series.points).map(|point| point.value);

        let value_min = values()
            .map(|value| if value.is_nan() { 1.0 } else { value })
            .fold(f64::INFINITY, f64::min);
        let value_max = values()
            .map(|value| if value.is_nan() { 0.0 } else { value })
            .fold(f64::NEG_INFINITY, f64::max);

        if !value_min.is_finite() || !value_max.is_finite() {
            return None;
        }

        Some(Self {
            time_min,
            time_max,
            value_min,
            value_max,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain maps everything to the start of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;

        if span == 0.0 {
            return r0;
        }

        r0 + (value - d0) * (r1 - r0) / span
    }

    /// Roughly `count` round values (1, 2 or 5 times a power of ten apart) inside the domain.
    #[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let span = stop - start;

        if !span.is_finite() || span <= 0.0 {
            return if start.is_finite() { vec![start] } else { Vec::new() };
        }

        let count = count.max(1) as f64;
        let mut step = 10_f64.powf((span / count).log10().floor());
        let err = count / span * step;
        if err <= 0.15 {
            step *= 10.0;
        } else if err <= 0.35 {
            step *= 5.0;
        } else if err <= 0.75 {
            step *= 2.0;
        }

        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;

        (first..=last).map(|index| index as f64 * step).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeTicks {
    pub step: Duration,
    pub ticks: Vec<DateTime<Utc>>,
}

impl TimeTicks {
    pub fn label(&self, tick: DateTime<Utc>) -> String {
        let format = if self.step < Duration::minutes(1) {
            "%H:%M:%S"
        } else if self.step < Duration::days(1) {
            if is_midnight(tick) {
                "%b %d"
            } else {
                "%H:%M"
            }
        } else if self.step < Duration::days(30) {
            "%b %d"
        } else if self.step < Duration::days(365) {
            "%b"
        } else {
            "%Y"
        };

        tick.format(format).to_string()
    }
}

/// Ticks every `step`, weeks starting on Sunday, shorter steps aligned on the epoch.
fn interval_ticks(begin: DateTime<Utc>, end: DateTime<Utc>, step: Duration) -> Vec<DateTime<Utc>> {
    let unit = if step >= Duration::days(7) {
        Duration::days(1)
    } else {
        step
    };

    let mut truncated_begin = match begin.duration_trunc(unit) {
        Ok(truncated_begin) => truncated_begin,
        Err(err) => {
            error!(
                begin = begin.to_rfc3339(),
                %step,
                "date time duration trunc error: {err}"
            );
            return Vec::new();
        }
    };
    if step >= Duration::days(7) {
        truncated_begin -= Duration::days(i64::from(
            truncated_begin.weekday().num_days_from_sunday(),
        ));
    }

    let mut time = if truncated_begin < begin {
        truncated_begin + step
    } else {
        truncated_begin
    };

    let mut ticks = Vec::new();
    while time <= end {
        ticks.push(time);
        time += step;
    }

    ticks
}

/// Ticks on the first day of every `months`-th month, counted from year 0.
fn calendar_ticks(begin: DateTime<Utc>, end: DateTime<Utc>, months: u32) -> Vec<DateTime<Utc>> {
    let months = months.max(1);
    let Ok(step) = i32::try_from(months) else {
        return Vec::new();
    };

    let month_index = begin.year() * 12 + i32::try_from(begin.month0()).unwrap_or(0);
    let Some(mut time) = month_start(month_index.div_euclid(step) * step) else {
        error!(begin = begin.to_rfc3339(), "month start out of range");
        return Vec::new();
    };

    let mut ticks = Vec::new();
    while time <= end {
        if time >= begin {
            ticks.push(time);
        }

        let Some(next) = time.checked_add_months(Months::new(months)) else {
            break;
        };
        time = next;
    }

    ticks
}

fn month_start(month_index: i32) -> Option<DateTime<Utc>> {
    let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;

    NaiveDate::from_ymd_opt(month_index.div_euclid(12), month, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|datetime| datetime.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (DateTime<Utc>, DateTime<Utc>),
    width: f64,
}

impl TimeScale {
    /// Maps the domain onto `[0, width]`.
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), width: f64) -> Self {
        Self { domain, width }
    }

    pub fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        self.domain
    }

    #[expect(clippy::cast_precision_loss)]
    pub fn map(&self, time: DateTime<Utc>) -> f64 {
        let (begin, end) = self.domain;
        let span = (end - begin).num_milliseconds();

        if span == 0 {
            return 0.0;
        }

        // multiplying first keeps both ends of the domain exact
        let delta = (time - begin).num_milliseconds() as f64;
        delta * self.width / span as f64
    }

    /// At most `count` ticks on the smallest standard interval that fits.
    pub fn ticks(&self, count: usize) -> TimeTicks {
        let (begin, end) = self.domain;
        let span = (end - begin).num_seconds();
        let count = i64::try_from(count.max(1)).unwrap_or(i64::MAX);

        let step_secs = TIME_TICK_INTERVALS
            .iter()
            .copied()
            .find(|interval| span / interval < count)
            .unwrap_or_else(|| YEAR_SECS * (span / YEAR_SECS / count + 1));
        let step = Duration::seconds(step_secs);

        let ticks = if step_secs >= MONTH_SECS {
            // month and year steps follow the calendar, not the epoch
            let months = if step_secs < YEAR_SECS {
                step_secs / MONTH_SECS
            } else {
                12 * (step_secs / YEAR_SECS)
            };
            calendar_ticks(begin, end, u32::try_from(months).unwrap_or(12))
        } else {
            interval_ticks(begin, end, step)
        };

        TimeTicks { step, ticks }
    }
}
