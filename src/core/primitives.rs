use std::fmt::Write;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Hour/minute label with meridiem, e.g. `9:47 AM`.
pub const DEFAULT_TIME_LABEL_FORMAT: &str = "%-I:%M %p";

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Formats `time` with a strftime pattern, rejecting patterns chrono cannot render.
pub fn format_time_label(time: DateTime<Utc>, format: &str) -> ChartResult<String> {
    let mut label = String::new();
    write!(label, "{}", time.format(format)).map_err(|_| {
        ChartError::InvalidData(format!("unsupported time label format `{format}`"))
    })?;
    Ok(label)
}
