use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{DEFAULT_TIME_LABEL_FORMAT, decimal_to_f64, format_time_label};
use crate::error::ChartResult;

/// Rendered chart area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Point rescaled into the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point in viewport pixel space, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One sample of a line series.
///
/// `label` is the formatted value shown by hosts that mirror the touched
/// value elsewhere; `time_label` is the text drawn above the indicator line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: f64,
    pub label: String,
    pub time_label: String,
}

impl DataPoint {
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>, time_label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            time_label: time_label.into(),
        }
    }

    /// Builds a point whose label is the plain formatted value.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self::new(value, format!("{value}"), String::new())
    }

    pub fn from_decimal(
        value: Decimal,
        label: impl Into<String>,
        time_label: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?, label, time_label))
    }

    /// Builds a point with a clock-style time label such as `9:47 AM`.
    pub fn at_time(
        value: f64,
        label: impl Into<String>,
        time: DateTime<Utc>,
    ) -> ChartResult<Self> {
        Self::at_time_with_format(value, label, time, DEFAULT_TIME_LABEL_FORMAT)
    }

    pub fn at_time_with_format(
        value: f64,
        label: impl Into<String>,
        time: DateTime<Utc>,
        format: &str,
    ) -> ChartResult<Self> {
        Ok(Self::new(value, label, format_time_label(time, format)?))
    }
}
