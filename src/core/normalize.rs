use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::NormalizedPoint;

/// Coordinate used on an axis that has nothing to spread over: a single
/// sample horizontally, a flat series vertically.
pub const DEGENERATE_AXIS_COORDINATE: f64 = 0.5;

/// Inclusive value extent of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.span() == 0.0
    }

    /// Maps `value` into `[0, 1]`, falling back to the axis center for flat
    /// ranges and non-finite values.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.is_flat() || !value.is_finite() {
            return DEGENERATE_AXIS_COORDINATE;
        }
        let span = self.span();
        let ratio = if span.is_finite() {
            (value - self.min) / span
        } else {
            // The extent exceeds f64::MAX; halving keeps every difference finite.
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        };
        if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            DEGENERATE_AXIS_COORDINATE
        }
    }
}

/// Returns the min/max over finite values, or `None` when there are none.
#[must_use]
pub fn value_range(values: &[f64]) -> Option<ValueRange> {
    let finite = || values.iter().copied().filter(|v| v.is_finite()).map(OrderedFloat);
    let min = finite().min()?;
    let max = finite().max()?;
    Some(ValueRange {
        min: min.into_inner(),
        max: max.into_inner(),
    })
}

/// Normalized x for sample `index` out of `count`.
#[must_use]
pub fn normalized_x(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return DEGENERATE_AXIS_COORDINATE;
    }
    index as f64 / (count - 1) as f64
}

/// Rescales an ordered series into the unit square.
///
/// x spreads indices evenly over `[0, 1]`; y maps the value range onto
/// `[0, 1]`. Empty input yields an empty vector; degenerate axes collapse to
/// [`DEGENERATE_AXIS_COORDINATE`] instead of dividing by zero.
#[must_use]
pub fn normalize(values: &[f64]) -> Vec<NormalizedPoint> {
    let Some(range) = value_range(values) else {
        return values
            .iter()
            .enumerate()
            .map(|(index, _)| {
                NormalizedPoint::new(
                    normalized_x(index, values.len()),
                    DEGENERATE_AXIS_COORDINATE,
                )
            })
            .collect();
    };

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            NormalizedPoint::new(normalized_x(index, values.len()), range.normalize(*value))
        })
        .collect()
}
