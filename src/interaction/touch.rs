use serde::{Deserialize, Serialize};

/// Data sample picked by a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSelection {
    pub index: usize,
    /// Pointer x, where the indicator line is drawn.
    pub pixel_x: f64,
    /// Pixel x of the selected sample itself.
    pub snapped_x: f64,
}

/// Maps a pointer x inside a `width`-wide chart onto the nearest of `count`
/// evenly spaced samples.
///
/// Returns `None` for empty series, unusable widths and pointers outside
/// `[0, width]`.
#[must_use]
pub fn resolve_touch(x: f64, width: f64, count: usize) -> Option<TouchSelection> {
    if count == 0 || !width.is_finite() || width <= 0.0 || !x.is_finite() {
        return None;
    }
    if !(0.0..=width).contains(&x) {
        return None;
    }

    let last = count - 1;
    let index = ((x / width) * last as f64).round().clamp(0.0, last as f64) as usize;
    let snapped_x = if last == 0 {
        width / 2.0
    } else {
        index as f64 / last as f64 * width
    };

    Some(TouchSelection {
        index,
        pixel_x: x,
        snapped_x,
    })
}
