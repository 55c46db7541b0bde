use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Thresholds separating a page swipe from an inspection drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeBehavior {
    /// Horizontal travel that must be exceeded, in pixels.
    pub min_distance_px: f64,
    /// The travel must happen strictly within this many milliseconds of touch-down.
    pub max_elapsed_ms: u64,
}

impl Default for SwipeBehavior {
    fn default() -> Self {
        Self {
            min_distance_px: 100.0,
            max_elapsed_ms: 200,
        }
    }
}

impl SwipeBehavior {
    #[must_use]
    pub fn max_elapsed(self) -> Duration {
        Duration::from_millis(self.max_elapsed_ms)
    }
}

/// Classifies horizontal travel `dx` made `elapsed` after gesture start.
///
/// Returns `None` when the gesture is too short or too slow to be a swipe;
/// callers then treat it as an indicator drag.
#[must_use]
pub fn classify_swipe(
    elapsed: Duration,
    dx: f64,
    behavior: SwipeBehavior,
) -> Option<SwipeDirection> {
    if !dx.is_finite() || dx.abs() <= behavior.min_distance_px {
        return None;
    }
    if elapsed >= behavior.max_elapsed() {
        return None;
    }
    Some(if dx > 0.0 {
        SwipeDirection::Right
    } else {
        SwipeDirection::Left
    })
}
