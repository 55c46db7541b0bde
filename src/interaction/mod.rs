mod swipe;
mod touch;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PixelPoint};

pub use swipe::{SwipeBehavior, SwipeDirection, classify_swipe};
pub use touch::{TouchSelection, resolve_touch};

/// Tuning for indicator drags that follow the initial touch-down selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDragBehavior {
    /// Distance from the touch-down location a pointer must travel before
    /// moves start re-resolving the indicator.
    pub activation_distance_px: f64,
}

impl Default for IndicatorDragBehavior {
    fn default() -> Self {
        Self {
            activation_distance_px: 10.0,
        }
    }
}

/// Result of routing one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// The indicator now points at a data sample.
    Selected(TouchSelection),
    /// The pointer is outside the chart or the series is empty.
    NoSelection,
    /// The gesture was recognized as a page swipe.
    Swiped(SwipeDirection),
    /// A swipe already claimed this gesture.
    Suppressed,
    /// No gesture is active, or the drag has not travelled far enough yet.
    Ignored,
}

/// Ephemeral state of one touch gesture, from pointer down to pointer up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSession {
    pub started_at: Duration,
    pub start: PixelPoint,
    pub location: PixelPoint,
    pub highlighted_index: Option<usize>,
    pub swipe: Option<SwipeDirection>,
    pub dragging: bool,
}

impl GestureSession {
    #[must_use]
    pub fn new(start: PixelPoint, started_at: Duration) -> Self {
        Self {
            started_at,
            start,
            location: start,
            highlighted_index: None,
            swipe: None,
            dragging: false,
        }
    }

    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    #[must_use]
    pub fn horizontal_travel(&self) -> f64 {
        self.location.x - self.start.x
    }

    #[must_use]
    pub fn is_swipe(&self) -> bool {
        self.swipe.is_some()
    }
}

/// Public indicator overlay state exposed to host applications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub index: Option<usize>,
    pub value: Option<f64>,
    pub label: Option<String>,
    pub time_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    session: Option<GestureSession>,
    indicator: IndicatorState,
}

impl InteractionState {
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GestureSession> {
        self.session.as_mut()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn indicator(&self) -> &IndicatorState {
        &self.indicator
    }

    pub fn begin_gesture(&mut self, location: PixelPoint, timestamp: Duration) {
        self.session = Some(GestureSession::new(location, timestamp));
    }

    /// Drops the gesture session and hides the indicator.
    pub fn end_gesture(&mut self) -> Option<GestureSession> {
        self.hide_indicator();
        self.session.take()
    }

    pub fn show_indicator(&mut self, index: usize, point: &DataPoint, anchor: PixelPoint) {
        if let Some(session) = self.session.as_mut() {
            session.highlighted_index = Some(index);
        }
        self.indicator = IndicatorState {
            visible: true,
            x: anchor.x,
            y: anchor.y,
            index: Some(index),
            value: Some(point.value),
            label: Some(point.label.clone()),
            time_label: Some(point.time_label.clone()),
        };
    }

    pub fn hide_indicator(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.highlighted_index = None;
        }
        self.indicator = IndicatorState::default();
    }
}
