use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{DataPoint, PixelPoint};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::interaction::{
    GestureOutcome, GestureSession, IndicatorDragBehavior, IndicatorState, SwipeBehavior,
    SwipeDirection, classify_swipe, resolve_touch,
};
use crate::render::Renderer;

use super::ChartEngine;
use super::validation::{validate_indicator_drag_behavior, validate_swipe_behavior};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn swipe_behavior(&self) -> SwipeBehavior {
        self.behavior.swipe
    }

    pub fn set_swipe_behavior(&mut self, behavior: SwipeBehavior) -> ChartResult<()> {
        validate_swipe_behavior(behavior)?;
        self.behavior.swipe = behavior;
        Ok(())
    }

    #[must_use]
    pub fn indicator_drag_behavior(&self) -> IndicatorDragBehavior {
        self.behavior.indicator_drag
    }

    pub fn set_indicator_drag_behavior(
        &mut self,
        behavior: IndicatorDragBehavior,
    ) -> ChartResult<()> {
        validate_indicator_drag_behavior(behavior)?;
        self.behavior.indicator_drag = behavior;
        Ok(())
    }

    /// Installs the callback that receives page swipes.
    pub fn set_swipe_handler(&mut self, handler: impl FnMut(SwipeDirection) + 'static) {
        self.swipe_handler = Some(Box::new(handler));
    }

    pub fn clear_swipe_handler(&mut self) {
        self.swipe_handler = None;
    }

    #[must_use]
    pub fn indicator_state(&self) -> &IndicatorState {
        self.interaction.indicator()
    }

    #[must_use]
    pub fn gesture_session(&self) -> Option<&GestureSession> {
        self.interaction.session()
    }

    /// Sample under the indicator, if any.
    #[must_use]
    pub fn current_value(&self) -> Option<&DataPoint> {
        self.interaction
            .indicator()
            .index
            .and_then(|index| self.model.series.get(index))
    }

    #[must_use]
    pub fn interaction_in_progress(&self) -> bool {
        self.interaction.is_active()
    }

    /// Starts a gesture and selects the sample under the pointer right away.
    ///
    /// `timestamp` is any monotonic host clock reading; only differences
    /// between events of the same gesture are used.
    pub fn pointer_down(&mut self, x: f64, y: f64, timestamp: Duration) -> GestureOutcome {
        self.interaction
            .begin_gesture(PixelPoint::new(x, y), timestamp);
        trace!(x, y, "gesture started");
        self.emit_plugin_event(ChartEvent::GestureStarted { x, y });
        self.update_indicator(x)
    }

    /// Routes a pointer move either to the swipe callback or to the indicator.
    ///
    /// Once a gesture is classified as a swipe, later moves of that gesture
    /// are suppressed until `pointer_up`.
    pub fn pointer_move(&mut self, x: f64, y: f64, timestamp: Duration) -> GestureOutcome {
        let swipe_behavior = self.behavior.swipe;
        let activation_distance = self.behavior.indicator_drag.activation_distance_px;

        let Some(session) = self.interaction.session_mut() else {
            trace!(x, y, "pointer move without active gesture");
            return GestureOutcome::Ignored;
        };
        session.location = PixelPoint::new(x, y);
        if session.is_swipe() {
            return GestureOutcome::Suppressed;
        }

        let elapsed = session.elapsed(timestamp);
        if let Some(direction) = classify_swipe(elapsed, session.horizontal_travel(), swipe_behavior)
        {
            session.swipe = Some(direction);
            return self.dispatch_swipe(direction);
        }

        if !session.dragging {
            if session.start.distance_to(session.location) < activation_distance {
                return GestureOutcome::Ignored;
            }
            session.dragging = true;
        }

        self.update_indicator(x)
    }

    /// Ends the gesture and hides the indicator.
    pub fn pointer_up(&mut self) {
        if self.interaction.end_gesture().is_some() {
            trace!("gesture ended");
            self.emit_plugin_event(ChartEvent::GestureEnded);
        }
    }

    /// Aborts the gesture, e.g. when the host steals the pointer.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    fn dispatch_swipe(&mut self, direction: SwipeDirection) -> GestureOutcome {
        debug!(?direction, "swipe recognized");
        self.hide_indicator_if_visible();
        if let Some(handler) = self.swipe_handler.as_mut() {
            handler(direction);
        }
        self.emit_plugin_event(ChartEvent::Swiped { direction });
        GestureOutcome::Swiped(direction)
    }

    fn update_indicator(&mut self, x: f64) -> GestureOutcome {
        let Some(selection) =
            resolve_touch(x, self.model.viewport.width, self.model.series.len())
        else {
            self.hide_indicator_if_visible();
            return GestureOutcome::NoSelection;
        };

        let y = self
            .model
            .curve_path()
            .point_at_x(selection.pixel_x)
            .map_or(0.0, |point| point.y);
        let Some(point) = self.model.series.get(selection.index) else {
            self.hide_indicator_if_visible();
            return GestureOutcome::NoSelection;
        };

        self.interaction
            .show_indicator(selection.index, point, PixelPoint::new(selection.pixel_x, y));
        self.emit_plugin_event(ChartEvent::IndicatorMoved {
            index: selection.index,
            x: selection.pixel_x,
        });
        GestureOutcome::Selected(selection)
    }

    pub(super) fn hide_indicator_if_visible(&mut self) {
        if self.interaction.indicator().visible {
            self.interaction.hide_indicator();
            self.emit_plugin_event(ChartEvent::IndicatorHidden);
        }
    }
}
