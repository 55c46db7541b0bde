use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{IndicatorDragBehavior, SwipeBehavior};

use super::RenderStyle;

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    style.line_color.validate()?;
    style.background_color.validate()?;
    style.indicator_color.validate()?;

    for (name, value) in [
        ("line width", style.line_width),
        ("indicator line width", style.indicator_line_width),
        ("indicator font size", style.indicator_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("indicator line height", style.indicator_line_height_px),
        ("indicator label gap", style.indicator_label_gap_px),
        ("indicator marker size", style.indicator_marker_size_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    if style.curve_steps_per_segment == 0 {
        return Err(ChartError::InvalidConfig(
            "curve steps per segment must be >= 1".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_swipe_behavior(behavior: SwipeBehavior) -> ChartResult<()> {
    if !behavior.min_distance_px.is_finite() || behavior.min_distance_px < 0.0 {
        return Err(ChartError::InvalidConfig(
            "swipe min distance must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_indicator_drag_behavior(behavior: IndicatorDragBehavior) -> ChartResult<()> {
    if !behavior.activation_distance_px.is_finite() || behavior.activation_distance_px < 0.0 {
        return Err(ChartError::InvalidConfig(
            "indicator drag activation distance must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
