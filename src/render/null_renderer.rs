use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer that only validates frames and keeps the last one.
///
/// Tests and benches use it to inspect exactly what a backend would receive.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_primitive_count(&self) -> usize {
        self.last_frame
            .as_ref()
            .map_or(0, RenderFrame::primitive_count)
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
