use crate::error::VizResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless pipeline runs.
///
/// It still validates frame content so tests catch invalid geometry
/// before a real backend is wired in.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> VizResult<()> {
        frame.validate()?;
        self.last_path_count = frame.paths.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
