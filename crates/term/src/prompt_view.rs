//! PromptView: draws the pattern prompt like a scrolling console.

use crate::fb::{CellStyle, FrameBuffer};
use crate::grid_view::Viewport;
use crate::types::PROMPT_TEXT;

/// Caret drawn after the typed input
pub const CARET: char = '_';

#[derive(Debug, Default)]
pub struct PromptView;

impl PromptView {
    /// Render the transcript followed by the live prompt line.
    ///
    /// When everything does not fit, the oldest lines scroll off the top.
    pub fn render_into(
        &self,
        transcript: &[String],
        input: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        if viewport.height == 0 {
            return;
        }

        let live = format!("{PROMPT_TEXT}{input}{CARET}");
        let visible = viewport.height as usize - 1;
        let skip = transcript.len().saturating_sub(visible);

        let lines = transcript[skip..]
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(live.as_str()));
        for (y, line) in (0..viewport.height).zip(lines) {
            fb.put_str(0, y, line, CellStyle::TEXT);
        }
    }

    pub fn render(&self, transcript: &[String], input: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(transcript, input, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_line_follows_transcript() {
        let transcript = vec!["first".to_string(), "second".to_string()];
        let fb = PromptView.render(&transcript, "gl", Viewport::new(80, 5));
        assert!(fb.row_text(0).starts_with("first"));
        assert!(fb.row_text(1).starts_with("second"));
        assert!(fb
            .row_text(2)
            .starts_with(&format!("{PROMPT_TEXT}gl{CARET}")));
        assert_eq!(fb.row_text(3).trim(), "");
    }

    #[test]
    fn oldest_lines_scroll_off() {
        let transcript: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
        let fb = PromptView.render(&transcript, "", Viewport::new(80, 3));
        assert!(fb.row_text(0).starts_with("line 8"));
        assert!(fb.row_text(1).starts_with("line 9"));
        assert!(fb.row_text(2).starts_with(PROMPT_TEXT));
    }

    #[test]
    fn zero_height_viewport_draws_nothing() {
        let fb = PromptView.render(&["x".to_string()], "", Viewport::new(10, 0));
        assert_eq!(fb.height(), 0);
    }
}
