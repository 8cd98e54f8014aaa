//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are
//! rewritten; the first frame, size changes and `invalidate` force a full
//! redraw.

use std::env;
use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::LifeError;

/// Fewest colors needed to tell live cells from dead ones
pub const MIN_COLORS: u16 = 8;

/// How styles are translated to terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 16-color palette, RGB values are approximated
    Ansi,
    /// 24-bit color escapes
    TrueColor,
}

impl ColorMode {
    pub fn for_color_count(colors: u16) -> Self {
        if colors == u16::MAX {
            ColorMode::TrueColor
        } else {
            ColorMode::Ansi
        }
    }
}

/// Number of colors the attached terminal advertises.
///
/// `TERM=dumb` is treated as monochrome.
pub fn detect_color_count() -> u16 {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return 0;
    }
    crossterm::style::available_color_count()
}

/// Fail with [`LifeError::UnsupportedTerminal`] when `colors` is too few.
pub fn ensure_color_support(colors: u16) -> Result<ColorMode, LifeError> {
    if colors < MIN_COLORS {
        return Err(LifeError::UnsupportedTerminal { colors });
    }
    Ok(ColorMode::for_color_count(colors))
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    mode: ColorMode,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            stdout: io::stdout(),
            mode,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers so
    /// the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, self.mode, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, self.mode, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, mode: ColorMode, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style, mode)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mode: ColorMode,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style, mode)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle, mode: ColorMode) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg, mode)))?;
    out.queue(SetBackgroundColor(to_color(style.bg, mode)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb, mode: ColorMode) -> Color {
    match mode {
        ColorMode::TrueColor => Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
        ColorMode::Ansi => {
            let luma = (rgb.r as u16 * 3 + rgb.g as u16 * 6 + rgb.b as u16) / 10;
            match luma {
                0..=63 => Color::Black,
                64..=159 => Color::DarkGrey,
                160..=239 => Color::Grey,
                _ => Color::White,
            }
        }
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn color_support_threshold() {
        assert_eq!(
            ensure_color_support(0),
            Err(LifeError::UnsupportedTerminal { colors: 0 })
        );
        assert_eq!(
            ensure_color_support(2),
            Err(LifeError::UnsupportedTerminal { colors: 2 })
        );
        assert_eq!(ensure_color_support(8), Ok(ColorMode::Ansi));
        assert_eq!(ensure_color_support(256), Ok(ColorMode::Ansi));
        assert_eq!(ensure_color_support(u16::MAX), Ok(ColorMode::TrueColor));
    }

    #[test]
    fn ansi_mode_keeps_live_cells_bright() {
        assert_eq!(to_color(CellStyle::LIVE.bg, ColorMode::Ansi), Color::White);
        assert_eq!(to_color(CellStyle::TEXT.bg, ColorMode::Ansi), Color::Black);
        assert_eq!(
            to_color(Rgb::new(1, 2, 3), ColorMode::TrueColor),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        for x in 1..=3 {
            b.set(x, 0, CellStyle::LIVE.into_cell(' '));
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let mut a = FrameBuffer::new(3, 2);
        a.set(
            0,
            0,
            Cell {
                ch: 'Z',
                style: CellStyle::TEXT,
            },
        );
        let b = a.clone();

        let mut out = Vec::new();
        encode_diff_into(&a, &b, ColorMode::Ansi, &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains('Z'));
    }

    #[test]
    fn full_encode_prints_every_row() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "ab", CellStyle::TEXT);
        fb.put_str(0, 1, "cd", CellStyle::TEXT);

        let mut out = Vec::new();
        encode_full_into(&fb, ColorMode::TrueColor, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ab"));
        assert!(text.contains("cd"));
    }
}
