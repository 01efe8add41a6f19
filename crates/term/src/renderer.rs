//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are encoded into an in-memory byte buffer first and written in one
//! go. After the first frame only changed horizontal spans are re-emitted.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

/// A horizontal run of cells that differ between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal to its original state.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next frame to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Present a frame, diffing against the last one shown.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.prev.as_ref(), fb, &mut self.buf)?;
        self.flush()?;
        match self.prev.as_mut() {
            Some(prev) => prev.clone_from(fb),
            None => self.prev = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .and_then(|_| self.stdout.flush())
            .context("write frame to terminal")
    }
}

/// Encode `next` into `out` as crossterm commands.
///
/// Without a comparable previous frame (none, or different size) the whole
/// screen is cleared and redrawn.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let spans = match prev {
        Some(p) if p.width() == next.width() && p.height() == next.height() => dirty_spans(p, next),
        _ => {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            (0..next.height())
                .map(|y| Span {
                    x: 0,
                    y,
                    len: next.width(),
                })
                .collect()
        }
    };

    let mut active: Option<CellStyle> = None;
    for span in spans {
        out.queue(cursor::MoveTo(span.x, span.y))?;
        for x in span.x..span.x + span.len {
            let Some(cell) = next.get(x, span.y) else {
                continue;
            };
            if active != Some(cell.style) {
                queue_style(out, cell.style)?;
                active = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Changed spans between two equally sized frames, row by row.
pub fn dirty_spans(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Span> {
    let w = next.width() as usize;
    let mut spans = Vec::new();
    if w == 0 {
        return spans;
    }

    for (y, (a, b)) in prev
        .cells()
        .chunks(w)
        .zip(next.cells().chunks(w))
        .enumerate()
    {
        let mut start: Option<usize> = None;
        for x in 0..=w {
            let differs = x < w && a[x] != b[x];
            match (start, differs) {
                (None, true) => start = Some(x),
                (Some(s), false) => {
                    spans.push(Span {
                        x: s as u16,
                        y: y as u16,
                        len: (x - s) as u16,
                    });
                    start = None;
                }
                _ => {}
            }
        }
    }
    spans
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(term_color(style.fg)))?;
    out.queue(SetBackgroundColor(term_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn mark(fb: &mut FrameBuffer, xs: &[u16], y: u16) {
        for &x in xs {
            fb.set(x, y, Cell::new('X', CellStyle::default()));
        }
    }

    #[test]
    fn dirty_spans_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        mark(&mut b, &[1, 2, 3], 0);
        mark(&mut b, &[5], 1);

        assert_eq!(
            dirty_spans(&a, &b),
            vec![Span { x: 1, y: 0, len: 3 }, Span { x: 5, y: 1, len: 1 }]
        );
    }

    #[test]
    fn identical_frames_have_no_spans() {
        let a = FrameBuffer::new(4, 4);
        assert!(dirty_spans(&a, &a.clone()).is_empty());
    }

    #[test]
    fn style_only_change_is_dirty() {
        let a = FrameBuffer::new(3, 1);
        let mut b = a.clone();
        b.set(2, 0, Cell::new(' ', CellStyle::default().with_bg(Rgb::new(1, 1, 1))));
        assert_eq!(dirty_spans(&a, &b), vec![Span { x: 2, y: 0, len: 1 }]);
    }

    #[test]
    fn diff_encoding_is_smaller_than_full() {
        let a = FrameBuffer::new(40, 10);
        let mut b = a.clone();
        mark(&mut b, &[3], 4);

        let mut full = Vec::new();
        encode_frame(None, &b, &mut full).unwrap();
        let mut diff = Vec::new();
        encode_frame(Some(&a), &b, &mut diff).unwrap();

        assert!(!diff.is_empty());
        assert!(diff.len() < full.len());
        assert!(String::from_utf8_lossy(&diff).contains('X'));
    }

    #[test]
    fn term_color_maps_components() {
        assert_eq!(
            term_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
