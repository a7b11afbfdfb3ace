//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: clear, home the cursor, print all rows. The
//! grid is small enough that diffing would not pay for itself.

use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::Surface;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
    /// Printed again after leaving the alternate screen so it stays visible.
    farewell: Option<String>,
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
            buf: Vec::with_capacity(16 * 1024),
            active: false,
            farewell: None,
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    ///
    /// Fails fast when stdout is not an interactive terminal. Keys are read from
    /// the controlling tty, so stdin may be redirected.
    pub fn enter(&mut self) -> Result<()> {
        if !io::stdout().is_terminal() {
            bail!("tui-dino needs an interactive terminal: stdout is not a TTY");
        }

        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call when `enter` failed or was never called.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        if let Some(message) = self.farewell.take() {
            self.buf.queue(Print(message))?;
            self.buf.queue(Print("\r\n"))?;
        }
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl Surface for TerminalRenderer {
    fn present(&mut self, fb: &FrameBuffer) -> io::Result<()> {
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn finish(&mut self, message: &str) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(Print(message))?;
        self.flush_buf()?;
        self.farewell = Some(message.to_string());
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    #[test]
    fn full_frame_contains_every_row() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        for (i, ch) in "abcdef".chars().enumerate() {
            fb.set((i % 3) as u16, (i / 3) as u16, Cell { ch, style });
        }

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("abc\r\ndef"));
        // Single style: colours are emitted once, not per cell.
        assert_eq!(text.matches("38;2;").count(), 1);
    }

    #[test]
    fn style_switch_emits_new_colour() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(0, 0, 'a', CellStyle::fg(Rgb::new(1, 2, 3)));
        fb.put_char(1, 0, 'b', CellStyle::fg(Rgb::new(4, 5, 6)).bold());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("38;2;1;2;3"));
        assert!(text.contains("38;2;4;5;6"));
    }

    #[test]
    fn exit_without_enter_is_noop() {
        let mut term = TerminalRenderer::new();
        assert!(term.exit().is_ok());
    }
}
