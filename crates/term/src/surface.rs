//! Output surfaces the session draws on.

use std::io;

use crate::fb::FrameBuffer;

/// A "clear and print" text surface.
pub trait Surface: Send {
    /// Clear the screen and print every row of `fb`.
    fn present(&mut self, fb: &FrameBuffer) -> io::Result<()>;

    /// Clear the screen and print the end-of-session message.
    fn finish(&mut self, message: &str) -> io::Result<()>;
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn present(&mut self, fb: &FrameBuffer) -> io::Result<()> {
        (**self).present(fb)
    }

    fn finish(&mut self, message: &str) -> io::Result<()> {
        (**self).finish(message)
    }
}

/// In-memory surface that keeps every presented frame as text.
///
/// Useful for headless runs and for asserting on what would have been drawn.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    frames: Vec<Vec<String>>,
    message: Option<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, fb: &FrameBuffer) -> io::Result<()> {
        self.frames.push(fb.lines());
        Ok(())
    }

    fn finish(&mut self, message: &str) -> io::Result<()> {
        self.message = Some(message.to_string());
        Ok(())
    }
}
