//! Sprite module - immutable ASCII bitmaps
//!
//! A sprite is a rectangle of printable ASCII characters stored as its text rows.
//! A space is transparent: it occupies the bounding box but never counts as a
//! pixel for collision purposes.
//!
//! Sprites borrow `'static` row data so the built-in sheets can be `const` and
//! validated at compile time.

use thiserror::Error;

/// Upper bound for sprite width/height in cells.
pub const MAX_SPRITE_DIM: usize = 64;

/// Errors produced when validating sprite rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpriteError {
    #[error("sprite has no rows or an empty first row")]
    Empty,
    #[error("sprite row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("sprite row {row} contains a non-printable or non-ASCII character")]
    NotPrintable { row: usize },
    #[error("sprite exceeds the maximum size")]
    TooLarge,
    #[error("animation has no frames")]
    NoFrames,
    #[error("animation frame {frame} does not match the size of frame 0")]
    FrameSizeMismatch { frame: usize },
}

/// A rectangular text bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    rows: &'static [&'static str],
    width: u16,
    height: u16,
}

impl Sprite {
    /// Build a sprite, panicking on malformed rows.
    ///
    /// Intended for `const` items, where the panic becomes a compile error.
    pub const fn new(rows: &'static [&'static str]) -> Self {
        match Self::try_new(rows) {
            Ok(sprite) => sprite,
            Err(_) => panic!("sprite rows must be non-empty, printable ASCII and equally wide"),
        }
    }

    /// Build a sprite, validating that rows are rectangular printable ASCII.
    pub const fn try_new(rows: &'static [&'static str]) -> Result<Self, SpriteError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(SpriteError::Empty);
        }
        let width = rows[0].len();
        if width > MAX_SPRITE_DIM || rows.len() > MAX_SPRITE_DIM {
            return Err(SpriteError::TooLarge);
        }

        let mut row = 0;
        while row < rows.len() {
            let bytes = rows[row].as_bytes();
            if bytes.len() != width {
                return Err(SpriteError::Ragged {
                    row,
                    expected: width,
                    found: bytes.len(),
                });
            }
            let mut i = 0;
            while i < bytes.len() {
                // Printable ASCII only: space (0x20) through tilde (0x7e).
                if bytes[i] < b' ' || bytes[i] > b'~' {
                    return Err(SpriteError::NotPrintable { row });
                }
                i += 1;
            }
            row += 1;
        }

        Ok(Self {
            rows,
            width: width as u16,
            height: rows.len() as u16,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Glyph at local offset `(dx, dy)`, or `None` outside the bounding box.
    #[inline]
    pub fn glyph(&self, dx: i16, dy: i16) -> Option<char> {
        if dx < 0 || dy < 0 || dx as u16 >= self.width || dy as u16 >= self.height {
            return None;
        }
        Some(self.rows[dy as usize].as_bytes()[dx as usize] as char)
    }

    /// True when `(dx, dy)` is inside the box and not transparent.
    #[inline]
    pub fn is_solid(&self, dx: i16, dy: i16) -> bool {
        matches!(self.glyph(dx, dy), Some(ch) if ch != ' ')
    }
}

/// A non-empty cycle of equally sized sprite frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatedSprite {
    frames: &'static [Sprite],
}

impl AnimatedSprite {
    pub const fn new(frames: &'static [Sprite]) -> Self {
        match Self::try_new(frames) {
            Ok(anim) => anim,
            Err(_) => panic!("animation frames must be non-empty and equally sized"),
        }
    }

    pub const fn try_new(frames: &'static [Sprite]) -> Result<Self, SpriteError> {
        if frames.is_empty() {
            return Err(SpriteError::NoFrames);
        }
        let mut i = 1;
        while i < frames.len() {
            if frames[i].width != frames[0].width || frames[i].height != frames[0].height {
                return Err(SpriteError::FrameSizeMismatch { frame: i });
            }
            i += 1;
        }
        Ok(Self { frames })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame `index`, wrapping around the cycle.
    pub fn frame(&self, index: usize) -> &Sprite {
        &self.frames[index % self.frames.len()]
    }

    pub fn width(&self) -> u16 {
        self.frames[0].width
    }

    pub fn height(&self) -> u16 {
        self.frames[0].height
    }
}

/// Dino running animation (two leg positions).
pub const DINO_FRAMES: [Sprite; 2] = [
    Sprite::new(&["  __ ", " / _)", "/ /  ", "\\_\\  "]),
    Sprite::new(&["  __ ", " / _)", "/ /  ", "/_/  "]),
];

pub const DINO: AnimatedSprite = AnimatedSprite::new(&DINO_FRAMES);

pub const CACTUS: Sprite = Sprite::new(&[" __ ", "|  |", "|  |", "|__|"]);
