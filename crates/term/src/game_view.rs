//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Cell priority, top to bottom:
//!
//! 1. the ground row is always [`GROUND_CHAR`]
//! 2. cells inside the dino's box show the dino frame, spaces included
//! 3. cells inside the cactus's box show the cactus
//! 4. everything else is blank
//!
//! The dino box is opaque: where it overlaps the cactus box the dino's spaces
//! hide the cactus. Collision uses transparent spaces; drawing does not.

use crate::core::{AnimatedSprite, GameSnapshot, Sprite, CACTUS, DINO};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{DINO_COLUMN, GRID_HEIGHT, GRID_WIDTH, GROUND_CHAR};

const GROUND_STYLE: CellStyle = CellStyle::fg(Rgb::new(190, 150, 90));
const DINO_STYLE: CellStyle = CellStyle::fg(Rgb::new(120, 220, 120)).bold();
const CACTUS_STYLE: CellStyle = CellStyle::fg(Rgb::new(60, 170, 60));

/// Renders the playfield at a fixed `GRID_WIDTH` x `GRID_HEIGHT`.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    dino: AnimatedSprite,
    cactus: Sprite,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DINO, CACTUS)
    }
}

impl GameView {
    pub fn new(dino: AnimatedSprite, cactus: Sprite) -> Self {
        Self { dino, cactus }
    }

    /// Render into an existing framebuffer, resizing it to the grid.
    ///
    /// Callers can keep one framebuffer across frames; this does not allocate
    /// once the buffer has the right size.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.resize(GRID_WIDTH, GRID_HEIGHT);

        let frame = self.dino.frame(snap.dino_frame);
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                fb.set(x, y, self.cell_at(snap, frame, x as i16, y as i16));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(GRID_WIDTH, GRID_HEIGHT);
        self.render_into(snap, &mut fb);
        fb
    }

    fn cell_at(&self, snap: &GameSnapshot, dino_frame: &Sprite, x: i16, y: i16) -> Cell {
        if y == GRID_HEIGHT as i16 - 1 {
            return Cell {
                ch: GROUND_CHAR,
                style: GROUND_STYLE,
            };
        }
        if let Some(ch) = dino_frame.glyph(x - DINO_COLUMN, y - snap.dino_y) {
            return Cell {
                ch,
                style: DINO_STYLE,
            };
        }
        if let Some(ch) = self.cactus.glyph(x - snap.obstacle_x, y - snap.obstacle_y) {
            return Cell {
                ch,
                style: CACTUS_STYLE,
            };
        }
        Cell::default()
    }
}
