//! The scrolling cactus.

use crate::types::{GRID_WIDTH, OBSTACLE_ROW, OBSTACLE_SPAWN_X};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    /// Left column of the sprite. Never negative after a tick.
    x: i16,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new()
    }
}

impl Obstacle {
    /// A cactus at the right edge of the grid.
    pub fn new() -> Self {
        Self {
            x: OBSTACLE_SPAWN_X,
        }
    }

    pub fn at(x: i16) -> Self {
        Self { x }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    /// Top row; fixed relative to the ground.
    pub fn y(&self) -> i16 {
        OBSTACLE_ROW
    }

    /// Scroll one column left, wrapping to the right edge past column 0.
    pub fn advance(&mut self) {
        self.x -= 1;
        if self.x < 0 {
            self.x = GRID_WIDTH as i16 - 1;
        }
    }
}
