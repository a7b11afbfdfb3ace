//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, session orchestration).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed character grid:
//!
//! - **Width**: 50 columns (indexed 0-49)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Ground**: row 19 is always drawn with [`GROUND_CHAR`]
//!
//! Sprites are anchored at their top-left cell. Both the dino and the cactus
//! stand on row 15 (`GRID_HEIGHT - 5`), so their four-row sprites end just above
//! the ground.
//!
//! # Physics Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | +1 | Velocity change per tick (cells/tick²) |
//! | `JUMP_IMPULSE` | -5 | Initial upward velocity of a jump |
//! | `DINO_COLUMN` | 2 | Fixed column of the dino sprite |
//! | `GROUND_REST_Y` | 15 | Row the dino rests on |
//!
//! # Timing Constants
//!
//! - `TICK_MS`: 100ms - update/render period
//! - `INPUT_POLL_MS`: 10ms - keyboard polling period
//!
//! # Examples
//!
//! ```
//! use tui_dino_types::{GRID_HEIGHT, GRID_WIDTH, GROUND_REST_Y};
//!
//! assert_eq!(GRID_WIDTH, 50);
//! assert_eq!(GRID_HEIGHT, 20);
//! assert_eq!(GROUND_REST_Y, 15);
//! ```

/// Grid width in cells (50 columns)
pub const GRID_WIDTH: u16 = 50;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u16 = 20;

/// Glyph drawn on every cell of the bottom row.
pub const GROUND_CHAR: char = '_';

/// Row index of the ground.
pub const GROUND_ROW: i16 = GRID_HEIGHT as i16 - 1;

/// Top row of the dino sprite while standing on the ground.
pub const GROUND_REST_Y: i16 = GRID_HEIGHT as i16 - 5;

/// Fixed column of the dino sprite's left edge.
pub const DINO_COLUMN: i16 = 2;

/// Top row of the cactus sprite.
pub const OBSTACLE_ROW: i16 = GRID_HEIGHT as i16 - 5;

/// Column the cactus spawns at, and wraps back to after leaving the grid.
pub const OBSTACLE_SPAWN_X: i16 = GRID_WIDTH as i16 - 1;

/// Downward acceleration, in cells per tick per tick.
pub const GRAVITY: i16 = 1;

/// Vertical velocity applied when a jump starts (negative is up).
pub const JUMP_IMPULSE: i16 = -5;

/// Update/render period in milliseconds.
pub const TICK_MS: u64 = 100;

/// Keyboard polling period in milliseconds.
pub const INPUT_POLL_MS: u64 = 10;

/// Pending jump requests buffered between the input sampler and the game loop.
pub const JUMP_QUEUE_CAPACITY: usize = 4;

/// Message printed once the session has ended.
pub const GAME_OVER_MESSAGE: &str = "Game Over!";


/// Actions produced by the keyboard and consumed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Start a jump (ignored while airborne)
    Jump,
    /// End the session early
    Quit,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The dino touched the cactus
    Collision,
    /// The player pressed a quit key
    QuitKey,
    /// The session was shut down from outside (e.g. SIGINT)
    Cancelled,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Collision => "collision",
            EndReason::QuitKey => "quit_key",
            EndReason::Cancelled => "cancelled",
        }
    }
}
