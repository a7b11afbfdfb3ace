//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals, async runtimes, or I/O, making it:
//!
//! - **Deterministic**: The same sequence of jump requests and ticks always
//!   produces the same game
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`sprite`]: ASCII bitmaps, the dino animation and the cactus
//! - [`dino`]: Player row, velocity and jump physics
//! - [`obstacle`]: The scrolling cactus and its wrap-around
//! - [`collision`]: Glyph-on-glyph overlap test between positioned sprites
//! - [`game_state`]: The per-tick update tying everything together
//! - [`snapshot`]: Copyable view of the state for renderers
//!
//! # Game Rules
//!
//! - **Fixed tick**: Every update advances the animation, the jump, and the cactus
//! - **Discrete parabola**: `y += vy; vy += GRAVITY` while airborne, snapping
//!   exactly onto the rest row when landing
//! - **No double jump**: Jump requests while airborne are ignored
//! - **Endless scroll**: One cactus moves a column left per tick and wraps to the
//!   right edge
//! - **Terminal collision**: The first glyph-on-glyph overlap ends the game
//!
//! # Example
//!
//! ```
//! use tui_dino_core::GameState;
//! use tui_dino_types::GROUND_REST_Y;
//!
//! let mut game = GameState::new();
//! assert!(game.request_jump());
//!
//! // The jump lands on the 11th tick.
//! for _ in 0..11 {
//!     game.update();
//! }
//! assert_eq!(game.dino().y(), GROUND_REST_Y);
//! assert!(!game.dino().is_jumping());
//! assert!(game.running());
//! ```

pub mod collision;
pub mod dino;
pub mod game_state;
pub mod obstacle;
pub mod snapshot;
pub mod sprite;

pub use tui_dino_types as types;

// Re-export commonly used types for convenience
pub use collision::{check_collision, sprites_overlap};
pub use dino::Dino;
pub use game_state::GameState;
pub use obstacle::Obstacle;
pub use snapshot::GameSnapshot;
pub use sprite::{AnimatedSprite, Sprite, SpriteError, CACTUS, DINO};
