//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to any
//! [`Surface`]: the real terminal, or an in-memory recorder.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure ([`GameView`]) and I/O thin ([`TerminalRenderer`])

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tui_dino_core as core;
pub use tui_dino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_full_into, TerminalRenderer};
pub use surface::{RecordingSurface, Surface};
