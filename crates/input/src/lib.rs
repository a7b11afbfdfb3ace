//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and exposes the
//! non-blocking [`KeySource`] abstraction polled by the session's input loop.

pub mod map;
pub mod source;

pub use tui_dino_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{poll_actions, CrosstermKeys, KeySource, ScriptedKeys, MAX_KEYS_PER_POLL};
