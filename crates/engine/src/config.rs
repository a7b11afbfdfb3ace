//! Session timing configuration.

use std::time::Duration;

use crate::types::{INPUT_POLL_MS, JUMP_QUEUE_CAPACITY, TICK_MS};

/// Timing knobs for a [`Session`](crate::Session).
///
/// Defaults come from the constants in `tui-dino-types`; tests shrink or keep
/// them as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Update/render period.
    pub tick: Duration,
    /// Keyboard polling period.
    pub input_poll: Duration,
    /// Jump requests buffered between the input task and the game loop.
    pub jump_queue: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            input_poll: Duration::from_millis(INPUT_POLL_MS),
            jump_queue: JUMP_QUEUE_CAPACITY,
        }
    }
}
