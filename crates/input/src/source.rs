//! Non-blocking keyboard sources.
//!
//! The session only needs two operations from the keyboard: "is a key waiting?"
//! and "read it". [`KeySource`] captures exactly that so the input loop can run
//! against a real terminal or a scripted queue.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Most keys consumed per poll; the rest wait for the next poll.
pub const MAX_KEYS_PER_POLL: usize = 8;

pub trait KeySource: Send {
    /// Returns immediately; true when [`read_key`](Self::read_key) will not block.
    fn key_available(&mut self) -> io::Result<bool>;

    /// Read the next pending event. Non-key events yield `None`.
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Keyboard backed by crossterm's event queue.
///
/// Expects raw mode to be enabled by the caller.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn key_available(&mut self) -> io::Result<bool> {
        event::poll(Duration::ZERO)
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Pre-recorded key presses, drained in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    queue: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            queue: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl KeySource for ScriptedKeys {
    fn key_available(&mut self) -> io::Result<bool> {
        Ok(!self.queue.is_empty())
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.queue.pop_front())
    }
}

/// Drain pending keys without blocking and map them to actions.
///
/// Reads at most [`MAX_KEYS_PER_POLL`] events; unbound keys are dropped.
pub fn poll_actions<K>(keys: &mut K) -> io::Result<ArrayVec<GameAction, MAX_KEYS_PER_POLL>>
where
    K: KeySource + ?Sized,
{
    let mut actions = ArrayVec::new();
    for _ in 0..MAX_KEYS_PER_POLL {
        if !keys.key_available()? {
            break;
        }
        if let Some(action) = keys.read_key()?.and_then(handle_key_event) {
            actions.push(action);
        }
    }
    Ok(actions)
}
