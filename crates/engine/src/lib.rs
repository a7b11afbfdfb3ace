//! Game engine - runs one play session against a keyboard and a screen.
//!
//! A [`Session`] moves through **Idle → Running → Ended**:
//!
//! - [`Session::run`] spawns the input sampler (polls every ~10ms) and drives the
//!   update/render loop (every ~100ms) on the calling task.
//! - The session ends on collision, on a quit key, or when the caller's
//!   [`Shutdown`] is triggered. The first loop to stop triggers shutdown for the
//!   other.
//! - Once ended the screen is cleared and `"Game Over!"` is printed. Sessions
//!   are single-use.
//!
//! Keyboard and screen are traits ([`KeySource`](crate::input::KeySource),
//! [`Surface`](crate::term::Surface)), so sessions can run headless:
//!
//! ```
//! use tui_dino_engine::{Session, Shutdown};
//! use tui_dino_engine::input::ScriptedKeys;
//! use tui_dino_engine::term::RecordingSurface;
//! use tui_dino_engine::types::EndReason;
//!
//! let rt = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .start_paused(true)
//!     .build()
//!     .unwrap();
//!
//! let mut session = Session::new(ScriptedKeys::default(), RecordingSurface::new());
//! let outcome = rt.block_on(session.run(Shutdown::new())).unwrap();
//!
//! // Nobody jumped, so the cactus eventually hits the dino.
//! assert_eq!(outcome.reason, EndReason::Collision);
//! assert_eq!(session.surface().message(), Some("Game Over!"));
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod shutdown;

pub use tui_dino_core as core;
pub use tui_dino_input as input;
pub use tui_dino_term as term;
pub use tui_dino_types as types;

pub use config::SessionConfig;
pub use error::SessionError;
pub use session::{Phase, Session, SessionOutcome};
pub use shutdown::Shutdown;
