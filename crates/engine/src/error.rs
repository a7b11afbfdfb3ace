use std::io;

use thiserror::Error;
use tokio::task::JoinError;

/// Errors that end a session abnormally.
///
/// A collision is not an error; it is reported as
/// [`EndReason::Collision`](crate::types::EndReason::Collision).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input task failed: {0}")]
    TaskFailed(#[from] JoinError),
    #[error("session already ran; create a new session to play again")]
    AlreadyStarted,
}
