//! Error types for msgboard.

use thiserror::Error;

use crate::board::BoardId;
use crate::user::UserId;

/// Common error type for msgboard.
///
/// Only inconsistent-state lookups end up here. Rejected subscriptions and
/// failed password checks are ordinary outcomes and are returned as values.
#[derive(Error, Debug)]
pub enum MsgBoardError {
    /// The user holds no channel for the board.
    ///
    /// Raised by unsubscribe, update and notify when the user never
    /// successfully subscribed to the board.
    #[error("user {user} is not subscribed to board {board}")]
    NotSubscribed {
        /// Name of the user.
        user: String,
        /// Identifier of the board.
        board: BoardId,
    },

    /// A board lists a subscriber the directory does not know about.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for msgboard operations.
pub type Result<T> = std::result::Result<T, MsgBoardError>;
