//! Board module for msgboard.
//!
//! This module provides the subject side of the notification relationship:
//! - Public boards with open subscription
//! - Private boards gated by a password check
//! - Allowed-channel registration and subscriber admission
//! - Posting a message, which notifies every subscriber

mod message_board;
mod types;

pub use message_board::Board;
pub use types::{Admission, BoardId, BoardKind, NewBoard, Post};
