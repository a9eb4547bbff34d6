//! msgboard - message board notifications
//!
//! Users subscribe to public or password-protected boards, pick a channel
//! per board (Email, SMS, WhatsApp) and are notified through it whenever a
//! message is posted.

pub mod board;
pub mod channel;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod user;

pub use board::{Admission, Board, BoardId, BoardKind, NewBoard, Post};
pub use channel::{Channel, ConsoleSink, Notification, NotificationSink};
pub use config::{BoardConfig, Config, LoggingConfig};
pub use error::{MsgBoardError, Result};
pub use user::{Directory, Subscription, User, UserId};
