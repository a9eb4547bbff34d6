//! User module for msgboard.
//!
//! This module provides the observer side of the notification relationship:
//! - Users and their per-board channel preferences
//! - Subscribe, unsubscribe and preference updates
//! - A directory resolving user IDs for boards being notified

mod directory;
mod types;

pub use directory::Directory;
pub use types::{Subscription, User, UserId};
