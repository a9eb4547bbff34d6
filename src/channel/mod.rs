//! Notification channels for msgboard.
//!
//! This module provides:
//! - The closed set of channels a subscriber can pick (Email, SMS, WhatsApp)
//! - Rendered notifications and the sinks that receive them

mod kind;
mod notification;

pub use kind::Channel;
pub use notification::{ConsoleSink, Notification, NotificationSink};
