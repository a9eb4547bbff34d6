//! Channel kinds.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::info;

use super::notification::{Notification, NotificationSink};
use crate::board::Board;

/// A notification channel.
///
/// Channels carry no state beyond their kind, so a `Channel` value is the
/// shared instance: every board and user holding `Channel::Email` refers to
/// the same channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Notify by email.
    Email,
    /// Notify by SMS.
    Sms,
    /// Notify by WhatsApp.
    WhatsApp,
}

impl Channel {
    /// Every channel kind.
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Sms, Channel::WhatsApp];

    /// Label shown in rendered notifications and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "EMAIL",
            Channel::Sms => "SMS",
            Channel::WhatsApp => "WhatsApp",
        }
    }

    /// Render the board's latest message for `recipient` and hand it to the sink.
    ///
    /// A board without a post renders an empty message.
    pub fn notify(&self, board: &Board, recipient: &str, sink: &mut dyn NotificationSink) {
        let notification = Notification {
            channel: *self,
            recipient: recipient.to_string(),
            board: board.name().to_string(),
            message: board.latest_message().unwrap_or_default().to_string(),
        };
        info!(
            "Notifying {} via {} about new message on {}",
            recipient,
            self,
            board.name()
        );
        sink.deliver(notification);
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            "whatsapp" => Ok(Channel::WhatsApp),
            _ => Err(format!("unknown channel: {s}")),
        }
    }
}
