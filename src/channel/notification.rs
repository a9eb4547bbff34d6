//! Rendered notifications and their destinations.

use super::Channel;

/// A single notification rendered by a channel for one subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Channel the notification went through.
    pub channel: Channel,
    /// Name of the receiving user.
    pub recipient: String,
    /// Name of the board the message was posted to.
    pub board: String,
    /// The posted message.
    pub message: String,
}

impl Notification {
    /// Format the notification as a single console line.
    pub fn render(&self) -> String {
        format!(
            "[{}] {} <- {}: {}",
            self.channel.label(),
            self.recipient,
            self.board,
            self.message
        )
    }
}

/// Destination for rendered notifications.
pub trait NotificationSink {
    /// Accept one rendered notification.
    fn deliver(&mut self, notification: Notification);
}

/// Sink that prints each notification on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn deliver(&mut self, notification: Notification) {
        println!("{}", notification.render());
    }
}

/// Recording sink, mostly useful in tests.
impl NotificationSink for Vec<Notification> {
    fn deliver(&mut self, notification: Notification) {
        self.push(notification);
    }
}
