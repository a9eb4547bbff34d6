//! The board itself: allowed channels, subscribers and the latest post.

use tracing::{info, warn};

use super::types::{Admission, BoardId, BoardKind, Post};
use crate::channel::{Channel, NotificationSink};
use crate::user::{Directory, User, UserId};
use crate::Result;

/// A message board that notifies its subscribers of every new post.
///
/// The board does not own its subscribers. It records their identifiers in
/// subscription order and resolves them through a [`Directory`] when a
/// message is posted.
#[derive(Debug)]
pub struct Board {
    id: BoardId,
    name: String,
    kind: BoardKind,
    post: Option<Post>,
    /// Allowed channels, in registration order.
    channels: Vec<Channel>,
    /// Every batch passed to `add_channels`, verbatim.
    batches: Vec<Vec<Channel>>,
    subscribers: Vec<UserId>,
}

impl Board {
    /// Create an empty board with no allowed channels.
    pub fn new(name: impl Into<String>, kind: BoardKind) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            kind,
            post: None,
            channels: Vec::new(),
            batches: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Get the board ID.
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Get the board name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the board kind.
    pub fn kind(&self) -> &BoardKind {
        &self.kind
    }

    /// Get the board password, if the board is private.
    pub fn password(&self) -> Option<&str> {
        match &self.kind {
            BoardKind::Public => None,
            BoardKind::Private { password } => Some(password),
        }
    }

    /// Whether subscribing requires a successful [`Board::authenticate`].
    pub fn requires_password(&self) -> bool {
        matches!(self.kind, BoardKind::Private { .. })
    }

    /// Get the latest post.
    pub fn latest_post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    /// Get the body of the latest post.
    pub fn latest_message(&self) -> Option<&str> {
        self.post.as_ref().map(|p| p.body.as_str())
    }

    /// Get the allowed channels.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Check if a channel is allowed on this board.
    pub fn accepts(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }

    /// Get the subscribers in subscription order.
    pub fn subscribers(&self) -> &[UserId] {
        &self.subscribers
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Check if a user is subscribed.
    pub fn is_subscriber(&self, user: UserId) -> bool {
        self.subscribers.contains(&user)
    }

    /// Register a batch of allowed channels.
    ///
    /// Returns false without changing anything if the exact same batch was
    /// registered before. Channels are not checked one by one: a channel
    /// already allowed through a different batch is accepted again.
    pub fn add_channels(&mut self, channels: &[Channel]) -> bool {
        if self.batches.iter().any(|batch| batch == channels) {
            for channel in channels {
                warn!("Failed to add channel {} to {}", channel, self.name);
            }
            return false;
        }

        self.batches.push(channels.to_vec());
        for &channel in channels {
            if !self.channels.contains(&channel) {
                self.channels.push(channel);
            }
            info!("Channel {} has been added to {}", channel, self.name);
        }
        true
    }

    /// Ask the board to admit `user` with the requested channel.
    ///
    /// No password check happens here; private boards expect the caller to
    /// have run [`Board::authenticate`] first.
    pub fn admit(&mut self, user: &User, channel: Channel) -> Admission {
        if !self.accepts(channel) {
            warn!(
                "User {}: channel {} is not available on {}",
                user.name(),
                channel,
                self.name
            );
            return Admission::ChannelUnavailable;
        }

        if self.is_subscriber(user.id()) {
            warn!("User {} is already subscribed to {}", user.name(), self.name);
            return Admission::AlreadySubscribed;
        }

        self.subscribers.push(user.id());
        info!(
            "User {} has subscribed to {} board {}",
            user.name(),
            self.kind,
            self.name
        );
        Admission::Admitted
    }

    /// Add a subscriber.
    ///
    /// Returns true if the user was added, false if the channel is not
    /// allowed or the user is already subscribed.
    pub fn add(&mut self, user: &User, channel: Channel) -> bool {
        self.admit(user, channel).is_admitted()
    }

    /// Remove a subscriber.
    ///
    /// Returns true if the user was removed, false if not subscribed.
    pub fn remove(&mut self, user: &User) -> bool {
        match self.subscribers.iter().position(|id| *id == user.id()) {
            Some(index) => {
                self.subscribers.remove(index);
                info!("User {} has unsubscribed from {}", user.name(), self.name);
                true
            }
            None => {
                warn!("Failed to remove {} from {}", user.name(), self.name);
                false
            }
        }
    }

    /// Check a user's password against the board password.
    ///
    /// The comparison is exact and case-sensitive. Public boards accept
    /// everyone.
    pub fn authenticate(&self, user: &User) -> bool {
        let Some(password) = self.password() else {
            return true;
        };

        if user.password() == password {
            info!(
                "User {} authenticated on {} board {}",
                user.name(),
                self.kind,
                self.name
            );
            true
        } else {
            warn!(
                "User {}: wrong password for {} board {}",
                user.name(),
                self.kind,
                self.name
            );
            false
        }
    }

    /// Notify every subscriber, in subscription order, through the channel
    /// each of them picked.
    ///
    /// Returns the number of notifications rendered.
    pub fn notify(&self, directory: &Directory, sink: &mut dyn NotificationSink) -> Result<usize> {
        info!(
            "{}: notifying {} subscriber(s) about new message",
            self.name,
            self.subscribers.len()
        );
        for id in &self.subscribers {
            directory.user(*id)?.notify(self, sink)?;
        }
        Ok(self.subscribers.len())
    }

    /// Post a new message and notify every subscriber.
    ///
    /// Returns the number of notifications rendered.
    pub fn post(
        &mut self,
        message: impl Into<String>,
        directory: &Directory,
        sink: &mut dyn NotificationSink,
    ) -> Result<usize> {
        let post = Post::new(message);
        info!(
            "New message has been posted to {} at {}: {}",
            self.name,
            post.posted_at.format("%Y-%m-%d %H:%M:%S UTC"),
            post.body
        );
        self.post = Some(post);
        self.notify(directory, sink)
    }
}
