//! Users and their channel preferences.

use std::collections::HashMap;
use std::fmt;

use tracing::info;
use uuid::Uuid;

use crate::board::{Admission, Board, BoardId};
use crate::channel::{Channel, NotificationSink};
use crate::{MsgBoardError, Result};

/// Stable user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of [`User::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    /// The board admitted the user.
    Subscribed,
    /// The requested channel is not allowed on the board.
    ChannelUnavailable,
    /// The user was already subscribed; the stored channel is unchanged.
    AlreadySubscribed,
    /// The private board rejected the user's password.
    AuthenticationFailed,
}

impl Subscription {
    /// Whether the subscription went through.
    pub fn is_subscribed(&self) -> bool {
        matches!(self, Subscription::Subscribed)
    }
}

impl From<Admission> for Subscription {
    fn from(admission: Admission) -> Self {
        match admission {
            Admission::Admitted => Subscription::Subscribed,
            Admission::ChannelUnavailable => Subscription::ChannelUnavailable,
            Admission::AlreadySubscribed => Subscription::AlreadySubscribed,
        }
    }
}

/// A user who subscribes to boards.
///
/// A user holds a channel for a board exactly when that board lists the user
/// as a subscriber.
#[derive(Debug)]
pub struct User {
    id: UserId,
    name: String,
    password: String,
    boards: HashMap<BoardId, Channel>,
}

impl User {
    /// Create a user with no subscriptions.
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            password: password.into(),
            boards: HashMap::new(),
        }
    }

    /// Get the user ID.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Get the user name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the password presented to private boards.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Get the channel selected for a board.
    pub fn channel_for(&self, board: BoardId) -> Option<Channel> {
        self.boards.get(&board).copied()
    }

    /// Check if the user is subscribed to a board.
    pub fn is_subscribed(&self, board: BoardId) -> bool {
        self.boards.contains_key(&board)
    }

    /// Iterate over subscribed boards and their channels, in no particular order.
    pub fn boards(&self) -> impl Iterator<Item = (BoardId, Channel)> + '_ {
        self.boards.iter().map(|(board, channel)| (*board, *channel))
    }

    /// Subscribe to a board, to be notified through `channel`.
    ///
    /// Private boards authenticate the user first. The preference is only
    /// recorded once the board has admitted the user, so a rejected
    /// subscription leaves the user untouched.
    pub fn subscribe(&mut self, board: &mut Board, channel: Channel) -> Subscription {
        if board.requires_password() && !board.authenticate(self) {
            return Subscription::AuthenticationFailed;
        }

        let admission = board.admit(self, channel);
        if admission.is_admitted() {
            self.boards.insert(board.id(), channel);
        }
        admission.into()
    }

    /// Unsubscribe from a board.
    ///
    /// Fails with [`MsgBoardError::NotSubscribed`] if the user never
    /// subscribed to the board, or if the board no longer lists the user.
    /// In the latter case the stored channel is kept.
    pub fn unsubscribe(&mut self, board: &mut Board) -> Result<()> {
        if !self.is_subscribed(board.id()) || !board.remove(self) {
            return Err(self.not_subscribed(board));
        }

        self.boards.remove(&board.id());
        Ok(())
    }

    /// Switch the channel used for a board.
    ///
    /// No availability or password check is repeated. Returns the previous
    /// channel.
    pub fn update(&mut self, board: &Board, channel: Channel) -> Result<Channel> {
        let Some(old) = self.channel_for(board.id()) else {
            return Err(self.not_subscribed(board));
        };

        self.boards.insert(board.id(), channel);
        info!(
            "User {} has changed notification channel for {} from {} to {}",
            self.name,
            board.name(),
            old,
            channel
        );
        Ok(old)
    }

    /// Receive a notification for a board through the stored channel.
    pub fn notify(&self, board: &Board, sink: &mut dyn NotificationSink) -> Result<()> {
        let channel = self
            .channel_for(board.id())
            .ok_or_else(|| self.not_subscribed(board))?;
        channel.notify(board, &self.name, sink);
        Ok(())
    }

    fn not_subscribed(&self, board: &Board) -> MsgBoardError {
        MsgBoardError::NotSubscribed {
            user: self.name.clone(),
            board: board.id(),
        }
    }
}
