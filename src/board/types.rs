//! Board identity, variants and builders.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Board;
use crate::channel::Channel;

/// Stable board identifier.
///
/// Users key their channel preferences by this identifier, so two boards
/// that share a display name never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardId(Uuid);

impl BoardId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardKind {
    /// Anyone may subscribe.
    #[default]
    Public,
    /// Subscribers must present the board password.
    Private {
        /// Password compared verbatim against the user's password.
        password: String,
    },
}

impl BoardKind {
    /// Convert board kind to its string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardKind::Public => "public",
            BoardKind::Private { .. } => "private",
        }
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message posted to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Message body.
    pub body: String,
    /// When the message was posted.
    pub posted_at: DateTime<Utc>,
}

impl Post {
    /// Create a post stamped with the current time.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            posted_at: Utc::now(),
        }
    }
}

/// Outcome of asking a board to admit a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The user was appended to the subscriber list.
    Admitted,
    /// The requested channel is not allowed on the board.
    ChannelUnavailable,
    /// The user is already a subscriber.
    AlreadySubscribed,
}

impl Admission {
    /// Whether the user is now a subscriber because of this request.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

/// Data for creating a new board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Board name.
    pub name: String,
    /// Board kind (defaults to Public).
    pub kind: BoardKind,
    /// Channels registered as a single batch on creation.
    pub channels: Vec<Channel>,
}

impl NewBoard {
    /// Describe a public board.
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BoardKind::Public,
            channels: Vec::new(),
        }
    }

    /// Describe a private board guarded by `password`.
    pub fn private(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BoardKind::Private {
                password: password.into(),
            },
            channels: Vec::new(),
        }
    }

    /// Set the channels to register on creation.
    pub fn with_channels(mut self, channels: &[Channel]) -> Self {
        self.channels = channels.to_vec();
        self
    }

    /// Create the board.
    pub fn build(self) -> Board {
        let mut board = Board::new(self.name, self.kind);
        if !self.channels.is_empty() {
            board.add_channels(&self.channels);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_id_unique() {
        assert_ne!(BoardId::new(), BoardId::new());
    }

    #[test]
    fn test_board_kind_as_str() {
        assert_eq!(BoardKind::Public.as_str(), "public");
        let private = BoardKind::Private {
            password: "Admin".to_string(),
        };
        assert_eq!(private.to_string(), "private");
    }

    #[test]
    fn test_board_kind_default() {
        assert_eq!(BoardKind::default(), BoardKind::Public);
    }

    #[test]
    fn test_post_new() {
        let before = Utc::now();
        let post = Post::new("First Post!!!");
        assert_eq!(post.body, "First Post!!!");
        assert!(post.posted_at >= before);
    }

    #[test]
    fn test_admission_is_admitted() {
        assert!(Admission::Admitted.is_admitted());
        assert!(!Admission::ChannelUnavailable.is_admitted());
        assert!(!Admission::AlreadySubscribed.is_admitted());
    }

    #[test]
    fn test_new_board_public_builder() {
        let board = NewBoard::public("Public Board")
            .with_channels(&[Channel::Email, Channel::Sms])
            .build();

        assert_eq!(board.name(), "Public Board");
        assert_eq!(board.kind(), &BoardKind::Public);
        assert_eq!(board.channels(), &[Channel::Email, Channel::Sms]);
        assert!(board.latest_post().is_none());
    }

    #[test]
    fn test_new_board_private_builder() {
        let board = NewBoard::private("Private Board", "Admin").build();

        assert!(board.requires_password());
        assert_eq!(board.password(), Some("Admin"));
        assert!(board.channels().is_empty());
    }
}
