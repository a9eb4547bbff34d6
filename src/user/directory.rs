//! User directory.

use std::collections::HashMap;

use super::{User, UserId};
use crate::{MsgBoardError, Result};

/// Owns users and hands them out by ID.
///
/// Boards only store subscriber IDs; the directory is what they consult when
/// a message is posted.
#[derive(Debug, Default)]
pub struct Directory {
    users: HashMap<UserId, User>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user and return its ID.
    pub fn register(&mut self, user: User) -> UserId {
        let id = user.id();
        self.users.insert(id, user);
        id
    }

    /// Get a user by ID.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Get a mutable user by ID.
    pub fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Get a user by ID, failing if it was never registered.
    pub fn user(&self, id: UserId) -> Result<&User> {
        self.get(id).ok_or(MsgBoardError::UnknownUser(id))
    }

    /// Get a mutable user by ID, failing if it was never registered.
    pub fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.get_mut(id).ok_or(MsgBoardError::UnknownUser(id))
    }

    /// Get the number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
