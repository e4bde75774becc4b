//! In-memory user store
//!
//! An ordered sequence of users, kept in insertion order. The store does no
//! locking and enforces no uniqueness on its own: the [`crate::operations`]
//! functions perform the checks, and callers sharing a store across tasks
//! must hold one lock across a check and the write that follows it.

use crate::types::{User, UserId};

/// Ordered in-memory collection of users
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All users in insertion order
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Append a user at the end
    pub fn append(&mut self, user: User) {
        self.users.push(user);
    }

    /// Find a user by id
    pub fn find_by_id(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Find the first user matching `predicate`
    pub fn find_by<P>(&self, predicate: P) -> Option<&User>
    where
        P: FnMut(&&User) -> bool,
    {
        self.users.iter().find(predicate)
    }

    /// Index of the user with this id
    pub fn position(&self, id: &UserId) -> Option<usize> {
        self.users.iter().position(|u| &u.id == id)
    }

    /// Replace the user at `index`, returning the previous record
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace_at(&mut self, index: usize, user: User) -> User {
        std::mem::replace(&mut self.users[index], user)
    }

    /// Remove the user at `index`, shifting later users down
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> User {
        self.users.remove(index)
    }
}
