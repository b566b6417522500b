use thiserror::Error;

use crate::ledger::friend::{Friend, FriendId};

/// Reasons a friend is refused by the registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("friend name must not be empty")]
    EmptyName,

    #[error("a friend with id '{0}' already exists")]
    DuplicateId(FriendId),
}

/// Owns the friend collection. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from seed data, which is trusted as-is.
    pub fn with_friends(friends: Vec<Friend>) -> Self {
        Self { friends }
    }

    /// Appends a friend. Existing entries are never touched.
    pub fn add(&mut self, friend: Friend) -> Result<(), RegistryError> {
        if friend.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.get(&friend.id).is_some() {
            return Err(RegistryError::DuplicateId(friend.id));
        }
        self.friends.push(friend);
        Ok(())
    }

    /// Adds `delta` to the balance of the friend with `id`.
    ///
    /// Returns `false` and changes nothing when no friend matches.
    pub fn adjust_balance(&mut self, id: &FriendId, delta: f64) -> bool {
        match self.friends.iter_mut().find(|friend| &friend.id == id) {
            Some(friend) => {
                friend.balance += delta;
                true
            }
            None => false,
        }
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| &friend.id == id)
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
