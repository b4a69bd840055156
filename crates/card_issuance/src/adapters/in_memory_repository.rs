// Rust guideline compliant 2026-10-16

//! In-memory adapter for the `Repository` port.
//!
//! Intended for dry runs and tests. Not thread-safe: state lives behind
//! `RefCell`, so the adapter is `!Sync` and cannot be shared across threads.
//! `PersistError::Unavailable` is part of the port contract but never
//! returned here.

use std::cell::RefCell;

use domain::{Card, PersistError, Repository, User};

/// `Repository` adapter backed by two in-memory vectors.
///
/// With a capacity set, each vector holds at most `capacity` records and
/// further writes return [`PersistError::CapacityExceeded`].
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    users: RefCell<Vec<User>>,
    cards: RefCell<Vec<Card>>,
    capacity: Option<usize>,
}

impl InMemoryRepository {
    /// Create an empty, unbounded repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository holding at most `capacity` users and `capacity` cards.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self { capacity: Some(capacity), ..Self::default() }
    }

    /// Snapshot of the stored users, in write order.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    /// Snapshot of the stored cards, in write order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.borrow().clone()
    }

    fn check_room(&self, len: usize) -> Result<(), PersistError> {
        match self.capacity {
            Some(capacity) if len >= capacity => Err(PersistError::CapacityExceeded { capacity }),
            _ => Ok(()),
        }
    }
}

impl Repository for InMemoryRepository {
    /// # Errors
    ///
    /// Returns [`PersistError::CapacityExceeded`] when the user list is full.
    fn save_user(&self, user: &User) -> Result<(), PersistError> {
        let mut users = self.users.borrow_mut();
        self.check_room(users.len())?;
        users.push(user.clone());
        tracing::info!(user_id = %user.id, email = %user.email, "memory_repository.user.saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PersistError::CapacityExceeded`] when the card list is full.
    fn save_card(&self, card: &Card) -> Result<(), PersistError> {
        let mut cards = self.cards.borrow_mut();
        self.check_room(cards.len())?;
        cards.push(card.clone());
        tracing::info!(card_number = %card.number, fee = card.fee, "memory_repository.card.saved");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
