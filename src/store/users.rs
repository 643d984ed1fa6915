use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;

use crate::models::User;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("email already registered")]
    AlreadyExists,
}

/// Read/write interface to the user directory, keyed by email.
///
/// The in-memory implementation below is the only one shipped; a deployment
/// backed by a real database would implement this trait instead.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Store a new user. Fails if the email key is already taken; under
    /// concurrent duplicate registration exactly one caller wins.
    async fn insert(&self, user: User) -> Result<User, UserStoreError>;

    async fn find_by_email(&self, email: &str) -> Option<User>;

    async fn count(&self) -> usize;
}

/// Thread-safe in-memory directory. Email comparison is case-sensitive.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<DashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, UserStoreError> {
        // Entry API makes the existence check and the write one atomic step
        match self.users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(UserStoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.get(email).map(|entry| entry.value().clone())
    }

    async fn count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(email: &str) -> User {
        User::new("Test User".to_string(), email.to_string(), "$argon2$x".to_string())
    }

    #[tokio::test]
    async fn test_insert_then_lookup() {
        let store = InMemoryUserStore::new();
        store.insert(make_user("a@example.com")).await.unwrap();

        let found = store.find_by_email("a@example.com").await.unwrap();
        assert_eq!(found.email, "a@example.com");
        assert_eq!(found.plan, "basic");
    }

    #[tokio::test]
    async fn test_duplicate_email_does_not_overwrite() {
        let store = InMemoryUserStore::new();
        let first = store.insert(make_user("a@example.com")).await.unwrap();

        let result = store.insert(make_user("a@example.com")).await;
        assert_eq!(result.unwrap_err(), UserStoreError::AlreadyExists);

        let kept = store.find_by_email("a@example.com").await.unwrap();
        assert_eq!(kept.id, first.id);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let store = InMemoryUserStore::new();
        store.insert(make_user("a@example.com")).await.unwrap();
        assert!(store.find_by_email("A@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_registration_single_winner() {
        let store = InMemoryUserStore::new();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(make_user("race@example.com")).await
            }));
        }

        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(store.count().await, 1);
    }
}
