//! Context read path — the only seam toward the persistence layer.
//!
//! The core treats the library database as an external collaborator: the
//! handler resolves a read-only snapshot through this trait before each
//! turn. Persistence itself lives elsewhere; an in-memory implementation
//! covers tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::prompt::context::{CurrentBook, UserContext};
use crate::utilities::errors::CompanionError;

/// Read path for per-user context snapshots.
#[async_trait]
pub trait ContextStore: Send + Sync {
    /// Fetch the full context snapshot for a user. Unknown users get an
    /// empty snapshot, not an error.
    async fn user_context(&self, user_id: &str) -> Result<UserContext, CompanionError>;

    /// Fetch the book currently open in the UI, if the id resolves.
    async fn current_book(
        &self,
        user_id: &str,
        book_id: &str,
    ) -> Result<Option<CurrentBook>, CompanionError>;
}

/// In-memory store for tests and local development.
#[derive(Default)]
pub struct InMemoryContextStore {
    contexts: RwLock<HashMap<String, UserContext>>,
    books: RwLock<HashMap<(String, String), CurrentBook>>,
}

impl InMemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_context(&self, user_id: impl Into<String>, context: UserContext) {
        self.contexts
            .write()
            .expect("context lock poisoned")
            .insert(user_id.into(), context);
    }

    pub fn insert_book(
        &self,
        user_id: impl Into<String>,
        book_id: impl Into<String>,
        book: CurrentBook,
    ) {
        self.books
            .write()
            .expect("book lock poisoned")
            .insert((user_id.into(), book_id.into()), book);
    }
}

#[async_trait]
impl ContextStore for InMemoryContextStore {
    async fn user_context(&self, user_id: &str) -> Result<UserContext, CompanionError> {
        let contexts = self.contexts.read().map_err(|_| CompanionError::Context {
            message: "context lock poisoned".into(),
        })?;
        Ok(contexts.get(user_id).cloned().unwrap_or_default())
    }

    async fn current_book(
        &self,
        user_id: &str,
        book_id: &str,
    ) -> Result<Option<CurrentBook>, CompanionError> {
        let books = self.books.read().map_err(|_| CompanionError::Context {
            message: "book lock poisoned".into(),
        })?;
        Ok(books.get(&(user_id.to_string(), book_id.to_string())).cloned())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_user_gets_empty_snapshot() {
        let store = InMemoryContextStore::new();
        let context = store.user_context("nobody").await.unwrap();
        assert!(context.check_ins.is_empty());
        assert!(context.books.is_empty());
    }

    #[tokio::test]
    async fn test_inserted_book_resolves() {
        let store = InMemoryContextStore::new();
        store.insert_book(
            "u1",
            "b1",
            CurrentBook {
                title: "Dune".into(),
                author: None,
                progress_percent: Some(40),
            },
        );

        let book = store.current_book("u1", "b1").await.unwrap();
        assert_eq!(book.unwrap().title, "Dune");
        assert!(store.current_book("u1", "b2").await.unwrap().is_none());
    }
}
