//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database and a session backed by an in-memory store.

use std::sync::Arc;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, StatementBuilder};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_user_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// test.user().insert_mock_user(1).await?;
/// test.favorite().insert_favorite(1, FavoriteType::Planet, 1).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for tests reading or writing the session user
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main holocron crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new test context with an empty database & session.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Execute schema statements such as CREATE TABLE & CREATE INDEX.
    ///
    /// # Returns
    /// - `Ok(())` - All statements executed successfully
    /// - `Err(TestError::DbErr)` - A statement failed
    pub(crate) async fn execute_all<S: StatementBuilder>(
        &self,
        stmts: Vec<S>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
