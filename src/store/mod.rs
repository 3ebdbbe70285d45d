// src/store/mod.rs

//! Data access layer.
//!
//! Handlers talk to the database only through [`TriviaStore`], which keeps
//! them independent of the connection pool and lets tests swap in another
//! backend.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub mod postgres;

pub use postgres::PgStore;

/// Shared handle stored in the application state.
pub type SharedStore = Arc<dyn TriviaStore>;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error>;

    async fn find_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error>;

    /// All questions, ordered by category then id.
    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error>;

    async fn count_questions(&self) -> Result<i64, sqlx::Error>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error>;

    /// Questions of one category, ordered by id.
    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, sqlx::Error>;

    /// Inserts a question and returns its new id.
    async fn insert_question(&self, question: NewQuestion) -> Result<i64, sqlx::Error>;

    /// Returns `false` when no question has this id.
    async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error>;
}
