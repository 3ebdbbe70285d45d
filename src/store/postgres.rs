// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::TriviaStore;
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY category, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_term() {
        assert_eq!(like_pattern("boxer"), "%boxer%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }
}
