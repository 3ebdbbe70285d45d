// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::ServiceExt;
use trivia_api::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    routes,
    state::AppState,
    store::TriviaStore,
};

/// In-memory store with the same ordering rules as the Postgres one.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    fail_writes: AtomicBool,
}

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                categories,
                questions,
                next_id,
            }),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every insert and delete fail as a broken connection would.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn question_ids(&self) -> Vec<i64> {
        self.inner.lock().unwrap().questions.iter().map(|q| q.id).collect()
    }

    fn check_writes(&self) -> Result<(), sqlx::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol("connection reset".to_string()));
        }
        Ok(())
    }

    fn sorted_by_id(mut questions: Vec<Question>) -> Vec<Question> {
        questions.sort_by_key(|q| q.id);
        questions
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        let mut categories = self.inner.lock().unwrap().categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        let mut questions = self.inner.lock().unwrap().questions.clone();
        questions.sort_by_key(|q| (q.category, q.id));
        Ok(questions)
    }

    async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        Ok(self.inner.lock().unwrap().questions.len() as i64)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let inner = self.inner.lock().unwrap();
        let matches = inner
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(Self::sorted_by_id(matches))
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        let matches = inner
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect();
        Ok(Self::sorted_by_id(matches))
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i64, sqlx::Error> {
        self.check_writes()?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.questions.push(Question {
            id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        });
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        self.check_writes()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.questions.len();
        inner.questions.retain(|q| q.id != id);
        Ok(inner.questions.len() < before)
    }
}

pub fn categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .iter()
        .enumerate()
        .map(|(i, label)| Category {
            id: i as i64 + 1,
            category_type: label.to_string(),
        })
        .collect()
}

pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("Answer {}", id),
        category,
        difficulty: 1 + id % 5,
    }
}

/// `count` questions spread round-robin over categories 1..=6.
pub fn questions(count: i64) -> Vec<Question> {
    (1..=count)
        .map(|id| question(id, &format!("Question number {}", id), (id - 1) % 6 + 1))
        .collect()
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    let state = AppState { store };
    routes::create_router(state)
}

/// Sends one request and returns the status with the parsed JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };

    (status, json)
}
