// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{category::CategoryMap, de::lenient_opt_i64};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: i64,

    /// The text content of the question.
    pub question: String,

    pub answer: String,

    /// Id of the category the question belongs to.
    /// Not enforced as a foreign key.
    pub category: i64,

    pub difficulty: i64,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Fields for creating a question.
/// Missing fields deserialize as `None` and are rejected by `validate`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(required)]
    #[serde(default)]
    pub question: Option<String>,

    #[validate(required)]
    #[serde(default)]
    pub answer: Option<String>,

    #[validate(required)]
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub category: Option<i64>,

    #[validate(required)]
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub difficulty: Option<i64>,
}

impl CreateQuestionRequest {
    /// Returns `None` when any field is absent.
    pub fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            category: self.category?,
            difficulty: self.difficulty?,
        })
    }
}

/// Body of `POST /questions`.
///
/// A non-empty `searchTerm` turns the request into a search; otherwise the
/// remaining fields describe a question to create.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,

    #[serde(flatten)]
    pub create: CreateQuestionRequest,
}

pub enum QuestionsPostAction {
    Search(String),
    Create(CreateQuestionRequest),
}

impl QuestionsPostBody {
    pub fn into_action(self) -> QuestionsPostAction {
        match self.search_term {
            Some(term) if !term.is_empty() => QuestionsPostAction::Search(term),
            _ => QuestionsPostAction::Create(self.create),
        }
    }
}

/// Response for `GET /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Label of category 1, whatever the page holds.
    pub current_category: String,
}

/// Response for a `searchTerm` post.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Category id of the first question on the page.
    pub current_category: i64,
}

/// Response for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count over all questions, not only the category.
    pub total_questions: i64,
    pub current_category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}
