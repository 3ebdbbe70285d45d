// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{de::lenient_i64, question::Question};
use crate::config::ALL_CATEGORIES_ID;

/// Category selector sent by the quiz client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// `0` selects every category.
    #[serde(deserialize_with = "lenient_i64")]
    #[schema(value_type = i64)]
    pub id: i64,
}

impl QuizCategory {
    /// The category to filter by, or `None` for all questions.
    pub fn filter(&self) -> Option<i64> {
        (self.id != ALL_CATEGORIES_ID).then_some(self.id)
    }
}

/// DTO for requesting the next quiz question.
/// Both fields are required; absent or `null` values deserialize as `None`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids of questions already served in this quiz.
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,

    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Response for `POST /quizzes`.
/// `question` is omitted once the pool is exhausted.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
