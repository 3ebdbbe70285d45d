// src/handlers/quiz.rs

use std::collections::HashSet;

use axum::{Json, extract::State, response::IntoResponse};
use rand::{Rng, seq::SliceRandom};

use crate::{
    error::AppError,
    models::{
        question::Question,
        quiz::{QuizRequest, QuizResponse},
    },
    store::SharedStore,
    utils::extract::ApiJson,
};

/// Picks a question from `pool` that is not in `previous`, uniformly at random.
///
/// Returns `None` once every question of the pool has been served.
/// Ids in `previous` that are not part of the pool are ignored.
pub fn select_question<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    let served: HashSet<i64> = previous.iter().copied().collect();
    let unused: Vec<&Question> = pool.iter().filter(|q| !served.contains(&q.id)).collect();

    unused.choose(rng).copied()
}

/// Serves the next quiz question.
///
/// * Pool is every question for category `0`, otherwise the category's questions.
/// * Never repeats a question from `previous_questions`.
/// * Omits `question` when the pool is exhausted.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or none when exhausted", body = QuizResponse),
        (status = 400, description = "previous_questions or quiz_category missing")
    )
)]
pub async fn next_question(
    State(store): State<SharedStore>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(previous), Some(category)) = (req.previous_questions, req.quiz_category) else {
        return Err(AppError::BadRequest("Missing quiz fields".to_string()));
    };

    let pool = match category.filter() {
        Some(category_id) => store.questions_in_category(category_id).await,
        None => store.list_questions().await,
    }
    .map_err(|e| {
        tracing::error!("Failed to fetch quiz pool: {:?}", e);
        AppError::from(e)
    })?;

    let question = select_question(&pool, &previous, &mut rand::thread_rng()).cloned();

    if question.is_none() {
        tracing::debug!(
            "Quiz pool exhausted for category {} after {} questions",
            category.id,
            previous.len()
        );
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
