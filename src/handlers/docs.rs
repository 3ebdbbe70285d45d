// src/handlers/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::{
    handlers::{category, question, quiz},
    models::{
        category::{CategoriesResponse, Category},
        question::{
            CategoryQuestionsResponse, CreateQuestionRequest, CreatedResponse, DeletedResponse,
            Question, QuestionListResponse, QuestionsPostBody, SearchResponse,
        },
        quiz::{QuizCategory, QuizRequest, QuizResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Trivia API", description = "Trivia questions, categories and quizzes."),
    paths(
        category::list_categories,
        category::category_questions,
        question::list_questions,
        question::post_questions,
        question::delete_question,
        quiz::next_question,
    ),
    components(schemas(
        Category,
        CategoriesResponse,
        Question,
        CreateQuestionRequest,
        QuestionsPostBody,
        QuestionListResponse,
        SearchResponse,
        CategoryQuestionsResponse,
        CreatedResponse,
        DeletedResponse,
        QuizCategory,
        QuizRequest,
        QuizResponse,
    )),
    tags(
        (name = "categories", description = "Category listing and filtering"),
        (name = "questions", description = "Question listing, search, creation and deletion"),
        (name = "quizzes", description = "Quiz play")
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
