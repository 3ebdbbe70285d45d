// src/handlers/question.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::category_map,
        question::{
            CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionListResponse,
            QuestionsPostAction, QuestionsPostBody, SearchResponse,
        },
    },
    store::SharedStore,
    utils::{
        extract::{ApiJson, ApiPath},
        pagination::{Page, paginate},
    },
};

/// The listing always reports this category as the current one.
const LISTING_CATEGORY_ID: i64 = 1;

/// Lists one page of all questions, ordered by category.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(("page" = Option<i64>, Query, description = "1-based page number")),
    responses(
        (status = 200, description = "A page of questions", body = QuestionListResponse),
        (status = 404, description = "Page holds no questions"),
        (status = 422, description = "Category 1 is missing")
    )
)]
pub async fn list_questions(
    State(store): State<SharedStore>,
    page: Page,
) -> Result<impl IntoResponse, AppError> {
    let collection = store.list_questions().await.map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::from(e)
    })?;

    let questions = paginate(&collection, page);
    if questions.is_empty() {
        return Err(AppError::NotFound(format!("No questions on page {}", page.0)));
    }

    let categories = store.list_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::from(e)
    })?;
    let categories = category_map(categories);

    let current_category = categories
        .get(&LISTING_CATEGORY_ID)
        .cloned()
        .ok_or_else(|| {
            AppError::Unprocessable(format!("Category {} not found", LISTING_CATEGORY_ID))
        })?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions: collection.len() as i64,
        categories,
        current_category,
    }))
}

/// Searches questions when `searchTerm` is set, creates one otherwise.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    params(("page" = Option<i64>, Query, description = "1-based page of search results")),
    request_body = QuestionsPostBody,
    responses(
        (status = 200, description = "Search results; a creation answers with `CreatedResponse` instead", body = SearchResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "No match on the page, or the question could not be created")
    )
)]
pub async fn post_questions(
    State(store): State<SharedStore>,
    page: Page,
    ApiJson(payload): ApiJson<QuestionsPostBody>,
) -> Result<axum::response::Response, AppError> {
    match payload.into_action() {
        QuestionsPostAction::Search(term) => search_questions(&store, &term, page)
            .await
            .map(IntoResponse::into_response),
        QuestionsPostAction::Create(request) => create_question(&store, request)
            .await
            .map(IntoResponse::into_response),
    }
}

/// An empty result page is an error, not an empty list.
async fn search_questions(
    store: &SharedStore,
    term: &str,
    page: Page,
) -> Result<Json<SearchResponse>, AppError> {
    let matches = store.search_questions(term).await.map_err(|e| {
        tracing::error!("Failed to search questions for {:?}: {:?}", term, e);
        AppError::from(e)
    })?;

    let questions = paginate(&matches, page);
    let current_category = questions.first().map(|q| q.category).ok_or_else(|| {
        AppError::Unprocessable(format!("No match for {:?} on page {}", term, page.0))
    })?;

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions: matches.len() as i64,
        current_category,
    }))
}

async fn create_question(
    store: &SharedStore,
    request: CreateQuestionRequest,
) -> Result<Json<CreatedResponse>, AppError> {
    if let Err(validation_errors) = request.validate() {
        return Err(AppError::Unprocessable(validation_errors.to_string()));
    }

    let new_question = request
        .into_new_question()
        .ok_or_else(|| AppError::Unprocessable("Incomplete question".to_string()))?;

    let id = store.insert_question(new_question).await.map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("Created question {}", id);

    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

/// Deletes a question by ID.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 404, description = "Question not found"),
        (status = 422, description = "Question could not be deleted")
    )
)]
pub async fn delete_question(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = store.delete_question(id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::from(e)
    })?;

    if !deleted {
        return Err(AppError::NotFound(format!("Question {} not found", id)));
    }

    tracing::info!("Deleted question {}", id);

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}
