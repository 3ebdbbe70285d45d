// src/handlers/category.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::{
        category::{CategoriesResponse, category_map},
        question::CategoryQuestionsResponse,
    },
    store::SharedStore,
    utils::{
        extract::ApiPath,
        pagination::{Page, paginate},
    },
};

/// Lists every category as an `id -> label` map.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 404, description = "No categories exist")
    )
)]
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::from(e)
    })?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories".to_string()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// Lists one page of the questions in a category.
///
/// `total_questions` counts every question in the store, not only this category.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category id"),
        ("page" = Option<i64>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Questions of the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Page holds no questions"),
        (status = 422, description = "Unknown category")
    )
)]
pub async fn category_questions(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<i64>,
    page: Page,
) -> Result<impl IntoResponse, AppError> {
    let category = store
        .find_category(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch category {}: {:?}", id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::Unprocessable(format!("Category {} not found", id)))?;

    let collection = store.questions_in_category(id).await.map_err(|e| {
        tracing::error!("Failed to fetch questions of category {}: {:?}", id, e);
        AppError::from(e)
    })?;

    let questions = paginate(&collection, page);
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "Category {} has no questions on page {}",
            id, page.0
        )));
    }

    let total_questions = store.count_questions().await.map_err(|e| {
        tracing::error!("Failed to count questions: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category.category_type,
    }))
}
