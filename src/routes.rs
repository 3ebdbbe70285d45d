// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{category, docs, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the category, question and quiz routes plus the OpenAPI document.
/// * Unknown paths and wrong verbs answer with the JSON error envelope.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/categories", get(category::list_categories))
        .route(
            "/categories/{id}/questions",
            get(category::category_questions),
        )
        .route(
            "/questions",
            get(question::list_questions).post(question::post_questions),
        )
        .route("/questions/{id}", delete(question::delete_question))
        .route("/quizzes", post(quiz::next_question))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("No route".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
