// src/models/category.rs

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct Category {
    pub id: i64,

    /// Display label (e.g., "Science").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// `id -> label` mapping, ordered by id.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

/// Response for `GET /categories`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}
