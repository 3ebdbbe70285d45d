// src/utils/pagination.rs

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::config::QUESTIONS_PER_PAGE;

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<String>,
}

/// 1-based page number taken from the `page` query parameter.
///
/// Absent or non-integer values fall back to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Page {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<PageParams>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.page)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(Page)
            .unwrap_or_default();
        Ok(page)
    }
}

/// Returns the items of `page`, at most `QUESTIONS_PER_PAGE` of them.
///
/// Pages below 1 and pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    if page.0 < 1 {
        return Vec::new();
    }
    let Ok(index) = usize::try_from(page.0 - 1) else {
        return Vec::new();
    };
    let start = index.saturating_mul(QUESTIONS_PER_PAGE);

    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}
