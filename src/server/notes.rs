//! Notes endpoint handler
//!
//! Thin HTTP wrapper over the in-process [`crate::notes::list_notes`]
//! call; query parameter names follow the wire shape of the mocked
//! service (`maxResults`, `query`).

use crate::notes::{self, ListNotesRequest, ListNotesResponse};
use crate::server::{ApiError, AppState};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use metrics::increment_counter;
use serde::Deserialize;

/// Query string of `GET /notes`
#[derive(Debug, Default, Deserialize)]
pub struct ListNotesParams {
    /// Result cap; must be a positive integer when present
    #[serde(rename = "maxResults")]
    pub max_results: Option<u32>,
    /// Case-insensitive substring filter
    pub query: Option<String>,
}

/// GET /notes - run the notes query
///
/// Responds 200 with `{ notes, totalCount }`, or 400 when `maxResults` is
/// non-positive or not an integer.
pub async fn list_notes(
    State(state): State<AppState>,
    params: Result<Query<ListNotesParams>, QueryRejection>,
) -> Result<Json<ListNotesResponse>, ApiError> {
    let Query(params) = params?;
    let request = ListNotesRequest {
        max_results: params.max_results,
        query: params.query,
    };

    let response = notes::list_notes(state.notes.as_ref(), request).await?;
    increment_counter!("triad_notes_queries_total");
    tracing::debug!(
        total_count = response.total_count,
        returned = response.notes.len(),
        "answered notes query"
    );

    Ok(Json(response))
}
