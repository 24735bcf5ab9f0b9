//! Media route handlers.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Serve an uploaded product image from the media store.
#[instrument(skip(state))]
pub async fn serve(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let image = state
        .media()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("media {id}")))?;

    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes))
}
