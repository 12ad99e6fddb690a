//! Series CRUD and patch handlers.
//!
//! Each handler is one store call; no business validation happens here.
//! Episode counts and rankings are unbounded and never checked against
//! each other. Malformed JSON bodies of any kind collapse to a plain 400.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::{debug, info};

use crate::models::{Message, Series, SeriesDraft, SeriesId, StatusUpdate};
use crate::{handle_store_error, series_not_found, AppState};

type ApiError = (StatusCode, String);

/// Collapse every JSON extraction failure (syntax, wrong shape, missing
/// content type) into a 400 with a plain-text body
fn decode_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    })
}

/// `GET /api/series` — all series, possibly an empty array
pub async fn list_series(State(state): State<AppState>) -> Result<Json<Vec<Series>>, ApiError> {
    debug!("Listing all series");
    let series = state.store.list().await.map_err(handle_store_error)?;
    Ok(Json(series))
}

/// `GET /api/series/{id}`
pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<SeriesId>,
) -> Result<Json<Series>, ApiError> {
    debug!("Getting series {}", id);
    match state.store.get(id).await.map_err(handle_store_error)? {
        Some(series) => Ok(Json(series)),
        None => Err(series_not_found(id)),
    }
}

/// `POST /api/series` — insert and echo back with the assigned id
pub async fn create_series(
    State(state): State<AppState>,
    body: Result<Json<SeriesDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Series>), ApiError> {
    let draft = decode_body(body)?;
    let series = state.store.create(draft).await.map_err(handle_store_error)?;
    info!("Created series {} ({})", series.id, series.title);
    Ok((StatusCode::CREATED, Json(series)))
}

/// `PUT /api/series/{id}` — overwrite all mutable fields.
///
/// Echoes the submitted fields back with a 200 whether or not the id
/// matched a row. MySQL reports changed rows rather than matched rows,
/// so a rows-affected 404 here would misfire on idempotent replaces.
pub async fn replace_series(
    State(state): State<AppState>,
    Path(id): Path<SeriesId>,
    body: Result<Json<SeriesDraft>, JsonRejection>,
) -> Result<Json<Series>, ApiError> {
    let draft = decode_body(body)?;
    let series = state
        .store
        .replace(id, draft)
        .await
        .map_err(handle_store_error)?;
    info!("Replaced series {}", id);
    Ok(Json(series))
}

/// `DELETE /api/series/{id}` — 204 on success, 404 when nothing matched
pub async fn delete_series(
    State(state): State<AppState>,
    Path(id): Path<SeriesId>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id).await.map_err(handle_store_error)? {
        info!("Deleted series {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(series_not_found(id))
    }
}

/// `PATCH /api/series/{id}/episode` — bump the watch progress by one
pub async fn advance_episode(
    State(state): State<AppState>,
    Path(id): Path<SeriesId>,
) -> Result<Json<Message>, ApiError> {
    if state
        .store
        .advance_episode(id)
        .await
        .map_err(handle_store_error)?
    {
        Ok(Json(Message::new("Episode count incremented")))
    } else {
        Err(series_not_found(id))
    }
}

/// `PATCH /api/series/{id}/status` — set the free-text watch status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<SeriesId>,
    body: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let update = decode_body(body)?;
    if state
        .store
        .set_status(id, &update.status)
        .await
        .map_err(handle_store_error)?
    {
        Ok(Json(Message::new("Status updated")))
    } else {
        Err(series_not_found(id))
    }
}

/// `PATCH /api/series/{id}/upvote`
pub async fn upvote_series(
    State(state): State<AppState>,
    Path(id): Path<SeriesId>,
) -> Result<Json<Message>, ApiError> {
    if state
        .store
        .adjust_ranking(id, 1)
        .await
        .map_err(handle_store_error)?
    {
        Ok(Json(Message::new("Series upvoted")))
    } else {
        Err(series_not_found(id))
    }
}

/// `PATCH /api/series/{id}/downvote`
pub async fn downvote_series(
    State(state): State<AppState>,
    Path(id): Path<SeriesId>,
) -> Result<Json<Message>, ApiError> {
    if state
        .store
        .adjust_ranking(id, -1)
        .await
        .map_err(handle_store_error)?
    {
        Ok(Json(Message::new("Series downvoted")))
    } else {
        Err(series_not_found(id))
    }
}
