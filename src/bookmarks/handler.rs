//! HTTP handlers for the bookmarks collection and its items.

use axum::{
    Json, async_trait,
    extract::{FromRequestParts, OriginalUri, Path, State, rejection::JsonRejection},
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::Value as JsonValue;

use super::BookmarkStore;
use crate::api::{BookmarkPayload, BookmarkResponse, rating_value, supplied, text_value};
use crate::error::ApiError;
use crate::handler::AppState;
use crate::model::{Bookmark, BookmarkPatch, NewBookmark};

// ============================================================================
// Precondition fetch
// ============================================================================

/// The bookmark named by the `:id` path segment. Extraction fails with a 404
/// when no such bookmark exists, so item handlers only run against real records.
pub struct FoundBookmark(pub Bookmark);

#[async_trait]
impl FromRequestParts<AppState> for FoundBookmark {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bookmark_not_found())?;

        // Non-numeric ids can never match a row.
        let Ok(id) = raw_id.parse::<i64>() else {
            return Err(ApiError::bookmark_not_found());
        };

        let store = BookmarkStore::new(state.db.connection());
        store
            .get_by_id(id)
            .await?
            .map(FoundBookmark)
            .ok_or_else(ApiError::bookmark_not_found)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// A body sent without a JSON content type counts as an empty object.
fn payload_or_default(payload: Result<Json<BookmarkPayload>, JsonRejection>) -> Result<BookmarkPayload, ApiError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(BookmarkPayload::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

fn supplied_text(value: Option<JsonValue>) -> Option<String> {
    supplied(value).map(text_value)
}

fn validate_new(payload: BookmarkPayload) -> Result<NewBookmark, ApiError> {
    let title = supplied_text(payload.title).ok_or_else(|| ApiError::missing_field("title"))?;
    let url = supplied_text(payload.url).ok_or_else(|| ApiError::missing_field("url"))?;
    let rating = supplied(payload.rating).ok_or_else(|| ApiError::missing_field("rating"))?;

    let rating = match rating_value(&rating) {
        Some(n) if (0.0..=5.0).contains(&n) => n,
        _ => {
            tracing::error!("Invalid rating '{}' supplied", rating);
            return Err(ApiError::rating_out_of_range());
        }
    };

    Ok(NewBookmark {
        title,
        url,
        description: supplied_text(payload.description),
        rating,
    })
}

fn validate_patch(payload: BookmarkPayload) -> Result<BookmarkPatch, ApiError> {
    let rating = match supplied(payload.rating) {
        Some(input) => match rating_value(&input) {
            Some(n) if n.fract() == 0.0 && (0.0..=5.0).contains(&n) => Some(n),
            _ => {
                tracing::error!("Invalid rating '{}' supplied", input);
                return Err(ApiError::rating_out_of_range());
            }
        },
        None => None,
    };

    let patch = BookmarkPatch {
        title: supplied_text(payload.title),
        url: supplied_text(payload.url),
        description: supplied_text(payload.description),
        rating,
    };

    if patch.is_empty() {
        return Err(ApiError::empty_update());
    }
    Ok(patch)
}

// ============================================================================
// Collection Handlers
// ============================================================================

pub async fn list_bookmarks(State(state): State<AppState>) -> Result<Response, ApiError> {
    let store = BookmarkStore::new(state.db.connection());
    let bookmarks = store.list_all().await?;

    let body: Vec<BookmarkResponse> = bookmarks.iter().map(BookmarkResponse::from).collect();
    Ok((StatusCode::OK, Json(body)).into_response())
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<BookmarkPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = validate_new(payload_or_default(payload)?)?;

    let store = BookmarkStore::new(state.db.connection());
    let bookmark = store.insert(input).await?;
    tracing::info!("Bookmark with id {} created.", bookmark.id);

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookmarkResponse::from(&bookmark)),
    )
        .into_response())
}

// ============================================================================
// Item Handlers
// ============================================================================

pub async fn get_bookmark(FoundBookmark(bookmark): FoundBookmark) -> Response {
    (StatusCode::OK, Json(BookmarkResponse::from(&bookmark))).into_response()
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    FoundBookmark(bookmark): FoundBookmark,
) -> Result<Response, ApiError> {
    let store = BookmarkStore::new(state.db.connection());
    store.delete(bookmark.id).await?;
    tracing::info!("Bookmark with id {} deleted.", bookmark.id);

    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn update_bookmark(
    State(state): State<AppState>,
    FoundBookmark(bookmark): FoundBookmark,
    payload: Result<Json<BookmarkPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let patch = validate_patch(payload_or_default(payload)?)?;

    let store = BookmarkStore::new(state.db.connection());
    store.update(bookmark.id, patch).await?;
    tracing::info!("Bookmark with id {} updated.", bookmark.id);

    Ok(StatusCode::NO_CONTENT.into_response())
}
