use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        gallery::{GalleryDto, GalleryPlaceholderDto, PhotoListDto},
        notification::NotificationDto,
    },
    service::{
        gallery::{GalleryListing, GalleryPhotos, GalleryService},
        notification::NotificationService,
    },
    state::AppState,
};

/// Tag for grouping public endpoints in OpenAPI documentation
pub static PUBLIC_TAG: &str = "public";

/// Get the most recent notifications.
///
/// Returns the 20 newest notifications ordered by creation timestamp
/// descending. This is a fixed-window feed; no pagination is supported.
/// Publicly accessible without authentication.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Notifications, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/notifications",
    tag = PUBLIC_TAG,
    responses(
        (status = 200, description = "Most recent notifications, newest first", body = Vec<NotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let notifications = NotificationService::new(&state.db).recent().await?;

    let dtos: Vec<NotificationDto> = notifications
        .into_iter()
        .map(|notification| notification.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List all galleries.
///
/// Returns every gallery record in store-default order. When the gallery
/// collaborator is not configured, the listing degrades to a single fixed
/// placeholder record instead of failing. Publicly accessible without
/// authentication.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Galleries, or the single-element placeholder array
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/gallery",
    tag = PUBLIC_TAG,
    responses(
        (status = 200, description = "All galleries, or the placeholder record when the gallery collaborator is unavailable", body = Vec<GalleryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_galleries(State(state): State<AppState>) -> Result<Response, AppError> {
    let listing = GalleryService::new(&state.db, state.gallery_enabled)
        .list()
        .await?;

    // The placeholder substitution happens here, at the presentation
    // boundary; the service only reports availability.
    let response = match listing {
        GalleryListing::Available(galleries) => {
            let dtos: Vec<GalleryDto> = galleries
                .into_iter()
                .map(|gallery| gallery.into_dto())
                .collect();

            (StatusCode::OK, Json(dtos)).into_response()
        }
        GalleryListing::Unavailable => (
            StatusCode::OK,
            Json(vec![GalleryPlaceholderDto::teachers_day()]),
        )
            .into_response(),
    };

    Ok(response)
}

/// Get the photos of a gallery by its slug.
///
/// Looks up the gallery whose slug equals the path identifier and returns
/// its ordered photo list. Publicly accessible without authentication.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Gallery slug from the request path
///
/// # Returns
/// - `200 OK` - Photo list; empty when the gallery is missing or has none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/gallery/{id}",
    tag = PUBLIC_TAG,
    params(
        ("id" = String, Path, description = "Gallery slug")
    ),
    responses(
        (status = 200, description = "Ordered photo list for the gallery", body = PhotoListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery_photos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let result = GalleryService::new(&state.db, state.gallery_enabled)
        .photos_by_slug(&id)
        .await?;

    // A missing gallery serializes the same as one with zero photos; the
    // frontend treats both as "nothing to show".
    let photos = match result {
        GalleryPhotos::Found(photos) => photos,
        GalleryPhotos::NotFound => Vec::new(),
    };

    Ok((StatusCode::OK, Json(PhotoListDto { photos })))
}
