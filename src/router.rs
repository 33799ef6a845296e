use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    controller::{health, public},
    error::AppError,
    model::{api, gallery, notification},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        public::get_recent_notifications,
        public::list_galleries,
        public::get_gallery_photos,
        health::health,
    ),
    components(schemas(
        api::ErrorDto,
        api::HealthDto,
        gallery::GalleryDto,
        gallery::GalleryPlaceholderDto,
        gallery::PhotoListDto,
        notification::NotificationDto,
    )),
    tags(
        (name = "public", description = "Unauthenticated read endpoints"),
        (name = "health", description = "Operational status")
    )
)]
struct ApiDoc;

/// Unmatched routes answer with the same error envelope as handler failures.
async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn router(state: AppState, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route(
            "/api/public/notifications",
            get(public::get_recent_notifications),
        )
        .route("/api/public/gallery", get(public::list_galleries))
        .route("/api/public/gallery/{id}", get(public::get_gallery_photos))
        .route("/api/health", get(health::health))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
