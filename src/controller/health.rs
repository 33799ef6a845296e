use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{model::api::HealthDto, state::AppState};

/// Tag for grouping operational endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report server and database status.
///
/// # Returns
/// - `200 OK` - Status payload with a live database ping result
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server status", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.ping().await {
        Ok(()) => "Connected",
        Err(_) => "Disconnected",
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            status: "Server is running!".to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
