use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub database: String,
    pub timestamp: String,
}
