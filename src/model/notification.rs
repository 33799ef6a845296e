use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub title: String,
    pub message: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// Represents a notification with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationParam {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NotificationParam {
    /// Converts an entity model to a notification param.
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    /// Converts the notification param to a DTO for API responses.
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new notification record.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub title: String,
    pub message: String,
}
