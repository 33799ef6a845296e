//! Gallery DTOs and domain parameter types.
//!
//! The gallery listing can serve two shapes: full `GalleryDto` records read
//! from the store, or a single `GalleryPlaceholderDto` when the gallery
//! collaborator is unavailable. The placeholder lives here, at the
//! serialization boundary, so the data layer never embeds business records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GalleryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub cover: Option<String>,
    pub photos: Vec<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

/// Placeholder record served by the public listing when the gallery
/// collaborator is switched off for a deployment.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GalleryPlaceholderDto {
    pub id: String,
    pub title: String,
    pub cover: String,
    pub count: u32,
}

impl GalleryPlaceholderDto {
    /// The fixed record the frontend expects while no gallery content exists.
    pub fn teachers_day() -> Self {
        Self {
            id: "teachers-day-2024".to_string(),
            title: "Teachers Day 2024".to_string(),
            cover: "/uploads/gallery/td1.jpg".to_string(),
            count: 12,
        }
    }
}

/// Wire shape of `GET /api/public/gallery/{id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PhotoListDto {
    pub photos: Vec<String>,
}

/// Represents a gallery with full data from the database.
///
/// This is the primary model returned by repository methods. Photo order is
/// insertion order as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryParam {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub cover: Option<String>,
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryParam {
    /// Converts an entity model to a gallery param.
    ///
    /// This conversion happens at the data layer boundary so entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::gallery::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            cover: entity.cover,
            photos: entity.photos.0,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the gallery param to a DTO for API responses.
    pub fn into_dto(self) -> GalleryDto {
        GalleryDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            cover: self.cover,
            photos: self.photos,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new gallery record.
#[derive(Debug, Clone)]
pub struct CreateGalleryParam {
    pub title: String,
    pub slug: String,
    pub cover: Option<String>,
    pub photos: Vec<String>,
}
