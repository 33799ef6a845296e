use chrono::Utc;
use entity::gallery::{self, PhotoList};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a gallery with default values and the given slug.
///
/// # Returns
/// - `Ok(Model)` - The inserted gallery
/// - `Err(DbErr)` - Database error (including unique slug violations)
pub async fn create_gallery(db: &DatabaseConnection, slug: &str) -> Result<gallery::Model, DbErr> {
    create_gallery_with_photos(db, slug, Vec::new()).await
}

/// Creates a gallery with the given slug and photo list.
///
/// The title is derived from the slug and the cover points at a conventional
/// upload path, so tests only need to vary what they assert on.
///
/// # Returns
/// - `Ok(Model)` - The inserted gallery
/// - `Err(DbErr)` - Database error (including unique slug violations)
pub async fn create_gallery_with_photos(
    db: &DatabaseConnection,
    slug: &str,
    photos: Vec<String>,
) -> Result<gallery::Model, DbErr> {
    let now = Utc::now();

    gallery::ActiveModel {
        title: ActiveValue::Set(format!("Gallery {slug}")),
        slug: ActiveValue::Set(slug.to_string()),
        cover: ActiveValue::Set(Some(format!("/uploads/gallery/{slug}.jpg"))),
        photos: ActiveValue::Set(PhotoList(photos)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
