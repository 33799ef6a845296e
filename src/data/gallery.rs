use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::gallery::{CreateGalleryParam, GalleryParam};

pub struct GalleryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every gallery in store-default order (no explicit sort)
    ///
    /// # Returns
    /// - `Ok(Vec<GalleryParam>)`: All gallery records
    /// - `Err(DbErr)`: Database error
    pub async fn list_all(&self) -> Result<Vec<GalleryParam>, DbErr> {
        let galleries = entity::prelude::Gallery::find().all(self.db).await?;

        Ok(galleries
            .into_iter()
            .map(GalleryParam::from_entity)
            .collect())
    }

    /// Gets the gallery whose slug exactly equals the input
    ///
    /// Slugs are unique, so at most one record can match.
    ///
    /// # Returns
    /// - `Ok(Some(GalleryParam))`: The matching gallery
    /// - `Ok(None)`: No gallery has this slug
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<GalleryParam>, DbErr> {
        let gallery = entity::prelude::Gallery::find()
            .filter(entity::gallery::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(gallery.map(GalleryParam::from_entity))
    }

    /// Creates a new gallery record, timestamping it on insert
    ///
    /// The store rejects a duplicate slug through the unique constraint.
    ///
    /// # Returns
    /// - `Ok(GalleryParam)`: The created gallery
    /// - `Err(DbErr)`: Database error, including slug uniqueness violations
    pub async fn create(&self, params: CreateGalleryParam) -> Result<GalleryParam, DbErr> {
        let now = Utc::now();

        let gallery = entity::gallery::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            cover: ActiveValue::Set(params.cover),
            photos: ActiveValue::Set(entity::gallery::PhotoList(params.photos)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GalleryParam::from_entity(gallery))
    }
}
