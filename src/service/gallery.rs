use sea_orm::DatabaseConnection;

use crate::{data::gallery::GalleryRepository, error::AppError, model::gallery::GalleryParam};

/// Result of listing galleries.
///
/// `Unavailable` signals that the gallery collaborator is switched off for
/// this deployment. The caller decides what, if anything, to substitute; no
/// placeholder record lives at this layer.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryListing {
    Available(Vec<GalleryParam>),
    Unavailable,
}

/// Result of resolving a gallery's photos by slug.
///
/// "No such gallery" and "gallery with no photos" are distinct variants here.
/// The public router collapses them when serializing.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryPhotos {
    Found(Vec<String>),
    NotFound,
}

pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
    enabled: bool,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection, enabled: bool) -> Self {
        Self { db, enabled }
    }

    /// Lists every gallery, or reports the collaborator as unavailable.
    ///
    /// The availability check runs before any store access, so a disabled
    /// collaborator never reaches the database.
    pub async fn list(&self) -> Result<GalleryListing, AppError> {
        if !self.enabled {
            return Ok(GalleryListing::Unavailable);
        }

        let galleries = GalleryRepository::new(self.db).list_all().await?;

        Ok(GalleryListing::Available(galleries))
    }

    /// Resolves the photo list for the gallery with the given slug.
    pub async fn photos_by_slug(&self, slug: &str) -> Result<GalleryPhotos, AppError> {
        let gallery = GalleryRepository::new(self.db).find_by_slug(slug).await?;

        Ok(match gallery {
            Some(gallery) => GalleryPhotos::Found(gallery.photos),
            None => GalleryPhotos::NotFound,
        })
    }
}
