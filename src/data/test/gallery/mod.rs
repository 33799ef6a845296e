use crate::{data::gallery::GalleryRepository, model::gallery::CreateGalleryParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_slug;
mod list_all;
