//! Gallery fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::gallery::{self, PhotoList};

/// Default test gallery title.
pub const DEFAULT_TITLE: &str = "Sports Day 2025";

/// Default test gallery slug.
pub const DEFAULT_SLUG: &str = "sports-day-2025";

/// Default test gallery cover path.
pub const DEFAULT_COVER: &str = "/uploads/gallery/sports-day-2025.jpg";

/// Creates a gallery entity model with default values.
///
/// This function creates an in-memory gallery entity without inserting into
/// the database. Use this for unit tests and mocking repository responses.
///
/// # Default Values
/// - id: `1`
/// - title: `"Sports Day 2025"`
/// - slug: `"sports-day-2025"`
/// - cover: `Some("/uploads/gallery/sports-day-2025.jpg")`
/// - photos: two image paths
///
/// # Returns
/// - `gallery::Model` - In-memory gallery entity
pub fn entity() -> gallery::Model {
    let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    gallery::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        slug: DEFAULT_SLUG.to_string(),
        cover: Some(DEFAULT_COVER.to_string()),
        photos: PhotoList(vec![
            "/uploads/gallery/sd1.jpg".to_string(),
            "/uploads/gallery/sd2.jpg".to_string(),
        ]),
        created_at,
        updated_at: created_at,
    }
}
