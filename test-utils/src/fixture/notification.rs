//! Notification fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::notification;

/// Default test notification title.
pub const DEFAULT_TITLE: &str = "Term dates published";

/// Default test notification message.
pub const DEFAULT_MESSAGE: &str = "The term calendar is now available.";

/// Creates a notification entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Term dates published"`
/// - message: `"The term calendar is now available."`
///
/// # Returns
/// - `notification::Model` - In-memory notification entity
pub fn entity() -> notification::Model {
    notification::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        message: DEFAULT_MESSAGE.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}
