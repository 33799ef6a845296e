use chrono::{DateTime, Utc};
use entity::notification;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a notification timestamped now.
///
/// # Returns
/// - `Ok(Model)` - The inserted notification
/// - `Err(DbErr)` - Database error
pub async fn create_notification(
    db: &DatabaseConnection,
    title: &str,
) -> Result<notification::Model, DbErr> {
    create_notification_at(db, title, Utc::now()).await
}

/// Creates a notification with an explicit creation timestamp.
///
/// Used by tests that assert on the reverse-chronological feed and need
/// precise control over record ordering.
///
/// # Returns
/// - `Ok(Model)` - The inserted notification
/// - `Err(DbErr)` - Database error
pub async fn create_notification_at(
    db: &DatabaseConnection,
    title: &str,
    created_at: DateTime<Utc>,
) -> Result<notification::Model, DbErr> {
    notification::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        message: ActiveValue::Set(format!("{title} message")),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
