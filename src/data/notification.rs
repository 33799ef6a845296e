use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::model::notification::{CreateNotificationParam, NotificationParam};

/// Size of the fixed window returned by the public feed. No pagination
/// cursor or offset is supported.
pub const RECENT_NOTIFICATION_LIMIT: u64 = 20;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent notifications, newest first
    ///
    /// Orders by creation timestamp descending and truncates to the 20 most
    /// recent records.
    ///
    /// # Returns
    /// - `Ok(Vec<NotificationParam>)`: Up to 20 notifications, newest first
    /// - `Err(DbErr)`: Database error
    pub async fn list_recent(&self) -> Result<Vec<NotificationParam>, DbErr> {
        let notifications = entity::prelude::Notification::find()
            .order_by_desc(entity::notification::Column::CreatedAt)
            .limit(RECENT_NOTIFICATION_LIMIT)
            .all(self.db)
            .await?;

        Ok(notifications
            .into_iter()
            .map(NotificationParam::from_entity)
            .collect())
    }

    /// Creates a new notification record stamped with the current time
    ///
    /// # Returns
    /// - `Ok(NotificationParam)`: The created notification
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateNotificationParam,
    ) -> Result<NotificationParam, DbErr> {
        let notification = entity::notification::ActiveModel {
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(NotificationParam::from_entity(notification))
    }
}
