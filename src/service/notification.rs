use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::NotificationParam,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent notifications for the public feed.
    pub async fn recent(&self) -> Result<Vec<NotificationParam>, AppError> {
        let notifications = NotificationRepository::new(self.db).list_recent().await?;

        Ok(notifications)
    }
}
