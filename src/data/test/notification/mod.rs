use crate::{
    data::notification::{NotificationRepository, RECENT_NOTIFICATION_LIMIT},
    model::notification::CreateNotificationParam,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_recent;
