pub use super::gallery::Entity as Gallery;
pub use super::notification::Entity as Notification;
