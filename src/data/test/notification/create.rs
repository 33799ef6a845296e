use super::*;

/// Tests creating a notification record.
///
/// Expected: Ok(NotificationParam) with the stored fields and a creation
/// timestamp
#[tokio::test]
async fn creates_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParam {
            title: "Fee reminder".to_string(),
            message: "Term fees are due Friday.".to_string(),
        })
        .await?;

    assert_eq!(notification.title, "Fee reminder");
    assert_eq!(notification.message, "Term fees are due Friday.");

    let listed = repo.list_recent().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], notification);

    Ok(())
}
