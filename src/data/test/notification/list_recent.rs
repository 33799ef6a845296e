use super::*;

/// Tests that the feed is ordered by creation timestamp descending.
///
/// Records are inserted out of chronological order to rule out reliance on
/// insertion order.
///
/// Expected: Ok(Vec) with strictly descending timestamps
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();

    factory::notification::create_notification_at(db, "second", base + Duration::minutes(10))
        .await?;
    factory::notification::create_notification_at(db, "first", base + Duration::minutes(20))
        .await?;
    factory::notification::create_notification_at(db, "third", base).await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.list_recent().await?;

    let titles: Vec<&str> = notifications.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);

    for pair in notifications.windows(2) {
        assert!(pair[0].created_at > pair[1].created_at);
    }

    Ok(())
}

/// Tests the fixed feed window.
///
/// With 25 stored notifications carrying distinct timestamps, the feed must
/// contain exactly the 20 newest, still descending.
///
/// Expected: Ok(Vec) of length 20 starting at the newest record
#[tokio::test]
async fn truncates_to_twenty_most_recent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();

    for i in 0..25 {
        factory::notification::create_notification_at(
            db,
            &format!("note-{i}"),
            base + Duration::minutes(i),
        )
        .await?;
    }

    let repo = NotificationRepository::new(db);
    let notifications = repo.list_recent().await?;

    assert_eq!(notifications.len(), RECENT_NOTIFICATION_LIMIT as usize);
    assert_eq!(notifications[0].title, "note-24");
    assert_eq!(notifications[19].title, "note-5");

    Ok(())
}

/// Tests that sets smaller than the window are returned whole.
///
/// Expected: Ok(Vec) with every stored notification
#[tokio::test]
async fn returns_all_when_fewer_than_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::notification::create_notification(db, "only").await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.list_recent().await?;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "only");

    Ok(())
}

/// Tests that repeated reads over unchanged contents are identical.
///
/// Expected: two consecutive calls return equal results
#[tokio::test]
async fn repeated_reads_are_identical() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    for i in 0..5 {
        factory::notification::create_notification_at(
            db,
            &format!("note-{i}"),
            base + Duration::minutes(i),
        )
        .await?;
    }

    let repo = NotificationRepository::new(db);
    let first = repo.list_recent().await?;
    let second = repo.list_recent().await?;

    assert_eq!(first, second);

    Ok(())
}
