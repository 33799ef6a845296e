use super::*;

/// Tests listing every gallery record.
///
/// Verifies that the repository returns all stored galleries without
/// filtering.
///
/// Expected: Ok(Vec) containing one entry per stored gallery
#[tokio::test]
async fn returns_every_gallery() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery::create_gallery(db, "annual-day-2024").await?;
    factory::gallery::create_gallery(db, "sports-day-2025").await?;
    factory::gallery::create_gallery(db, "science-fair-2025").await?;

    let repo = GalleryRepository::new(db);
    let galleries = repo.list_all().await?;

    assert_eq!(galleries.len(), 3);

    Ok(())
}

/// Tests listing with no stored galleries.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_when_store_has_no_galleries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GalleryRepository::new(db);
    let galleries = repo.list_all().await?;

    assert!(galleries.is_empty());

    Ok(())
}

/// Tests that photo order survives a round trip through the store.
///
/// Photos are an ordered sequence; insertion order must be preserved on
/// read.
///
/// Expected: photos in exactly the order they were written
#[tokio::test]
async fn preserves_photo_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery::create_gallery_with_photos(
        db,
        "annual-day-2024",
        vec![
            "c.jpg".to_string(),
            "a.jpg".to_string(),
            "b.jpg".to_string(),
        ],
    )
    .await?;

    let repo = GalleryRepository::new(db);
    let galleries = repo.list_all().await?;

    assert_eq!(galleries.len(), 1);
    assert_eq!(galleries[0].photos, vec!["c.jpg", "a.jpg", "b.jpg"]);

    Ok(())
}

/// Tests that repeated reads over unchanged contents are identical.
///
/// Expected: two consecutive calls return equal results
#[tokio::test]
async fn repeated_reads_are_identical() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery::create_gallery(db, "annual-day-2024").await?;
    factory::gallery::create_gallery(db, "sports-day-2025").await?;

    let repo = GalleryRepository::new(db);
    let first = repo.list_all().await?;
    let second = repo.list_all().await?;

    assert_eq!(first, second);

    Ok(())
}
