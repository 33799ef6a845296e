use super::*;

/// Tests finding a gallery by its exact slug.
///
/// Expected: Ok(Some(GalleryParam)) for the matching record
#[tokio::test]
async fn finds_gallery_with_matching_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery::create_gallery_with_photos(
        db,
        "td-2024",
        vec!["a.jpg".to_string(), "b.jpg".to_string()],
    )
    .await?;
    factory::gallery::create_gallery(db, "sports-day-2025").await?;

    let repo = GalleryRepository::new(db);
    let gallery = repo.find_by_slug("td-2024").await?;

    assert!(gallery.is_some());
    let gallery = gallery.unwrap();
    assert_eq!(gallery.slug, "td-2024");
    assert_eq!(gallery.photos, vec!["a.jpg", "b.jpg"]);

    Ok(())
}

/// Tests lookup of a slug with no matching gallery.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery::create_gallery(db, "td-2024").await?;

    let repo = GalleryRepository::new(db);
    let gallery = repo.find_by_slug("missing").await?;

    assert!(gallery.is_none());

    Ok(())
}

/// Tests that slug matching is exact, not prefix or substring based.
///
/// Expected: Ok(None) for a prefix of a stored slug
#[tokio::test]
async fn does_not_match_partial_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery::create_gallery(db, "td-2024").await?;

    let repo = GalleryRepository::new(db);

    assert!(repo.find_by_slug("td").await?.is_none());
    assert!(repo.find_by_slug("td-2024-extra").await?.is_none());

    Ok(())
}

/// Tests that repeated lookups over unchanged contents are identical.
///
/// Expected: two consecutive calls return equal results
#[tokio::test]
async fn repeated_reads_are_identical() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery::create_gallery(db, "td-2024").await?;

    let repo = GalleryRepository::new(db);
    let first = repo.find_by_slug("td-2024").await?;
    let second = repo.find_by_slug("td-2024").await?;

    assert_eq!(first, second);

    Ok(())
}
