use super::*;

/// Tests creating a gallery record.
///
/// Verifies that the created record carries its fields and is timestamped
/// on insert.
///
/// Expected: Ok(GalleryParam) with matching fields
#[tokio::test]
async fn creates_gallery_with_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GalleryRepository::new(db);
    let gallery = repo
        .create(CreateGalleryParam {
            title: "Teachers Day 2024".to_string(),
            slug: "td-2024".to_string(),
            cover: Some("/uploads/gallery/td1.jpg".to_string()),
            photos: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        })
        .await?;

    assert_eq!(gallery.title, "Teachers Day 2024");
    assert_eq!(gallery.slug, "td-2024");
    assert_eq!(gallery.cover.as_deref(), Some("/uploads/gallery/td1.jpg"));
    assert_eq!(gallery.photos, vec!["a.jpg", "b.jpg"]);
    assert_eq!(gallery.created_at, gallery.updated_at);

    Ok(())
}

/// Tests the slug uniqueness invariant.
///
/// Inserting two galleries with the same slug must be rejected by the
/// store's unique constraint.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_public_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GalleryRepository::new(db);
    repo.create(CreateGalleryParam {
        title: "Teachers Day 2024".to_string(),
        slug: "td-2024".to_string(),
        cover: None,
        photos: vec![],
    })
    .await?;

    let duplicate = repo
        .create(CreateGalleryParam {
            title: "Another Teachers Day".to_string(),
            slug: "td-2024".to_string(),
            cover: None,
            photos: vec![],
        })
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
