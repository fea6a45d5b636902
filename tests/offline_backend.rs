use chrono::NaiveDate;
use image::{ImageBuffer, ImageFormat, Rgb};
use pawadopt::backend::offline::OfflineBackend;
use pawadopt::backend::{fetch_listings, fetch_pet, submit_listing, Backend};
use pawadopt::media::thumbnail;
use pawadopt::state::data::{AgeBucket, Species, Status};
use pawadopt::state::forms::ListingForm;
use pawadopt::state::seed::seed_pets;
use pawadopt::Error;
use std::io::Cursor;
use tempfile::TempDir;

fn offline(dir: &TempDir) -> OfflineBackend {
    OfflineBackend::new(dir.path().join("pawadopt.db"), dir.path().join("uploads"))
}

fn write_png(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let img = ImageBuffer::from_pixel(64, 48, Rgb([30u8, 140, 90]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png).unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, bytes.into_inner()).unwrap();
    path
}

#[tokio::test]
async fn test_seeding_happens_once() {
    let dir = TempDir::new().unwrap();
    let backend = offline(&dir);

    assert_eq!(backend.seed(seed_pets()).await.unwrap(), seed_pets().len());
    assert_eq!(backend.seed(seed_pets()).await.unwrap(), 0);

    let pets = backend.list_pets().await.unwrap();
    let names: Vec<_> = pets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names[..2], ["Bruno", "Whiskers"]);
}

#[tokio::test]
async fn test_lookup_by_id() {
    let dir = TempDir::new().unwrap();
    let backend = Backend::Offline(offline(&dir));
    if let Backend::Offline(b) = &backend {
        b.seed(seed_pets()).await.unwrap();
    }

    assert_eq!(fetch_pet(&backend, "2").await.map(|p| p.name), Some("Whiskers".into()));
    assert!(fetch_pet(&backend, "999").await.is_none());
    assert_eq!(fetch_listings(&backend).await.len(), seed_pets().len());
}

#[tokio::test]
async fn test_local_favorites_need_no_session() {
    let dir = TempDir::new().unwrap();
    let backend = Backend::Offline(offline(&dir));

    backend.set_favorite(None, "3", true).await.unwrap();
    backend.set_favorite(None, "1", true).await.unwrap();
    backend.set_favorite(None, "1", true).await.unwrap();
    backend.set_favorite(None, "3", false).await.unwrap();

    let ids = backend.favorites(None).await.unwrap();
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["1"]);
}

#[tokio::test]
async fn test_sign_in_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let backend = Backend::Offline(offline(&dir));
    assert!(matches!(
        backend.sign_in("a@b.co", "pw").await,
        Err(Error::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_submit_listing_stores_photos_and_record() {
    let dir = TempDir::new().unwrap();
    let backend = Backend::Offline(offline(&dir));

    let form = ListingForm {
        pet_name: "Tiger".into(),
        species: Some(Species::Cat),
        breed: "Indie".into(),
        age: "3 years".into(),
        city: Some("Chennai".into()),
        photos: vec![write_png(&dir, "a.png"), write_png(&dir, "b.png")],
        description: "Calm and affectionate".into(),
        personality: "Calm, Cuddly".into(),
        contact_name: "Asha".into(),
        organization: "Blue Cross".into(),
        contact_phone: "98765 43210".into(),
        contact_email: "asha@example.org".into(),
        ..ListingForm::default()
    };

    let pet = submit_listing(&backend, form, None).await.unwrap();
    assert_eq!(pet.images.len(), 2);
    assert!(pet.images.iter().all(|uri| uri.starts_with("file://")));
    assert_eq!(pet.age_bucket, Some(AgeBucket::Adult));
    assert_eq!(pet.listed_by, "Blue Cross");
    assert_eq!(pet.status, Status::Available);
    assert!(pet.listed_date.is_some_and(|d| d > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));

    let stored = fetch_pet(&backend, &pet.id).await.unwrap();
    assert_eq!(stored, pet);

    // Uploaded photos are readable JPEGs at their URIs
    let http = reqwest::Client::new();
    let thumb = thumbnail::load(&http, &pet.images[0]).await.unwrap();
    assert_eq!((thumb.width, thumb.height), (64, 48));
}

#[tokio::test]
async fn test_unreadable_photo_fails_submission() {
    let dir = TempDir::new().unwrap();
    let backend = Backend::Offline(offline(&dir));
    let bogus = dir.path().join("notes.png");
    std::fs::write(&bogus, b"not really a png").unwrap();

    let form = ListingForm {
        pet_name: "Ghost".into(),
        photos: vec![bogus],
        ..ListingForm::default()
    };

    assert!(submit_listing(&backend, form, None).await.is_err());
    assert!(fetch_listings(&backend).await.is_empty());
}

fn stored_uploads(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path().join("uploads"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}

#[tokio::test]
async fn test_bad_photo_stores_nothing() {
    let dir = TempDir::new().unwrap();
    let backend = Backend::Offline(offline(&dir));
    let bogus = dir.path().join("bad.png");
    std::fs::write(&bogus, b"not really a png").unwrap();

    let form = ListingForm {
        pet_name: "Bruno".into(),
        photos: vec![write_png(&dir, "good.png"), bogus],
        ..ListingForm::default()
    };

    assert!(submit_listing(&backend, form.clone(), None).await.is_err());
    assert!(submit_listing(&backend, form, None).await.is_err());
    assert_eq!(stored_uploads(&dir), 0);
    assert!(fetch_listings(&backend).await.is_empty());
}

#[tokio::test]
async fn test_failed_insert_removes_uploaded_photos() {
    let dir = TempDir::new().unwrap();
    // A directory where the catalog file should be makes every insert fail
    let db_path = dir.path().join("catalog");
    std::fs::create_dir(&db_path).unwrap();
    let backend = Backend::Offline(OfflineBackend::new(db_path, dir.path().join("uploads")));

    let form = ListingForm {
        pet_name: "Whiskers".into(),
        species: Some(Species::Cat),
        photos: vec![write_png(&dir, "a.png"), write_png(&dir, "b.png")],
        ..ListingForm::default()
    };

    assert!(submit_listing(&backend, form, None).await.is_err());
    assert_eq!(stored_uploads(&dir), 0);
}
