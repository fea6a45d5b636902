//! Screen flows driven through `PawAdopt::update`, the way the runtime would.

use pawadopt::app::{Detail, Message, NoticeKind, PawAdopt};
use pawadopt::config::{AppConfig, RemoteConfig};
use pawadopt::route::Route;
use pawadopt::state::data::{AgeBucket, Species};
use pawadopt::state::forms::{ListingField, ListingFlag};
use pawadopt::state::seed::seed_pets;
use pawadopt::state::wizard::Phase;
use tempfile::TempDir;

fn offline_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        data_dir: dir.path().to_path_buf(),
        remote: None,
        email: None,
        start_route: None,
    }
}

fn offline_app(dir: &TempDir) -> PawAdopt {
    let (mut app, _) = PawAdopt::new(offline_config(dir));
    let _ = app.update(Message::ListingsLoaded(seed_pets()));
    app
}

fn fill_listing(app: &mut PawAdopt) {
    let inputs = [
        (ListingField::PetName, "Tiger"),
        (ListingField::Breed, "Indie"),
        (ListingField::Age, "5 months"),
        (ListingField::Description, "Found near the station"),
        (ListingField::ContactName, "Asha"),
        (ListingField::ContactPhone, "98765 43210"),
        (ListingField::ContactEmail, "asha@example.org"),
    ];
    for (field, value) in inputs {
        let _ = app.update(Message::ListingInput(field, value.to_string()));
    }
    let _ = app.update(Message::ListingSpecies(Species::Cat));
    let _ = app.update(Message::ListingFlag(ListingFlag::Vaccinated, true));
}

#[test]
fn test_browse_search_and_filters() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);

    let _ = app.update(Message::Navigate(Route::parse("/adopt")));
    assert_eq!(app.filtered().len(), seed_pets().len());

    let _ = app.update(Message::SearchChanged("bruno".into()));
    let names: Vec<_> = app.filtered().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["Bruno"]);

    let _ = app.update(Message::SearchChanged(String::new()));
    let _ = app.update(Message::ToggleSpecies(Species::Cat));
    let _ = app.update(Message::ToggleAge(AgeBucket::Adult));
    assert!(app
        .filtered()
        .iter()
        .all(|p| p.species == Some(Species::Cat) && p.age_bucket == Some(AgeBucket::Adult)));
    assert_eq!(app.criteria().active_filters(), 2);

    let _ = app.update(Message::ClearFilters);
    assert!(app.criteria().is_empty());
    assert_eq!(app.filtered().len(), seed_pets().len());
}

#[test]
fn test_route_query_seeds_filters() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);

    let _ = app.update(Message::Navigate(Route::parse("/adopt?type=cat")));
    assert!(app.criteria().species.contains(&Species::Cat));
    assert!(app.filtered().iter().all(|p| p.species == Some(Species::Cat)));
}

#[test]
fn test_step_one_blocks_until_complete() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);
    let _ = app.update(Message::Navigate(Route::ListPet));

    let _ = app.update(Message::ListingNext);
    let wizard = app.listing_wizard();
    assert_eq!(wizard.step(), 1);
    assert!(wizard.error_for("pet_name").is_some());
    assert!(wizard.error_for("species").is_some());

    fill_listing(&mut app);
    let _ = app.update(Message::ListingNext);
    assert_eq!(app.listing_wizard().step(), 2);
    assert!(app.listing_wizard().errors().is_empty());

    let _ = app.update(Message::ListingBack);
    assert_eq!(app.listing_wizard().step(), 1);
    assert_eq!(app.listing_wizard().form.pet_name, "Tiger");
}

#[test]
fn test_rejected_submission_keeps_values() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);
    let _ = app.update(Message::Navigate(Route::ListPet));
    fill_listing(&mut app);
    for _ in 0..3 {
        let _ = app.update(Message::ListingNext);
    }
    assert!(app.listing_wizard().is_last_step());

    let _ = app.update(Message::SubmitListing);
    assert!(app.listing_wizard().is_submitting());

    // A second click while in flight does nothing
    let _ = app.update(Message::SubmitListing);
    assert!(app.listing_wizard().is_submitting());

    let _ = app.update(Message::ListingSubmitted(Err("storage is full".into())));
    let wizard = app.listing_wizard();
    assert_eq!(wizard.step(), 4);
    assert_eq!(wizard.phase(), &Phase::Failed("storage is full".into()));
    assert_eq!(wizard.form.pet_name, "Tiger");
    assert_eq!(wizard.form.contact_email, "asha@example.org");
    assert!(wizard.form.vaccinated);

    let notice = app.notice().expect("an error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("storage is full"));

    let _ = app.update(Message::DismissNotice);
    assert!(app.notice().is_none());

    // Retrying is allowed
    let _ = app.update(Message::SubmitListing);
    assert!(app.listing_wizard().is_submitting());
}

#[test]
fn test_successful_submission_shows_confirmation() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);
    let _ = app.update(Message::Navigate(Route::ListPet));
    fill_listing(&mut app);
    for _ in 0..3 {
        let _ = app.update(Message::ListingNext);
    }
    let _ = app.update(Message::SubmitListing);

    let mut pet = seed_pets().remove(1);
    pet.name = "Tiger".into();
    let _ = app.update(Message::ListingSubmitted(Ok(pet)));

    assert!(app.listing_wizard().is_submitted());
    assert_eq!(app.notice().map(|n| n.kind), Some(NoticeKind::Success));

    let _ = app.update(Message::ListAnother);
    assert_eq!(app.listing_wizard().step(), 1);
    assert!(app.listing_wizard().form.pet_name.is_empty());
}

#[test]
fn test_profile_from_loaded_listings() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);

    let _ = app.update(Message::Navigate(Route::PetDetails("2".into())));
    match app.detail() {
        Some(Detail::Found { pet, photo, inquiry }) => {
            assert_eq!(pet.name, "Whiskers");
            assert_eq!(*photo, 0);
            assert_eq!(inquiry.form.pet_id, "2");
        }
        other => panic!("expected a loaded profile, got {other:?}"),
    }
}

#[test]
fn test_unknown_pet_shows_not_found() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);

    let _ = app.update(Message::Navigate(Route::PetDetails("999".into())));
    assert!(matches!(app.detail(), Some(Detail::Loading(id)) if id == "999"));

    let _ = app.update(Message::PetLoaded("999".into(), None));
    assert!(matches!(app.detail(), Some(Detail::Missing(id)) if id == "999"));
}

#[test]
fn test_stale_profile_answer_is_ignored() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);

    let _ = app.update(Message::Navigate(Route::PetDetails("999".into())));
    let _ = app.update(Message::Navigate(Route::About));
    let _ = app.update(Message::PetLoaded("999".into(), None));
    assert_eq!(app.route(), &Route::About);
    assert!(matches!(app.detail(), Some(Detail::Loading(_))));
}

#[test]
fn test_start_route_deep_link() {
    let dir = TempDir::new().unwrap();
    let mut config = offline_config(&dir);
    config.start_route = Some("/pet/42".into());

    let (app, _) = PawAdopt::new(config);
    assert_eq!(app.route(), &Route::PetDetails("42".into()));
    assert!(matches!(app.detail(), Some(Detail::Loading(id)) if id == "42"));
}

#[test]
fn test_offline_favorites_toggle_and_roll_back() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);

    let _ = app.update(Message::ToggleFavorite("3".into()));
    assert!(app.is_favorite("3"));
    assert_eq!(app.favorite_pets().len(), 1);

    let _ = app.update(Message::FavoriteSaved("3".into(), true, Err("disk full".into())));
    assert!(!app.is_favorite("3"));
    assert_eq!(app.notice().map(|n| n.kind), Some(NoticeKind::Error));
}

#[test]
fn test_remote_favorites_ask_for_sign_in() {
    let dir = TempDir::new().unwrap();
    let mut config = offline_config(&dir);
    config.remote = Some(RemoteConfig {
        url: "http://127.0.0.1:9".into(),
        anon_key: "anon".into(),
        pets_table: "pets".into(),
        favorites_table: "fav_pets".into(),
        image_bucket: "pet-images".into(),
    });

    let (mut app, _) = PawAdopt::new(config);
    let _ = app.update(Message::ToggleFavorite("1".into()));

    assert!(app.favorites().is_empty());
    let notice = app.notice().expect("sign-in notice");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert!(notice.text.contains("Sign in"));
}

#[test]
fn test_sign_in_requires_both_fields() {
    let dir = TempDir::new().unwrap();
    let mut app = offline_app(&dir);

    let _ = app.update(Message::SignInEmail("asha@example.org".into()));
    let _ = app.update(Message::SubmitSignIn);
    assert!(app.sign_in_form().error.is_some());
    assert!(!app.sign_in_form().pending);

    let _ = app.update(Message::SignedIn(Err("Invalid login credentials".into())));
    assert_eq!(
        app.sign_in_form().error.as_deref(),
        Some("Invalid login credentials")
    );
    assert!(app.session().is_none());
}
