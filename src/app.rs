/// Application state, messages and the update loop
use iced::widget::image::Handle;
use iced::{Element, Task, Theme};
use rfd::FileDialog;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::backend::email::Mailer;
use crate::backend::{self, Backend, Session};
use crate::config::AppConfig;
use crate::error::Error;
use crate::media::thumbnail::{self, Thumbnail};
use crate::route::Route;
use crate::state::data::{AgeBucket, Gender, Pet, Species};
use crate::state::filter::{self, Criteria};
use crate::state::forms::{
    ContactField, ContactForm, InquiryField, InquiryForm, InquiryType, ListingField,
    ListingFlag, ListingForm,
};
use crate::state::seed::seed_pets;
use crate::state::wizard::Wizard;
use crate::ui;

/// A dismissable banner shown under the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Card and gallery images, keyed by URI
#[derive(Debug, Clone)]
pub enum Thumb {
    Loading,
    Ready(Handle),
    Failed,
}

/// State of the pet profile screen
#[derive(Debug, Clone)]
pub enum Detail {
    Loading(String),
    Found {
        pet: Box<Pet>,
        photo: usize,
        inquiry: Wizard<InquiryForm>,
    },
    Missing(String),
}

/// Sign-in form fields
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub pending: bool,
    pub error: Option<String>,
}

/// Main application state
pub struct PawAdopt {
    backend: Backend,
    mailer: Mailer,
    http: reqwest::Client,
    route: Route,
    /// `None` until the first fetch completes
    listings: Option<Vec<Pet>>,
    criteria: Criteria,
    show_filters: bool,
    detail: Option<Detail>,
    listing: Wizard<ListingForm>,
    contact: Wizard<ContactForm>,
    sign_in: SignInForm,
    session: Option<Session>,
    favorites: BTreeSet<String>,
    thumbnails: HashMap<String, Thumb>,
    resource_category: Option<&'static str>,
    notice: Option<Notice>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    DismissNotice,

    // Catalog
    ListingsLoaded(Vec<Pet>),
    PetLoaded(String, Option<Pet>),
    ThumbnailLoaded(String, Result<Thumbnail, String>),

    // Browse screen
    SearchChanged(String),
    ToggleSpecies(Species),
    ToggleAge(AgeBucket),
    ToggleCity(String),
    VaccinatedOnly(bool),
    ClearFilters,
    ToggleFilterPanel,

    // Profile screen
    SelectPhoto(usize),
    InquiryInput(InquiryField, String),
    SubmitInquiry,
    InquirySent(Result<(), String>),

    // Listing wizard
    ListingInput(ListingField, String),
    ListingFlag(ListingFlag, bool),
    ListingSpecies(Species),
    ListingGender(Gender),
    ListingCity(&'static str),
    PickPhotos,
    RemovePhoto(usize),
    ListingNext,
    ListingBack,
    SubmitListing,
    ListingSubmitted(Result<Pet, String>),
    ListAnother,

    // Contact screen
    ContactInput(ContactField, String),
    ContactType(InquiryType),
    SubmitContact,
    ContactSent(Result<(), String>),
    ContactReset,

    // Resources screen
    ResourceCategory(Option<&'static str>),

    // Session and favorites
    SignInEmail(String),
    SignInPassword(String),
    SubmitSignIn,
    SignedIn(Result<Session, String>),
    SignOut,
    SignedOut,
    FavoritesLoaded(Result<BTreeSet<String>, String>),
    ToggleFavorite(String),
    FavoriteSaved(String, bool, Result<(), String>),
}

impl PawAdopt {
    /// Build the application from resolved settings and kick off the first loads
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let http = reqwest::Client::new();
        let backend = Backend::from_config(&config, http.clone());
        let mailer = Mailer::from_config(config.email.as_ref(), http.clone());

        tracing::info!(
            offline = backend.is_offline(),
            dry_run_email = mailer.is_dry_run(),
            data_dir = %config.data_dir.display(),
            "starting PawAdopt"
        );

        let mut app = PawAdopt {
            backend,
            mailer,
            http,
            route: Route::Home,
            listings: None,
            criteria: Criteria::default(),
            show_filters: false,
            detail: None,
            listing: Wizard::new(),
            contact: Wizard::new(),
            sign_in: SignInForm::default(),
            session: None,
            favorites: BTreeSet::new(),
            thumbnails: HashMap::new(),
            resource_category: None,
            notice: None,
        };

        let start = config
            .start_route
            .as_deref()
            .map(Route::parse)
            .unwrap_or_default();

        let catalog = app.load_catalog();
        let favorites = app.load_favorites();
        let navigate = app.navigate(start);
        (app, Task::batch([catalog, favorites, navigate]))
    }

    pub fn title(&self) -> String {
        format!("PawAdopt - {}", self.route.title())
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn listings(&self) -> &[Pet] {
        self.listings.as_deref().unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.listings.is_none()
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn show_filters(&self) -> bool {
        self.show_filters
    }

    /// Listings that pass the browse screen's criteria, in store order
    pub fn filtered(&self) -> Vec<&Pet> {
        filter::apply(self.listings(), &self.criteria)
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    pub fn listing_wizard(&self) -> &Wizard<ListingForm> {
        &self.listing
    }

    pub fn contact_wizard(&self) -> &Wizard<ContactForm> {
        &self.contact
    }

    pub fn sign_in_form(&self) -> &SignInForm {
        &self.sign_in
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_pets(&self) -> Vec<&Pet> {
        self.listings()
            .iter()
            .filter(|pet| self.favorites.contains(&pet.id))
            .collect()
    }

    pub fn thumbnail(&self, uri: &str) -> Option<&Thumb> {
        self.thumbnails.get(uri)
    }

    pub fn resource_category(&self) -> Option<&'static str> {
        self.resource_category
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }

            Message::ListingsLoaded(pets) => {
                tracing::debug!(count = pets.len(), "listings ready");
                let uris: Vec<String> = pets
                    .iter()
                    .filter_map(|pet| pet.cover_image().map(str::to_string))
                    .collect();
                self.listings = Some(pets);
                self.request_thumbnails(uris)
            }
            Message::PetLoaded(id, pet) => {
                // Ignore answers for a profile the user already left
                if self.route != Route::PetDetails(id.clone()) {
                    return Task::none();
                }
                match pet {
                    Some(pet) => self.show_pet(pet),
                    None => {
                        self.detail = Some(Detail::Missing(id));
                        Task::none()
                    }
                }
            }
            Message::ThumbnailLoaded(uri, result) => {
                let thumb = match result {
                    Ok(t) => Thumb::Ready(Handle::from_rgba(t.width, t.height, t.rgba)),
                    Err(e) => {
                        tracing::debug!(%uri, error = %e, "image unavailable");
                        Thumb::Failed
                    }
                };
                self.thumbnails.insert(uri, thumb);
                Task::none()
            }

            Message::SearchChanged(query) => {
                self.criteria.query = query;
                Task::none()
            }
            Message::ToggleSpecies(species) => {
                self.criteria.toggle_species(species);
                Task::none()
            }
            Message::ToggleAge(age) => {
                self.criteria.toggle_age(age);
                Task::none()
            }
            Message::ToggleCity(city) => {
                self.criteria.toggle_city(&city);
                Task::none()
            }
            Message::VaccinatedOnly(value) => {
                self.criteria.vaccinated_only = value;
                Task::none()
            }
            Message::ClearFilters => {
                self.criteria.clear();
                Task::none()
            }
            Message::ToggleFilterPanel => {
                self.show_filters = !self.show_filters;
                Task::none()
            }

            Message::SelectPhoto(index) => {
                if let Some(Detail::Found { pet, photo, .. }) = &mut self.detail {
                    if index < pet.images.len() {
                        *photo = index;
                    }
                }
                Task::none()
            }
            Message::InquiryInput(field, value) => {
                if let Some(Detail::Found { inquiry, .. }) = &mut self.detail {
                    inquiry.form_mut().set(field, value);
                }
                Task::none()
            }
            Message::SubmitInquiry => {
                let Some(Detail::Found { inquiry, .. }) = &mut self.detail else {
                    return Task::none();
                };
                if !inquiry.begin_submit() {
                    return Task::none();
                }
                let params = inquiry.form.template_params();
                let mailer = self.mailer.clone();
                Task::perform(
                    async move { mailer.send(params).await.map_err(|e| e.to_string()) },
                    Message::InquirySent,
                )
            }
            Message::InquirySent(result) => {
                if let Some(Detail::Found { inquiry, .. }) = &mut self.detail {
                    self.notice = Some(match &result {
                        Ok(()) => Notice::success(
                            "Adoption request sent! The lister will contact you soon.",
                        ),
                        Err(e) => {
                            tracing::warn!(error = %e, "adoption request failed");
                            Notice::error("Could not send your request. Please try again.")
                        }
                    });
                    inquiry.finish(result);
                }
                Task::none()
            }

            Message::ListingInput(field, value) => {
                self.listing.form_mut().set(field, value);
                Task::none()
            }
            Message::ListingFlag(flag, value) => {
                self.listing.form_mut().toggle(flag, value);
                Task::none()
            }
            Message::ListingSpecies(species) => {
                self.listing.form_mut().species = Some(species);
                Task::none()
            }
            Message::ListingGender(gender) => {
                self.listing.form_mut().gender = Some(gender);
                Task::none()
            }
            Message::ListingCity(city) => {
                self.listing.form_mut().city = Some(city.to_string());
                Task::none()
            }
            Message::PickPhotos => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Choose photos of your pet")
                    .add_filter("Images", &["jpg", "jpeg", "png", "webp"])
                    .pick_files();
                if let Some(paths) = picked {
                    self.add_photos(paths);
                }
                Task::none()
            }
            Message::RemovePhoto(index) => {
                self.listing.form_mut().remove_photo(index);
                Task::none()
            }
            Message::ListingNext => {
                self.listing.advance();
                Task::none()
            }
            Message::ListingBack => {
                self.listing.back();
                Task::none()
            }
            Message::SubmitListing => {
                if !self.listing.begin_submit() {
                    return Task::none();
                }
                let backend = self.backend.clone();
                let form = self.listing.form.clone();
                let session = self.session.clone();
                Task::perform(
                    async move {
                        backend::submit_listing(&backend, form, session)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::ListingSubmitted,
                )
            }
            Message::ListingSubmitted(result) => match result {
                Ok(pet) => {
                    self.listing.finish(Ok(()));
                    self.notice = Some(Notice::success(format!(
                        "{} is listed! Families can now find them on the adoption page.",
                        pet.name
                    )));
                    self.load_listings()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "listing submission failed");
                    self.listing.finish(Err(e.clone()));
                    self.notice = Some(Notice::error(format!(
                        "Could not submit the listing: {e}"
                    )));
                    Task::none()
                }
            },
            Message::ListAnother => {
                self.listing.reset();
                Task::none()
            }

            Message::ContactInput(field, value) => {
                self.contact.form_mut().set(field, value);
                Task::none()
            }
            Message::ContactType(kind) => {
                self.contact.form_mut().inquiry_type = Some(kind);
                Task::none()
            }
            Message::SubmitContact => {
                if !self.contact.begin_submit() {
                    return Task::none();
                }
                let params = self.contact.form.template_params();
                let mailer = self.mailer.clone();
                Task::perform(
                    async move { mailer.send(params).await.map_err(|e| e.to_string()) },
                    Message::ContactSent,
                )
            }
            Message::ContactSent(result) => {
                self.notice = Some(match &result {
                    Ok(()) => Notice::success("Message sent! We'll get back to you shortly."),
                    Err(e) => {
                        tracing::warn!(error = %e, "contact message failed");
                        Notice::error("Could not send your message. Please try again.")
                    }
                });
                self.contact.finish(result);
                Task::none()
            }
            Message::ContactReset => {
                self.contact.reset();
                Task::none()
            }

            Message::ResourceCategory(category) => {
                self.resource_category = category;
                Task::none()
            }

            Message::SignInEmail(email) => {
                self.sign_in.email = email;
                self.sign_in.error = None;
                Task::none()
            }
            Message::SignInPassword(password) => {
                self.sign_in.password = password;
                self.sign_in.error = None;
                Task::none()
            }
            Message::SubmitSignIn => {
                if self.sign_in.pending {
                    return Task::none();
                }
                let email = self.sign_in.email.trim().to_string();
                if email.is_empty() || self.sign_in.password.is_empty() {
                    self.sign_in.error = Some("Enter your email and password".into());
                    return Task::none();
                }
                self.sign_in.pending = true;
                let backend = self.backend.clone();
                let password = self.sign_in.password.clone();
                Task::perform(
                    async move {
                        backend
                            .sign_in(&email, &password)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::SignedIn,
                )
            }
            Message::SignedIn(result) => {
                self.sign_in.pending = false;
                match result {
                    Ok(session) => {
                        tracing::info!(user = %session.email, "signed in");
                        let greeting = format!("Signed in as {}", session.email);
                        self.session = Some(session);
                        self.sign_in = SignInForm::default();
                        let favorites = self.load_favorites();
                        let page = self.navigate(Route::Favorites);
                        self.notice = Some(Notice::success(greeting));
                        Task::batch([favorites, page])
                    }
                    Err(e) => {
                        self.sign_in.error = Some(e);
                        Task::none()
                    }
                }
            }
            Message::SignOut => {
                let Some(session) = self.session.take() else {
                    return Task::none();
                };
                let backend = self.backend.clone();
                Task::perform(
                    async move {
                        if let Err(e) = backend.sign_out(&session).await {
                            tracing::warn!(error = %e, "sign-out request failed");
                        }
                    },
                    |()| Message::SignedOut,
                )
            }
            Message::SignedOut => {
                self.notice = Some(Notice::info("Signed out"));
                self.load_favorites()
            }
            Message::FavoritesLoaded(result) => {
                match result {
                    Ok(ids) => self.favorites = ids,
                    Err(e) => tracing::warn!(error = %e, "failed to load favorites"),
                }
                Task::none()
            }
            Message::ToggleFavorite(pet_id) => {
                if self.backend.requires_sign_in() && self.session.is_none() {
                    self.notice = Some(Notice::info("Sign in to save favorites"));
                    return Task::none();
                }
                let favorite = !self.favorites.contains(&pet_id);
                if favorite {
                    self.favorites.insert(pet_id.clone());
                } else {
                    self.favorites.remove(&pet_id);
                }
                let backend = self.backend.clone();
                let session = self.session.clone();
                Task::perform(
                    async move {
                        let result = backend
                            .set_favorite(session.as_ref(), &pet_id, favorite)
                            .await
                            .map_err(|e| e.to_string());
                        (pet_id, favorite, result)
                    },
                    |(pet_id, favorite, result)| Message::FavoriteSaved(pet_id, favorite, result),
                )
            }
            Message::FavoriteSaved(pet_id, favorite, result) => {
                if let Err(e) = result {
                    tracing::warn!(error = %e, pet_id, "failed to save favorite");
                    // Roll back the optimistic change
                    if favorite {
                        self.favorites.remove(&pet_id);
                    } else {
                        self.favorites.insert(pet_id);
                    }
                    self.notice = Some(Notice::error("Could not update favorites"));
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        ui::shell::view(self, ui::pages::view(self))
    }

    /// Add picked photos to the listing form, warning when some were dropped
    pub fn add_photos(&mut self, paths: Vec<PathBuf>) {
        let offered = paths.len();
        let form = self.listing.form_mut();
        let before = form.photos.len();
        form.add_photos(paths);
        if form.photos.len() - before < offered {
            self.notice = Some(Notice::info(format!(
                "Listings hold up to {} photos; duplicates and extras were skipped",
                crate::state::forms::MAX_PHOTOS
            )));
        }
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        tracing::debug!(path = %route.to_path(), "navigate");
        self.notice = None;

        let task = match &route {
            Route::Adopt(criteria) => {
                self.criteria = criteria.clone();
                self.show_filters = false;
                Task::none()
            }
            Route::PetDetails(id) => {
                let cached = self
                    .listings()
                    .iter()
                    .find(|pet| &pet.id == id)
                    .cloned();
                self.route = route.clone();
                return match cached {
                    Some(pet) => self.show_pet(pet),
                    None => {
                        self.detail = Some(Detail::Loading(id.clone()));
                        let backend = self.backend.clone();
                        let id = id.clone();
                        Task::perform(
                            async move {
                                let pet = backend::fetch_pet(&backend, &id).await;
                                (id, pet)
                            },
                            |(id, pet)| Message::PetLoaded(id, pet),
                        )
                    }
                };
            }
            Route::SignIn if self.backend.is_offline() => {
                self.notice = Some(Notice::info(
                    "Sign-in is unavailable in offline mode; favorites are saved on this device",
                ));
                Task::none()
            }
            _ => Task::none(),
        };

        self.route = route;
        task
    }

    fn show_pet(&mut self, pet: Pet) -> Task<Message> {
        let uris = pet.images.clone();
        let inquiry = Wizard::with_form(InquiryForm::for_pet(&pet.id, &pet.name));
        self.detail = Some(Detail::Found {
            pet: Box::new(pet),
            photo: 0,
            inquiry,
        });
        self.request_thumbnails(uris)
    }

    /// Seed the offline catalog on first run, then fetch every listing
    fn load_catalog(&self) -> Task<Message> {
        let backend = self.backend.clone();
        Task::perform(
            async move {
                if let Backend::Offline(offline) = &backend {
                    if let Err(e) = offline.seed(seed_pets()).await {
                        tracing::warn!(error = %e, "failed to seed offline catalog");
                    }
                }
                backend::fetch_listings(&backend).await
            },
            Message::ListingsLoaded,
        )
    }

    fn load_listings(&self) -> Task<Message> {
        let backend = self.backend.clone();
        Task::perform(
            async move { backend::fetch_listings(&backend).await },
            Message::ListingsLoaded,
        )
    }

    fn load_favorites(&mut self) -> Task<Message> {
        if self.backend.requires_sign_in() && self.session.is_none() {
            self.favorites.clear();
            return Task::none();
        }
        let backend = self.backend.clone();
        let session = self.session.clone();
        Task::perform(
            async move {
                backend
                    .favorites(session.as_ref())
                    .await
                    .map_err(|e: Error| e.to_string())
            },
            Message::FavoritesLoaded,
        )
    }

    fn request_thumbnails(&mut self, uris: Vec<String>) -> Task<Message> {
        let mut tasks = Vec::new();
        for uri in uris {
            if self.thumbnails.contains_key(&uri) {
                continue;
            }
            self.thumbnails.insert(uri.clone(), Thumb::Loading);
            let http = self.http.clone();
            tasks.push(Task::perform(
                async move {
                    let result = thumbnail::load(&http, &uri).await.map_err(|e| e.to_string());
                    (uri, result)
                },
                |(uri, result)| Message::ThumbnailLoaded(uri, result),
            ));
        }
        Task::batch(tasks)
    }
}
