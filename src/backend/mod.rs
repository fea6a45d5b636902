pub mod email;
pub mod offline;
pub mod remote;
pub mod wire;

use std::collections::BTreeSet;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::media::upload::{self, PreparedImage};
use crate::state::data::Pet;
use crate::state::forms::ListingForm;
use offline::OfflineBackend;
use remote::RemoteBackend;

/// A signed-in user of the hosted backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
}

/// Where listings and favorites live
#[derive(Debug, Clone)]
pub enum Backend {
    /// Local SQLite catalog seeded with the built-in listings
    Offline(OfflineBackend),
    /// Hosted tables, storage and auth
    Remote(RemoteBackend),
}

impl Backend {
    pub fn from_config(config: &AppConfig, http: reqwest::Client) -> Self {
        match &config.remote {
            Some(remote) => Backend::Remote(RemoteBackend::new(http, remote.clone())),
            None => Backend::Offline(OfflineBackend::new(config.db_path(), config.uploads_dir())),
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Backend::Offline(_))
    }

    /// Favorites need a signed-in user only on the hosted backend
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, Backend::Remote(_))
    }

    pub async fn list_pets(&self) -> Result<Vec<Pet>> {
        match self {
            Backend::Offline(b) => b.list_pets().await,
            Backend::Remote(b) => b.list_pets().await,
        }
    }

    pub async fn get_pet(&self, id: &str) -> Result<Option<Pet>> {
        match self {
            Backend::Offline(b) => b.get_pet(id).await,
            Backend::Remote(b) => b.get_pet(id).await,
        }
    }

    pub async fn insert_pet(&self, pet: Pet, session: Option<&Session>) -> Result<()> {
        match self {
            Backend::Offline(b) => b.insert_pet(pet).await,
            Backend::Remote(b) => b.insert_pet(&pet, session).await,
        }
    }

    /// Store one photo and return the URL the listing should reference
    pub async fn upload_image(
        &self,
        image: PreparedImage,
        session: Option<&Session>,
    ) -> Result<String> {
        match self {
            Backend::Offline(b) => b.upload_image(image).await,
            Backend::Remote(b) => b.upload_image(image, session).await,
        }
    }

    /// Delete photos stored by `upload_image`, by object name
    pub async fn remove_images(&self, file_names: &[String], session: Option<&Session>) -> Result<()> {
        match self {
            Backend::Offline(b) => b.remove_images(file_names).await,
            Backend::Remote(b) => b.remove_images(file_names, session).await,
        }
    }

    pub async fn favorites(&self, session: Option<&Session>) -> Result<BTreeSet<String>> {
        match (self, session) {
            (Backend::Offline(b), _) => b.favorites().await,
            (Backend::Remote(b), Some(session)) => b.favorites(session).await,
            (Backend::Remote(_), None) => Err(Error::NotSignedIn),
        }
    }

    pub async fn set_favorite(
        &self,
        session: Option<&Session>,
        pet_id: &str,
        favorite: bool,
    ) -> Result<()> {
        match (self, session) {
            (Backend::Offline(b), _) => b.set_favorite(pet_id, favorite).await,
            (Backend::Remote(b), Some(session)) if favorite => {
                b.add_favorite(session, pet_id).await
            }
            (Backend::Remote(b), Some(session)) => b.remove_favorite(session, pet_id).await,
            (Backend::Remote(_), None) => Err(Error::NotSignedIn),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        match self {
            Backend::Offline(_) => Err(Error::Unavailable("sign-in")),
            Backend::Remote(b) => b.sign_in(email, password).await,
        }
    }

    pub async fn sign_out(&self, session: &Session) -> Result<()> {
        match self {
            Backend::Offline(_) => Ok(()),
            Backend::Remote(b) => b.sign_out(session).await,
        }
    }
}

/// All listings, or an empty list when the backend cannot be read
pub async fn fetch_listings(backend: &Backend) -> Vec<Pet> {
    match backend.list_pets().await {
        Ok(pets) => {
            tracing::debug!(count = pets.len(), "fetched listings");
            pets
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch listings");
            Vec::new()
        }
    }
}

/// One listing by id; lookup failures read as "not found"
pub async fn fetch_pet(backend: &Backend, id: &str) -> Option<Pet> {
    match backend.get_pet(id).await {
        Ok(pet) => pet,
        Err(e) => {
            tracing::warn!(error = %e, id, "failed to fetch pet");
            None
        }
    }
}

/// Upload the form's photos and store the new listing
///
/// Every photo is prepared before anything is stored. When an upload or the
/// insert fails, photos already stored for this submission are removed again.
pub async fn submit_listing(
    backend: &Backend,
    form: ListingForm,
    session: Option<Session>,
) -> Result<Pet> {
    let mut prepared = Vec::with_capacity(form.photos.len());
    for path in &form.photos {
        prepared.push(upload::prepare(path.clone()).await?);
    }
    let file_names: Vec<String> = prepared.iter().map(|p| p.file_name.clone()).collect();

    match store_listing(backend, &form, prepared, session.as_ref()).await {
        Ok(pet) => {
            tracing::info!(id = %pet.id, name = %pet.name, photos = pet.images.len(), "listing submitted");
            Ok(pet)
        }
        Err(e) if file_names.is_empty() => Err(e),
        Err(e) => {
            if let Err(cleanup) = backend.remove_images(&file_names, session.as_ref()).await {
                tracing::warn!(error = %cleanup, "failed to remove photos of a rejected listing");
            }
            Err(e)
        }
    }
}

async fn store_listing(
    backend: &Backend,
    form: &ListingForm,
    prepared: Vec<PreparedImage>,
    session: Option<&Session>,
) -> Result<Pet> {
    let mut images = Vec::with_capacity(prepared.len());
    for image in prepared {
        images.push(backend.upload_image(image, session).await?);
    }

    let today = chrono::Local::now().date_naive();
    let pet = form.to_record(Uuid::new_v4().to_string(), images, today);
    backend.insert_pet(pet.clone(), session).await?;
    Ok(pet)
}
