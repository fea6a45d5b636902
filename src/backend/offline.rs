/// Offline backend over the local SQLite catalog
///
/// rusqlite::Connection is not Send, so every operation opens its own
/// connection on a blocking worker.
use std::collections::BTreeSet;
use std::path::PathBuf;
use url::Url;

use crate::error::{Error, Result};
use crate::media::upload::PreparedImage;
use crate::state::data::Pet;
use crate::state::library::Library;

/// Favorites in the offline catalog belong to this user
pub const LOCAL_USER: &str = "local";

#[derive(Debug, Clone)]
pub struct OfflineBackend {
    db_path: PathBuf,
    uploads_dir: PathBuf,
}

impl OfflineBackend {
    pub fn new(db_path: PathBuf, uploads_dir: PathBuf) -> Self {
        Self {
            db_path,
            uploads_dir,
        }
    }

    async fn with_library<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Library) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut library = Library::open(&db_path)?;
            op(&mut library)
        })
        .await?
    }

    /// Seed the catalog with the built-in listings on first run
    pub async fn seed(&self, pets: Vec<Pet>) -> Result<usize> {
        self.with_library(move |library| library.seed_if_empty(&pets))
            .await
    }

    pub async fn list_pets(&self) -> Result<Vec<Pet>> {
        self.with_library(|library| library.all_pets()).await
    }

    pub async fn get_pet(&self, id: &str) -> Result<Option<Pet>> {
        let id = id.to_string();
        self.with_library(move |library| library.pet(&id)).await
    }

    pub async fn insert_pet(&self, pet: Pet) -> Result<()> {
        self.with_library(move |library| library.insert_pet(&pet))
            .await
    }

    pub async fn favorites(&self) -> Result<BTreeSet<String>> {
        self.with_library(|library| library.favorites(LOCAL_USER))
            .await
    }

    pub async fn set_favorite(&self, pet_id: &str, favorite: bool) -> Result<()> {
        let pet_id = pet_id.to_string();
        self.with_library(move |library| {
            if favorite {
                library.add_favorite(LOCAL_USER, &pet_id)
            } else {
                library.remove_favorite(LOCAL_USER, &pet_id)
            }
        })
        .await
    }

    /// Store the photo under the uploads directory and return its `file://` URL
    pub async fn upload_image(&self, image: PreparedImage) -> Result<String> {
        tokio::fs::create_dir_all(&self.uploads_dir).await?;
        let path = self.uploads_dir.join(&image.file_name);
        tokio::fs::write(&path, &image.bytes).await?;

        let absolute = tokio::fs::canonicalize(&path).await?;
        Url::from_file_path(&absolute)
            .map(|url| url.to_string())
            .map_err(|_| Error::Config(format!("cannot address {}", absolute.display())))
    }

    /// Delete stored photos by object name; missing files are ignored
    pub async fn remove_images(&self, file_names: &[String]) -> Result<()> {
        for name in file_names {
            match tokio::fs::remove_file(self.uploads_dir.join(name)).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
