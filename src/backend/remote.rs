/// Client for the hosted backend-as-a-service
///
/// Speaks the published HTTP contracts of the hosted table API (PostgREST),
/// password auth (GoTrue) and bucket storage. Every request carries the
/// project's anon key; requests made on behalf of a user use the session's
/// access token as bearer, anonymous ones use the anon key.
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use url::Url;

use super::wire::{self, FavoriteRow, NewFavoriteRow, NewPetRow};
use super::Session;
use crate::config::RemoteConfig;
use crate::error::{Error, Result};
use crate::media::upload::PreparedImage;
use crate::state::data::Pet;

#[derive(Debug, Clone)]
pub struct RemoteBackend {
    http: reqwest::Client,
    config: Arc<RemoteConfig>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl RemoteBackend {
    pub fn new(http: reqwest::Client, config: RemoteConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}/{}", self.config.url, path))
            .map_err(|e| Error::Config(format!("invalid backend url {}: {e}", self.config.url)))
    }

    fn table(&self, table: &str) -> Result<Url> {
        self.endpoint(&format!("rest/v1/{table}"))
    }

    fn authorize(&self, request: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        let token = session
            .map(|s| s.access_token.as_str())
            .unwrap_or(self.config.anon_key.as_str());
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
    }

    /// Turn non-success responses into `Error::Api`
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::from_response_body(status.as_u16(), &body))
    }

    async fn select_pets(&self, url: Url) -> Result<Vec<Pet>> {
        let response = self.authorize(self.http.get(url), None).send().await?;
        let rows: Vec<Value> = Self::check(response).await?.json().await?;

        let total = rows.len();
        let pets: Vec<Pet> = rows.into_iter().filter_map(wire::decode_pet).collect();
        if pets.len() < total {
            tracing::warn!(dropped = total - pets.len(), "ignored unusable pet rows");
        }
        Ok(pets)
    }

    pub async fn list_pets(&self) -> Result<Vec<Pet>> {
        let mut url = self.table(&self.config.pets_table)?;
        url.query_pairs_mut().append_pair("select", "*");
        self.select_pets(url).await
    }

    pub async fn get_pet(&self, id: &str) -> Result<Option<Pet>> {
        let mut url = self.table(&self.config.pets_table)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("limit", "1");
        Ok(self.select_pets(url).await?.into_iter().next())
    }

    pub async fn insert_pet(&self, pet: &Pet, session: Option<&Session>) -> Result<()> {
        let url = self.table(&self.config.pets_table)?;
        let response = self
            .authorize(self.http.post(url), session)
            .header("Prefer", "return=minimal")
            .json(&NewPetRow::from(pet))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn favorites(&self, session: &Session) -> Result<BTreeSet<String>> {
        let mut url = self.table(&self.config.favorites_table)?;
        url.query_pairs_mut()
            .append_pair("select", "pet_id")
            .append_pair("user_id", &format!("eq.{}", session.user_id));

        let response = self
            .authorize(self.http.get(url), Some(session))
            .send()
            .await?;
        let rows: Vec<FavoriteRow> = Self::check(response).await?.json().await?;

        Ok(rows.into_iter().filter_map(FavoriteRow::into_pet_id).collect())
    }

    pub async fn add_favorite(&self, session: &Session, pet_id: &str) -> Result<()> {
        let url = self.table(&self.config.favorites_table)?;
        let response = self
            .authorize(self.http.post(url), Some(session))
            .header("Prefer", "return=minimal")
            .json(&NewFavoriteRow {
                user_id: &session.user_id,
                pet_id,
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn remove_favorite(&self, session: &Session, pet_id: &str) -> Result<()> {
        let mut url = self.table(&self.config.favorites_table)?;
        url.query_pairs_mut()
            .append_pair("user_id", &format!("eq.{}", session.user_id))
            .append_pair("pet_id", &format!("eq.{pet_id}"));

        let response = self
            .authorize(self.http.delete(url), Some(session))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Public URL of an object in the image bucket
    pub fn public_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url, self.config.image_bucket, object
        )
    }

    /// Upload a photo and return its public URL
    pub async fn upload_image(
        &self,
        image: PreparedImage,
        session: Option<&Session>,
    ) -> Result<String> {
        let url = self.endpoint(&format!(
            "storage/v1/object/{}/{}",
            self.config.image_bucket, image.file_name
        ))?;

        let response = self
            .authorize(self.http.post(url), session)
            .header("Content-Type", image.content_type)
            .header("x-upsert", "false")
            .body(image.bytes)
            .send()
            .await?;
        Self::check(response).await?;

        Ok(self.public_url(&image.file_name))
    }

    /// Delete objects from the image bucket; names that were never stored are ignored
    pub async fn remove_images(&self, file_names: &[String], session: Option<&Session>) -> Result<()> {
        let url = self.endpoint(&format!("storage/v1/object/{}", self.config.image_bucket))?;
        let response = self
            .authorize(self.http.delete(url), session)
            .json(&serde_json::json!({ "prefixes": file_names }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Exchange email and password for a session
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let mut url = self.endpoint("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .http
            .post(url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let token: TokenResponse = Self::check(response).await?.json().await?;

        Ok(Session {
            user_id: token.user.id,
            email: token.user.email.unwrap_or_else(|| email.to_string()),
            access_token: token.access_token,
        })
    }

    pub async fn sign_out(&self, session: &Session) -> Result<()> {
        let url = self.endpoint("auth/v1/logout")?;
        let response = self
            .authorize(self.http.post(url), Some(session))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
