// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::domain::shared::models::UserId;
use crate::domain::user_profiles::models::ProfileDocument;
use crate::domain::user_profiles::services::UserProfileService;

use super::firestore_value::FirestoreDocument;

#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Defaults to `https://firestore.googleapis.com/v1`.
    pub base_url: Url,
    pub project_id: String,
    /// Defaults to `(default)`.
    pub database_id: String,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            base_url: Url::parse("https://firestore.googleapis.com/v1")
                .expect("Hardcoded Firestore URL is valid"),
            project_id: project_id.into(),
            database_id: "(default)".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum FirestoreError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Firestore responded with status {0}.")]
    Status(StatusCode),

    #[error("Base URL {0} cannot have path segments.")]
    InvalidBaseUrl(Url),
}

/// Reads user documents through the Firestore REST API.
pub struct FirestoreUserProfileService {
    client: reqwest::Client,
    config: FirestoreConfig,
    id_token: RwLock<Option<SecretString>>,
}

impl FirestoreUserProfileService {
    pub fn new(config: FirestoreConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: FirestoreConfig) -> Self {
        Self {
            client,
            config,
            id_token: Default::default(),
        }
    }

    /// Sets the ID token of the signed-in user which is sent as bearer token. Pass `None` for
    /// unauthenticated reads.
    pub fn set_id_token(&self, token: Option<SecretString>) {
        *self.id_token.write() = token;
    }

    fn document_url(&self, collection: &str, user_id: &UserId) -> Result<Url, FirestoreError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FirestoreError::InvalidBaseUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend([
                "projects",
                self.config.project_id.as_str(),
                "databases",
                self.config.database_id.as_str(),
                "documents",
                collection,
                user_id.as_ref(),
            ]);
        Ok(url)
    }
}

#[async_trait]
impl UserProfileService for FirestoreUserProfileService {
    async fn load_profile_document(
        &self,
        collection: &str,
        user_id: &UserId,
    ) -> Result<Option<ProfileDocument>> {
        let url = self.document_url(collection, user_id)?;
        debug!(%url, "Reading document…");

        let request = {
            let id_token = self.id_token.read();
            let request = self.client.get(url);
            match id_token.as_ref() {
                Some(token) => request.bearer_auth(token.expose_secret()),
                None => request,
            }
        };

        let response = request.send().await.map_err(FirestoreError::from)?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            status if !status.is_success() => return Err(FirestoreError::Status(status).into()),
            _ => (),
        }

        let document = response
            .json::<FirestoreDocument>()
            .await
            .map_err(FirestoreError::from)?;

        Ok(Some(ProfileDocument::from(document.into_plain_fields())))
    }
}
