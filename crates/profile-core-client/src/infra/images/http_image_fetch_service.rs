// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use image::ImageError;
use reqwest::StatusCode;
use thiserror::Error;
use tokio::task::JoinError;
use url::Url;

use crate::domain::user_info::models::PlatformImage;
use crate::domain::user_info::services::ImageFetchService;

#[derive(Error, Debug)]
pub enum ImageFetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {0}.")]
    Status(StatusCode),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Join(#[from] JoinError),
}

/// Downloads images with a plain GET. No authentication, no caching.
pub struct HttpImageFetchService {
    client: reqwest::Client,
}

impl HttpImageFetchService {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ImageFetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetchService for HttpImageFetchService {
    async fn load_image(&self, url: &Url) -> Result<PlatformImage> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(ImageFetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::Status(status).into());
        }

        let data = response.bytes().await.map_err(ImageFetchError::from)?;

        // Decoding is CPU bound.
        let url = url.clone();
        let image = tokio::task::spawn_blocking(move || PlatformImage::decode(url, &data))
            .await
            .map_err(ImageFetchError::from)?
            .map_err(ImageFetchError::from)?;

        Ok(image)
    }
}
