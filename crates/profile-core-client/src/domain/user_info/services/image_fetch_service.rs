// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::domain::user_info::models::PlatformImage;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ImageFetchService: Send + Sync {
    /// Downloads and decodes the image at `url`.
    async fn load_image(&self, url: &Url) -> Result<PlatformImage>;
}
