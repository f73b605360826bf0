// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::runtime::Handle;
use tracing::{debug, error};
use url::Url;

use profile_proc_macros::InjectDependencies;

use crate::app::deps::DynImageFetchService;
use crate::domain::user_info::models::PlatformImage;

#[derive(InjectDependencies, Clone)]
pub struct ImageService {
    #[inject]
    image_fetch_service: DynImageFetchService,
}

impl ImageService {
    /// Loads the image at `url` and hands the result to `completion`.
    ///
    /// `completion` is called exactly once. If `url` is not a valid http(s) URL it is called
    /// with `None` before this method returns. Otherwise it is called from a spawned task once
    /// the download finished, with `None` on any kind of failure.
    ///
    /// Loads are not cancelled when a new one is started.
    pub fn load_image_from_url<F>(&self, url: &str, completion: F)
    where
        F: FnOnce(Option<PlatformImage>) + Send + 'static,
    {
        let Some(url) = parse_image_url(url) else {
            completion(None);
            return;
        };

        let Ok(handle) = Handle::try_current() else {
            error!(%url, "Cannot load image outside of a tokio runtime.");
            completion(None);
            return;
        };

        let service = self.clone();
        handle.spawn(async move {
            let image = service.fetch(url).await;
            completion(image)
        });
    }

    /// Async variant of `load_image_from_url`.
    pub async fn load_image(&self, url: &str) -> Option<PlatformImage> {
        self.fetch(parse_image_url(url)?).await
    }

    async fn fetch(&self, url: Url) -> Option<PlatformImage> {
        let result = AssertUnwindSafe(self.image_fetch_service.load_image(&url))
            .catch_unwind()
            .await;

        match result {
            Ok(Ok(image)) => {
                debug!(%url, width = image.width(), height = image.height(), "Loaded image.");
                Some(image)
            }
            Ok(Err(err)) => {
                debug!(%url, "Failed to load image. {}", err.to_string());
                None
            }
            Err(_) => {
                error!(%url, "Image loader panicked.");
                None
            }
        }
    }
}

fn parse_image_url(url: &str) -> Option<Url> {
    let url = match Url::parse(url.trim()) {
        Ok(url) => url,
        Err(err) => {
            if !url.is_empty() {
                debug!(url, "Ignoring invalid image URL. {}", err.to_string());
            }
            return None;
        }
    };

    match url.scheme() {
        "http" | "https" => Some(url),
        scheme => {
            debug!(%url, scheme, "Ignoring image URL with unsupported scheme.");
            None
        }
    }
}
