// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use image::{DynamicImage, GenericImageView, ImageResult};
use url::Url;

/// A decoded image together with the URL it was loaded from. Cloning is cheap.
#[derive(Clone)]
pub struct PlatformImage {
    pub url: Url,
    image: Arc<DynamicImage>,
}

impl PlatformImage {
    pub fn new(url: Url, image: DynamicImage) -> Self {
        Self {
            url,
            image: Arc::new(image),
        }
    }

    pub fn decode(url: Url, data: &[u8]) -> ImageResult<Self> {
        Ok(Self::new(url, image::load_from_memory(data)?))
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl PartialEq for PlatformImage {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && (Arc::ptr_eq(&self.image, &other.image) || self.image == other.image)
    }
}

impl Debug for PlatformImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.image.dimensions();
        f.debug_struct("PlatformImage")
            .field("url", &self.url.as_str())
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}
