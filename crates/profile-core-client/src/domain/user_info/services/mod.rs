// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use image_fetch_service::ImageFetchService;

mod image_fetch_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::image_fetch_service::MockImageFetchService;
}
