// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use http_image_fetch_service::{HttpImageFetchService, ImageFetchError};

mod http_image_fetch_service;
