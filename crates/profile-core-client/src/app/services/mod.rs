// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use image_service::ImageService;
pub use profile_service::ProfileService;

mod image_service;
mod profile_service;
