// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::app::deps::AppConfig;
pub use crate::app::screen::ProfileScreenSnapshot;
pub use crate::domain::shared::models::{UserId, UserIdError};
pub use crate::domain::user_info::models::PlatformImage;
pub use crate::domain::user_profiles::models::{
    DateFormat, DateSource, ProfileDate, ProfileDocument, ProfileField, UserProfile,
};
