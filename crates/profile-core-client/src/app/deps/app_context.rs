// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use crate::domain::user_profiles::models::DateFormat;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The collection in the document store that holds one document per user.
    pub users_collection: String,
    /// The format `userBirthday` and `userJoined` are stored in.
    pub date_format: DateFormat,
    /// Applies to profile photo downloads.
    pub image_request_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_collection: "users".to_string(),
            date_format: Default::default(),
            image_request_timeout: Duration::from_secs(30),
            user_agent: format!("profile-core/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Default)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
