// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use tracing::info;

use crate::domain::account::services::AuthenticationService;
use crate::domain::shared::models::UserId;

/// Holds the session handed over by the platform's authentication provider.
#[derive(Default)]
pub struct StaticAuthenticationService {
    current_user: RwLock<Option<UserId>>,
}

impl StaticAuthenticationService {
    pub fn new(user_id: Option<UserId>) -> Self {
        Self {
            current_user: RwLock::new(user_id),
        }
    }

    pub fn sign_in(&self, user_id: UserId) {
        info!(%user_id, "User signed in.");
        self.current_user.write().replace(user_id);
    }

    pub fn sign_out(&self) {
        if let Some(user_id) = self.current_user.write().take() {
            info!(%user_id, "User signed out.");
        }
    }
}

impl AuthenticationService for StaticAuthenticationService {
    fn current_user(&self) -> Option<UserId> {
        self.current_user.read().clone()
    }
}
