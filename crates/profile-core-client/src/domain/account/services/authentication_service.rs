// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::shared::models::UserId;

/// Exposes the currently authenticated user. The profile screen only ever reads the identifier.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthenticationService: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

impl<T: AuthenticationService + ?Sized> AuthenticationService for Arc<T> {
    fn current_user(&self) -> Option<UserId> {
        (**self).current_user()
    }
}
