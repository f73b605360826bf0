// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::UserId;
use crate::domain::user_profiles::models::ProfileDocument;

/// Read access to the remote document store holding one document per user.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserProfileService: Send + Sync {
    /// Reads the document keyed by `user_id` from `collection`. Returns `Ok(None)` if the
    /// document doesn't exist.
    async fn load_profile_document(
        &self,
        collection: &str,
        user_id: &UserId,
    ) -> Result<Option<ProfileDocument>>;
}

/// Lets callers keep a handle to the store they hand to the client, e.g. to update credentials.
#[async_trait]
impl<T: UserProfileService + ?Sized> UserProfileService for Arc<T> {
    async fn load_profile_document(
        &self,
        collection: &str,
        user_id: &UserId,
    ) -> Result<Option<ProfileDocument>> {
        (**self).load_profile_document(collection, user_id).await
    }
}
