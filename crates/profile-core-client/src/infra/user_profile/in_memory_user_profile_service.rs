// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::shared::models::UserId;
use crate::domain::user_profiles::models::ProfileDocument;
use crate::domain::user_profiles::services::UserProfileService;

/// A document store kept in memory, keyed by collection and user id.
#[derive(Default)]
pub struct InMemoryUserProfileService {
    documents: RwLock<HashMap<(String, UserId), ProfileDocument>>,
}

impl InMemoryUserProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, collection: &str, user_id: &UserId, document: ProfileDocument) {
        self.documents
            .write()
            .insert((collection.to_string(), user_id.clone()), document);
    }

    pub fn remove(&self, collection: &str, user_id: &UserId) -> Option<ProfileDocument> {
        self.documents
            .write()
            .remove(&(collection.to_string(), user_id.clone()))
    }
}

#[async_trait]
impl UserProfileService for InMemoryUserProfileService {
    async fn load_profile_document(
        &self,
        collection: &str,
        user_id: &UserId,
    ) -> Result<Option<ProfileDocument>> {
        Ok(self
            .documents
            .read()
            .get(&(collection.to_string(), user_id.clone()))
            .cloned())
    }
}
