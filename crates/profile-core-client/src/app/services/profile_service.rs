// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{debug, warn};

use profile_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynAuthenticationService, DynTimeProvider, DynUserProfileService,
};
use crate::domain::user_profiles::models::UserProfile;

#[derive(InjectDependencies)]
pub struct ProfileService {
    #[inject]
    authentication_service: DynAuthenticationService,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    time_provider: DynTimeProvider,
    #[inject]
    user_profile_service: DynUserProfileService,
}

impl ProfileService {
    /// Reads the current user's document and maps it into a `UserProfile`.
    ///
    /// Returns `Ok(None)` if nobody is signed in or if the user has no document.
    pub async fn load_user_profile(&self) -> Result<Option<UserProfile>> {
        let Some(user_id) = self.authentication_service.current_user() else {
            debug!("Not loading profile since no user is signed in.");
            return Ok(None);
        };

        let config = &self.ctx.config;
        let Some(document) = self
            .user_profile_service
            .load_profile_document(&config.users_collection, &user_id)
            .await?
        else {
            warn!(%user_id, collection = %config.users_collection, "User document does not exist.");
            return Ok(None);
        };

        debug!(%user_id, fields = document.len(), "Loaded user document.");

        Ok(Some(UserProfile::from_document(
            &document,
            &config.date_format,
            self.time_provider.now(),
        )))
    }
}
