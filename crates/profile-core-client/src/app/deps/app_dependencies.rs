// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::account::services::AuthenticationService;
use crate::domain::general::services::TimeProvider;
use crate::domain::user_info::services::ImageFetchService;
use crate::domain::user_profiles::services::UserProfileService;

pub type DynAppContext = Arc<AppContext>;
pub type DynAuthenticationService = Arc<dyn AuthenticationService>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynImageFetchService = Arc<dyn ImageFetchService>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynUserProfileService = Arc<dyn UserProfileService>;

#[derive(Clone)]
pub struct AppDependencies {
    pub authentication_service: DynAuthenticationService,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub image_fetch_service: DynImageFetchService,
    pub time_provider: DynTimeProvider,
    pub user_profile_service: DynUserProfileService,
}
