// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynImageFetchService, DynTimeProvider,
};
use crate::app::event_handlers::ClientEventDispatcher;
use crate::app::services::{ImageService, ProfileService};
use crate::client::ClientInner;
use crate::domain::account::services::AuthenticationService;
use crate::domain::general::services::{SystemTimeProvider, TimeProvider};
use crate::domain::user_info::services::ImageFetchService;
use crate::domain::user_profiles::services::UserProfileService;
use crate::infra::images::HttpImageFetchService;
use crate::{Client, ClientDelegate};

pub struct UndefinedAuthenticationService;
pub struct UndefinedUserProfileService;

pub struct ClientBuilder<A, P> {
    app_config: AppConfig,
    authentication_service: A,
    delegate: Option<Box<dyn ClientDelegate>>,
    image_fetch_service: Option<DynImageFetchService>,
    time_provider: DynTimeProvider,
    user_profile_service: P,
}

impl ClientBuilder<UndefinedAuthenticationService, UndefinedUserProfileService> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            authentication_service: UndefinedAuthenticationService,
            delegate: None,
            image_fetch_service: None,
            time_provider: Arc::new(SystemTimeProvider::default()),
            user_profile_service: UndefinedUserProfileService,
        }
    }
}

impl<P> ClientBuilder<UndefinedAuthenticationService, P> {
    pub fn set_authentication_service<A: AuthenticationService + 'static>(
        self,
        authentication_service: A,
    ) -> ClientBuilder<A, P> {
        ClientBuilder {
            app_config: self.app_config,
            authentication_service,
            delegate: self.delegate,
            image_fetch_service: self.image_fetch_service,
            time_provider: self.time_provider,
            user_profile_service: self.user_profile_service,
        }
    }
}

impl<A> ClientBuilder<A, UndefinedUserProfileService> {
    pub fn set_user_profile_service<P: UserProfileService + 'static>(
        self,
        user_profile_service: P,
    ) -> ClientBuilder<A, P> {
        ClientBuilder {
            app_config: self.app_config,
            authentication_service: self.authentication_service,
            delegate: self.delegate,
            image_fetch_service: self.image_fetch_service,
            time_provider: self.time_provider,
            user_profile_service,
        }
    }
}

impl<A, P> ClientBuilder<A, P> {
    /// Replaces the default HTTP image loader.
    pub fn set_image_fetch_service<I: ImageFetchService + 'static>(mut self, service: I) -> Self {
        self.image_fetch_service = Some(Arc::new(service));
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl<A: AuthenticationService + 'static, P: UserProfileService + 'static> ClientBuilder<A, P> {
    pub fn build(self) -> Result<Client> {
        let image_fetch_service = match self.image_fetch_service {
            Some(service) => service,
            None => Arc::new(HttpImageFetchService::new(
                self.app_config.image_request_timeout,
                &self.app_config.user_agent,
            )?),
        };

        let dependencies = AppDependencies {
            authentication_service: Arc::new(self.authentication_service),
            client_event_dispatcher: Arc::new(ClientEventDispatcher::new(self.delegate)),
            ctx: Arc::new(AppContext::new(self.app_config)),
            image_fetch_service,
            time_provider: self.time_provider,
            user_profile_service: Arc::new(self.user_profile_service),
        };

        let client_inner = Arc::new(ClientInner {
            images: ImageService::from(&dependencies),
            profile: ProfileService::from(&dependencies),
            deps: dependencies,
        });

        Ok(Client::from(client_inner))
    }
}
