// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::AppDependencies;
use crate::app::screen::ProfileScreen;
use crate::client_builder::{
    ClientBuilder, UndefinedAuthenticationService, UndefinedUserProfileService,
};
use crate::services::{ImageService, ProfileService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedAuthenticationService, UndefinedUserProfileService>
    {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub images: ImageService,
    pub profile: ProfileService,
    pub(crate) deps: AppDependencies,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// Opens a new profile screen. Each screen owns its own state. Must be called from within
    /// a tokio runtime.
    pub fn open_profile_screen(&self) -> ProfileScreen {
        ProfileScreen::new(&self.inner.deps)
    }
}
