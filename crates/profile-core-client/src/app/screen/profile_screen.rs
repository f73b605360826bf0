// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::app::deps::{AppDependencies, DynClientEventDispatcher};
use crate::app::screen::screen_state::{
    ProfileScreenSnapshot, ProfileScreenState, ScreenCommand, ScreenEffect,
};
use crate::app::services::{ImageService, ProfileService};
use crate::domain::user_info::models::PlatformImage;
use crate::domain::user_profiles::models::UserProfile;

type Envelope = (ScreenCommand, Option<oneshot::Sender<()>>);

/// Backs a single profile screen.
///
/// All state lives in a task that applies commands one after another. The handle can be cloned
/// freely; the task ends after `dismiss` or once the last handle is dropped. Completions of
/// requests that are still in flight at that point are discarded.
#[derive(Clone)]
pub struct ProfileScreen {
    inner: Arc<ProfileScreenInner>,
}

struct ProfileScreenInner {
    commands: mpsc::UnboundedSender<Envelope>,
    snapshot: watch::Receiver<ProfileScreenSnapshot>,
    profile_service: ProfileService,
}

impl ProfileScreen {
    /// Creates the screen and spawns its state task. Must be called from within a tokio runtime.
    pub fn new(deps: &AppDependencies) -> Self {
        let initial_profile = UserProfile::new(deps.time_provider.now());
        let state = ProfileScreenState::new(initial_profile);

        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot().clone());

        let actor = ProfileScreenActor {
            state,
            commands: commands_rx,
            completions: commands_tx.downgrade(),
            snapshot: snapshot_tx,
            image_service: ImageService::from(deps),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        };
        tokio::spawn(actor.run());

        Self {
            inner: Arc::new(ProfileScreenInner {
                commands: commands_tx,
                snapshot: snapshot_rx,
                profile_service: ProfileService::from(deps),
            }),
        }
    }

    /// To be called when the screen appears. Starts `fetch_user_data` in the background.
    pub fn appear(&self) {
        let screen = self.clone();
        tokio::spawn(async move { screen.fetch_user_data().await });
    }

    /// Reads the signed-in user's document and applies it to the screen, then schedules exactly
    /// one photo load for the new profile image URL.
    ///
    /// Failures are logged and leave the screen unchanged. Returns after the profile was
    /// applied. The photo is updated later, once its download completed.
    pub async fn fetch_user_data(&self) {
        let profile = match self.inner.profile_service.load_user_profile().await {
            Ok(Some(profile)) => profile,
            Ok(None) => return,
            Err(err) => {
                warn!("Failed to load user profile. {}", err.to_string());
                return;
            }
        };
        self.send(ScreenCommand::Hydrate(profile)).await
    }

    /// Replaces the profile with an edited version. If the profile image URL changed the photo
    /// is reloaded. Clears the preview photo.
    pub async fn commit_edit(&self, profile: UserProfile) {
        self.send(ScreenCommand::CommitEdit(profile)).await
    }

    /// Shows `image` instead of the profile photo until the next edit is committed.
    pub async fn preview_photo(&self, image: Option<PlatformImage>) {
        self.send(ScreenCommand::PreviewPhoto(image)).await
    }

    pub async fn dismiss(&self) {
        self.send(ScreenCommand::Dismiss).await
    }

    pub fn snapshot(&self) -> ProfileScreenSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileScreenSnapshot> {
        self.inner.snapshot.clone()
    }

    async fn send(&self, command: ScreenCommand) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if let Err(err) = self.inner.commands.send((command, Some(ack_tx))) {
            debug!(command = ?err.0 .0, "Profile screen is gone.");
            return;
        }
        // The sender is dropped without an ack if the task ended in the meantime.
        let _ = ack_rx.await;
    }
}

impl From<&AppDependencies> for ProfileScreen {
    fn from(deps: &AppDependencies) -> Self {
        Self::new(deps)
    }
}

struct ProfileScreenActor {
    state: ProfileScreenState,
    commands: mpsc::UnboundedReceiver<Envelope>,
    completions: mpsc::WeakUnboundedSender<Envelope>,
    snapshot: watch::Sender<ProfileScreenSnapshot>,
    image_service: ImageService,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl ProfileScreenActor {
    async fn run(mut self) {
        while let Some((command, ack)) = self.commands.recv().await {
            let is_dismiss = matches!(command, ScreenCommand::Dismiss);
            let effects = self.state.apply(command);

            let state = &self.state;
            self.snapshot.send_if_modified(|published| {
                if *published == *state.snapshot() {
                    return false;
                }
                *published = state.snapshot().clone();
                true
            });

            for effect in effects {
                self.perform(effect);
            }

            if let Some(ack) = ack {
                let _ = ack.send(());
            }

            if is_dismiss {
                break;
            }
        }
        info!("Profile screen closed.");
    }

    fn perform(&self, effect: ScreenEffect) {
        match effect {
            ScreenEffect::Dispatch(event) => self.client_event_dispatcher.dispatch_event(event),
            ScreenEffect::LoadPhoto { token, url } => {
                debug!(?token, %url, "Loading profile photo.");
                let completions = self.completions.clone();
                self.image_service.load_image_from_url(&url, move |image| {
                    let Some(completions) = completions.upgrade() else {
                        return;
                    };
                    let _ = completions.send((ScreenCommand::PhotoLoaded { token, image }, None));
                });
            }
        }
    }
}
