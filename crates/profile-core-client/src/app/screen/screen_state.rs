// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::debug;

use crate::domain::user_info::models::PlatformImage;
use crate::domain::user_profiles::models::UserProfile;
use crate::ClientEvent;

/// Identifies a photo load. Only the most recently issued token may update the displayed photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhotoRequestToken(u64);

/// What a profile screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileScreenSnapshot {
    pub profile: UserProfile,
    /// The photo loaded from `profile.user_profile_image`.
    pub photo: Option<PlatformImage>,
    /// A freshly picked photo that is shown until the edit is committed.
    pub preview_photo: Option<PlatformImage>,
    pub is_dismissed: bool,
}

impl ProfileScreenSnapshot {
    pub fn visible_photo(&self) -> Option<&PlatformImage> {
        self.preview_photo.as_ref().or(self.photo.as_ref())
    }
}

#[derive(Debug)]
pub(crate) enum ScreenCommand {
    Hydrate(UserProfile),
    CommitEdit(UserProfile),
    PreviewPhoto(Option<PlatformImage>),
    PhotoLoaded {
        token: PhotoRequestToken,
        image: Option<PlatformImage>,
    },
    Dismiss,
}

#[derive(Debug, PartialEq)]
pub(crate) enum ScreenEffect {
    LoadPhoto {
        token: PhotoRequestToken,
        url: String,
    },
    Dispatch(ClientEvent),
}

/// The mutable state of a profile screen. It is owned by exactly one writer which applies
/// commands in order.
pub(crate) struct ProfileScreenState {
    snapshot: ProfileScreenSnapshot,
    last_issued_token: PhotoRequestToken,
}

impl ProfileScreenState {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            snapshot: ProfileScreenSnapshot {
                profile,
                photo: None,
                preview_photo: None,
                is_dismissed: false,
            },
            last_issued_token: PhotoRequestToken(0),
        }
    }

    pub fn snapshot(&self) -> &ProfileScreenSnapshot {
        &self.snapshot
    }

    pub fn apply(&mut self, command: ScreenCommand) -> Vec<ScreenEffect> {
        let mut effects = vec![];

        if self.snapshot.is_dismissed {
            debug!(?command, "Ignoring command for dismissed screen.");
            return effects;
        }

        match command {
            ScreenCommand::Hydrate(profile) => {
                if self.replace_profile(profile) {
                    effects.push(ScreenEffect::Dispatch(ClientEvent::ProfileChanged));
                }
                // Every fetch reloads the photo, even if the URL did not change.
                effects.push(self.load_photo());
            }
            ScreenCommand::CommitEdit(profile) => {
                let url_changed = profile.profile_image_url() != self.snapshot.profile_image_url();

                if self.replace_profile(profile) {
                    effects.push(ScreenEffect::Dispatch(ClientEvent::ProfileChanged));
                }
                if self.snapshot.preview_photo.take().is_some() {
                    effects.push(ScreenEffect::Dispatch(ClientEvent::PhotoPreviewChanged));
                }
                if url_changed {
                    effects.push(self.load_photo());
                }
            }
            ScreenCommand::PreviewPhoto(image) => {
                if self.snapshot.preview_photo != image {
                    self.snapshot.preview_photo = image;
                    effects.push(ScreenEffect::Dispatch(ClientEvent::PhotoPreviewChanged));
                }
            }
            ScreenCommand::PhotoLoaded { token, image } => {
                if token != self.last_issued_token {
                    debug!(?token, latest = ?self.last_issued_token, "Discarding stale photo.");
                    return effects;
                }
                if self.snapshot.photo != image {
                    self.snapshot.photo = image;
                    effects.push(ScreenEffect::Dispatch(ClientEvent::ProfilePhotoChanged));
                }
            }
            ScreenCommand::Dismiss => {
                self.snapshot.is_dismissed = true;
            }
        }

        effects
    }

    fn replace_profile(&mut self, profile: UserProfile) -> bool {
        if self.snapshot.profile == profile {
            return false;
        }
        self.snapshot.profile = profile;
        true
    }

    fn load_photo(&mut self) -> ScreenEffect {
        self.last_issued_token = PhotoRequestToken(self.last_issued_token.0 + 1);
        ScreenEffect::LoadPhoto {
            token: self.last_issued_token,
            url: self.snapshot.profile.user_profile_image.clone(),
        }
    }
}

impl ProfileScreenSnapshot {
    fn profile_image_url(&self) -> &str {
        self.profile.profile_image_url()
    }
}
