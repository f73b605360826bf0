// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// One or more fields of the displayed profile changed.
    ProfileChanged,

    /// The photo loaded from the profile image URL changed or was removed.
    ProfilePhotoChanged,

    /// A photo picked during an edit was set or cleared.
    PhotoPreviewChanged,
}
