// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The fields of a user document, serialized with their names in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    Name,
    Email,
    Location,
    UserName,
    UserEmail,
    UserLocation,
    UserPhoneNumber,
    UserBio,
    UserVerification,
    UserCredential,
    UserProfileImage,
    UserWebsite,
    UserBirthday,
    UserJoined,
}

impl ProfileField {
    pub fn is_date(&self) -> bool {
        matches!(self, Self::UserBirthday | Self::UserJoined)
    }
}
