// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user_profiles::models::{DateFormat, ProfileDate, ProfileDocument, ProfileField};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub location: String,

    pub user_name: String,
    pub user_email: String,
    pub user_location: String,
    pub user_phone_number: String,
    pub user_bio: String,
    pub user_website: String,
    pub user_verification: String,
    pub user_credential: String,
    pub user_profile_image: String,

    pub user_birthday: ProfileDate,
    pub user_joined: ProfileDate,
}

impl UserProfile {
    /// An empty profile. Both dates are set to `now` and marked as missing.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            name: Default::default(),
            email: Default::default(),
            location: Default::default(),
            user_name: Default::default(),
            user_email: Default::default(),
            user_location: Default::default(),
            user_phone_number: Default::default(),
            user_bio: Default::default(),
            user_website: Default::default(),
            user_verification: Default::default(),
            user_credential: Default::default(),
            user_profile_image: Default::default(),
            user_birthday: ProfileDate::missing(now),
            user_joined: ProfileDate::missing(now),
        }
    }

    /// Maps `document` into a profile. Every field is extracted on its own, so a missing or
    /// mistyped field only affects itself.
    pub fn from_document(
        document: &ProfileDocument,
        date_format: &DateFormat,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            name: document.string(ProfileField::Name),
            email: document.string(ProfileField::Email),
            location: document.string(ProfileField::Location),
            user_name: document.string(ProfileField::UserName),
            user_email: document.string(ProfileField::UserEmail),
            user_location: document.string(ProfileField::UserLocation),
            user_phone_number: document.string(ProfileField::UserPhoneNumber),
            user_bio: document.string(ProfileField::UserBio),
            user_website: document.string(ProfileField::UserWebsite),
            user_verification: document.string(ProfileField::UserVerification),
            user_credential: document.string(ProfileField::UserCredential),
            user_profile_image: document.string(ProfileField::UserProfileImage),
            user_birthday: document.date(ProfileField::UserBirthday, date_format, now),
            user_joined: document.date(ProfileField::UserJoined, date_format, now),
        }
    }

    /// The canonical image URL. Changes to this value trigger a photo reload.
    pub fn profile_image_url(&self) -> &str {
        &self.user_profile_image
    }

    /// Serializes the profile back into document form, e.g. for an edit commit.
    pub fn to_document(&self, date_format: &DateFormat) -> ProfileDocument {
        let mut document = ProfileDocument::new()
            .with(ProfileField::Name, self.name.as_str())
            .with(ProfileField::Email, self.email.as_str())
            .with(ProfileField::Location, self.location.as_str())
            .with(ProfileField::UserName, self.user_name.as_str())
            .with(ProfileField::UserEmail, self.user_email.as_str())
            .with(ProfileField::UserLocation, self.user_location.as_str())
            .with(ProfileField::UserPhoneNumber, self.user_phone_number.as_str())
            .with(ProfileField::UserBio, self.user_bio.as_str())
            .with(ProfileField::UserWebsite, self.user_website.as_str())
            .with(ProfileField::UserVerification, self.user_verification.as_str())
            .with(ProfileField::UserCredential, self.user_credential.as_str())
            .with(ProfileField::UserProfileImage, self.user_profile_image.as_str());

        // Fallback dates are not real values and are not written back.
        if let Some(date) = self.user_birthday.known() {
            document.set(ProfileField::UserBirthday, date_format.format(&date));
        }
        if let Some(date) = self.user_joined.known() {
            document.set(ProfileField::UserJoined, date_format.format(&date));
        }

        document
    }
}
