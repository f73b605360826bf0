// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use firestore_user_profile_service::{
    FirestoreConfig, FirestoreError, FirestoreUserProfileService,
};
pub use in_memory_user_profile_service::InMemoryUserProfileService;

mod firestore_user_profile_service;
mod firestore_value;
mod in_memory_user_profile_service;
