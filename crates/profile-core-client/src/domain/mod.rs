// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod account;
pub mod general;
pub mod shared;
pub mod user_info;
pub mod user_profiles;
