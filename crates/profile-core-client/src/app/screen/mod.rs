// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use profile_screen::ProfileScreen;
pub use screen_state::{PhotoRequestToken, ProfileScreenSnapshot};

mod profile_screen;
mod screen_state;
