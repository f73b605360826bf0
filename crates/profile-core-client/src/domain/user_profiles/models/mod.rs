// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use date_format::DateFormat;
pub use profile_date::{DateSource, ProfileDate};
pub use profile_document::ProfileDocument;
pub use profile_field::ProfileField;
pub use user_profile::UserProfile;

mod date_format;
mod profile_date;
mod profile_document;
mod profile_field;
mod user_profile;
