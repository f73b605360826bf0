// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// The stable unique identifier the authentication provider assigns to a user. It doubles as
/// the key of the user's document in the remote document store.
pub struct UserId(String);

#[derive(Error, Debug, PartialEq)]
pub enum UserIdError {
    #[error("A user id must not be empty.")]
    Empty,
    #[error("A user id must not contain '/'.")]
    ContainsSlash,
}

impl UserId {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(UserIdError::Empty);
        }
        // Document keys are path segments.
        if s.contains('/') {
            return Err(UserIdError::ContainsSlash);
        }
        Ok(UserId(s.to_string()))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
