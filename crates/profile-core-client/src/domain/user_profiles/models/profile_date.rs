// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSource {
    /// The date was read from the document.
    Parsed,
    /// The document had no value for the field.
    Missing,
    /// The document had a value for the field that couldn't be parsed.
    Unparseable,
}

/// A date field of a profile. It is always set; when the document didn't provide a usable
/// value `date` holds the time the profile was hydrated and `source` says why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDate {
    pub date: DateTime<Utc>,
    pub source: DateSource,
}

impl ProfileDate {
    pub fn parsed(date: DateTime<Utc>) -> Self {
        Self {
            date,
            source: DateSource::Parsed,
        }
    }

    pub fn missing(now: DateTime<Utc>) -> Self {
        Self {
            date: now,
            source: DateSource::Missing,
        }
    }

    pub fn unparseable(now: DateTime<Utc>) -> Self {
        Self {
            date: now,
            source: DateSource::Unparseable,
        }
    }

    /// Returns the date only if it was actually read from the document.
    pub fn known(&self) -> Option<DateTime<Utc>> {
        match self.source {
            DateSource::Parsed => Some(self.date),
            DateSource::Missing | DateSource::Unparseable => None,
        }
    }
}
