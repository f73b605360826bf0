// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::user_profiles::models::{DateFormat, ProfileDate, ProfileField};

/// A user document as read from the document store. Values are kept untyped; typed access goes
/// through the extraction methods which never fail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileDocument {
    fields: HashMap<String, Value>,
}

impl ProfileDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: ProfileField, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn remove(&mut self, field: ProfileField) -> Option<Value> {
        self.fields.remove(field.as_ref())
    }

    pub fn get(&self, field: ProfileField) -> Option<&Value> {
        self.fields.get(field.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the string value of `field` or an empty string if it is missing or isn't a
    /// string.
    pub fn string(&self, field: ProfileField) -> String {
        match self.get(field) {
            Some(Value::String(value)) => value.clone(),
            _ => String::new(),
        }
    }

    /// Parses `field` with `format`. Falls back to `now` if the field is missing, empty or
    /// cannot be parsed.
    pub fn date(&self, field: ProfileField, format: &DateFormat, now: DateTime<Utc>) -> ProfileDate {
        match self.get(field) {
            None | Some(Value::Null) => ProfileDate::missing(now),
            Some(Value::String(value)) if value.trim().is_empty() => ProfileDate::missing(now),
            Some(Value::String(value)) => format
                .parse(value)
                .map(ProfileDate::parsed)
                .unwrap_or_else(|| ProfileDate::unparseable(now)),
            Some(_) => ProfileDate::unparseable(now),
        }
    }
}

impl From<HashMap<String, Value>> for ProfileDocument {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(ProfileField, Value)> for ProfileDocument {
    fn from_iter<T: IntoIterator<Item = (ProfileField, Value)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.to_string(), value))
                .collect(),
        }
    }
}
