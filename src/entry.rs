//! Schema-driven identity record.
//!
//! Entries are owned by the external store; this crate only references them.
//! Because the id and password field names are configuration-driven per
//! call, an entry is modeled as a mapping from field name to JSON value
//! rather than a static struct.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field holding the opaque single-use reset token, nullable.
pub const RESET_TOKEN_FIELD: &str = "_auth_reset_token";

/// Field holding the RFC 3339 timestamp of token issuance, nullable.
///
/// Set and cleared together with [`RESET_TOKEN_FIELD`] in a single store
/// update; the pair is either fully present or fully absent.
pub const RESET_SENT_AT_FIELD: &str = "_auth_reset_sent_at";

/// Field-name to value mapping used for lookups and partial updates.
pub type FieldValues = BTreeMap<String, Value>;

/// An identity-bearing record of a configurable type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry {
    fields: FieldValues,
}

impl Entry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a raw field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Look up a field as a string; `None` for absent, null or non-string
    /// values.
    #[must_use]
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Apply a partial update in place; a null value clears the field.
    ///
    /// Store implementations can use this to honor the nullable-update
    /// contract of `update_decorated_entry`.
    pub fn apply_updates(&mut self, updates: &FieldValues) {
        for (field, value) in updates {
            if value.is_null() {
                self.fields.remove(field);
            } else {
                self.fields.insert(field.clone(), value.clone());
            }
        }
    }

    #[must_use]
    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    /// Render the entry as a JSON object, for injection into a notifier
    /// context.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(field, value)| (field.clone(), value.clone()))
                .collect(),
        )
    }

    /// Name of the hash field derived from a configured password field.
    #[must_use]
    pub fn hash_field(password_field: &str) -> String {
        format!("{password_field}_hash")
    }
}

impl From<FieldValues> for Entry {
    fn from(fields: FieldValues) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for Entry {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
