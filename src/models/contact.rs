//! Contact model representing a person held by the registry.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fields every contact carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl ContactField {
    /// All fields, in the order they are validated.
    pub const ALL: [ContactField; 3] = [Self::FirstName, Self::LastName, Self::PhoneNumber];

    /// The field's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::PhoneNumber => "phone_number",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact in the registry.
///
/// Contacts are immutable once built. There is no identity field: two
/// contacts with the same three values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl Contact {
    /// Create a contact from values that are already known to be present.
    ///
    /// Use [`NewContact::into_contact`](super::NewContact::into_contact) when any
    /// of the values may be missing.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// "First Last", as shown in logs.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True when every field equals the given values.
    pub fn matches(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.phone_number == phone_number
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.phone_number)
    }
}
