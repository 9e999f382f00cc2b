//! Unvalidated payload for adding a contact.

use super::contact::{Contact, ContactField};
use crate::error::{RegistryError, RegistryResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Values supplied for a new contact, any of which may be missing.
///
/// A JSON `null` and an absent key both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NewContact {
    /// First name of the contact
    pub first_name: Option<String>,

    /// Last name of the contact
    pub last_name: Option<String>,

    /// Phone number of the contact
    pub phone_number: Option<String>,
}

impl NewContact {
    /// Build a payload from borrowed, possibly missing values.
    pub fn from_parts(
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Self {
        Self {
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            phone_number: phone_number.map(str::to_string),
        }
    }

    /// The first missing field, checked in first name, last name, phone number order.
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.value(*field).is_none())
    }

    fn value(&self, field: ContactField) -> Option<&String> {
        match field {
            ContactField::FirstName => self.first_name.as_ref(),
            ContactField::LastName => self.last_name.as_ref(),
            ContactField::PhoneNumber => self.phone_number.as_ref(),
        }
    }

    /// Validate the payload and build a [`Contact`].
    ///
    /// Empty strings are accepted; only missing values are rejected.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidArgument` naming the first missing field.
    pub fn into_contact(self) -> RegistryResult<Contact> {
        match (self.first_name, self.last_name, self.phone_number) {
            (Some(first_name), Some(last_name), Some(phone_number)) => {
                Ok(Contact::new(first_name, last_name, phone_number))
            }
            (None, _, _) => Err(RegistryError::InvalidArgument {
                field: ContactField::FirstName,
            }),
            (_, None, _) => Err(RegistryError::InvalidArgument {
                field: ContactField::LastName,
            }),
            (_, _, None) => Err(RegistryError::InvalidArgument {
                field: ContactField::PhoneNumber,
            }),
        }
    }
}

impl From<Contact> for NewContact {
    fn from(contact: Contact) -> Self {
        Self::from_parts(
            Some(contact.first_name()),
            Some(contact.last_name()),
            Some(contact.phone_number()),
        )
    }
}
