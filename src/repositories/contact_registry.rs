//! In-memory contact registry.

use super::traits::ContactRepository;
use crate::error::RegistryResult;
use crate::models::{Contact, NewContact};
use tracing::{debug, warn};

/// Ordered, in-memory collection of contacts.
///
/// A registry starts empty and only grows. Every stored contact has all
/// three fields present, since payloads are validated before insertion.
///
/// # Example
///
/// ```
/// use contact_registry::{ContactRegistry, ContactRepository};
///
/// let mut registry = ContactRegistry::new();
/// registry.add_contact(Some("Sanjay"), Some("Sahu"), Some("0456773223")).unwrap();
/// assert_eq!(registry.get_all_contacts().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over contacts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}

impl ContactRepository for ContactRegistry {
    fn add(&mut self, contact: NewContact) -> RegistryResult<&Contact> {
        let contact = contact.into_contact().inspect_err(|e| {
            warn!(field = %e.field(), "Rejected contact: {}", e);
        })?;

        debug!(
            first_name = %contact.first_name(),
            last_name = %contact.last_name(),
            contact_count = self.contacts.len() + 1,
            "Contact added"
        );

        self.contacts.push(contact);
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

impl<'a> IntoIterator for &'a ContactRegistry {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
