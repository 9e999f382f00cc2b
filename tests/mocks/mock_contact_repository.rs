use contact_registry::error::RegistryResult;
use contact_registry::models::{Contact, NewContact};
use contact_registry::repositories::ContactRepository;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Stores contacts in a plain vector and tracks method calls so tests can
/// verify how a session drives its repository.
#[derive(Default)]
pub struct MockContactRepository {
    contacts: Vec<Contact>,
    call_counts: HashMap<String, usize>,
}

impl MockContactRepository {
    /// Seed the mock with contacts, bypassing validation and call tracking.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            call_counts: HashMap::new(),
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&mut self) {
        self.call_counts.clear();
    }

    fn track_call(&mut self, method: &str) {
        *self.call_counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, contact: NewContact) -> RegistryResult<&Contact> {
        self.track_call("add");

        let contact = contact.into_contact()?;
        self.contacts.push(contact);
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }
}
