use crate::error::RegistryResult;
use crate::models::{Contact, NewContact};

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so sessions can be driven
/// against any implementation.
pub trait ContactRepository {
    /// Validate and append a new contact, returning the stored record.
    fn add(&mut self, contact: NewContact) -> RegistryResult<&Contact>;

    /// Retrieve every contact, in insertion order.
    fn get_all_contacts(&self) -> &[Contact];

    /// Add a contact from three possibly missing values.
    fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> RegistryResult<&Contact> {
        self.add(NewContact::from_parts(first_name, last_name, phone_number))
    }

    /// Number of contacts held.
    fn len(&self) -> usize {
        self.get_all_contacts().len()
    }

    /// True when nothing has been added.
    fn is_empty(&self) -> bool {
        self.get_all_contacts().is_empty()
    }
}
