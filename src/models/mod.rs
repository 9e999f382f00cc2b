//! Data models for registry entities.
//!
//! This module contains the validated contact record and the unvalidated
//! payload it is built from.

pub mod contact;
pub mod new_contact;

pub use contact::{Contact, ContactField};
pub use new_contact::NewContact;
