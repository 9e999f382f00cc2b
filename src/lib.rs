//! Contact Registry - an in-memory collection of contacts.
//!
//! This library provides a small contact registry with an add operation and a
//! list operation, plus a line-delimited JSON session for driving one registry
//! over stdin/stdout.
//!
//! # Architecture
//!
//! - **models**: The contact record and the unvalidated payload it is built from
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: The repository trait and the in-memory registry
//! - **session**: Request handling for a registry session

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, RegistryError, RegistryResult, SessionError};
pub use models::{Contact, ContactField, NewContact};
pub use repositories::{ContactRegistry, ContactRepository};
pub use session::{run_session, Request, Response, SessionSummary};
