//! Shared fixtures for registry integration tests.
//!
//! Provides per-test setup and teardown around a fresh registry, a
//! once-per-binary tracing setup, and phone number providers.

#![allow(dead_code)]

use contact_registry::{ContactRegistry, ContactRepository};
use once_cell::sync::Lazy;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

pub const FIRST_NAME: &str = "Sanjay";
pub const LAST_NAME: &str = "Sahu";
pub const PHONE_NUMBER: &str = "0456773223";

/// Installs a test subscriber once per test binary.
static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
    tracing::info!("Registry test suite starting");
});

/// A fresh registry for one test. Logs on creation and on drop.
pub struct RegistryFixture {
    name: &'static str,
    registry: ContactRegistry,
}

impl RegistryFixture {
    pub fn new(name: &'static str) -> Self {
        Lazy::force(&TRACING);
        tracing::debug!(test = name, "Setting up registry");
        Self {
            name,
            registry: ContactRegistry::new(),
        }
    }
}

impl Deref for RegistryFixture {
    type Target = ContactRegistry;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}

impl DerefMut for RegistryFixture {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.registry
    }
}

impl Drop for RegistryFixture {
    fn drop(&mut self) {
        tracing::debug!(
            test = self.name,
            contact_count = self.registry.len(),
            "Tearing down registry"
        );
    }
}

/// Phone numbers used by the provider-driven parameterized tests.
pub fn phone_numbers() -> Vec<&'static str> {
    vec!["0123456789", "0456773223", "0456773224"]
}

/// Parse comma-separated rows, returning the first column of each non-empty row.
pub fn first_column(csv: &str) -> Vec<String> {
    csv.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split(',').next())
        .map(|cell| cell.trim().trim_matches('"').to_string())
        .collect()
}

/// Phone numbers read from `tests/data/phone_numbers.csv`.
pub fn phone_numbers_from_file() -> Vec<String> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "data", "phone_numbers.csv"]
        .iter()
        .collect();
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    first_column(&text)
}

/// Assert the registry holds exactly one contact, the standard sample with `phone`.
pub fn assert_single_contact(registry: &ContactRegistry, phone: &str) {
    let contacts = registry.get_all_contacts();
    assert!(!contacts.is_empty());
    assert_eq!(contacts.len(), 1);
    assert!(contacts
        .iter()
        .any(|contact| contact.matches(FIRST_NAME, LAST_NAME, phone)));
}
