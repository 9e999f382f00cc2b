//! Request handlers for a registry session.
//!
//! Each request line is decoded into a [`Request`], dispatched against the
//! session's repository, and answered with exactly one [`Response`].

use crate::error::RegistryError;
use crate::models::{Contact, ContactField, NewContact};
use crate::repositories::ContactRepository;
use once_cell::sync::Lazy;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// JSON schema of [`Request`], built on first use.
static REQUEST_SCHEMA: Lazy<serde_json::Value> =
    Lazy::new(|| serde_json::to_value(schema_for!(Request)).unwrap_or_default());

/// A single session request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Add a contact; every field must be present
    AddContact(NewContact),

    /// List every contact added so far, in insertion order
    GetAllContacts,

    /// Return the JSON schema of the request format
    Describe,
}

/// Reply to a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok(Reply),
    Error(ErrorReply),
}

/// Payload of a successful reply. Only the fields relevant to the request are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// Kind of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A contact field was missing
    InvalidArgument,
    /// The line was not a valid request
    InvalidRequest,
}

/// Payload of a failed reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub kind: ErrorKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<ContactField>,

    pub message: String,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub(crate) fn invalid_request(message: impl Into<String>) -> Self {
        Self::Error(ErrorReply {
            kind: ErrorKind::InvalidRequest,
            field: None,
            message: message.into(),
        })
    }
}

impl From<RegistryError> for Response {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidArgument { field } => Self::Error(ErrorReply {
                kind: ErrorKind::InvalidArgument,
                field: Some(field),
                message: err.to_string(),
            }),
        }
    }
}

/// Decode one request line and handle it.
///
/// Lines that fail to decode are answered with an `invalid_request` error.
pub fn handle_line<R: ContactRepository + ?Sized>(repository: &mut R, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle_request(repository, request),
        Err(e) => {
            debug!(error = %e, "Malformed request");
            Response::invalid_request(format!("Malformed request: {}", e))
        }
    }
}

/// Dispatch a decoded request against the repository.
pub fn handle_request<R: ContactRepository + ?Sized>(
    repository: &mut R,
    request: Request,
) -> Response {
    match request {
        Request::AddContact(payload) => match repository.add(payload) {
            Ok(contact) => Response::Ok(Reply {
                contact: Some(contact.clone()),
                ..Default::default()
            }),
            Err(e) => e.into(),
        },
        Request::GetAllContacts => {
            let contacts = repository.get_all_contacts().to_vec();
            Response::Ok(Reply {
                count: Some(contacts.len()),
                contacts: Some(contacts),
                ..Default::default()
            })
        }
        Request::Describe => Response::Ok(Reply {
            schema: Some(REQUEST_SCHEMA.clone()),
            ..Default::default()
        }),
    }
}
