//! Registry session over a line-delimited JSON transport.
//!
//! A session owns one repository for its whole lifetime. Requests are read
//! one per line; every non-blank line gets exactly one response line.

pub mod handlers;

pub use handlers::{handle_line, handle_request, ErrorKind, ErrorReply, Reply, Request, Response};

use crate::error::SessionResult;
use crate::repositories::ContactRepository;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank request lines processed
    pub requests: usize,

    /// Contacts successfully added
    pub contacts_added: usize,

    /// Requests answered with an error
    pub rejected: usize,
}

impl SessionSummary {
    fn record(&mut self, response: &Response) {
        self.requests += 1;
        match response {
            Response::Ok(reply) if reply.contact.is_some() => self.contacts_added += 1,
            Response::Ok(_) => {}
            Response::Error(_) => self.rejected += 1,
        }
    }
}

/// Run a session until `input` is exhausted.
///
/// # Errors
///
/// Returns an error only if reading from `input` or writing to `output` fails.
/// Invalid requests are answered in-band and the session continues.
pub fn run_session<R, I, O>(
    repository: &mut R,
    mut input: I,
    mut output: O,
) -> SessionResult<SessionSummary>
where
    R: ContactRepository + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut summary = SessionSummary::default();
    info!("Registry session started");

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(repository, line.trim()),
            Err(e) => {
                debug!(error = %e, "Request line is not valid UTF-8");
                Response::invalid_request(format!("Request is not valid UTF-8: {}", e))
            }
        };
        summary.record(&response);

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        output.write_all(&encoded)?;
        output.flush()?;
    }

    info!(
        requests = summary.requests,
        contacts_added = summary.contacts_added,
        rejected = summary.rejected,
        contact_count = repository.len(),
        "Registry session ended"
    );

    Ok(summary)
}
