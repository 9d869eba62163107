//! Error types for the API client.

use crate::envelope::Envelope;

/// Boxed error used wherever a pluggable component (request body, transport)
/// reports its own failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when making API requests.
///
/// Each variant names the stage of the request pipeline that failed. The last
/// three variants happen after a response was received, so they keep the
/// [`Envelope`] holding the raw status, headers and body.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A precondition on the call arguments or the configuration was violated.
    #[error("Invalid request: {0}")]
    Validation(String),
    /// The endpoint and path did not form a valid absolute URL.
    #[error("URI parsing failed '{uri}'")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
    /// The request body could not be encoded.
    #[error("Body request encoding failed")]
    Encode(#[source] BoxError),
    /// The HTTP request could not be created (bad method or header value).
    #[error("HTTP request creation failed")]
    BuildRequest(#[source] BoxError),
    /// The default HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    /// The transport failed to execute the request.
    #[error("HTTP request execution failed")]
    Execute(#[source] BoxError),
    /// The response body could not be read.
    #[error("HTTP response body read failed")]
    ReadBody(#[source] BoxError),
    /// The API returned a status other than 200 OK.
    #[error("Unexpected status code: {status}")]
    HttpStatus { status: u16, envelope: Box<Envelope> },
    /// The response body is not the expected JSON document.
    #[error("HTTP response body parsing failed")]
    Parse {
        #[source]
        source: serde_json::Error,
        envelope: Box<Envelope>,
    },
    /// The API answered with `"ok": false`.
    #[error("Unexpected 'ok' field value: false ({})", describe_failure(.error, .message))]
    NotOk {
        error: Option<String>,
        message: Option<String>,
        envelope: Box<Envelope>,
    },
}

impl Error {
    /// Returns the response metadata captured before the failure, if a
    /// response was received at all.
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Error::HttpStatus { envelope, .. }
            | Error::Parse { envelope, .. }
            | Error::NotOk { envelope, .. } => Some(envelope),
            _ => None,
        }
    }
}

fn describe_failure(error: &Option<String>, message: &Option<String>) -> String {
    match (error.as_deref(), message.as_deref()) {
        (Some(error), Some(message)) => format!("{}: {}", error, message),
        (Some(text), None) | (None, Some(text)) => text.to_string(),
        (None, None) => "no error message".to_string(),
    }
}
