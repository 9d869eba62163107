//! Client for the TextRazor text analytics REST API.
//!
//! [`Client`] exposes one async method per remote operation: text and URL
//! analysis, account usage, entity dictionaries and classifiers. Every call
//! sends a single request authenticated with the `X-TextRazor-Key` header and
//! decodes the JSON reply into a typed result that keeps its [`Envelope`].

mod body;
mod client;
mod config;
mod envelope;
mod errors;
mod params;
mod transport;
pub mod types;
pub use self::body::{EntryList, RawBody, RequestBody};
pub use self::client::{
    default_headers, Client, API_KEY_HEADER, CONTENT_TYPE_CSV, CONTENT_TYPE_FORM,
    CONTENT_TYPE_JSON,
};
pub use self::config::{
    ClientConfig, DEFAULT_ENDPOINT, DEFAULT_SECURE_ENDPOINT, DEFAULT_USE_COMPRESSION,
    DEFAULT_USE_ENCRYPTION,
};
pub use self::envelope::{ApiResponse, Envelope};
pub use self::errors::{BoxError, Error};
pub use self::params::Params;
pub use self::transport::{default_transport, Transport, TransportResponse};
