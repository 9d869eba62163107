//! The HTTP transport the client sends its requests through.
//!
//! [`Transport`] is implemented for `reqwest::Client`; any other
//! implementation can be plugged in with
//! [`Client::with_transport`](crate::Client::with_transport).

use reqwest::{header::HeaderMap, Request, StatusCode};

use crate::{config::ClientConfig, errors::BoxError, Error};

/// Executes one HTTP request.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Box<dyn TransportResponse>, BoxError>;
}

/// A response whose status and headers have arrived but whose body may
/// still be streaming.
#[async_trait::async_trait]
pub trait TransportResponse: Send {
    fn status(&self) -> StatusCode;

    fn headers(&self) -> &HeaderMap;

    /// Reads the whole body, consuming the response.
    async fn bytes(self: Box<Self>) -> Result<Vec<u8>, BoxError>;
}

#[async_trait::async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<Box<dyn TransportResponse>, BoxError> {
        let response = reqwest::Client::execute(self, request).await?;
        Ok(Box::new(response))
    }
}

#[async_trait::async_trait]
impl TransportResponse for reqwest::Response {
    fn status(&self) -> StatusCode {
        reqwest::Response::status(self)
    }

    fn headers(&self) -> &HeaderMap {
        reqwest::Response::headers(self)
    }

    async fn bytes(self: Box<Self>) -> Result<Vec<u8>, BoxError> {
        let body = reqwest::Response::bytes(*self).await?;
        Ok(body.to_vec())
    }
}

/// Builds the `reqwest::Client` used when no transport is supplied.
///
/// Gzip decoding, and the matching `Accept-Encoding` header, follow the
/// compression flag. No timeout is set unless the configuration asks for one.
pub fn default_transport(config: &ClientConfig) -> Result<reqwest::Client, Error> {
    let mut builder = reqwest::Client::builder().gzip(config.use_compression());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        Error::Client(e)
    })
}
