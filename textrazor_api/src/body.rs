//! Request bodies: the [`RequestBody`] contract and its pass-through and
//! entry-list implementations.

use crate::{errors::BoxError, types::DictionaryEntry};

/// Anything that can render itself into a request payload.
///
/// Implemented by [`Params`](crate::Params) (form encoding), [`RawBody`]
/// (verbatim JSON or CSV), [`EntryList`] and [`Dictionary`](crate::types::Dictionary)
/// (JSON). A failing `encode` aborts the request before anything is sent.
pub trait RequestBody: Send + Sync {
    fn encode(&self) -> Result<String, BoxError>;
}

/// A pre-built payload sent as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBody(String);

impl RawBody {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }
}

impl RequestBody for RawBody {
    fn encode(&self) -> Result<String, BoxError> {
        Ok(self.0.clone())
    }
}

/// Dictionary entries serialized as a JSON array.
#[derive(Debug, Clone, Copy)]
pub struct EntryList<'a>(pub &'a [DictionaryEntry]);

impl RequestBody for EntryList<'_> {
    fn encode(&self) -> Result<String, BoxError> {
        Ok(serde_json::to_string(self.0)?)
    }
}
