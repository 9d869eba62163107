//! The response envelope shared by every TextRazor reply, and the decoding
//! glue that turns a raw body into a typed result.
//!
//! Every reply has the shape
//! `{"ok": bool, "error": "...", "message": "...", "time": 0.01, "response": {...}}`,
//! where the contents of `response` depend on the operation. Listing
//! dictionaries is the one exception: it puts a top-level `dictionaries`
//! array next to `ok` instead of nesting a `response` object.

use std::borrow::Cow;

use reqwest::{header::HeaderMap, StatusCode};
use serde::{de::DeserializeOwned, de::IgnoredAny, Deserialize};

/// Transport metadata and common fields of a TextRazor reply.
///
/// The status, headers and raw body are filled in as soon as the response is
/// read; the decoded fields (`ok`, `error`, `message`, `time`) only after the
/// body parsed successfully.
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub ok: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    /// Server-side processing time in seconds.
    pub time: f64,
}

impl Envelope {
    pub(crate) fn from_transport(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            ..Self::default()
        }
    }

    pub(crate) fn apply(&mut self, fields: EnvelopeFields) {
        self.ok = fields.ok;
        self.error = fields.error;
        self.message = fields.message;
        self.time = fields.time;
    }

    /// The raw body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}

/// The envelope fields carried in the JSON body.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct EnvelopeFields {
    pub ok: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    pub time: f64,
}

#[derive(Deserialize)]
struct Wire<R> {
    #[serde(default)]
    ok: bool,
    error: Option<String>,
    message: Option<String>,
    #[serde(default)]
    time: f64,
    response: Option<R>,
}

/// A typed result that can be decoded from a reply body and then handed the
/// envelope it came from.
pub trait ApiResponse: Sized {
    /// Decodes the envelope fields and the operation-specific payload.
    #[doc(hidden)]
    fn decode(body: &[u8]) -> Result<(EnvelopeFields, Self), serde_json::Error>;

    /// Attaches the envelope. Called once, after every check has passed.
    #[doc(hidden)]
    fn bind(&mut self, envelope: Envelope);
}

/// Decodes a reply whose payload sits under `response`. A missing or `null`
/// payload decodes as the default value.
pub(crate) fn decode_nested<R>(body: &[u8]) -> Result<(EnvelopeFields, R), serde_json::Error>
where
    R: DeserializeOwned + Default,
{
    let wire: Wire<R> = serde_json::from_slice(body)?;
    let fields = EnvelopeFields {
        ok: wire.ok,
        error: wire.error,
        message: wire.message,
        time: wire.time,
    };
    Ok((fields, wire.response.unwrap_or_default()))
}

/// Operations without a payload resolve to the envelope itself.
impl ApiResponse for Envelope {
    fn decode(body: &[u8]) -> Result<(EnvelopeFields, Self), serde_json::Error> {
        let (fields, _) = decode_nested::<IgnoredAny>(body)?;
        Ok((fields, Envelope::default()))
    }

    fn bind(&mut self, envelope: Envelope) {
        *self = envelope;
    }
}

/// Implements [`ApiResponse`] for models nested under `response` that keep
/// their envelope in a private `envelope` field.
macro_rules! nested_response {
    ($($model:ty),+ $(,)?) => {
        $(
            impl $crate::envelope::ApiResponse for $model {
                fn decode(
                    body: &[u8],
                ) -> Result<($crate::envelope::EnvelopeFields, Self), serde_json::Error> {
                    $crate::envelope::decode_nested(body)
                }

                fn bind(&mut self, envelope: $crate::envelope::Envelope) {
                    self.envelope = envelope;
                }
            }

            impl $model {
                /// Transport metadata and envelope fields of the reply this
                /// value was decoded from.
                pub fn envelope(&self) -> &$crate::envelope::Envelope {
                    &self.envelope
                }
            }
        )+
    };
}
pub(crate) use nested_response;
