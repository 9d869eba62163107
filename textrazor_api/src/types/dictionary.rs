use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    body::RequestBody,
    envelope::{nested_response, ApiResponse, Envelope, EnvelopeFields},
    errors::BoxError,
};

/// A custom entity dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dictionary {
    #[serde(skip)]
    envelope: Envelope,

    pub id: String,

    /// How entries are matched against the text: `token` or `stem`.
    pub match_type: String,

    pub case_insensitive: bool,

    pub language: String,
}

nested_response!(Dictionary);

impl Dictionary {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_match_type(mut self, match_type: impl Into<String>) -> Self {
        self.match_type = match_type.into();
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl RequestBody for Dictionary {
    fn encode(&self) -> Result<String, BoxError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Every dictionary of the account.
///
/// Unlike every other reply, the listing carries its dictionaries in a
/// top-level `dictionaries` array rather than under `response`.
#[derive(Debug, Clone, Default)]
pub struct DictionaryList {
    envelope: Envelope,

    pub dictionaries: Vec<Dictionary>,
}

#[derive(Deserialize)]
struct DictionaryListWire {
    #[serde(default)]
    ok: bool,
    error: Option<String>,
    message: Option<String>,
    #[serde(default)]
    time: f64,
    #[serde(default)]
    dictionaries: Vec<Dictionary>,
}

impl ApiResponse for DictionaryList {
    fn decode(body: &[u8]) -> Result<(EnvelopeFields, Self), serde_json::Error> {
        let wire: DictionaryListWire = serde_json::from_slice(body)?;
        let fields = EnvelopeFields {
            ok: wire.ok,
            error: wire.error,
            message: wire.message,
            time: wire.time,
        };
        Ok((
            fields,
            DictionaryList {
                envelope: Envelope::default(),
                dictionaries: wire.dictionaries,
            },
        ))
    }

    fn bind(&mut self, envelope: Envelope) {
        self.envelope = envelope;
    }
}

impl DictionaryList {
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// One entry of a dictionary: the text to match and the data to attach to
/// matched entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryEntry {
    #[serde(skip)]
    envelope: Envelope,

    pub id: String,

    pub text: String,

    pub data: HashMap<String, Vec<String>>,
}

nested_response!(DictionaryEntry);

impl DictionaryEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Appends a value under `key` in the entry's data.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.entry(key.into()).or_default().push(value.into());
        self
    }
}

/// A page of dictionary entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryEntryList {
    #[serde(skip)]
    envelope: Envelope,

    pub offset: i64,

    pub limit: i64,

    pub total: i64,

    pub entries: Vec<DictionaryEntry>,
}

nested_response!(DictionaryEntryList);
