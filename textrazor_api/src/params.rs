//! Form parameters used as request bodies and query strings: [`Params`].

use std::collections::BTreeMap;

use crate::{body::RequestBody, errors::BoxError};

/// Multi-valued string parameters, encoded as
/// `application/x-www-form-urlencoded`.
///
/// Keys are kept sorted, so encoding is deterministic regardless of the order
/// in which distinct keys were added. Values under one key keep their
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, Vec<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under `key`, keeping any values already there.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces every value under `key` with the single `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Returns the first value under `key`, or an empty string if there is none.
    pub fn get(&self, key: &str) -> &str {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns every value under `key` in insertion order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Removes `key` and all of its values.
    pub fn del(&mut self, key: &str) {
        self.values.remove(key);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builder form of [`Params::add`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value);
        self
    }

    /// Encodes the parameters as `key=value&key=value`, one pair per value,
    /// with keys in sorted order.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in self.values.iter() {
            for value in values.iter() {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl RequestBody for Params {
    fn encode(&self) -> Result<String, BoxError> {
        Ok(Params::encode(self))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Params;

    #[test]
    fn test_encode_escapes_and_sorts() {
        let params = Params::new()
            .with("text", "Barclays & the BBC")
            .with("extractors", "entities")
            .with("extractors", "topics");

        insta::assert_snapshot!(params.encode(), @"extractors=entities&extractors=topics&text=Barclays+%26+the+BBC");
    }

    #[test]
    fn test_empty_encodes_to_empty_string() {
        assert_eq!(Params::new().encode(), "");
    }
}
