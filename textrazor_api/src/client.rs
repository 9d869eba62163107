//! HTTP client for the TextRazor REST API.

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method, Request, StatusCode,
};
use url::Url;

use crate::{
    body::{EntryList, RawBody, RequestBody},
    config::ClientConfig,
    envelope::{ApiResponse, Envelope},
    params::Params,
    transport::{default_transport, Transport},
    types::{
        Account, Analysis, Category, CategoryList, Dictionary, DictionaryEntry,
        DictionaryEntryList, DictionaryList,
    },
    Error,
};

/// Header carrying the API key on every request (`X-TextRazor-Key`).
pub const API_KEY_HEADER: &str = "x-textrazor-key";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_CSV: &str = "application/csv";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Headers with only `Content-Type` set.
pub fn default_headers(content_type: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers
}

/// HTTP client for the TextRazor REST API.
///
/// Holds only immutable configuration and the transport, so one client can
/// serve concurrent calls as long as the transport allows it. Every call
/// sends exactly one request; nothing is retried.
pub struct Client {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Creates a client with the production settings for `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a client sending through a `reqwest::Client` built from `config`.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let transport = default_transport(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client sending through a custom transport.
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs one request/response exchange and decodes the reply into `R`.
    ///
    /// `path` is appended to the active endpoint. When `headers` is `None` the
    /// request carries no headers besides the API key, which is always set
    /// last and replaces any caller-supplied value.
    ///
    /// The reply must have status 200, decode as `R`, and carry `"ok": true`;
    /// anything else is an error, and once a response has been read the error
    /// keeps its [`Envelope`].
    pub async fn dispatch<R: ApiResponse>(
        &self,
        path: &str,
        method: &str,
        headers: Option<HeaderMap>,
        body: Option<&dyn RequestBody>,
    ) -> Result<R, Error> {
        let uri = format!("{}{}", self.config.active_endpoint(), path);
        let url = Url::parse(&uri).map_err(|e| {
            tracing::error!("URI parsing failed '{}': {}", uri, e);
            Error::InvalidUri {
                uri: uri.clone(),
                source: e,
            }
        })?;

        let payload = match body {
            Some(body) => Some(body.encode().map_err(|e| {
                tracing::error!("Body request encoding failed: {}", e);
                Error::Encode(e)
            })?),
            None => None,
        };

        let method = Method::from_bytes(method.as_bytes()).map_err(|e| {
            tracing::error!("HTTP request creation failed: invalid method '{}'", method);
            Error::BuildRequest(Box::new(e))
        })?;
        let mut api_key = HeaderValue::from_str(self.config.api_key()).map_err(|e| {
            tracing::error!("HTTP request creation failed: invalid API key header value");
            Error::BuildRequest(Box::new(e))
        })?;
        api_key.set_sensitive(true);

        let mut request = Request::new(method, url);
        if let Some(headers) = headers {
            *request.headers_mut() = headers;
        }
        request
            .headers_mut()
            .insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        if let Some(payload) = payload {
            *request.body_mut() = Some(payload.into());
        }

        tracing::debug!("{} {}", request.method(), request.url());
        let resp = self.transport.execute(request).await.map_err(|e| {
            tracing::error!("HTTP request execution failed: {}", e);
            Error::Execute(e)
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("HTTP response body read failed: {}", e);
            Error::ReadBody(e)
        })?;
        tracing::debug!("Received status {} with {} bytes", status, body.len());

        let mut envelope = Envelope::from_transport(status, headers, body);

        if status != StatusCode::OK {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&envelope.body_text())
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                envelope: Box::new(envelope),
            });
        }

        let (fields, mut result) = match R::decode(&envelope.body) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::error!(
                    "HTTP response body parsing failed: {} | body: {}",
                    e,
                    truncate_body(&envelope.body_text())
                );
                return Err(Error::Parse {
                    source: e,
                    envelope: Box::new(envelope),
                });
            }
        };
        envelope.apply(fields);

        if !envelope.ok {
            tracing::error!(
                "Unexpected 'ok' field value: false (error: {:?}, message: {:?})",
                envelope.error,
                envelope.message
            );
            return Err(Error::NotOk {
                error: envelope.error.clone(),
                message: envelope.message.clone(),
                envelope: Box::new(envelope),
            });
        }

        result.bind(envelope);
        Ok(result)
    }

    /// Analyzes either the text under the `text` key or the web page under
    /// the `url` key of `params`, running every extractor listed under
    /// `extractors`.
    ///
    /// Exactly one of `text` and `url` must be set, and at least one
    /// extractor; otherwise the call fails without sending anything.
    pub async fn analyze(&self, params: &Params) -> Result<Analysis, Error> {
        let has_text = !params.get("text").is_empty();
        let has_url = !params.get("url").is_empty();
        if has_text == has_url {
            return Err(Error::Validation(
                "either 'url' or 'text' should be specified, not both".to_string(),
            ));
        }
        if params.get("extractors").is_empty() {
            return Err(Error::Validation(
                "at least one 'extractors' should be specified".to_string(),
            ));
        }
        self.dispatch(
            "/",
            Method::POST.as_str(),
            Some(default_headers(CONTENT_TYPE_FORM)),
            Some(params),
        )
        .await
    }

    /// Analyzes `text` with the extractors and options in `params`.
    pub async fn analyze_text(&self, text: &str, mut params: Params) -> Result<Analysis, Error> {
        params.set("text", text);
        self.analyze(&params).await
    }

    /// Analyzes the page at `url` with the extractors and options in `params`.
    pub async fn analyze_url(&self, url: &str, mut params: Params) -> Result<Analysis, Error> {
        params.set("url", url);
        self.analyze(&params).await
    }

    /// Fetches the plan and usage of the account.
    pub async fn get_account(&self) -> Result<Account, Error> {
        self.dispatch("/account/", Method::GET.as_str(), None, None)
            .await
    }

    /// Creates the dictionary described by `dictionary`, keyed by its `id`.
    pub async fn create_dictionary(&self, dictionary: &Dictionary) -> Result<Envelope, Error> {
        self.dispatch(
            &format!("/entities/{}", segment(&dictionary.id)),
            Method::PUT.as_str(),
            Some(default_headers(CONTENT_TYPE_JSON)),
            Some(dictionary),
        )
        .await
    }

    /// Lists every dictionary of the account.
    pub async fn get_dictionaries(&self) -> Result<DictionaryList, Error> {
        self.dispatch("/entities/", Method::GET.as_str(), None, None)
            .await
    }

    pub async fn get_dictionary(&self, dictionary_id: &str) -> Result<Dictionary, Error> {
        self.dispatch(
            &format!("/entities/{}", segment(dictionary_id)),
            Method::GET.as_str(),
            None,
            None,
        )
        .await
    }

    pub async fn delete_dictionary(&self, dictionary_id: &str) -> Result<Envelope, Error> {
        self.dispatch(
            &format!("/entities/{}", segment(dictionary_id)),
            Method::DELETE.as_str(),
            None,
            None,
        )
        .await
    }

    /// Adds `entries` to a dictionary, sent as one JSON array.
    pub async fn add_dictionary_entries(
        &self,
        dictionary_id: &str,
        entries: &[DictionaryEntry],
    ) -> Result<Envelope, Error> {
        self.dispatch(
            &format!("/entities/{}/", segment(dictionary_id)),
            Method::POST.as_str(),
            Some(default_headers(CONTENT_TYPE_JSON)),
            Some(&EntryList(entries)),
        )
        .await
    }

    pub async fn add_dictionary_entry(
        &self,
        dictionary_id: &str,
        entry: &DictionaryEntry,
    ) -> Result<Envelope, Error> {
        self.add_dictionary_entries(dictionary_id, std::slice::from_ref(entry))
            .await
    }

    /// Fetches a page of at most `limit` entries, starting at `offset`.
    pub async fn get_dictionary_entries(
        &self,
        dictionary_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<DictionaryEntryList, Error> {
        self.dispatch(
            &format!(
                "/entities/{}/_all?{}",
                segment(dictionary_id),
                page(limit, offset)
            ),
            Method::GET.as_str(),
            None,
            None,
        )
        .await
    }

    pub async fn get_dictionary_entry(
        &self,
        dictionary_id: &str,
        entry_id: &str,
    ) -> Result<DictionaryEntry, Error> {
        self.dispatch(
            &format!("/entities/{}/{}", segment(dictionary_id), segment(entry_id)),
            Method::GET.as_str(),
            None,
            None,
        )
        .await
    }

    pub async fn delete_dictionary_entry(
        &self,
        dictionary_id: &str,
        entry_id: &str,
    ) -> Result<Envelope, Error> {
        self.dispatch(
            &format!("/entities/{}/{}", segment(dictionary_id), segment(entry_id)),
            Method::DELETE.as_str(),
            None,
            None,
        )
        .await
    }

    /// Creates or replaces a classifier from a JSON array of categories.
    pub async fn create_classifier_from_json(
        &self,
        classifier_id: &str,
        json: &str,
    ) -> Result<Envelope, Error> {
        self.create_classifier(classifier_id, json, CONTENT_TYPE_JSON)
            .await
    }

    /// Creates or replaces a classifier from CSV rows of
    /// `categoryId,label,query`.
    pub async fn create_classifier_from_csv(
        &self,
        classifier_id: &str,
        csv: &str,
    ) -> Result<Envelope, Error> {
        self.create_classifier(classifier_id, csv, CONTENT_TYPE_CSV)
            .await
    }

    async fn create_classifier(
        &self,
        classifier_id: &str,
        categories: &str,
        content_type: &'static str,
    ) -> Result<Envelope, Error> {
        self.dispatch(
            &format!("/categories/{}", segment(classifier_id)),
            Method::PUT.as_str(),
            Some(default_headers(content_type)),
            Some(&RawBody::new(categories)),
        )
        .await
    }

    pub async fn delete_classifier(&self, classifier_id: &str) -> Result<Envelope, Error> {
        self.dispatch(
            &format!("/categories/{}", segment(classifier_id)),
            Method::DELETE.as_str(),
            None,
            None,
        )
        .await
    }

    /// Fetches a page of at most `limit` categories, starting at `offset`.
    pub async fn get_classifier_categories(
        &self,
        classifier_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<CategoryList, Error> {
        self.dispatch(
            &format!(
                "/categories/{}/_all?{}",
                segment(classifier_id),
                page(limit, offset)
            ),
            Method::GET.as_str(),
            None,
            None,
        )
        .await
    }

    pub async fn get_classifier_category(
        &self,
        classifier_id: &str,
        category_id: &str,
    ) -> Result<Category, Error> {
        self.dispatch(
            &format!(
                "/categories/{}/{}",
                segment(classifier_id),
                segment(category_id)
            ),
            Method::GET.as_str(),
            None,
            None,
        )
        .await
    }

    pub async fn delete_classifier_category(
        &self,
        classifier_id: &str,
        category_id: &str,
    ) -> Result<Envelope, Error> {
        self.dispatch(
            &format!(
                "/categories/{}/{}",
                segment(classifier_id),
                segment(category_id)
            ),
            Method::DELETE.as_str(),
            None,
            None,
        )
        .await
    }
}

fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

fn page(limit: u32, offset: u32) -> String {
    Params::new()
        .with("limit", limit.to_string())
        .with("offset", offset.to_string())
        .encode()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
