//! Client configuration: API key, endpoints and transport flags.

use std::time::Duration;

use crate::Error;

/// Plaintext API endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://api.textrazor.com";
/// Encrypted API endpoint.
pub const DEFAULT_SECURE_ENDPOINT: &str = "https://api.textrazor.com";
pub const DEFAULT_USE_COMPRESSION: bool = true;
pub const DEFAULT_USE_ENCRYPTION: bool = true;

const ENV_API_KEY: &str = "TEXTRAZOR_API_KEY";
const ENV_ENDPOINT: &str = "TEXTRAZOR_ENDPOINT";
const ENV_SECURE_ENDPOINT: &str = "TEXTRAZOR_SECURE_ENDPOINT";
const ENV_USE_COMPRESSION: &str = "TEXTRAZOR_USE_COMPRESSION";
const ENV_USE_ENCRYPTION: &str = "TEXTRAZOR_USE_ENCRYPTION";

/// Settings fixed when a [`Client`](crate::Client) is built.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    use_compression: bool,
    use_encryption: bool,
    endpoint: String,
    secure_endpoint: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Production settings for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            use_compression: DEFAULT_USE_COMPRESSION,
            use_encryption: DEFAULT_USE_ENCRYPTION,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            secure_endpoint: DEFAULT_SECURE_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    /// Reads the configuration from `TEXTRAZOR_*` environment variables,
    /// loading a `.env` file first if there is one.
    ///
    /// `TEXTRAZOR_API_KEY` is required; the endpoints and the
    /// `TEXTRAZOR_USE_COMPRESSION` / `TEXTRAZOR_USE_ENCRYPTION` flags fall
    /// back to the production defaults.
    pub fn from_env() -> Result<Self, Error> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Validation(format!("{} is not set", ENV_API_KEY)))?;
        let mut config = Self::new(api_key);
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(secure_endpoint) = lookup(ENV_SECURE_ENDPOINT) {
            config.secure_endpoint = secure_endpoint;
        }
        if let Some(value) = lookup(ENV_USE_COMPRESSION) {
            config.use_compression = parse_flag(ENV_USE_COMPRESSION, &value)?;
        }
        if let Some(value) = lookup(ENV_USE_ENCRYPTION) {
            config.use_encryption = parse_flag(ENV_USE_ENCRYPTION, &value)?;
        }
        Ok(config)
    }

    pub fn with_compression(mut self, use_compression: bool) -> Self {
        self.use_compression = use_compression;
        self
    }

    pub fn with_encryption(mut self, use_encryption: bool) -> Self {
        self.use_encryption = use_encryption;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_secure_endpoint(mut self, secure_endpoint: impl Into<String>) -> Self {
        self.secure_endpoint = secure_endpoint.into();
        self
    }

    /// Sets a timeout on the default transport. Ignored by custom transports.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn use_compression(&self) -> bool {
        self.use_compression
    }

    pub fn use_encryption(&self) -> bool {
        self.use_encryption
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn secure_endpoint(&self) -> &str {
        &self.secure_endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The endpoint requests go to: the secure one when encryption is on.
    pub fn active_endpoint(&self) -> &str {
        if self.use_encryption {
            &self.secure_endpoint
        } else {
            &self.endpoint
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("use_compression", &self.use_compression)
            .field("use_encryption", &self.use_encryption)
            .field("endpoint", &self.endpoint)
            .field("secure_endpoint", &self.secure_endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A missing `.env` file is fine; one that exists but cannot be loaded is not.
fn check_dotenv<T>(result: Result<T, dotenvy::Error>) -> Result<(), Error> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => {
            tracing::error!(".env loading failed: {}", e);
            Err(Error::Validation(format!("failed to load .env file: {}", e)))
        }
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Validation(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
