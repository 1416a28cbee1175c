//! Service connection parameters.
//!
//! A WASM bundle has no process environment, so the app reads these values at
//! compile time through `option_env!`. Parsing goes through a lookup function
//! so it can be exercised without touching the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/route";
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_FIRESTORE_DATABASE: &str = "(default)";
pub const DEFAULT_FIRESTORE_COLLECTION: &str = "comments";

/// Errors produced while parsing service configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is absent or blank.
    #[error("missing config: {var} not set")]
    Missing { var: &'static str },

    /// A variable is present but unusable.
    #[error("invalid config {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Connection parameters for the Firestore REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub database: String,
    pub collection: String,
    pub api_key: Option<String>,
}

impl StoreConfig {
    /// A store with no project. Every call against it fails with
    /// `StoreError::NotConfigured`.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            base_url: DEFAULT_FIRESTORE_BASE_URL.to_owned(),
            project_id: String::new(),
            database: DEFAULT_FIRESTORE_DATABASE.to_owned(),
            collection: DEFAULT_FIRESTORE_COLLECTION.to_owned(),
            api_key: None,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty()
    }
}

/// Everything the widgets need to reach their services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub chat_endpoint: String,
    pub store: StoreConfig,
}

impl ServiceConfig {
    /// Build typed config from a variable lookup.
    ///
    /// Required:
    /// - `FIRESTORE_PROJECT_ID`
    ///
    /// Optional:
    /// - `CHAT_ENDPOINT`: default `/api/route`
    /// - `FIRESTORE_BASE_URL`: default Firestore v1 REST root
    /// - `FIRESTORE_DATABASE`: default `(default)`
    /// - `FIRESTORE_COLLECTION`: default `comments`
    /// - `FIRESTORE_API_KEY`: sent as the `key` query parameter when set
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is missing or the collection id is
    /// not a single path segment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let chat_endpoint = var("CHAT_ENDPOINT")
            .map(|v| trim_url(&v))
            .unwrap_or_else(|| DEFAULT_CHAT_ENDPOINT.to_owned());

        let project_id = var("FIRESTORE_PROJECT_ID").ok_or(ConfigError::Missing { var: "FIRESTORE_PROJECT_ID" })?;
        let collection = var("FIRESTORE_COLLECTION").unwrap_or_else(|| DEFAULT_FIRESTORE_COLLECTION.to_owned());
        if collection.contains('/') {
            return Err(ConfigError::Invalid {
                var: "FIRESTORE_COLLECTION",
                reason: format!("'{collection}' must be a single collection id"),
            });
        }

        let store = StoreConfig {
            base_url: var("FIRESTORE_BASE_URL")
                .map(|v| trim_url(&v))
                .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_owned()),
            project_id,
            database: var("FIRESTORE_DATABASE").unwrap_or_else(|| DEFAULT_FIRESTORE_DATABASE.to_owned()),
            collection,
            api_key: var("FIRESTORE_API_KEY"),
        };

        Ok(Self { chat_endpoint, store })
    }

    /// Build config from variables baked in at compile time.
    ///
    /// # Errors
    ///
    /// See [`ServiceConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    /// Config used when parsing fails: default chat route, unconfigured store.
    #[must_use]
    pub fn fallback() -> Self {
        Self { chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(), store: StoreConfig::unconfigured() }
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "CHAT_ENDPOINT" => option_env!("CHAT_ENDPOINT"),
        "FIRESTORE_BASE_URL" => option_env!("FIRESTORE_BASE_URL"),
        "FIRESTORE_PROJECT_ID" => option_env!("FIRESTORE_PROJECT_ID"),
        "FIRESTORE_DATABASE" => option_env!("FIRESTORE_DATABASE"),
        "FIRESTORE_COLLECTION" => option_env!("FIRESTORE_COLLECTION"),
        "FIRESTORE_API_KEY" => option_env!("FIRESTORE_API_KEY"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn trim_url(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}
