use crate::error::RoutingError;

pub const DEFAULT_BASE_URL: &str = "https://api.tomtom.com/maps/orbis/routing";

const API_KEY_ENV_VAR: &str = "ORBIS_API_KEY";
const BASE_URL_ENV_VAR: &str = "ORBIS_BASE_URL";
const LANGUAGE_ENV_VAR: &str = "ORBIS_LANGUAGE";

/// Service-wide settings shared by every call made through a client.
#[derive(Debug, Clone)]
pub struct RoutingClientParams {
    pub api_key: String,
    pub base_url: String,
    /// Used when a call does not set its own language.
    pub default_language: Option<String>,
}

impl RoutingClientParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_language: None,
        }
    }

    pub fn from_env() -> Result<Self, RoutingError> {
        let api_key =
            std::env::var(API_KEY_ENV_VAR).map_err(|_| RoutingError::MissingConfig(API_KEY_ENV_VAR))?;

        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let default_language = std::env::var(LANGUAGE_ENV_VAR)
            .ok()
            .filter(|language| !language.is_empty());

        Ok(Self {
            api_key,
            base_url,
            default_language,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }
}
