mod router_links;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::services::errors::ConfigError;

pub use router_links::{RouteLink, RouterLinks};

/// LocalStorage key holding an optional `ApiConfig` override
pub const API_CONFIG_STORAGE_KEY: &str = "login_api_config";

/// Seconds a user waits before another verification code can be requested
pub const DEFAULT_COOLDOWN_SECS: u32 = 60;

#[derive(Debug, Clone)]
pub struct LoginConfig {
    pub api: ApiConfig,
    pub cooldown_secs: u32,
    pub router_links: RouterLinks,
}

/// Location of the authentication endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub code_login_path: String,
    pub verification_code_path: String,
    pub check_login_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            login_path: "/api/login/login-process".to_string(),
            code_login_path: "/api/login/login-code".to_string(),
            verification_code_path: "/api/login/verification-code".to_string(),
            check_login_path: "/api/login/check-login".to_string(),
        }
    }
}

impl ApiConfig {
    /// Same endpoints served from another origin
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

impl LoginConfig {
    /// Configuration with the embedded navigation list
    pub fn new(api: ApiConfig) -> Result<Self, ConfigError> {
        api.validate()?;
        Ok(Self {
            api,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            router_links: RouterLinks::embedded()?,
        })
    }

    /// Configuration for the running page.
    ///
    /// The API is assumed to share the page's origin unless an override has
    /// been stored under [`API_CONFIG_STORAGE_KEY`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::new(Self::browser_api_config())
    }

    #[cfg(target_arch = "wasm32")]
    fn browser_api_config() -> ApiConfig {
        use gloo_storage::{LocalStorage, Storage};

        if let Ok(stored) = LocalStorage::get::<ApiConfig>(API_CONFIG_STORAGE_KEY) {
            tracing::info!("Using stored API configuration: {}", stored.base_url);
            return stored;
        }

        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .map(ApiConfig::with_base_url)
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn browser_api_config() -> ApiConfig {
        ApiConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoginConfig::load().unwrap();
        assert_eq!(config.cooldown_secs, 60);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.router_links.post_login().path, "/chatrooms");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = LoginConfig::new(ApiConfig::with_base_url("::nope::"));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_partial_override_keeps_default_paths() {
        let api: ApiConfig =
            serde_json::from_str(r#"{"base_url":"https://chat.example.com"}"#).unwrap();
        assert_eq!(api.base_url, "https://chat.example.com");
        assert_eq!(api.login_path, "/api/login/login-process");
    }
}
