//! Data models and structures
//!
//! Defines client configuration and the response envelope shared by every
//! Tencent AI endpoint.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.ai.qq.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response envelope returned by every endpoint.
///
/// `ret == 0` means success; any other value carries a diagnostic in `msg`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub ret: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.ret == 0
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
    pub proxy: Option<String>,
    pub timeout: Duration,
    pub scratch_dir: PathBuf,
}

impl Config {
    /// Build a config from an application id and its shared secret.
    ///
    /// Both must be non-empty; nothing touches the network before this check.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Result<Self> {
        let config = Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            scratch_dir: std::env::temp_dir(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = lookup("TENCENT_AI_APP_ID").ok_or_else(|| {
            Error::Configuration("TENCENT_AI_APP_ID not set".to_string())
        })?;
        let app_key = lookup("TENCENT_AI_APP_KEY").ok_or_else(|| {
            Error::Configuration("TENCENT_AI_APP_KEY not set".to_string())
        })?;

        let mut config = Self::new(app_id, app_key)?;

        if let Some(base_url) = lookup("TENCENT_AI_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Some(proxy) = lookup("TENCENT_AI_PROXY").filter(|p| !p.is_empty()) {
            config = config.with_proxy(proxy);
        }
        if let Some(secs) = lookup("TENCENT_AI_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::Configuration(format!("Invalid TENCENT_AI_TIMEOUT_SECS '{}'", secs))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(dir) = lookup("TENCENT_AI_SCRATCH_DIR") {
            config = config.with_scratch_dir(PathBuf::from(dir));
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(Error::Configuration("app_id must not be empty".to_string()));
        }
        if self.app_key.trim().is_empty() {
            return Err(Error::Configuration("app_key must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_scratch_dir(mut self, dir: PathBuf) -> Self {
        self.scratch_dir = dir;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_new_rejects_empty_credentials() {
        assert!(matches!(Config::new("", "secret"), Err(Error::Configuration(_))));
        assert!(matches!(Config::new("123", ""), Err(Error::Configuration(_))));
        assert!(matches!(Config::new("123", "   "), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new("123", "secret").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_from_lookup_reads_optional_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("TENCENT_AI_APP_ID", "10000"),
            ("TENCENT_AI_APP_KEY", "abc"),
            ("TENCENT_AI_BASE_URL", "http://localhost:9000/"),
            ("TENCENT_AI_PROXY", "http://proxy:3128"),
            ("TENCENT_AI_TIMEOUT_SECS", "5"),
            ("TENCENT_AI_SCRATCH_DIR", "/var/tmp"),
        ]))
        .unwrap();

        assert_eq!(config.app_id, "10000");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.proxy.as_deref(), Some("http://proxy:3128"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.scratch_dir, PathBuf::from("/var/tmp"));
    }

    #[test]
    fn test_from_lookup_requires_credentials() {
        let err = Config::from_lookup(lookup_from(&[("TENCENT_AI_APP_ID", "1")])).unwrap_err();
        assert!(err.to_string().contains("TENCENT_AI_APP_KEY"));
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let err = Config::from_lookup(lookup_from(&[
            ("TENCENT_AI_APP_ID", "1"),
            ("TENCENT_AI_APP_KEY", "k"),
            ("TENCENT_AI_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_api_response_defaults_missing_fields() {
        let response: ApiResponse = serde_json::from_str(r#"{"ret": 0}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.msg, "");
        assert!(response.data.is_null());
    }
}
