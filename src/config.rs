use anyhow::Result;
use std::{fmt, sync::Arc, time::Duration};
use crate::schemas::AppState;

/// FRED endpoint the proxy forwards observation requests to.
pub const DEFAULT_FRED_API_BASE: &str = "https://api.stlouisfed.org/fred/series/observations";

/// Default bind address of the proxy server.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Upstream request timeout.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(20);

/// Settings the proxy needs to reach FRED.
///
/// Resolved once at startup and handed to the router; handlers never read the
/// process environment.
#[derive(Clone, Default)]
pub struct ProxyConfig {
    /// FRED API key, attached to every upstream request
    pub api_key: Option<String>,
    /// Upstream observations endpoint
    pub upstream_base: String,
}

impl ProxyConfig {
    pub fn new(api_key: Option<String>, upstream_base: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            upstream_base: upstream_base.into(),
        }
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &self.api_key.as_deref().map(mask_key))
            .field("upstream_base", &self.upstream_base)
            .finish()
    }
}

/// Shows only the first four characters of a secret.
pub fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    format!("{}...", prefix)
}

/// Initialize application state from the resolved proxy configuration
pub fn initialize_app_state(config: ProxyConfig) -> Result<AppState> {
    match config.api_key.as_deref() {
        Some(key) => tracing::info!("FRED API key configured: {}", mask_key(key)),
        None => tracing::warn!("FRED API key not configured, proxy requests will fail"),
    }
    tracing::debug!("Upstream base: {}", config.upstream_base);

    let http = reqwest::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()?;

    Ok(AppState {
        config: Arc::new(config),
        http,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("abcdef123456"), "abcd...");
        assert_eq!(mask_key("ab"), "ab...");
    }

    #[test]
    fn test_blank_api_key_is_unconfigured() {
        let config = ProxyConfig::new(Some("  ".to_string()), DEFAULT_FRED_API_BASE);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = ProxyConfig::new(Some("secretkey".to_string()), DEFAULT_FRED_API_BASE);
        let debug = format!("{:?}", config);
        assert!(debug.contains("secr..."));
        assert!(!debug.contains("secretkey"));
    }
}
