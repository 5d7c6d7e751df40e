//! Client configuration

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Configuration for the catalog REST client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Request timeout in seconds (ignored by the browser fetch backend)
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout_secs: 30 }
    }

    /// Base URL baked in at build time through `CATALOG_API_BASE_URL`
    pub fn from_env() -> Self {
        match option_env!("CATALOG_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Join `path` onto the base URL with exactly one slash
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_single_slash() {
        let config = ClientConfig::new("http://api.test/");
        assert_eq!(config.url("/api/items"), "http://api.test/api/items");
        assert_eq!(config.url("api/items"), "http://api.test/api/items");
    }

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default().with_timeout(5);
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout_secs, 5);
    }
}
