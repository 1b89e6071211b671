use crate::{Error, Result};
use redis::{ConnectionInfo, IntoConnectionInfo};
use std::time::Duration;

pub const DEFAULT_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_PORT: u16 = 6379;

/// Where and how to connect to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `redis://[user:pass@]host[:port][/db]`, `unix://path`, or bare
    /// `host[:port]`
    pub url: String,
    pub connect_timeout: Option<Duration>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl StoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: None,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// The URL with a `redis://` scheme added when none was given
    pub fn normalized_url(&self) -> String {
        let url = self.url.trim();
        if url.contains("://") {
            url.to_string()
        } else {
            format!("redis://{}", url)
        }
    }

    /// Parse the address; a missing port means [`DEFAULT_PORT`]
    pub fn connection_info(&self) -> Result<ConnectionInfo> {
        if self.url.trim().is_empty() {
            return Err(Error::Config("store URL is empty".to_string()));
        }

        let url = self.normalized_url();
        url.as_str()
            .into_connection_info()
            .map_err(|e| Error::Config(format!("fail to parse url '{}': {}", self.url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redis::ConnectionAddr;

    fn tcp(info: &ConnectionInfo) -> (String, u16) {
        match &info.addr {
            ConnectionAddr::Tcp(host, port) => (host.clone(), *port),
            other => panic!("expected tcp address, got {:?}", other),
        }
    }

    #[test]
    fn test_default_url() {
        let info = StoreConfig::default().connection_info().unwrap();
        assert_eq!(tcp(&info), ("127.0.0.1".to_string(), 6379));
    }

    #[test]
    fn test_missing_port_uses_default() {
        let info = StoreConfig::new("redis://cache.internal").connection_info().unwrap();
        assert_eq!(tcp(&info), ("cache.internal".to_string(), DEFAULT_PORT));
    }

    #[test]
    fn test_bare_host_and_port() {
        let config = StoreConfig::new("localhost:6380");
        assert_eq!(config.normalized_url(), "redis://localhost:6380");
        let info = config.connection_info().unwrap();
        assert_eq!(tcp(&info), ("localhost".to_string(), 6380));
    }

    #[test]
    fn test_database_index() {
        let info = StoreConfig::new("redis://localhost/3").connection_info().unwrap();
        assert_eq!(info.redis.db, 3);
    }

    #[test]
    fn test_malformed_urls_are_rejected() {
        assert!(StoreConfig::new("").connection_info().is_err());
        assert!(StoreConfig::new("http://localhost").connection_info().is_err());
        assert!(StoreConfig::new("redis://localhost:notaport").connection_info().is_err());
    }
}
