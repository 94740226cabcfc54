//! Proxy Configuration Types
//!
//! Data types for routing backend traffic through an HTTP or SOCKS proxy.
//! The actual HTTP client factory is in the `edumorph-llm` crate.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Proxy protocol type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProxyProtocol {
    Http,
    Https,
    Socks5,
}

impl ProxyProtocol {
    /// Return the URL scheme string for this protocol.
    pub fn scheme(&self) -> &'static str {
        match self {
            ProxyProtocol::Http => "http",
            ProxyProtocol::Https => "https",
            ProxyProtocol::Socks5 => "socks5",
        }
    }
}

/// Proxy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub protocol: ProxyProtocol,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Only held in memory; never written back to the config file.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Build the proxy URL string (without auth).
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol.scheme(), self.host, self.port)
    }

    /// Check that the proxy points somewhere usable.
    pub fn validate(&self) -> CoreResult<()> {
        if self.host.trim().is_empty() {
            return Err(CoreError::config("proxy host must not be empty"));
        }
        if self.port == 0 {
            return Err(CoreError::config("proxy port must be non-zero"));
        }
        if self.password.is_some() && self.username.is_none() {
            return Err(CoreError::validation("proxy password set without a username"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_proxy() -> ProxyConfig {
        ProxyConfig {
            protocol: ProxyProtocol::Http,
            host: "127.0.0.1".to_string(),
            port: 8080,
            username: None,
            password: None,
        }
    }

    #[test]
    fn test_proxy_url_no_auth() {
        assert_eq!(local_proxy().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_proxy_protocol_scheme() {
        assert_eq!(ProxyProtocol::Http.scheme(), "http");
        assert_eq!(ProxyProtocol::Https.scheme(), "https");
        assert_eq!(ProxyProtocol::Socks5.scheme(), "socks5");
    }

    #[test]
    fn test_validate_accepts_plain_proxy() {
        assert!(local_proxy().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_host_and_zero_port() {
        let cfg = ProxyConfig {
            host: "  ".to_string(),
            ..local_proxy()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = ProxyConfig {
            port: 0,
            ..local_proxy()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_password_without_username() {
        let cfg = ProxyConfig {
            password: Some("secret".to_string()),
            ..local_proxy()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_proxy_config_serialization() {
        let cfg = ProxyConfig {
            protocol: ProxyProtocol::Socks5,
            host: "proxy.test".to_string(),
            port: 1080,
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"protocol\":\"socks5\""));
        assert!(json.contains("\"host\":\"proxy.test\""));
    }
}
