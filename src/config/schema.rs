//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the creature proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream creature API settings.
    pub upstream: UpstreamConfig,

    /// Where the lookup handler is mounted.
    pub handler: HandlerConfig,

    /// Business rules applied to upstream records.
    pub rules: RulesConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream creature API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL; the creature id is appended as one path segment.
    pub base_url: String,

    /// Total request timeout in seconds. Unset means the HTTP client default.
    pub timeout_secs: Option<u64>,
}

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Lookup handler configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Route path the lookup handler answers POSTs on.
    pub path: String,
}

pub const DEFAULT_HANDLER_PATH: &str = "/_v/find-pokemon";

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_HANDLER_PATH.to_string(),
        }
    }
}

/// Business rule configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Records whose `height` is at or above this value are rejected.
    /// The unit is whatever the upstream reports.
    pub max_height: u64,
}

pub const DEFAULT_MAX_HEIGHT: u64 = 15;

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    /// Disabled when unset.
    pub request_secs: Option<u64>,
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024, // 64KB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_public_contract() {
        let config = ProxyConfig::default();
        assert_eq!(config.handler.path, "/_v/find-pokemon");
        assert_eq!(config.upstream.base_url, "https://pokeapi.co/api/v2/pokemon");
        assert_eq!(config.rules.max_height, 15);
        assert!(config.upstream.timeout_secs.is_none());
        assert!(config.timeouts.request_secs.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [rules]
            max_height = 20

            [upstream]
            timeout_secs = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.rules.max_height, 20);
        assert_eq!(config.upstream.timeout_secs, Some(3));
        assert_eq!(config.upstream.base_url, DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
