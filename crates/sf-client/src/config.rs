//! Client configuration.
//!
//! Defaults suit interactive use against a SuccessFactors data center. The
//! request timeout bounds every call end to end; there is no retry layer.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Request timeout override, in whole seconds.
pub const TIMEOUT_VAR: &str = "SAPSF_TIMEOUT_SECS";

/// Connect timeout override, in whole seconds.
pub const CONNECT_TIMEOUT_VAR: &str = "SAPSF_CONNECT_TIMEOUT_SECS";

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout. Bounds every call end to end.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept gzip/deflate compressed responses.
    pub accept_compressed: bool,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults, with timeouts overridden by `SAPSF_TIMEOUT_SECS` and
    /// `SAPSF_CONNECT_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(timeout) = seconds_var(&lookup, TIMEOUT_VAR)? {
            builder = builder.with_timeout(timeout);
        }
        if let Some(timeout) = seconds_var(&lookup, CONNECT_TIMEOUT_VAR)? {
            builder = builder.with_connect_timeout(timeout);
        }
        Ok(builder.build())
    }
}

fn seconds_var<F>(lookup: &F, name: &str) -> Result<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(Error::new(ErrorKind::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            name, raw
        )))),
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Accept or refuse compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.accept_compressed);
        assert!(config.enable_tracing);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("sapsf-odata-api/"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .with_timeout(Duration::from_secs(60))
            .with_connect_timeout(Duration::from_secs(2))
            .with_pool_max_idle(4)
            .with_compression(false)
            .with_tracing(false)
            .with_user_agent("custom-agent/1.0")
            .build();

        assert!(!config.accept_compressed);
        assert!(!config.enable_tracing);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.pool_max_idle_per_host, 4);
        assert_eq!(config.user_agent, "custom-agent/1.0");
    }

    #[test]
    fn test_from_lookup_overrides_timeouts() {
        let config = ClientConfig::from_lookup(|name| match name {
            TIMEOUT_VAR => Some("120".to_string()),
            CONNECT_TIMEOUT_VAR => Some(" 5 ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.pool_max_idle_per_host, 10);
    }

    #[test]
    fn test_from_lookup_unset_keeps_defaults() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));

        let blank = ClientConfig::from_lookup(|_| Some(String::new())).unwrap();
        assert_eq!(blank.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        for bad in ["0", "-3", "1.5", "soon"] {
            let err = ClientConfig::from_lookup(|name| {
                (name == TIMEOUT_VAR).then(|| bad.to_string())
            })
            .unwrap_err();
            assert!(matches!(err.kind, ErrorKind::Config(_)), "{bad}");
        }
    }
}
