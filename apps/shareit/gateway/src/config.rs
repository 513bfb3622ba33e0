use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse_or_default,
    server::ServerConfig,
};

pub use core_config::Environment;

/// Where the ShareIt server listens, and how long to wait for it
///
/// - `SHAREIT_SERVER_URL` (default: `http://localhost:9090`)
/// - `UPSTREAM_TIMEOUT_SECS` (default: 10)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9090".to_string(),
            timeout_secs: 10,
        }
    }
}

impl FromEnv for UpstreamConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("SHAREIT_SERVER_URL", "http://localhost:9090"),
            timeout_secs: env_parse_or_default("UPSTREAM_TIMEOUT_SECS", "10")?,
        })
    }
}

/// Gateway configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            upstream: UpstreamConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
