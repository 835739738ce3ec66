use std::{net::SocketAddr, time::Duration};

use serde::Deserialize;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

#[derive(Clone, Copy, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    // Only meant for local test clouds
    Http,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Https => 443,
            Scheme::Http => 80,
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct RemoteCloudSettings {
    pub hostname: String,
    pub base_path: String,
    pub port: Option<u16>,
    #[serde(default)]
    pub scheme: Scheme,
    /// PEM encoded CA certificate(s) to trust instead of the platform roots.
    pub ca_cert: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl RemoteCloudSettings {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.scheme.default_port())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct ServerSettings {
    pub listen_addr: Option<SocketAddr>,
}

impl ServerSettings {
    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_LISTEN_ADDR))
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct Settings {
    pub remote_cloud: RemoteCloudSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

pub fn read_settings() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("Settings").required(false))
        .add_source(
            config::Environment::with_prefix("STONE_DISCOVERY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<Settings>()
}
