/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ROSTER";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_http")]
    pub http: HttpSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpSettings {
    /// Largest accepted request body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_permissive_cors")]
    pub permissive_cors: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogSettings {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` if given (it must exist), otherwise `config.toml` when
    /// present. `ROSTER_`-prefixed variables override file values, with `__`
    /// between nested keys, e.g. `ROSTER_SERVER__PORT=8080`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Parse configuration from a TOML string, without environment overrides
    pub fn from_toml(source: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "server.port must be non-zero".to_string(),
            ));
        }

        self.server.host.parse::<IpAddr>().map_err(|_| {
            ServerError::Config(format!(
                "server.host is not an IP address: {:?}",
                self.server.host
            ))
        })?;

        if self.http.max_body_bytes == 0 {
            return Err(ServerError::Config(
                "http.max_body_bytes must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(format!("Invalid host: {}", e)))?;
        Ok(SocketAddr::from((ip, self.server.port)))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Internal(e.to_string()))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_http() -> HttpSettings {
    HttpSettings {
        max_body_bytes: default_max_body_bytes(),
        permissive_cors: default_permissive_cors(),
    }
}

fn default_max_body_bytes() -> usize {
    100 * 1024
}

fn default_permissive_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            http: default_http(),
            log: LogSettings::default(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        default_http()
    }
}
