//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Listen address variable.
pub const ADDR_VAR: &str = "JOURNEY_FINDER_ADDR";
/// JSON train file variable. Unset keeps trains in memory only.
pub const DATA_FILE_VAR: &str = "JOURNEY_FINDER_DATA_FILE";
/// CORS origin variable.
pub const ALLOWED_ORIGIN_VAR: &str = "JOURNEY_FINDER_ALLOWED_ORIGIN";
/// Static assets directory variable.
pub const STATIC_DIR_VAR: &str = "JOURNEY_FINDER_STATIC_DIR";
/// Sample data seeding variable.
pub const SEED_VAR: &str = "JOURNEY_FINDER_SEED";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address did not parse
    #[error("{var} must be a socket address like 127.0.0.1:8080, got {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    /// Flag was not a recognised boolean
    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// JSON file backing the train store, if any.
    pub data_file: Option<PathBuf>,

    /// Browser origin allowed to call the API cross-origin.
    pub allowed_origin: String,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Whether to replace stored trains with the sample timetable at startup.
    pub seed_sample_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            data_file: None,
            allowed_origin: "http://localhost:5173".to_string(),
            static_dir: PathBuf::from("static"),
            seed_sample_data: true,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ADDR_VAR) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr {
                    var: ADDR_VAR,
                    value,
                })?;
        }

        config.data_file = get(DATA_FILE_VAR).map(PathBuf::from);

        if let Some(origin) = get(ALLOWED_ORIGIN_VAR) {
            config.allowed_origin = origin;
        }

        if let Some(dir) = get(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(value) = get(SEED_VAR) {
            config.seed_sample_data = parse_bool(SEED_VAR, value)?;
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}
