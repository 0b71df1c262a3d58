use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "EDGE_";

/// Process-wide configuration, resolved once on first access.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// sqlx connection string for the credential / access store.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_database_url() -> String {
    "sqlite:auth.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            database_url: default_database_url(),
            loglevel: default_loglevel(),
        }
    }
}

impl Config {
    /// Defaults, then `config.toml`, then `EDGE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Tracing is not initialized this early, so problems go to stderr.
    pub fn load() -> Self {
        match Self::figment().extract::<Config>() {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("warning: invalid configuration, using defaults: {e}");
                Config::default()
            }
        }
    }
}
