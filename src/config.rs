use std::fmt;
use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_LOG_FILTER: &str = "user_insert=debug,axum=info,tower_http=info";

/// Database credentials, taken verbatim from the environment.
///
/// Nothing is validated here; an empty or malformed value only surfaces
/// when the connection provider tries to use it.
#[derive(Clone, Default)]
pub struct DbConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub name: String,
}

impl DbConfig {
    /// Connection URL with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        format!(
            "mysql://{}:***@{}:{}/{}",
            self.username, self.host, self.port, self.name
        )
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub app_host: String,
    pub app_port: String,
    pub max_connections: u32,
    pub log_filter: String,
    pub json_logs: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();
        let db = DbConfig {
            username: var("DB_USERNAME"),
            password: var("DB_PASSWORD"),
            host: var("DB_HOST"),
            port: var("DB_PORT"),
            name: var("DB_NAME"),
        };
        Self {
            db,
            app_host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            app_port: lookup("APP_PORT").unwrap_or_else(|| "8080".into()),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(10),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            json_logs: lookup("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
        }
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.app_host, self.app_port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.app_host, self.app_port))
    }
}
