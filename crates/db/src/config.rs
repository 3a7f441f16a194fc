use std::fmt;
use std::str::FromStr;

use movies_core::error::CoreError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_SSL_MODE: &str = "disable";
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Database connection settings loaded from environment variables.
///
/// | Env Var              | Default     |
/// |----------------------|-------------|
/// | `DATABASE_URL`       | unset       |
/// | `DB_HOST`            | `localhost` |
/// | `DB_PORT`            | `5432`      |
/// | `DB_USER`            | unset       |
/// | `DB_PASSWORD`        | unset       |
/// | `DB_NAME`            | unset       |
/// | `DB_SSLMODE`         | `disable`   |
/// | `DB_MAX_CONNECTIONS` | `20`        |
///
/// When `DATABASE_URL` is set it wins over the individual `DB_*` parts.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    url_options: Option<PgConnectOptions>,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host = get("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let port = match get("DB_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| CoreError::Config(format!("DB_PORT must be a valid u16, got {raw:?}")))?,
            None => DEFAULT_PORT,
        };

        let ssl_raw = get("DB_SSLMODE").unwrap_or_else(|| DEFAULT_SSL_MODE.into());
        let ssl_mode = PgSslMode::from_str(&ssl_raw)
            .map_err(|e| CoreError::Config(format!("DB_SSLMODE is invalid: {e}")))?;

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.parse().map_err(|_| {
                CoreError::Config(format!("DB_MAX_CONNECTIONS must be a valid u32, got {raw:?}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let url_options = get("DATABASE_URL")
            .map(|url| {
                PgConnectOptions::from_str(&url)
                    .map_err(|e| CoreError::Config(format!("DATABASE_URL is invalid: {e}")))
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            name: get("DB_NAME"),
            ssl_mode,
            max_connections,
            url_options,
        })
    }

    /// Connection options for the pool.
    pub fn connect_options(&self) -> PgConnectOptions {
        if let Some(options) = &self.url_options {
            return options.clone();
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .ssl_mode(self.ssl_mode);
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(name) = &self.name {
            options = options.database(name);
        }
        options
    }

    pub fn uses_database_url(&self) -> bool {
        self.url_options.is_some()
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("database_url", &self.uses_database_url())
            .finish()
    }
}
