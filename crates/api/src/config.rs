/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            request_timeout_secs,
        }
    }
}

/// Resolve the database URL.
///
/// `DATABASE_URL` wins when set; otherwise the URL is composed from the
/// individual `POSTGRES_*` variables with defaults matching the standard
/// docker-compose setup (`postgres:postgres@db:5432/todo_db`).
pub fn database_url() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }

    let user = std::env::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".into());
    let password = std::env::var("POSTGRES_PASSWORD").unwrap_or_else(|_| "postgres".into());
    let db = std::env::var("POSTGRES_DB").unwrap_or_else(|_| "todo_db".into());
    let host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "db".into());
    let port = std::env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".into());

    format!("postgresql://{user}:{password}@{host}:{port}/{db}")
}
