use booker_core::profile::ProfileSourceKind;

/// Default allowed origins: the React dev server and Vite, by name and loopback IP.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:5173,http://127.0.0.1:3000,http://127.0.0.1:5173";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Display name reported by `GET /`.
    pub app_name: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Which profile source backs the preview endpoint.
    pub profile_source: ProfileSourceKind,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `8000`                           |
    /// | `APP_NAME`             | `Alex Talent Booker`             |
    /// | `CORS_ORIGINS`         | localhost / 127.0.0.1 on 3000, 5173 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `PROFILE_SOURCE`       | `stub`                           |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable does not parse or `PROFILE_SOURCE`
    /// names an unknown source.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let app_name = std::env::var("APP_NAME").unwrap_or_else(|_| "Alex Talent Booker".into());

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let profile_source: ProfileSourceKind = std::env::var("PROFILE_SOURCE")
            .unwrap_or_else(|_| "stub".into())
            .parse()
            .unwrap_or_else(|e| panic!("PROFILE_SOURCE is invalid: {e}"));

        Self {
            host,
            port,
            app_name,
            cors_origins,
            request_timeout_secs,
            profile_source,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            app_name: "Alex Talent Booker".into(),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            request_timeout_secs: 30,
            profile_source: ProfileSourceKind::Stub,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
