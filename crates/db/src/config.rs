//! Store selection from environment variables.

/// Which persistence backend to connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// A PostgreSQL database reached through a connection pool.
    Postgres { database_url: String },
    /// A hosted PostgREST endpoint (Supabase) reached with a project key.
    Rest { url: String, key: String },
    /// Process-local storage for development without credentials.
    Memory,
}

impl StoreConfig {
    /// Load store configuration from environment variables.
    ///
    /// | Env Var        | Selects                                  |
    /// |----------------|------------------------------------------|
    /// | `DATABASE_URL` | PostgreSQL (takes precedence)            |
    /// | `SUPABASE_URL` | hosted REST, together with `SUPABASE_KEY` |
    /// | `SUPABASE_KEY` | hosted REST, together with `SUPABASE_URL` |
    ///
    /// Falls back to [`StoreConfig::Memory`] when none are set.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("SUPABASE_URL").ok(),
            std::env::var("SUPABASE_KEY").ok(),
        )
    }

    /// Select a backend from already-read values. Empty strings count as unset.
    pub fn from_vars(
        database_url: Option<String>,
        supabase_url: Option<String>,
        supabase_key: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        if let Some(database_url) = non_empty(database_url) {
            return Self::Postgres { database_url };
        }
        match (non_empty(supabase_url), non_empty(supabase_key)) {
            (Some(url), Some(key)) => Self::Rest { url, key },
            _ => Self::Memory,
        }
    }
}
