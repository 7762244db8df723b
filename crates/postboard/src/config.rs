use std::{env, time::Duration};

/// Post store backends selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostBackend {
    Mongo,
    InMemory,
}

impl PostBackend {
    fn from_env_value(value: &str) -> Option<Self> {
        match value {
            "mongo" => Some(Self::Mongo),
            "inmemory" => Some(Self::InMemory),
            _ => None,
        }
    }
}

/// User store backends selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserBackend {
    Postgres,
    InMemory,
}

impl UserBackend {
    fn from_env_value(value: &str) -> Option<Self> {
        match value {
            "postgres" => Some(Self::Postgres),
            "inmemory" => Some(Self::InMemory),
            _ => None,
        }
    }
}

/// Cache backends selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl CacheBackend {
    fn from_env_value(value: &str) -> Option<Self> {
        match value {
            "redis" => Some(Self::Redis),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Post store backend: "mongo" or "inmemory" (default: "inmemory")
    pub post_backend: PostBackend,
    /// User store backend: "postgres" or "inmemory" (default: "inmemory")
    pub user_backend: UserBackend,
    /// Cache backend: "redis" or "memory" (default: "memory")
    pub cache_backend: CacheBackend,
    /// MongoDB connection URL (default: "mongodb://localhost:27017")
    pub mongo_url: String,
    /// MongoDB database name (default: "postboard")
    pub mongo_database: String,
    /// PostgreSQL connection URL (default: "postgres://localhost:5432/postboard")
    pub postgres_url: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    pub redis_url: String,
    /// Maximum number of in-memory cache entries (default: 1,024)
    pub cache_max_entries: usize,
    /// Per-call timeout inside the repost protocol, in seconds (default: 5)
    pub operation_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POST_STORE` - Post store backend, "mongo" or "inmemory" (default: "inmemory")
    /// - `USER_STORE` - User store backend, "postgres" or "inmemory" (default: "inmemory")
    /// - `CACHE_BACKEND` - Cache backend, "redis" or "memory" (default: "memory")
    /// - `MONGO_URL` - MongoDB connection URL (default: "mongodb://localhost:27017")
    /// - `MONGO_DATABASE` - MongoDB database name (default: "postboard")
    /// - `POSTGRES_URL` - PostgreSQL connection URL (default: "postgres://localhost:5432/postboard")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 1,024)
    /// - `OPERATION_TIMEOUT_SECONDS` - Per-call repost timeout (default: 5)
    pub fn from_env() -> Self {
        Self {
            post_backend: env::var("POST_STORE")
                .ok()
                .and_then(|v| PostBackend::from_env_value(&v))
                .unwrap_or(PostBackend::InMemory),
            user_backend: env::var("USER_STORE")
                .ok()
                .and_then(|v| UserBackend::from_env_value(&v))
                .unwrap_or(UserBackend::InMemory),
            cache_backend: env::var("CACHE_BACKEND")
                .ok()
                .and_then(|v| CacheBackend::from_env_value(&v))
                .unwrap_or(CacheBackend::Memory),
            mongo_url: env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_database: env::var("MONGO_DATABASE").unwrap_or_else(|_| "postboard".to_string()),
            postgres_url: env::var("POSTGRES_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/postboard".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_024),
            operation_timeout_seconds: env::var("OPERATION_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Get the per-call repost timeout as a Duration.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_timeout_conversion() {
        let config = Config {
            post_backend: PostBackend::InMemory,
            user_backend: UserBackend::InMemory,
            cache_backend: CacheBackend::Memory,
            mongo_url: "mongodb://localhost:27017".to_string(),
            mongo_database: "postboard".to_string(),
            postgres_url: "postgres://localhost:5432/postboard".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
            cache_max_entries: 1_024,
            operation_timeout_seconds: 9,
        };

        assert_eq!(config.operation_timeout(), Duration::from_secs(9));
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!(PostBackend::from_env_value("mongo"), Some(PostBackend::Mongo));
        assert_eq!(
            PostBackend::from_env_value("inmemory"),
            Some(PostBackend::InMemory)
        );
        assert_eq!(PostBackend::from_env_value("sqlite"), None);

        assert_eq!(
            UserBackend::from_env_value("postgres"),
            Some(UserBackend::Postgres)
        );
        assert_eq!(UserBackend::from_env_value("mysql"), None);

        assert_eq!(
            CacheBackend::from_env_value("redis"),
            Some(CacheBackend::Redis)
        );
        assert_eq!(
            CacheBackend::from_env_value("memory"),
            Some(CacheBackend::Memory)
        );
        assert_eq!(CacheBackend::from_env_value("memcached"), None);
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("POST_STORE");
        env::remove_var("USER_STORE");
        env::remove_var("CACHE_BACKEND");
        env::remove_var("MONGO_URL");
        env::remove_var("MONGO_DATABASE");
        env::remove_var("POSTGRES_URL");
        env::remove_var("REDIS_URL");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("OPERATION_TIMEOUT_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.post_backend, PostBackend::InMemory);
        assert_eq!(config.user_backend, UserBackend::InMemory);
        assert_eq!(config.cache_backend, CacheBackend::Memory);
        assert_eq!(config.mongo_url, "mongodb://localhost:27017");
        assert_eq!(config.mongo_database, "postboard");
        assert_eq!(config.postgres_url, "postgres://localhost:5432/postboard");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.cache_max_entries, 1_024);
        assert_eq!(config.operation_timeout_seconds, 5);
    }
}
