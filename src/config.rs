use std::time::Duration;

use crate::services::cocktail_db::COCKTAILDB_API_BASE;

pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3001";
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/cocktails";

#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Memory,
    MongoDb { uri: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsPolicy {
    /// Single frontend origin, credentials enabled
    Restricted { origin: String },
    /// Any origin
    Permissive,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub cors: CorsPolicy,
    pub cocktail_api_base: String,
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match get("PORT") {
            Some(p) => p.trim().parse::<u16>().map_err(|_| format!("Invalid PORT: {}", p))?,
            None => 3000,
        };

        let storage = match get("STORAGE").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("memory") => StorageBackend::Memory,
            Some("mongodb") | Some("mongo") => StorageBackend::MongoDb {
                uri: get("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            },
            Some(other) => return Err(format!("Invalid STORAGE: {} (expected memory or mongodb)", other)),
        };

        let cors = match get("CORS_MODE").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("restricted") => CorsPolicy::Restricted {
                origin: get("FRONTEND_ORIGIN").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string()),
            },
            Some("permissive") => CorsPolicy::Permissive,
            Some(other) => return Err(format!("Invalid CORS_MODE: {} (expected restricted or permissive)", other)),
        };

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(s) => Some(Duration::from_secs(
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid UPSTREAM_TIMEOUT_SECS: {}", s))?,
            )),
            None => None,
        };

        Ok(Self {
            host,
            port,
            storage,
            cors,
            cocktail_api_base: get("COCKTAIL_API_BASE").unwrap_or_else(|| COCKTAILDB_API_BASE.to_string()),
            upstream_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c.port, 3000);
        assert_eq!(c.host, "0.0.0.0");
        assert_eq!(c.storage, StorageBackend::Memory);
        assert_eq!(c.cors, CorsPolicy::Restricted { origin: DEFAULT_FRONTEND_ORIGIN.to_string() });
        assert_eq!(c.cocktail_api_base, COCKTAILDB_API_BASE);
        assert_eq!(c.upstream_timeout, None);
    }

    #[test]
    fn test_mongodb_variant() {
        let c = config(&[("STORAGE", "MongoDB"), ("CORS_MODE", "permissive")]).unwrap();
        assert_eq!(c.storage, StorageBackend::MongoDb { uri: DEFAULT_MONGODB_URI.to_string() });
        assert_eq!(c.cors, CorsPolicy::Permissive);

        let c = config(&[("STORAGE", "mongodb"), ("MONGODB_URI", "mongodb://db:27017/bar")]).unwrap();
        assert_eq!(c.storage, StorageBackend::MongoDb { uri: "mongodb://db:27017/bar".to_string() });
    }

    #[test]
    fn test_invalid_values() {
        assert!(config(&[("PORT", "abc")]).is_err());
        assert!(config(&[("PORT", "70000")]).is_err());
        assert!(config(&[("STORAGE", "redis")]).is_err());
        assert!(config(&[("CORS_MODE", "open")]).is_err());
        assert!(config(&[("UPSTREAM_TIMEOUT_SECS", "-1")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("PORT", "8080"),
            ("FRONTEND_ORIGIN", "http://localhost:5173"),
            ("UPSTREAM_TIMEOUT_SECS", "10"),
        ])
        .unwrap();
        assert_eq!(c.port, 8080);
        assert_eq!(c.cors, CorsPolicy::Restricted { origin: "http://localhost:5173".to_string() });
        assert_eq!(c.upstream_timeout, Some(Duration::from_secs(10)));
    }
}
