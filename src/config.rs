use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_POOL_SIZE: u32 = 10;
pub const DEFAULT_LOG_FILTER: &str = "info,booking_server=debug";

/// Server settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub pool_size: u32,
    pub static_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL not found")?;
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(size) => size.parse().context("DB_POOL_SIZE must be a positive integer")?,
            None => DEFAULT_POOL_SIZE,
        };
        let static_dir = lookup("STATIC_DIR").filter(|dir| !dir.is_empty());

        Ok(Self {
            database_url,
            bind_addr,
            pool_size,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "mysql://localhost/booking")])).unwrap();
        assert_eq!(config.database_url, "mysql://localhost/booking");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "mysql://db/booking"),
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("DB_POOL_SIZE", "4"),
            ("STATIC_DIR", "./dist"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.pool_size, 4);
        assert_eq!(config.static_dir.as_deref(), Some("./dist"));
    }

    #[test]
    fn database_url_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), "DATABASE_URL not found");
    }

    #[test]
    fn bad_pool_size() {
        assert!(Config::from_lookup(lookup(&[
            ("DATABASE_URL", "mysql://db/booking"),
            ("DB_POOL_SIZE", "many"),
        ]))
        .is_err());
    }
}
