// src/config.rs
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{warn, Level};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    pub fn from_env() -> Self {
        std::env::var("APP_ENV")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> Level {
        match self {
            Environment::Development => Level::DEBUG,
            Environment::Production => Level::INFO,
            Environment::Testing => Level::WARN,
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "testing" | "test" => Ok(Environment::Testing),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Testing => "testing",
        })
    }
}

/// Where the three CSV sources live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub products: PathBuf,
    pub orders: PathBuf,
    pub order_items: PathBuf,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            products: PathBuf::from("products.csv"),
            orders: PathBuf::from("orders.csv"),
            order_items: PathBuf::from("order_items.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: Environment,
    pub host: IpAddr,
    pub port: u16,
    pub sources: DataSources,
    /// N used for rankings when the request does not ask for one.
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            sources: DataSources::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Reads the process environment (after `.env` has been applied).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys take defaults;
    /// unparseable values are logged and also take defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        Config {
            environment: parsed(&lookup, "APP_ENV", defaults.environment),
            host: parsed(&lookup, "HOST", defaults.host),
            port: parsed(&lookup, "PORT", defaults.port),
            sources: DataSources {
                products: path("PRODUCTS_CSV", defaults.sources.products),
                orders: path("ORDERS_CSV", defaults.sources.orders),
                order_items: path("ORDER_ITEMS_CSV", defaults.sources.order_items),
            },
            top_n: parsed(&lookup, "TOP_N", defaults.top_n),
        }
    }
}

fn parsed<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, fallback = %default, "Invalid config value, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.sources.products, PathBuf::from("products.csv"));
        assert_eq!(config.sources.order_items, PathBuf::from("order_items.csv"));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("PRODUCTS_CSV", "/data/p.csv"),
            ("ORDERS_CSV", "/data/o.csv"),
            ("ORDER_ITEMS_CSV", "/data/i.csv"),
            ("TOP_N", "10"),
        ]));
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 8080);
        assert_eq!(config.sources.orders, PathBuf::from("/data/o.csv"));
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("TOP_N", "-1"),
            ("APP_ENV", "staging"),
            ("PRODUCTS_CSV", "  "),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.sources.products, PathBuf::from("products.csv"));
    }

    #[test]
    fn environment_log_levels() {
        assert_eq!("Prod".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(Environment::Development.log_level(), Level::DEBUG);
        assert_eq!(Environment::Testing.log_level(), Level::WARN);
    }
}
