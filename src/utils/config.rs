use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::utils::errors::ApiError;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_DATABASE_NAME: &str = "petclinic";

/// Which backing store the services are wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Map,
    Mongo,
}

impl FromStr for Persistence {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "map" => Ok(Persistence::Map),
            "mongo" | "mongodb" => Ok(Persistence::Mongo),
            other => Err(ApiError::InvalidData(format!(
                "PERSISTENCE must be 'map' or 'mongo', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub persistence: Persistence,
    pub database_url: Option<String>,
    pub database_name: String,
}

impl AppConfig {

    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(|| {
            dotenv().ok();

            Self::from_env().unwrap_or_else(|e| {
                log::warn!("{}; falling back to map persistence", e);
                Self::map_fallback()
            })
        })
    }

    pub fn from_env() -> Result<AppConfig, ApiError> {
        let defaults = Self::defaults();

        let persistence = match env::var("PERSISTENCE") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.persistence,
        };

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
        if persistence == Persistence::Mongo && database_url.is_none() {
            return Err(ApiError::InvalidData(
                "DATABASE_URL environment variable must be set for mongo persistence".to_string(),
            ));
        }

        Ok(AppConfig {
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            persistence,
            database_url,
            database_name: env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
        })
    }

    /// Map persistence with the remaining environment overrides still applied.
    pub fn map_fallback() -> AppConfig {
        let defaults = Self::defaults();

        AppConfig {
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            persistence: Persistence::Map,
            database_url: None,
            database_name: env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
        }
    }

    fn defaults() -> AppConfig {
        AppConfig {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            persistence: Persistence::Map,
            database_url: None,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}
