use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("HOST is not set")?,
            port: std::env::var("PORT")
                .context("PORT is not set")?
                .parse()
                .context("PORT is not a valid port number")?,
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?,
            // Empty means every mutating endpoint rejects with 401.
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
        })
    }
}
