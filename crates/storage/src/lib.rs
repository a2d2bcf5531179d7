pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use error::Result;

/// Handle to the Postgres connection pool shared across the application.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
