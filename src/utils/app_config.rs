use anyhow::{Context, Result};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::utils::db::DbPool;

#[derive(Clone)]
pub struct AppConfig {
    pub pool: DbPool,
}

impl AppConfig {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL must be set in .env file or environment variables")?;
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::new(manager)?;

        Ok(Self::new(pool))
    }
}
