use async_trait::async_trait;
use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::core::configure::app::AppConfig;
use crate::core::error::AppResult;

pub type DatabaseClient = DatabaseConnection;

#[async_trait]
pub trait DatabaseClientExt: Sized {
    async fn build_from_config(config: &AppConfig) -> AppResult<Self>;
}

#[async_trait]
impl DatabaseClientExt for DatabaseClient {
    async fn build_from_config(config: &AppConfig) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.db.get_url());
        options
            .max_connections(config.db.max_connections)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(options).await?;
        info!("Connected to database: {}.", config.db.database_name);
        Ok(db)
    }
}
