use std::sync::Arc;

use crate::application::product::product_service::ProductService;
use crate::core::configure::app::AppConfig;
use crate::core::error::AppResult;
use crate::infrastructure::persistence::postgres::{DatabaseClient, DatabaseClientExt};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Arc<DatabaseClient>,
    pub product_service: Arc<ProductService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let config = Arc::new(config);
        let db = Arc::new(DatabaseClient::build_from_config(&config).await?);
        let product_service = Arc::new(ProductService::new());

        Ok(Self { config, db, product_service })
    }
}
