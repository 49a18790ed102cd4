use sea_orm::DatabaseTransaction;

use crate::core::error::AppResult;
use crate::presentation::product::product::{ListProductsQuery, ProductSerializer};

pub trait ProductServiceInterface: Send + Sync {
    async fn list_products(
        &self,
        conn: &DatabaseTransaction,
        query: ListProductsQuery,
    ) -> AppResult<(Vec<ProductSerializer>, u64)>;

    async fn get_product(&self, conn: &DatabaseTransaction, id: i64)
        -> AppResult<ProductSerializer>;

    async fn create_product(
        &self,
        conn: &DatabaseTransaction,
        payload: serde_json::Value,
    ) -> AppResult<ProductSerializer>;

    async fn update_product(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
        payload: serde_json::Value,
    ) -> AppResult<ProductSerializer>;

    async fn delete_product(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
    ) -> AppResult<ProductSerializer>;
}
