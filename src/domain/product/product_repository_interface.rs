use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

use super::product::{ActiveModel, Model, Status};
use crate::core::error::AppResult;

/// Sortable columns for product listings. Anything outside this whitelist is
/// rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Price,
    Quantity,
    Status,
    Created,
    Modified,
}

impl SortColumn {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortColumn::Name),
            "price" => Some(SortColumn::Price),
            "quantity" => Some(SortColumn::Quantity),
            "status" => Some(SortColumn::Status),
            "created" => Some(SortColumn::Created),
            "modified" => Some(SortColumn::Modified),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone)]
pub struct ProductListFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub sort: SortColumn,
    pub direction: SortDirection,
}

impl Default for ProductListFilter {
    fn default() -> Self {
        Self { search: None, status: None, sort: SortColumn::Name, direction: SortDirection::Asc }
    }
}

/// Storage collaborator for products. Every method operates over non-deleted
/// rows only, except `insert_product`/`update_product` which write whatever
/// model they are handed. The transaction handle is always passed in
/// explicitly so a save pipeline observes one consistent view.
#[async_trait]
pub trait ProductRepositoryInterface: Send + Sync {
    async fn insert_product(conn: &DatabaseTransaction, model: ActiveModel) -> AppResult<Model>;

    async fn update_product(conn: &DatabaseTransaction, model: ActiveModel) -> AppResult<Model>;

    async fn find_product_by_id(conn: &DatabaseTransaction, id: i64) -> AppResult<Option<Model>>;

    /// `exclude_id` makes an edit ignore the record's own row.
    async fn name_exists(
        conn: &DatabaseTransaction,
        name: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<bool>;

    async fn list_products(
        conn: &DatabaseTransaction,
        filter: &ProductListFilter,
        page: u64,
        page_size: u64,
    ) -> AppResult<(Vec<Model>, u64)>;

    /// Marks the row deleted and stamps `deleted_at`; the row is retained.
    async fn soft_delete_product(conn: &DatabaseTransaction, id: i64) -> AppResult<Model>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_whitelist() {
        for column in ["name", "price", "quantity", "status", "created", "modified"] {
            assert!(SortColumn::parse(column).is_some());
        }
        assert_eq!(SortColumn::parse("id"), None);
        assert_eq!(SortColumn::parse("deleted_at"), None);
        assert_eq!(SortColumn::parse("NAME"), None);
    }
}
