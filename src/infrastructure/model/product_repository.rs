use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::core::error::{AppError, AppResult};
use crate::domain::product::product::{self, ActiveModel, Column, Model};
use crate::domain::product::product_repository_interface::{
    ProductListFilter, ProductRepositoryInterface, SortColumn, SortDirection,
};

#[async_trait]
impl ProductRepositoryInterface for product::Entity {
    async fn insert_product(conn: &DatabaseTransaction, model: ActiveModel) -> AppResult<Model> {
        let product = model.insert(conn).await?;
        Ok(product)
    }

    async fn update_product(conn: &DatabaseTransaction, model: ActiveModel) -> AppResult<Model> {
        let product = model.update(conn).await?;
        Ok(product)
    }

    async fn find_product_by_id(conn: &DatabaseTransaction, id: i64) -> AppResult<Option<Model>> {
        let product = product::Entity::find_by_id(id)
            .filter(Column::IsDeleted.eq(false))
            .one(conn)
            .await?;
        Ok(product)
    }

    async fn name_exists(
        conn: &DatabaseTransaction,
        name: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<bool> {
        let mut query = product::Entity::find()
            .filter(Column::Name.eq(name))
            .filter(Column::IsDeleted.eq(false));
        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }
        let count = query.count(conn).await?;
        Ok(count > 0)
    }

    async fn list_products(
        conn: &DatabaseTransaction,
        filter: &ProductListFilter,
        page: u64,
        page_size: u64,
    ) -> AppResult<(Vec<Model>, u64)> {
        let mut query = product::Entity::find().filter(Column::IsDeleted.eq(false));

        if let Some(ref term) = filter.search {
            query = query.filter(Column::Name.like(format!("%{}%", escape_like(term))));
        }
        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status));
        }

        let column = match filter.sort {
            SortColumn::Name => Column::Name,
            SortColumn::Price => Column::Price,
            SortColumn::Quantity => Column::Quantity,
            SortColumn::Status => Column::Status,
            SortColumn::Created => Column::CreatedAt,
            SortColumn::Modified => Column::UpdatedAt,
        };
        let order = match filter.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let paginator = query.order_by(column, order).paginate(conn, page_size);
        let total = paginator.num_items().await?;
        let products = paginator.fetch_page(page).await?;
        Ok((products, total))
    }

    async fn soft_delete_product(conn: &DatabaseTransaction, id: i64) -> AppResult<Model> {
        let product = product::Entity::find_by_id(id)
            .filter(Column::IsDeleted.eq(false))
            .one(conn)
            .await?
            .ok_or_else(|| AppError::EntityNotFoundError {
                detail: format!("Product with id {id} not found"),
            })?;

        let now = Utc::now().naive_utc();
        let mut product: ActiveModel = product.into();
        product.is_deleted = Set(true);
        product.deleted_at = Set(Some(now));
        product.updated_at = Set(Some(now));
        let product = product.update(conn).await?;
        Ok(product)
    }
}

/// Escape LIKE wildcards so a search term is matched literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
