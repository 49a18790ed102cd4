use chrono::Utc;
use log::info;
use sea_orm::{ActiveValue::NotSet, DatabaseTransaction, Set};

use crate::application::product::product_service_interface::ProductServiceInterface;
use crate::core::error::{AppError, AppResult};
use crate::domain::product::draft::{validate_cross_field, validate_fields, ProductDraft, ValidatedProduct};
use crate::domain::product::product::{self, ActiveModel, Status};
use crate::domain::product::product_repository_interface::{
    ProductListFilter, ProductRepositoryInterface, SortColumn, SortDirection,
};
use crate::domain::product::sanitizer::sanitize_product_data;
use crate::presentation::product::product::{ListProductsQuery, ProductSerializer};

const MAX_PAGE_SIZE: u64 = 100;

/// Application service - drives the sanitize / validate / derive / persist
/// pipeline for products. The database transaction is always handed in by
/// the caller, which also owns commit and rollback.
pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        Self
    }

    /// Field-level validation over the candidate, uniqueness included. All
    /// violations come back in one map; nothing has been written yet.
    async fn validate_candidate(
        &self,
        conn: &DatabaseTransaction,
        draft: &ProductDraft,
    ) -> AppResult<ValidatedProduct> {
        let name_is_unique = match draft.name.as_deref() {
            Some(name) if !name.is_empty() => {
                !product::Entity::name_exists(conn, name, draft.id).await?
            },
            _ => true,
        };

        validate_fields(draft, name_is_unique).map_err(|errors| AppError::ValidationError { errors })
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductServiceInterface for ProductService {
    async fn list_products(
        &self,
        conn: &DatabaseTransaction,
        query: ListProductsQuery,
    ) -> AppResult<(Vec<ProductSerializer>, u64)> {
        let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);
        let filter = ProductListFilter {
            search: query
                .search
                .as_deref()
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_string),
            // An unknown status filter is ignored, as if absent.
            status: query.status.as_deref().and_then(Status::parse),
            sort: query.sort.as_deref().and_then(SortColumn::parse).unwrap_or(SortColumn::Name),
            direction: match query.direction.as_deref() {
                Some("desc") => SortDirection::Desc,
                _ => SortDirection::Asc,
            },
        };

        let (products, total) =
            product::Entity::list_products(conn, &filter, query.page, page_size).await?;
        Ok((products.into_iter().map(Into::into).collect(), total))
    }

    async fn get_product(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
    ) -> AppResult<ProductSerializer> {
        validate_id(id)?;
        let product = product::Entity::find_product_by_id(conn, id).await?.ok_or_else(|| {
            AppError::EntityNotFoundError { detail: format!("Product with id {id} not found") }
        })?;
        Ok(product.into())
    }

    async fn create_product(
        &self,
        conn: &DatabaseTransaction,
        payload: serde_json::Value,
    ) -> AppResult<ProductSerializer> {
        let payload = validate_payload(payload)?;
        let draft = ProductDraft::from_input(sanitize_product_data(&payload));
        let candidate = self.validate_candidate(conn, &draft).await?;

        // Status is derived from quantity, never taken from the caller.
        let status = Status::from_quantity(candidate.quantity);
        validate_cross_field(&candidate).map_err(|errors| AppError::ValidationError { errors })?;

        let now = Utc::now().naive_utc();
        let model = ActiveModel {
            id: NotSet,
            name: Set(candidate.name),
            quantity: Set(candidate.quantity),
            price: Set(candidate.price),
            status: Set(status),
            is_deleted: Set(false),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            last_updated_at: Set(Some(now)),
            deleted_at: Set(None),
        };

        let created = product::Entity::insert_product(conn, model).await?;
        info!("Product created: {}.", created.id);
        Ok(created.into())
    }

    async fn update_product(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
        payload: serde_json::Value,
    ) -> AppResult<ProductSerializer> {
        validate_id(id)?;
        let payload = validate_payload(payload)?;
        let existing = product::Entity::find_product_by_id(conn, id).await?.ok_or_else(|| {
            AppError::EntityNotFoundError { detail: format!("Product with id {id} not found") }
        })?;

        let draft = ProductDraft::from_existing(&existing, sanitize_product_data(&payload));
        let candidate = self.validate_candidate(conn, &draft).await?;
        let status = Status::from_quantity(candidate.quantity);
        validate_cross_field(&candidate).map_err(|errors| AppError::ValidationError { errors })?;

        let now = Utc::now().naive_utc();
        let touch_last_updated = stock_fields_changed(&existing, &candidate, status);

        let mut model: ActiveModel = existing.into();
        model.name = Set(candidate.name);
        model.quantity = Set(candidate.quantity);
        model.price = Set(candidate.price);
        model.status = Set(status);
        model.updated_at = Set(Some(now));
        if touch_last_updated {
            model.last_updated_at = Set(Some(now));
        }

        let updated = product::Entity::update_product(conn, model).await?;
        info!("Product updated: {}.", updated.id);
        Ok(updated.into())
    }

    async fn delete_product(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
    ) -> AppResult<ProductSerializer> {
        validate_id(id)?;
        let deleted = product::Entity::soft_delete_product(conn, id).await?;
        info!("Product soft deleted: {}.", deleted.id);
        Ok(deleted.into())
    }
}

fn validate_id(id: i64) -> AppResult<()> {
    if id < 1 {
        return Err(AppError::BadRequestError("Invalid product ID".to_string()));
    }
    Ok(())
}

fn validate_payload(payload: serde_json::Value) -> AppResult<serde_json::Value> {
    if !payload.is_object() {
        return Err(AppError::InvalidPayloadError("Request body must be a JSON object".to_string()));
    }
    Ok(payload)
}

/// `last_updated_at` is touched only when price, quantity, or the derived
/// status moved away from the stored row.
fn stock_fields_changed(
    existing: &product::Model,
    candidate: &ValidatedProduct,
    status: Status,
) -> bool {
    existing.price != candidate.price
        || existing.quantity != candidate.quantity
        || existing.status != status
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stored(quantity: i32, price: &str) -> product::Model {
        let saved_at = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap().and_hms_opt(8, 0, 0);
        product::Model {
            id: 1,
            name: "Widget".to_string(),
            quantity,
            price: price.parse().unwrap(),
            status: Status::from_quantity(quantity),
            is_deleted: false,
            created_at: saved_at,
            updated_at: saved_at,
            last_updated_at: saved_at,
            deleted_at: None,
        }
    }

    fn candidate(name: &str, quantity: i32, price: &str) -> ValidatedProduct {
        ValidatedProduct { name: name.to_string(), quantity, price: price.parse().unwrap() }
    }

    #[test]
    fn last_updated_is_not_touched_by_a_name_only_edit() {
        let existing = stored(20, "19.99");
        let unchanged = candidate("Widget Renamed", 20, "19.99");
        let status = Status::from_quantity(unchanged.quantity);
        assert!(!stock_fields_changed(&existing, &unchanged, status));
    }

    #[test]
    fn last_updated_is_touched_when_price_or_quantity_move() {
        let existing = stored(20, "19.99");

        let cheaper = candidate("Widget", 20, "18.99");
        assert!(stock_fields_changed(&existing, &cheaper, Status::from_quantity(20)));

        let restocked = candidate("Widget", 30, "19.99");
        assert!(stock_fields_changed(&existing, &restocked, Status::from_quantity(30)));
    }

    #[test]
    fn last_updated_is_touched_when_the_derived_status_flips() {
        let existing = stored(11, "19.99");
        let drained = candidate("Widget", 10, "19.99");
        assert!(stock_fields_changed(&existing, &drained, Status::from_quantity(10)));
        assert_ne!(existing.status, Status::from_quantity(10));
    }
}
