use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::product::product::{Model as ProductModel, Status};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductSerializer {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub status: Status,
    pub status_label: String,
    pub formatted_price: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub last_updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<ProductModel> for ProductSerializer {
    fn from(value: ProductModel) -> Self {
        ProductSerializer {
            id: value.id,
            name: value.name,
            quantity: value.quantity,
            price: value.price,
            status: value.status,
            status_label: value.status.label().to_string(),
            formatted_price: format!("${:.2}", value.price),
            created_at: value.created_at,
            updated_at: value.updated_at,
            last_updated_at: value.last_updated_at,
            deleted_at: value.deleted_at,
        }
    }
}

/// Documented shape of a create payload. The handler accepts arbitrary JSON
/// and runs it through the sanitizer, so extra fields are dropped rather than
/// rejected.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CreateProductRequest {
    pub name: String,
    pub quantity: i32,
    #[schema(example = "19.99")]
    pub price: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    #[schema(example = "19.99")]
    pub price: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

fn default_page() -> u64 {
    0
}

fn default_page_size() -> u64 {
    10
}
