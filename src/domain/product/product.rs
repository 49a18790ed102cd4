use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quantities strictly above this are in stock.
const IN_STOCK_THRESHOLD: i32 = 10;
/// Quantities at or above this (and not in stock) are low stock.
const LOW_STOCK_THRESHOLD: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub status: Status,
    pub is_deleted: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    /// Touched only when price, quantity, or status changed.
    pub last_updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[sea_orm(string_value = "in_stock")]
    InStock,
    #[sea_orm(string_value = "low_stock")]
    LowStock,
    #[sea_orm(string_value = "out_of_stock")]
    OutOfStock,
}

impl Status {
    /// Stock status is a pure function of quantity; callers may never set it
    /// directly. A quantity of exactly 10 still counts as low stock.
    // TODO: product owner to confirm whether 10 should already be in stock.
    pub fn from_quantity(quantity: i32) -> Self {
        if quantity > IN_STOCK_THRESHOLD {
            Status::InStock
        } else if quantity >= LOW_STOCK_THRESHOLD {
            Status::LowStock
        } else {
            Status::OutOfStock
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in_stock" => Some(Status::InStock),
            "low_stock" => Some(Status::LowStock),
            "out_of_stock" => Some(Status::OutOfStock),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::InStock => "In Stock",
            Status::LowStock => "Low Stock",
            Status::OutOfStock => "Out of Stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_boundaries() {
        assert_eq!(Status::from_quantity(0), Status::OutOfStock);
        assert_eq!(Status::from_quantity(1), Status::LowStock);
        assert_eq!(Status::from_quantity(10), Status::LowStock);
        assert_eq!(Status::from_quantity(11), Status::InStock);
        assert_eq!(Status::from_quantity(1000), Status::InStock);
    }

    #[test]
    fn status_is_total_and_deterministic_over_valid_range() {
        for quantity in 0..=1000 {
            let expected = if quantity > 10 {
                Status::InStock
            } else if quantity >= 1 {
                Status::LowStock
            } else {
                Status::OutOfStock
            };
            assert_eq!(Status::from_quantity(quantity), expected);
            assert_eq!(Status::from_quantity(quantity), Status::from_quantity(quantity));
        }
    }

    #[test]
    fn status_parse_accepts_only_known_literals() {
        assert_eq!(Status::parse("in_stock"), Some(Status::InStock));
        assert_eq!(Status::parse("low_stock"), Some(Status::LowStock));
        assert_eq!(Status::parse("out_of_stock"), Some(Status::OutOfStock));
        assert_eq!(Status::parse("IN_STOCK"), None);
        assert_eq!(Status::parse("discontinued"), None);
    }

    #[test]
    fn status_labels() {
        assert_eq!(Status::InStock.label(), "In Stock");
        assert_eq!(Status::LowStock.label(), "Low Stock");
        assert_eq!(Status::OutOfStock.label(), "Out of Stock");
    }
}
