use chrono::NaiveDateTime;
use inventory_service::domain::product::product::{Model, Status};
use sea_orm::{MockExecResult, Value};
use std::collections::BTreeMap;

pub fn timestamp() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2025, 2, 10).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

pub fn product_model(id: i64, name: &str, quantity: i32, price: &str) -> Model {
    Model {
        id,
        name: name.to_string(),
        quantity,
        price: price.parse().expect("valid price fixture"),
        status: Status::from_quantity(quantity),
        is_deleted: false,
        created_at: Some(timestamp()),
        updated_at: Some(timestamp()),
        last_updated_at: Some(timestamp()),
        deleted_at: None,
    }
}

/// Row shape produced by sea-orm's paginator count queries.
pub fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
}

pub fn exec_ok(last_insert_id: u64) -> MockExecResult {
    MockExecResult { last_insert_id, rows_affected: 1 }
}
