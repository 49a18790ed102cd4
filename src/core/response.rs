use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EntityResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub total: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientResponseError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}
