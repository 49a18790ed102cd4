use axum::Json;

use crate::core::error::AppResult;
use crate::core::response::EntityResponse;

#[utoipa::path(
    get,
    path = "/v1/server/health",
    tags = ["server"],
    responses(
        (status = 200, description = "Service is healthy", body = EntityResponse<String>)
    )
)]
pub async fn health_check() -> AppResult<Json<EntityResponse<String>>> {
    Ok(Json(EntityResponse {
        message: "Server is healthy.".to_string(),
        data: Some("ok".to_string()),
        total: 1,
    }))
}
