use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use log::error;
use sea_orm::TransactionTrait;

use crate::application::product::product_service_interface::ProductServiceInterface;
use crate::core::app_state::AppState;
use crate::core::error::AppResult;
use crate::core::response::{ClientResponseError, EntityResponse};
use crate::presentation::product::product::{
    CreateProductRequest, ListProductsQuery, ProductSerializer, UpdateProductRequest,
};

#[utoipa::path(
    get,
    path = "/v1/products",
    tags = ["product_service"],
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Success list products", body = EntityResponse<Vec<ProductSerializer>>),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> AppResult<Json<EntityResponse<Vec<ProductSerializer>>>> {
    let tx = state.db.begin().await?;
    match state.product_service.list_products(&tx, query).await {
        Ok((products, total)) => Ok(Json(EntityResponse {
            message: "Successfully listed products.".to_string(),
            data: Some(products),
            total,
        })),
        Err(err) => {
            log::warn!("Unsuccessfully list products: {err:?}.");
            Err(err)
        },
    }
}

#[utoipa::path(
    get,
    path = "/v1/products/{id}",
    tags = ["product_service"],
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Success get product", body = EntityResponse<ProductSerializer>),
        (status = 404, description = "Product not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EntityResponse<ProductSerializer>>> {
    let tx = state.db.begin().await?;
    match state.product_service.get_product(&tx, id).await {
        Ok(product) => Ok(Json(EntityResponse {
            message: "Successfully get product.".to_string(),
            data: Some(product),
            total: 1,
        })),
        Err(err) => {
            log::warn!("Unsuccessfully get product {id}: {err:?}.");
            Err(err)
        },
    }
}

#[utoipa::path(
    post,
    path = "/v1/products",
    tags = ["product_service"],
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = EntityResponse<ProductSerializer>),
        (status = 400, description = "Bad request - validation failed", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_create_product(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<EntityResponse<ProductSerializer>>)> {
    let tx = state.db.begin().await?;
    match state.product_service.create_product(&tx, payload).await {
        Ok(product) => {
            tx.commit().await?;
            log::info!("Product saved successfully: {}.", product.id);
            Ok((
                StatusCode::CREATED,
                Json(EntityResponse {
                    message: "Product saved successfully.".to_string(),
                    data: Some(product),
                    total: 1,
                }),
            ))
        },
        Err(err) => {
            tx.rollback().await?;
            log::warn!("Unable to save product: {err:?}.");
            Err(err)
        },
    }
}

#[utoipa::path(
    put,
    path = "/v1/products/{id}",
    tags = ["product_service"],
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated successfully", body = EntityResponse<ProductSerializer>),
        (status = 400, description = "Bad request - validation failed", body = ClientResponseError),
        (status = 404, description = "Product not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<EntityResponse<ProductSerializer>>> {
    let tx = state.db.begin().await?;
    match state.product_service.update_product(&tx, id, payload).await {
        Ok(product) => {
            tx.commit().await?;
            log::info!("Product updated successfully: {id}.");
            Ok(Json(EntityResponse {
                message: "Product updated successfully.".to_string(),
                data: Some(product),
                total: 1,
            }))
        },
        Err(err) => {
            tx.rollback().await?;
            log::warn!("Unable to update product {id}: {err:?}.");
            Err(err)
        },
    }
}

#[utoipa::path(
    delete,
    path = "/v1/products/{id}",
    tags = ["product_service"],
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted successfully", body = EntityResponse<ProductSerializer>),
        (status = 404, description = "Product not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EntityResponse<ProductSerializer>>> {
    let tx = state.db.begin().await?;
    match state.product_service.delete_product(&tx, id).await {
        Ok(product) => {
            tx.commit().await?;
            log::info!("Product deleted successfully: {id}.");
            Ok(Json(EntityResponse {
                message: "Product deleted successfully.".to_string(),
                data: Some(product),
                total: 1,
            }))
        },
        Err(err) => {
            tx.rollback().await?;
            error!("Unable to delete product {id}: {err:?}.");
            Err(err)
        },
    }
}
