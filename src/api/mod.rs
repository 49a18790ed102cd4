use axum::http::{StatusCode, Uri};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::core::app_state::AppState;

pub mod domain;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory Service API",
        description = "Product inventory management: list, search, create, edit, and soft-delete products."
    ),
    tags(
        (name = "product_service", description = "Product inventory endpoints"),
        (name = "server", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn build_routes() -> OpenApiRouter<AppState> {
    let server_routes = OpenApiRouter::new().routes(routes!(domain::server::health_check));

    let product_routes = OpenApiRouter::new()
        .routes(routes!(
            domain::product::product::controller_list_products,
            domain::product::product::controller_create_product
        ))
        .routes(routes!(
            domain::product::product::controller_get_product,
            domain::product::product::controller_update_product,
            domain::product::product::controller_delete_product
        ));

    OpenApiRouter::new().merge(product_routes).merge(server_routes).fallback(handler_404)
}

pub async fn handler_404(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("No route for {uri}"))
}
