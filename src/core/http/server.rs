use log::info;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api::ApiDoc;
use crate::core::app_state::AppState;
use crate::core::configure::app::AppConfig;
use crate::core::error::AppResult;

pub struct AppServer {
    pub state: AppState,
    tcp: TcpListener,
}

impl AppServer {
    pub async fn new(mut config: AppConfig) -> AppResult<Self> {
        let tcp = TcpListener::bind(config.server.get_socket_addr()?).await?;
        let addr = tcp.local_addr()?;
        info!("Server listening on {addr}.");
        config.server.port = addr.port();

        let state = AppState::new(config).await?;
        Ok(Self { state, tcp })
    }

    pub async fn run(self) -> AppResult<()> {
        let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(api::build_routes())
            .split_for_parts();

        let router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .with_state(self.state);

        axum::serve(self.tcp, router).await?;
        Ok(())
    }
}
