use inventory_service::core::error::AppResult;
use inventory_service::core::http::server::AppServer;
use inventory_service::util::constant::CONFIG;
use log::{error, info, LevelFilter};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> AppResult<()> {
    env_logger::builder().filter_level(LevelFilter::Info).format_target(true).init();

    let config = CONFIG.clone();
    let server = AppServer::new(config).await?;

    Migrator::up(server.state.db.as_ref(), None).await?;
    info!("Database migrations are up to date.");

    info!("Starting server...");
    let server_task = tokio::spawn(async {
        if let Err(e) = server.run().await {
            error!("HTTP Server error: {e:?}");
        }
    });

    let _server_result = tokio::join!(server_task);

    Ok(())
}
