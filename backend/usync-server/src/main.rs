use usync_server::{AppState, build_router, logger};

use usync_config::Config;
use usync_db::UserRepository;
use usync_directory::DirectoryClient;
use usync_sync::{UserSyncService, run_bootstrap};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting usync-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (migrations included)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = usync_db::create_pool(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let directory = DirectoryClient::from_config(&config.directory)?;
    info!("Remote directory: {}", directory.base_url);

    // Populate the local store before accepting traffic
    let bootstrap_service =
        UserSyncService::new(UserRepository::new(pool.clone()), directory.clone());
    let report = run_bootstrap(&bootstrap_service, &config.bootstrap)
        .await
        .inspect_err(|e| error!("Bootstrap failed, refusing to start: {}", e))?;
    info!(
        "Bootstrap complete: {} mirrored, {} deleted",
        report.mirrored.len(),
        report.deleted.len()
    );

    let app = build_router(AppState::new(pool, directory));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await
        }
    }
}
