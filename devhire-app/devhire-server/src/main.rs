use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use devhire_api::{build_router, AppState};
use devhire_core::services::{NotificationService, UserMenuService};
use devhire_infrastructure::{
    create_pool, run_migrations, PgConversationRepository, PgNotificationRepository,
    PgProfileRepository, PgUserRepository,
};
use devhire_security::JwtService;
use devhire_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes file logs on shutdown
    let _log_guard = devhire_shared::telemetry::init_telemetry(&config.log, &config.app.name)?;

    info!("{} starting ({})...", config.app.name, config.app.env);
    config.ensure_secure()?;

    // Connect to Database
    let pool = create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await
    .map_err(|e| {
        error!("Failed to connect to database: {}", e);
        e
    })?;
    info!("Database connection established.");

    run_migrations(&pool).await?;

    // Wire repositories and services
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let profiles = Arc::new(PgProfileRepository::new(pool.clone()));
    let conversations = Arc::new(PgConversationRepository::new(pool.clone()));
    let notifications = Arc::new(PgNotificationRepository::new(pool));

    let state = AppState {
        jwt: Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry,
            config.jwt.refresh_token_expiry,
        )),
        users,
        menu_service: Arc::new(UserMenuService::new(profiles, conversations, notifications.clone())),
        notification_service: Arc::new(NotificationService::new(notifications)),
    };

    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
