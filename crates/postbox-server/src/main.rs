mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use postbox_api::state::AppStateInner;
use postbox_db::MessageStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "postbox=debug,postbox_api=debug,postbox_db=debug,tower_http=debug".into()
            }),
        )
        .init();

    // Config
    let config = Config::from_env()?;
    info!(
        "Database target: {}@{}:{}/{}",
        config.db_user, config.db_host, config.db_port, config.db_name
    );

    // Pool is lazy: an unreachable database at startup does not halt the
    // process. Owned here for the process lifetime, never closed explicitly;
    // requests borrow connections from it through the store.
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy_with(config.pg_options());
    let store = MessageStore::new(pool);

    // Startup connectivity probe. Fail open: a down database is logged and
    // each request reports its own store failure.
    match store.ping().await {
        Ok(()) => info!("Connected to PostgreSQL database"),
        Err(e) => error!("Error connecting to PostgreSQL: {}", e),
    }

    // Shared state
    let state = Arc::new(AppStateInner { store });

    // CORS — fixed allow-list from config, GET/POST with credentials
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let app = postbox_api::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Postbox server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
