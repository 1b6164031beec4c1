use std::sync::Arc;

use kunai_app::app::router;
use kunai_core::config::load_config;
use kunai_db::db::connection::create_pool;
use kunai_db::db::migrate::run_migrations;
use kunai_db::store::DavStore;
use salvo::Listener;
use salvo::conn::TcpListener;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Kunai DAV gate");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    run_migrations(&config.database.url).await?;

    let pool = create_pool(
        &config.database.url,
        u32::from(config.database.max_connections),
    )
    .await?;

    tracing::info!("Database connection pool created.");

    let store: Arc<dyn DavStore> = Arc::new(pool);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    tracing::info!(origin = %config.server.origin(), "Server listening on {bind_addr}");

    salvo::Server::new(acceptor)
        .serve(router(config, store))
        .await;

    Ok(())
}
