//! Process entry point: configure, bootstrap the table, serve.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use user_service::{app, connect, ensure_users_table, AppState, ServiceConfig, UserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("user_service=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = connect(&config).await?;
    ensure_users_table(&pool).await?;
    let state = AppState::new(UserStore::new(pool.clone()));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state, config.request_body_limit))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
