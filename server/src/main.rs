//! Heroes API server: loads settings, prepares the store, then serves the router.
//!
//! Run from repo root: `cargo run -p heroes-server`

use heroes_api::{app, connect, ensure_database_exists, init_schema, AppState, Backend, Gateway, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("heroes_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let backend = Backend::from_url(&settings.database_url)?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = connect(&settings.database_url, settings.max_connections).await?;
    init_schema(&pool, backend).await?;

    let state = AppState::new(Gateway::new(pool.clone()));
    let router = app(state, settings.body_limit);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
