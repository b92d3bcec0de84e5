mod api;
mod middleware;

use std::sync::Arc;

use halalfinder_sheets::SheetClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, rate_limit_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = halalfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = SheetClient::new(config.sheet_timeout_secs, &config.user_agent)?;
    match config.sheet_url() {
        Some(url) => tracing::info!(sheet_url = url, "serving data from Google Sheet"),
        None => tracing::warn!("GOOGLE_SHEET_URL not set; serving bundled sample data"),
    }

    let state = AppState {
        client: Arc::new(client),
        sheet_url: config.sheet_url().map(Arc::from),
    };
    let app = build_app(
        state,
        rate_limit_state(config.rate_limit_per_minute),
        config.cache_max_age_secs,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "halalfinder server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
