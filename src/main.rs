use std::time::Duration;

use spheremint::{
    api::ApiClient, config::BuildConfig, error::AppError, feed::TrendingFeed, routes,
    routes::AppState,
};
use tokio::{net::TcpListener, signal};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,tower_http=debug,axum=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = BuildConfig::load()?;
    let client = ApiClient::new(config.server.api_url()?)?;
    tracing::info!("using backend at {}", client.base_url());

    // The sidebar is mounted for the lifetime of the server, so the trending
    // hashtags are fetched once here rather than per request.
    let state = AppState::new(config, TrendingFeed::mount(client))?;

    let listener = TcpListener::bind(state.config.server.address()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    let result = axum::serve(
        listener,
        routes::app(state.clone()).layer((
            TraceLayer::new_for_http(),
            TimeoutLayer::new(Duration::from_secs(10)),
        )),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    tracing::info!("Shutdown signal received, unmounting sidebar...");
    state.feed.unmount().await;
    if let Err(e) = &result {
        tracing::error!("server error: {e}");
    }
    tracing::info!("Shutdown complete");
    Ok(result?)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
