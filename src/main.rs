use std::net::SocketAddr;

use tokio::signal;

use cadastro_api::{build_router, config::Settings, middleware, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first; validation failures are fatal
    let settings = Settings::load()?;

    middleware::init_logging(&settings.log.level, &settings.log.format)?;

    tracing::info!(
        environment = %settings.app.environment,
        "starting {} v{}",
        settings.app.name,
        env!("CARGO_PKG_VERSION")
    );

    let app_state = AppState::new(settings.clone()).await?;
    app_state.database.run_migrations().await?;

    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.app.port));
    tracing::info!("{} listening on {}", settings.app.name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
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
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        },
    }
}
