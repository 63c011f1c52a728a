//! Entry point for the `numsort-gateway` HTTP server.

use numsort_gateway::{
    config::{GatewayConfig, DEFAULT_LOG_FILTER},
    routes::{create_router, AppState},
    telemetry::init_logging,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let loaded = GatewayConfig::from_env();
    init_logging(loaded.as_ref().map_or(DEFAULT_LOG_FILTER, |c| c.log_filter.as_str()));

    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let addr = config.listen_addr();
    let app = create_router(AppState::from_config(&config));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, service = %config.service_name, "numsort-gateway listening");

    if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
    info!("numsort-gateway stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received, draining connections");
}
