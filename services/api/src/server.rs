use crate::cli::ServeArgs;
use crate::infra::{recruiting_service, AppState};
use crate::routes::{with_failure_handling, with_recruiting_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recruiting_mock::config::AppConfig;
use recruiting_mock::error::AppError;
use recruiting_mock::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(recruiting_service(&config.auth));

    let app = with_recruiting_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);
    let app = with_failure_handling(app);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        api_key_prefix = %config.auth.api_key_prefix,
        "recruiting mock ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("recruiting mock stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            // Without a signal handler the server runs until killed.
            warn!(error = %err, "unable to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    }
}
