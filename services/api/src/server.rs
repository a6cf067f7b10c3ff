use crate::cli::ServeArgs;
use crate::infra::{screening_provider, AppState};
use crate::routes::with_risk_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tenant_risk::config::AppConfig;
use tenant_risk::error::AppError;
use tenant_risk::telemetry;
use tenant_risk::workflows::risk::{RiskScoringEngine, SystemClock};
use tracing::info;

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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(RiskScoringEngine::new(
        Arc::new(SystemClock),
        Arc::new(screening_provider(&config.screening)),
    ));

    let app = with_risk_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded_screening = config.screening.seed.is_some(),
        "tenant risk engine ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
