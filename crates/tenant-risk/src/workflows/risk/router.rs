use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::error::AppError;

use super::domain::{LeaseRecord, MaintenanceRecord, PaymentRecord, TenantProfile, UnitSnapshot};
use super::report::ReportType;
use super::screening::ScreeningProvider;
use super::{Clock, RiskScoringEngine};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssessmentRequest {
    #[serde(default)]
    pub(crate) payments: Vec<PaymentRecord>,
    #[serde(default)]
    pub(crate) maintenance_requests: Vec<MaintenanceRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportRequest {
    pub(crate) tenant: TenantProfile,
    #[serde(default)]
    pub(crate) leases: Vec<LeaseRecord>,
    #[serde(default)]
    pub(crate) payments: Vec<PaymentRecord>,
    #[serde(default)]
    pub(crate) maintenance_requests: Vec<MaintenanceRecord>,
    #[serde(default)]
    pub(crate) report_type: ReportType,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScreeningRequest {
    pub(crate) tenant: TenantProfile,
    pub(crate) unit: UnitSnapshot,
}

/// Router exposing the scoring engine as stateless JSON endpoints.
pub fn risk_router<C, S>(engine: Arc<RiskScoringEngine<C, S>>) -> Router
where
    C: Clock + 'static,
    S: ScreeningProvider + 'static,
{
    Router::new()
        .route(
            "/api/v1/tenants/risk-assessment",
            post(assessment_handler::<C, S>),
        )
        .route("/api/v1/tenants/report", post(report_handler::<C, S>))
        .route(
            "/api/v1/applications/screening",
            post(screening_handler::<C, S>),
        )
        .with_state(engine)
}

pub(crate) async fn assessment_handler<C, S>(
    State(engine): State<Arc<RiskScoringEngine<C, S>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    C: Clock + 'static,
    S: ScreeningProvider + 'static,
{
    let assessment = engine.assess(&request.payments, &request.maintenance_requests);
    (StatusCode::OK, axum::Json(assessment)).into_response()
}

pub(crate) async fn report_handler<C, S>(
    State(engine): State<Arc<RiskScoringEngine<C, S>>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response
where
    C: Clock + 'static,
    S: ScreeningProvider + 'static,
{
    let report = engine.report(
        &request.tenant,
        &request.leases,
        &request.payments,
        &request.maintenance_requests,
        request.report_type,
    );
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn screening_handler<C, S>(
    State(engine): State<Arc<RiskScoringEngine<C, S>>>,
    axum::Json(request): axum::Json<ScreeningRequest>,
) -> Result<Response, AppError>
where
    C: Clock + 'static,
    S: ScreeningProvider + 'static,
{
    let result = engine.screen(&request.tenant, &request.unit)?;
    Ok((StatusCode::OK, axum::Json(result)).into_response())
}
