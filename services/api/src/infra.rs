use chrono::{DateTime, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tenant_risk::config::{ScreeningConfig, ScreeningProviderKind};
use tenant_risk::workflows::risk::{FixedClock, MockScreeningProvider, ReportType, RiskScoringEngine};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn screening_provider(config: &ScreeningConfig) -> MockScreeningProvider {
    match config.provider {
        ScreeningProviderKind::Mock => config
            .seed
            .map(MockScreeningProvider::seeded)
            .unwrap_or_default(),
    }
}

/// Engine pinned to `as_of` (or the current instant) for one-shot CLI runs.
pub(crate) fn engine_at(
    as_of: Option<DateTime<Utc>>,
    screening: MockScreeningProvider,
) -> RiskScoringEngine<FixedClock, MockScreeningProvider> {
    let now = as_of.unwrap_or_else(Utc::now);
    RiskScoringEngine::new(Arc::new(FixedClock(now)), Arc::new(screening))
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("failed to parse '{raw}' as RFC 3339 or YYYY-MM-DD"))
}

pub(crate) fn parse_report_type(raw: &str) -> Result<ReportType, String> {
    let token: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match token.as_str() {
        "comprehensive" | "full" => Ok(ReportType::Comprehensive),
        "payment" | "payments" | "paymenthistory" => Ok(ReportType::PaymentHistory),
        "maintenance" | "maintenancehistory" => Ok(ReportType::MaintenanceHistory),
        "lease" | "leases" | "leasehistory" => Ok(ReportType::LeaseHistory),
        _ => Err(format!(
            "unknown report type '{raw}' (expected comprehensive, payment-history, maintenance-history or lease-history)"
        )),
    }
}
