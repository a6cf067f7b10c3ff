use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::risk::domain::{
    LeaseRecord, LeaseStatus, MaintenanceRecord, MaintenanceStatus, PaymentRecord, PaymentStatus,
    TenantProfile, TimingStatus, UnitSnapshot,
};
use crate::workflows::risk::screening::{ExternalChecks, ScreeningError, ScreeningProvider};
use crate::workflows::risk::{FixedClock, RiskScoringEngine};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Paid installment due `months_ago` months before [`now`], with the given timing.
pub(super) fn payment(months_ago: i64, timing: TimingStatus) -> PaymentRecord {
    let due_date = now() - Duration::days(30 * months_ago);
    let paid_at = match timing {
        TimingStatus::Advance => due_date - Duration::days(3),
        TimingStatus::OnTime => due_date,
        TimingStatus::Late => due_date + Duration::days(5),
    };
    PaymentRecord {
        amount: 1_200.0,
        status: PaymentStatus::Paid,
        timing_status: Some(timing),
        due_date,
        paid_at: Some(paid_at),
        updated_at: Some(paid_at),
    }
}

pub(super) fn pending_payment(months_ahead: i64) -> PaymentRecord {
    PaymentRecord {
        amount: 1_200.0,
        status: PaymentStatus::Pending,
        timing_status: None,
        due_date: now() + Duration::days(30 * months_ahead),
        paid_at: None,
        updated_at: None,
    }
}

/// Ten payments, seven on time and three late, newest first.
pub(super) fn seven_on_time_three_late() -> Vec<PaymentRecord> {
    let mut payments: Vec<PaymentRecord> =
        (1..=7).map(|m| payment(m, TimingStatus::OnTime)).collect();
    payments.extend((8..=10).map(|m| payment(m, TimingStatus::Late)));
    payments
}

pub(super) fn request(days_ago: i64, description: &str) -> MaintenanceRecord {
    let created_at = now() - Duration::days(days_ago);
    MaintenanceRecord {
        created_at,
        updated_at: Some(created_at + Duration::days(2)),
        status: MaintenanceStatus::Resolved,
        description: description.to_string(),
    }
}

pub(super) fn open_request(days_ago: i64, description: &str) -> MaintenanceRecord {
    MaintenanceRecord {
        status: MaintenanceStatus::Open,
        updated_at: None,
        ..request(days_ago, description)
    }
}

pub(super) fn lease(unit_id: &str, start_days_ago: i64, length_days: Option<i64>) -> LeaseRecord {
    let start_date = now() - Duration::days(start_days_ago);
    LeaseRecord {
        start_date,
        end_date: length_days.map(|days| start_date + Duration::days(days)),
        status: if length_days.is_some() {
            LeaseStatus::Expired
        } else {
            LeaseStatus::Active
        },
        unit_id: unit_id.to_string(),
    }
}

pub(super) fn tenant() -> TenantProfile {
    TenantProfile {
        tenant_id: "tenant-042".to_string(),
        full_name: "Jordan Avery".to_string(),
        monthly_income: Some(4_800.0),
        employment_status: Some("EMPLOYED".to_string()),
    }
}

pub(super) fn unit() -> UnitSnapshot {
    UnitSnapshot {
        unit_id: "B-12".to_string(),
        monthly_rent: Some(1_500.0),
    }
}

pub(super) fn clean_checks() -> ExternalChecks {
    ExternalChecks {
        credit_score: 690,
        criminal_record_clear: true,
        eviction_history_clear: true,
        employment_verified: true,
        income_verified: true,
    }
}

/// Provider returning a fixed set of results.
pub(super) struct StaticProvider(pub(super) ExternalChecks);

impl ScreeningProvider for StaticProvider {
    fn run_checks(
        &self,
        _tenant: &TenantProfile,
        _unit: &UnitSnapshot,
    ) -> Result<ExternalChecks, ScreeningError> {
        Ok(self.0)
    }
}

pub(super) struct OfflineProvider;

impl ScreeningProvider for OfflineProvider {
    fn run_checks(
        &self,
        _tenant: &TenantProfile,
        _unit: &UnitSnapshot,
    ) -> Result<ExternalChecks, ScreeningError> {
        Err(ScreeningError::Unavailable("bureau offline".to_string()))
    }
}

pub(super) struct RejectingProvider;

impl ScreeningProvider for RejectingProvider {
    fn run_checks(
        &self,
        _tenant: &TenantProfile,
        _unit: &UnitSnapshot,
    ) -> Result<ExternalChecks, ScreeningError> {
        Err(ScreeningError::Rejected("missing date of birth".to_string()))
    }
}

pub(super) fn engine_with(checks: ExternalChecks) -> RiskScoringEngine<FixedClock, StaticProvider> {
    RiskScoringEngine::new(Arc::new(FixedClock(now())), Arc::new(StaticProvider(checks)))
}

pub(super) fn engine() -> RiskScoringEngine<FixedClock, StaticProvider> {
    engine_with(clean_checks())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
