use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{MaintenanceRecord, PaymentRecord};
use super::maintenance::compute_maintenance_signal;
use super::narrative::{detailed_narrative, short_narrative};
use super::payments::{compute_average_payment_delay, compute_payment_reliability};
use super::policy::{
    categorize_tenant, classify_risk, compute_ai_risk_score, RiskLevel, TenantCategory,
};

/// Behavior assessment for one tenant, serialized as-is to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub payment_reliability: u8,
    pub on_time_payments: usize,
    pub late_payments: usize,
    pub total_payments: usize,
    pub average_payment_delay: u32,
    pub maintenance_count: usize,
    pub recent_maintenance_count: usize,
    pub frequent_complaints: bool,
    pub ai_risk_score: u8,
    pub category: TenantCategory,
    pub ai_summary: String,
    pub summary: String,
}

pub(crate) fn assess_tenant(
    payments: &[PaymentRecord],
    maintenance: &[MaintenanceRecord],
    now: DateTime<Utc>,
) -> RiskAssessment {
    let reliability = compute_payment_reliability(payments);
    let average_delay = compute_average_payment_delay(payments);
    let signal = compute_maintenance_signal(maintenance, now);

    let risk_level = classify_risk(reliability.reliability, signal.total, signal.recent_30d);
    let category = categorize_tenant(reliability.reliability, signal.total);
    let ai_risk_score =
        compute_ai_risk_score(reliability.reliability, signal.total, signal.recent_30d);

    RiskAssessment {
        risk_level,
        payment_reliability: reliability.rounded(),
        on_time_payments: reliability.on_time,
        late_payments: reliability.late,
        total_payments: reliability.total,
        average_payment_delay: average_delay,
        maintenance_count: signal.total,
        recent_maintenance_count: signal.recent_30d,
        frequent_complaints: signal.frequent_complaints,
        ai_risk_score,
        category,
        ai_summary: detailed_narrative(
            reliability.reliability,
            signal.total,
            signal.recent_30d,
            Some(average_delay),
        ),
        summary: short_narrative(reliability.reliability, signal.total),
    }
}
