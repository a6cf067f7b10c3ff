//! Formal per-application screening.
//!
//! Check results come from a [`ScreeningProvider`]; scoring the results is deterministic.
//! The bundled [`MockScreeningProvider`] draws random results and stands in until a real
//! credit/background vendor is wired up.

mod policy;
mod provider;

pub use provider::{ExternalChecks, MockScreeningProvider, ScreeningError, ScreeningProvider};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{TenantProfile, UnitSnapshot};
use super::policy::RiskLevel;
use policy::{
    income_to_rent_ratio, screening_recommendations, screening_risk_level, screening_risk_score,
    screening_summary,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub tenant_id: String,
    pub unit_id: String,
    #[serde(flatten)]
    pub checks: ExternalChecks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_to_rent_ratio: Option<f64>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub ai_summary: String,
    pub recommendations: Vec<String>,
    pub screened_at: DateTime<Utc>,
}

/// Score provider results into a tiered result.
pub fn evaluate_checks(
    tenant: &TenantProfile,
    unit: &UnitSnapshot,
    checks: ExternalChecks,
    screened_at: DateTime<Utc>,
) -> ScreeningResult {
    let risk_score = screening_risk_score(&checks);
    let risk_level = screening_risk_level(risk_score);
    let income_ratio = income_to_rent_ratio(tenant, unit);

    ScreeningResult {
        tenant_id: tenant.tenant_id.clone(),
        unit_id: unit.unit_id.clone(),
        checks,
        income_to_rent_ratio: income_ratio,
        risk_score,
        risk_level,
        ai_summary: screening_summary(&checks, income_ratio, risk_score, risk_level),
        recommendations: screening_recommendations(risk_level),
        screened_at,
    }
}
