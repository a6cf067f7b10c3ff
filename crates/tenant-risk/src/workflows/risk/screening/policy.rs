use super::super::domain::{TenantProfile, UnitSnapshot};
use super::super::policy::RiskLevel;
use super::provider::ExternalChecks;

const POOR_CREDIT_CUTOFF: u16 = 600;
const FAIR_CREDIT_CUTOFF: u16 = 650;
const POOR_CREDIT_PENALTY: u8 = 30;
const FAIR_CREDIT_PENALTY: u8 = 15;
const CRIMINAL_RECORD_PENALTY: u8 = 40;
const EVICTION_HISTORY_PENALTY: u8 = 35;
const UNVERIFIED_EMPLOYMENT_PENALTY: u8 = 20;
const UNVERIFIED_INCOME_PENALTY: u8 = 15;

const HIGH_RISK_SCORE: u8 = 50;
const MEDIUM_RISK_SCORE: u8 = 25;

/// Sum of fixed penalties. Worst case is 140.
pub(crate) fn screening_risk_score(checks: &ExternalChecks) -> u8 {
    let mut score = 0;

    if checks.credit_score < POOR_CREDIT_CUTOFF {
        score += POOR_CREDIT_PENALTY;
    } else if checks.credit_score < FAIR_CREDIT_CUTOFF {
        score += FAIR_CREDIT_PENALTY;
    }
    if !checks.criminal_record_clear {
        score += CRIMINAL_RECORD_PENALTY;
    }
    if !checks.eviction_history_clear {
        score += EVICTION_HISTORY_PENALTY;
    }
    if !checks.employment_verified {
        score += UNVERIFIED_EMPLOYMENT_PENALTY;
    }
    if !checks.income_verified {
        score += UNVERIFIED_INCOME_PENALTY;
    }

    score
}

pub(crate) fn screening_risk_level(score: u8) -> RiskLevel {
    if score >= HIGH_RISK_SCORE {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_SCORE {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub(crate) fn income_to_rent_ratio(tenant: &TenantProfile, unit: &UnitSnapshot) -> Option<f64> {
    match (tenant.monthly_income, unit.monthly_rent) {
        (Some(income), Some(rent)) if income > 0.0 && rent > 0.0 => {
            Some((income / rent * 100.0).round() / 100.0)
        }
        _ => None,
    }
}

pub(crate) fn screening_summary(
    checks: &ExternalChecks,
    income_ratio: Option<f64>,
    risk_score: u8,
    risk_level: RiskLevel,
) -> String {
    let mut lines = vec![
        format!("Credit score: {}", checks.credit_score),
        format!(
            "Criminal background: {}",
            if checks.criminal_record_clear {
                "clear"
            } else {
                "record found"
            }
        ),
        format!(
            "Eviction history: {}",
            if checks.eviction_history_clear {
                "none found"
            } else {
                "prior eviction found"
            }
        ),
        format!(
            "Employment: {}",
            if checks.employment_verified {
                "verified"
            } else {
                "not verified"
            }
        ),
        format!(
            "Income: {}",
            if checks.income_verified {
                "verified"
            } else {
                "not verified"
            }
        ),
    ];

    if let Some(ratio) = income_ratio {
        lines.push(format!("Declared income is {ratio:.2}x monthly rent"));
    }

    lines.push(format!(
        "Overall risk: {} (score {risk_score})",
        risk_level.label()
    ));

    format!("{}.", lines.join(". "))
}

pub(crate) fn screening_recommendations(level: RiskLevel) -> Vec<String> {
    let items: [&str; 3] = match level {
        RiskLevel::Low => [
            "Approve application",
            "Collect standard security deposit",
            "Proceed with lease signing",
        ],
        RiskLevel::Medium => [
            "Consider approval with conditions",
            "Request an additional security deposit",
            "Verify landlord references manually",
        ],
        RiskLevel::High => [
            "Further review required before approval",
            "Require a co-signer or guarantor",
            "Request additional income and employment documentation",
        ],
    };
    items.iter().map(|item| item.to_string()).collect()
}
