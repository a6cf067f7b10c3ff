//! Fixed business thresholds mapping aggregates onto tiers.
//!
//! `classify_risk` and `categorize_tenant` use different cut-offs on the same inputs and can
//! disagree. Both are kept as separate outputs.

use serde::{Deserialize, Serialize};

/// Primary triage tier shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Descriptive label used by the short narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantCategory {
    Excellent,
    Good,
    Average,
    HighRisk,
}

impl TenantCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::HighRisk => "High-risk",
        }
    }
}

/// First matching rule wins; any single trigger forces the tier.
pub fn classify_risk(reliability: f64, maintenance_total: usize, recent_30d: usize) -> RiskLevel {
    if reliability < 70.0 || maintenance_total > 5 || recent_30d > 2 {
        RiskLevel::High
    } else if reliability < 85.0 || maintenance_total > 2 || recent_30d > 1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn categorize_tenant(reliability: f64, maintenance_total: usize) -> TenantCategory {
    if reliability >= 90.0 && maintenance_total <= 1 {
        TenantCategory::Excellent
    } else if reliability >= 80.0 && maintenance_total <= 2 {
        TenantCategory::Good
    } else if reliability >= 70.0 && maintenance_total <= 3 {
        TenantCategory::Average
    } else {
        TenantCategory::HighRisk
    }
}

/// 0..=100 numeric companion to the tier; grows with missed payments and request volume.
pub fn compute_ai_risk_score(reliability: f64, maintenance_total: usize, recent_30d: usize) -> u8 {
    let raw = (100.0 - reliability) + maintenance_total as f64 * 5.0 + recent_30d as f64 * 10.0;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Follow-up guidance attached to tenant reports, three items per tier.
pub(crate) fn monitoring_recommendations(level: RiskLevel) -> Vec<String> {
    let items: [&str; 3] = match level {
        RiskLevel::Low => [
            "Offer lease renewal at current terms",
            "Continue standard payment monitoring",
            "Consider the tenant for loyalty incentives",
        ],
        RiskLevel::Medium => [
            "Send automated rent reminders ahead of due dates",
            "Review maintenance requests for recurring issues",
            "Schedule a check-in with the tenant",
        ],
        RiskLevel::High => [
            "Review payment plan options with the tenant",
            "Inspect the unit for recurring maintenance causes",
            "Require additional deposit or guarantor before renewal",
        ],
    };
    items.iter().map(|item| item.to_string()).collect()
}
