use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::assessment::RiskAssessment;
use super::super::maintenance::MaintenanceBreakdown;
use super::super::payments::PaymentTrend;
use super::super::policy::{RiskLevel, TenantCategory};

/// Which detail sections a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    #[default]
    Comprehensive,
    PaymentHistory,
    MaintenanceHistory,
    LeaseHistory,
}

impl ReportType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comprehensive => "Comprehensive",
            Self::PaymentHistory => "Payment History",
            Self::MaintenanceHistory => "Maintenance History",
            Self::LeaseHistory => "Lease History",
        }
    }

    pub(crate) fn includes_payments(self) -> bool {
        matches!(self, Self::Comprehensive | Self::PaymentHistory)
    }

    pub(crate) fn includes_maintenance(self) -> bool {
        matches!(self, Self::Comprehensive | Self::MaintenanceHistory)
    }

    pub(crate) fn includes_leases(self) -> bool {
        matches!(self, Self::Comprehensive | Self::LeaseHistory)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSection {
    pub total_payments: usize,
    pub on_time_payments: usize,
    pub advance_payments: usize,
    pub late_payments: usize,
    pub pending_payments: usize,
    pub payment_reliability: u8,
    pub average_payment_delay: u32,
    pub total_paid: f64,
    pub outstanding_amount: f64,
    pub payment_trend: PaymentTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSection {
    pub total_requests: usize,
    pub recent_requests: usize,
    pub open_requests: usize,
    pub in_progress_requests: usize,
    pub resolved_requests: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_resolution_days: Option<f64>,
    pub frequent_complaints: bool,
    pub maintenance_categorization: MaintenanceBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseSection {
    pub total_leases: usize,
    pub active_leases: usize,
    pub average_lease_duration: f64,
    pub renewal_rate: u8,
    pub has_renewed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantReport {
    pub tenant_id: String,
    pub tenant_name: String,
    pub report_type: ReportType,
    pub generated_at: DateTime<Utc>,
    pub risk_level: RiskLevel,
    pub category: TenantCategory,
    pub ai_risk_score: u8,
    pub summary: String,
    pub ai_summary: String,
    pub recommendations: Vec<String>,
    pub risk_assessment: RiskAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_history: Option<PaymentSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_history: Option<MaintenanceSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_history: Option<LeaseSection>,
}
