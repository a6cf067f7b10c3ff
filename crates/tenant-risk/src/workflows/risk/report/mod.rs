mod leases;
pub mod views;

pub use views::{LeaseSection, MaintenanceSection, PaymentSection, ReportType, TenantReport};

use chrono::{DateTime, Utc};

use super::assessment::{assess_tenant, RiskAssessment};
use super::domain::{
    LeaseRecord, MaintenanceRecord, MaintenanceStatus, PaymentRecord, PaymentStatus,
    TenantProfile,
};
use super::maintenance::{average_resolution_days, categorize_maintenance};
use super::payments::{compute_payment_reliability, compute_payment_trend};
use super::policy::monitoring_recommendations;

/// Assemble the tenant report. Output depends only on the inputs and `now`.
pub(crate) fn generate_report(
    tenant: &TenantProfile,
    leases: &[LeaseRecord],
    payments: &[PaymentRecord],
    maintenance: &[MaintenanceRecord],
    report_type: ReportType,
    now: DateTime<Utc>,
) -> TenantReport {
    let assessment = assess_tenant(payments, maintenance, now);

    let payment_history = report_type
        .includes_payments()
        .then(|| payment_section(payments, &assessment));
    let maintenance_history = report_type
        .includes_maintenance()
        .then(|| maintenance_section(maintenance, &assessment));
    let lease_history = report_type
        .includes_leases()
        .then(|| leases::lease_section(leases, now));

    TenantReport {
        tenant_id: tenant.tenant_id.clone(),
        tenant_name: tenant.full_name.clone(),
        report_type,
        generated_at: now,
        risk_level: assessment.risk_level,
        category: assessment.category,
        ai_risk_score: assessment.ai_risk_score,
        summary: assessment.summary.clone(),
        ai_summary: assessment.ai_summary.clone(),
        recommendations: monitoring_recommendations(assessment.risk_level),
        risk_assessment: assessment,
        payment_history,
        maintenance_history,
        lease_history,
    }
}

fn payment_section(
    payments: &[PaymentRecord],
    assessment: &RiskAssessment,
) -> PaymentSection {
    let (total_paid, outstanding_amount) =
        payments
            .iter()
            .fold((0.0, 0.0), |(paid, pending), payment| match payment.status {
                PaymentStatus::Paid => (paid + payment.amount, pending),
                PaymentStatus::Pending => (paid, pending + payment.amount),
            });

    PaymentSection {
        total_payments: assessment.total_payments,
        on_time_payments: assessment.on_time_payments,
        advance_payments: compute_payment_reliability(payments).advance,
        late_payments: assessment.late_payments,
        pending_payments: payments
            .iter()
            .filter(|payment| payment.status == PaymentStatus::Pending)
            .count(),
        payment_reliability: assessment.payment_reliability,
        average_payment_delay: assessment.average_payment_delay,
        total_paid,
        outstanding_amount,
        payment_trend: compute_payment_trend(payments),
    }
}

fn maintenance_section(
    maintenance: &[MaintenanceRecord],
    assessment: &RiskAssessment,
) -> MaintenanceSection {
    let count_status = |status: MaintenanceStatus| {
        maintenance
            .iter()
            .filter(|request| request.status == status)
            .count()
    };

    MaintenanceSection {
        total_requests: assessment.maintenance_count,
        recent_requests: assessment.recent_maintenance_count,
        open_requests: count_status(MaintenanceStatus::Open),
        in_progress_requests: count_status(MaintenanceStatus::InProgress),
        resolved_requests: count_status(MaintenanceStatus::Resolved),
        average_resolution_days: average_resolution_days(maintenance),
        frequent_complaints: assessment.frequent_complaints,
        maintenance_categorization: categorize_maintenance(maintenance),
    }
}
