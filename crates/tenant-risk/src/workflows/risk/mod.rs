//! Tenant behavior scoring, formal screening, and reporting.
//!
//! The numeric primitives in [`payments`], [`maintenance`] and [`policy`] are pure. The
//! [`RiskScoringEngine`] wires them to an injected [`Clock`] and [`ScreeningProvider`] so
//! every entry point is reproducible under a fixed clock and a seeded provider.

mod assessment;
pub mod clock;
pub mod domain;
pub mod maintenance;
pub mod narrative;
pub mod payments;
pub mod policy;
pub mod report;
pub mod router;
pub mod screening;

#[cfg(test)]
mod tests;

pub use assessment::RiskAssessment;
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    LeaseRecord, LeaseStatus, MaintenanceRecord, MaintenanceStatus, PaymentRecord, PaymentStatus,
    TenantProfile, TimingStatus, UnitSnapshot,
};
pub use maintenance::{
    categorize_maintenance, compute_maintenance_signal, MaintenanceBreakdown, MaintenanceCategory,
    MaintenanceSignal,
};
pub use narrative::{detailed_narrative, short_narrative};
pub use payments::{
    compute_average_payment_delay, compute_payment_reliability, compute_payment_trend,
    PaymentReliability, PaymentTrend,
};
pub use policy::{categorize_tenant, classify_risk, compute_ai_risk_score, RiskLevel, TenantCategory};
pub use report::{ReportType, TenantReport};
pub use router::risk_router;
pub use screening::{
    ExternalChecks, MockScreeningProvider, ScreeningError, ScreeningProvider, ScreeningResult,
};

use std::sync::Arc;

use tracing::debug;

/// Entry point shared by the HTTP layer and the CLI.
pub struct RiskScoringEngine<C, S> {
    clock: Arc<C>,
    screening: Arc<S>,
}

impl RiskScoringEngine<SystemClock, MockScreeningProvider> {
    /// Wall clock with the random placeholder provider.
    pub fn with_mock_screening() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(MockScreeningProvider::new()))
    }
}

impl<C, S> RiskScoringEngine<C, S>
where
    C: Clock + 'static,
    S: ScreeningProvider + 'static,
{
    pub fn new(clock: Arc<C>, screening: Arc<S>) -> Self {
        Self { clock, screening }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Score ongoing lease behavior from payment and maintenance history.
    pub fn assess(
        &self,
        payments: &[PaymentRecord],
        maintenance: &[MaintenanceRecord],
    ) -> RiskAssessment {
        let assessment = assessment::assess_tenant(payments, maintenance, self.clock.now());
        debug!(
            risk_level = assessment.risk_level.label(),
            reliability = assessment.payment_reliability,
            maintenance = assessment.maintenance_count,
            recent_maintenance = assessment.recent_maintenance_count,
            "tenant assessed"
        );
        assessment
    }

    /// Run provider checks for an application and tier the result.
    pub fn screen(
        &self,
        tenant: &TenantProfile,
        unit: &UnitSnapshot,
    ) -> Result<ScreeningResult, ScreeningError> {
        let checks = self.screening.run_checks(tenant, unit)?;
        let result = screening::evaluate_checks(tenant, unit, checks, self.clock.now());
        debug!(
            unit_id = %result.unit_id,
            risk_level = result.risk_level.label(),
            risk_score = result.risk_score,
            "application screened"
        );
        Ok(result)
    }

    /// Build a report; the report type selects which detail sections are attached.
    pub fn report(
        &self,
        tenant: &TenantProfile,
        leases: &[LeaseRecord],
        payments: &[PaymentRecord],
        maintenance: &[MaintenanceRecord],
        report_type: ReportType,
    ) -> TenantReport {
        let report = report::generate_report(
            tenant,
            leases,
            payments,
            maintenance,
            report_type,
            self.clock.now(),
        );
        debug!(
            report_type = report_type.label(),
            risk_level = report.risk_level.label(),
            "tenant report generated"
        );
        report
    }
}
