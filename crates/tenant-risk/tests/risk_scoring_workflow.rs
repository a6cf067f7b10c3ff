//! End-to-end scoring scenarios driven through the public engine facade.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tenant_risk::workflows::risk::{
    FixedClock, MaintenanceRecord, MaintenanceStatus, MockScreeningProvider, PaymentRecord,
    PaymentStatus, ReportType, RiskLevel, RiskScoringEngine, TenantCategory, TenantProfile,
    TimingStatus, UnitSnapshot,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 30, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn engine() -> RiskScoringEngine<FixedClock, MockScreeningProvider> {
    RiskScoringEngine::new(
        Arc::new(FixedClock(now())),
        Arc::new(MockScreeningProvider::seeded(42)),
    )
}

fn paid(days_ago: i64, timing: TimingStatus, days_after_due: i64) -> PaymentRecord {
    let due_date = now() - Duration::days(days_ago);
    PaymentRecord {
        amount: 1_350.0,
        status: PaymentStatus::Paid,
        timing_status: Some(timing),
        due_date,
        paid_at: Some(due_date + Duration::days(days_after_due)),
        updated_at: None,
    }
}

fn filed(days_ago: i64, description: &str) -> MaintenanceRecord {
    MaintenanceRecord {
        created_at: now() - Duration::days(days_ago),
        updated_at: None,
        status: MaintenanceStatus::Open,
        description: description.to_string(),
    }
}

fn applicant() -> TenantProfile {
    TenantProfile {
        tenant_id: "tenant-900".to_string(),
        full_name: "Sam Okafor".to_string(),
        monthly_income: Some(5_000.0),
        employment_status: None,
    }
}

#[test]
fn reliable_payer_with_quiet_unit_is_low_risk() {
    let payments: Vec<_> = (0..12)
        .map(|month| paid(30 * (month + 1), TimingStatus::OnTime, 0))
        .collect();
    let maintenance = vec![filed(200, "Replace smoke detector battery")];

    let assessment = engine().assess(&payments, &maintenance);

    assert_eq!(assessment.risk_level, RiskLevel::Low);
    assert_eq!(assessment.payment_reliability, 100);
    assert_eq!(assessment.category, TenantCategory::Excellent);
    assert_eq!(assessment.average_payment_delay, 0);
    assert!(!assessment.frequent_complaints);
    assert!(assessment.summary.starts_with("Excellent tenant with 100%"));
    assert!(assessment.ai_summary.ends_with('.'));
}

#[test]
fn late_payments_raise_tier_and_report_average_delay() {
    let mut payments: Vec<_> = (0..6)
        .map(|month| paid(30 * (month + 1), TimingStatus::OnTime, 0))
        .collect();
    payments.push(paid(220, TimingStatus::Late, 4));
    payments.push(paid(250, TimingStatus::Late, 10));

    let assessment = engine().assess(&payments, &[]);

    // 6 of 8 on time.
    assert_eq!(assessment.payment_reliability, 75);
    assert_eq!(assessment.risk_level, RiskLevel::Medium);
    assert_eq!(assessment.late_payments, 2);
    assert_eq!(assessment.average_payment_delay, 7);
    assert!(assessment.ai_summary.contains("Late payments average 7 days past due"));
}

#[test]
fn burst_of_recent_requests_flags_frequent_complaints() {
    let payments: Vec<_> = (0..4)
        .map(|month| paid(30 * (month + 1), TimingStatus::Advance, -2))
        .collect();
    let maintenance = vec![
        filed(2, "Kitchen sink clogged"),
        filed(9, "No heat in bedroom"),
        filed(20, "Outlet sparking"),
    ];

    let assessment = engine().assess(&payments, &maintenance);

    assert_eq!(assessment.risk_level, RiskLevel::High);
    assert!(assessment.frequent_complaints);
    assert_eq!(assessment.recent_maintenance_count, 3);
    assert_eq!(assessment.ai_risk_score, 45);
}

#[test]
fn requests_older_than_thirty_days_are_not_recent() {
    let maintenance = vec![filed(30, "Door sticks"), filed(29, "Window latch broken")];

    let assessment = engine().assess(&[], &maintenance);

    assert_eq!(assessment.maintenance_count, 2);
    assert_eq!(assessment.recent_maintenance_count, 1);
}

#[test]
fn seeded_screening_is_reproducible_across_engines() {
    let unit = UnitSnapshot {
        unit_id: "D-4".to_string(),
        monthly_rent: Some(1_600.0),
    };

    let first = engine().screen(&applicant(), &unit).expect("mock screening");
    let second = engine().screen(&applicant(), &unit).expect("mock screening");

    assert_eq!(first, second);
    assert_eq!(first.screened_at, now());
    assert_eq!(first.income_to_rent_ratio, Some(3.13));
    assert!((500..700).contains(&first.checks.credit_score));
}

#[test]
fn report_for_new_tenant_reports_high_risk() {
    let report = engine().report(&applicant(), &[], &[], &[], ReportType::Comprehensive);

    assert_eq!(report.tenant_name, "Sam Okafor");
    assert_eq!(report.risk_level, RiskLevel::High);
    assert_eq!(report.category, TenantCategory::HighRisk);
    assert!(report.payment_history.is_some());
    assert!(report.maintenance_history.is_some());
    assert!(report.lease_history.is_some());
}
