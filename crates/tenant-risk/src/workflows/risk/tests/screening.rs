use super::common::*;

use crate::workflows::risk::policy::RiskLevel;
use crate::workflows::risk::screening::{
    ExternalChecks, MockScreeningProvider, ScreeningError, ScreeningProvider,
};
use crate::workflows::risk::{FixedClock, RiskScoringEngine};
use std::sync::Arc;

#[test]
fn clean_checks_screen_as_low_risk() {
    let result = engine().screen(&tenant(), &unit()).expect("screened");

    assert_eq!(result.risk_score, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.recommendations.len(), 3);
    assert_eq!(result.recommendations[0], "Approve application");
    assert_eq!(result.screened_at, now());
    assert_eq!(result.income_to_rent_ratio, Some(3.2));
    assert!(result.ai_summary.contains("Credit score: 690"));
    assert!(result.ai_summary.contains("Declared income is 3.20x monthly rent"));
    assert!(result.ai_summary.ends_with("Overall risk: LOW (score 0)."));
}

#[test]
fn credit_penalties_use_two_bands() {
    let fair = engine_with(ExternalChecks {
        credit_score: 620,
        ..clean_checks()
    })
    .screen(&tenant(), &unit())
    .expect("screened");
    assert_eq!(fair.risk_score, 15);
    assert_eq!(fair.risk_level, RiskLevel::Low);

    let poor = engine_with(ExternalChecks {
        credit_score: 599,
        ..clean_checks()
    })
    .screen(&tenant(), &unit())
    .expect("screened");
    assert_eq!(poor.risk_score, 30);
    assert_eq!(poor.risk_level, RiskLevel::Medium);

    let boundary = engine_with(ExternalChecks {
        credit_score: 650,
        ..clean_checks()
    })
    .screen(&tenant(), &unit())
    .expect("screened");
    assert_eq!(boundary.risk_score, 0);
}

#[test]
fn failed_checks_accumulate_fixed_penalties() {
    let cases = [
        (
            ExternalChecks {
                criminal_record_clear: false,
                ..clean_checks()
            },
            40,
            RiskLevel::Medium,
        ),
        (
            ExternalChecks {
                eviction_history_clear: false,
                ..clean_checks()
            },
            35,
            RiskLevel::Medium,
        ),
        (
            ExternalChecks {
                employment_verified: false,
                ..clean_checks()
            },
            20,
            RiskLevel::Low,
        ),
        (
            ExternalChecks {
                income_verified: false,
                employment_verified: false,
                ..clean_checks()
            },
            35,
            RiskLevel::Medium,
        ),
        (
            ExternalChecks {
                credit_score: 640,
                employment_verified: false,
                income_verified: false,
                ..clean_checks()
            },
            50,
            RiskLevel::High,
        ),
        (
            ExternalChecks {
                credit_score: 510,
                criminal_record_clear: false,
                eviction_history_clear: false,
                employment_verified: false,
                income_verified: false,
            },
            140,
            RiskLevel::High,
        ),
    ];

    for (checks, expected_score, expected_level) in cases {
        let result = engine_with(checks)
            .screen(&tenant(), &unit())
            .expect("screened");
        assert_eq!(result.risk_score, expected_score, "{checks:?}");
        assert_eq!(result.risk_level, expected_level, "{checks:?}");
    }
}

#[test]
fn recommendations_depend_only_on_tier() {
    let high = engine_with(ExternalChecks {
        criminal_record_clear: false,
        eviction_history_clear: false,
        ..clean_checks()
    })
    .screen(&tenant(), &unit())
    .expect("screened");

    assert_eq!(
        high.recommendations,
        vec![
            "Further review required before approval".to_string(),
            "Require a co-signer or guarantor".to_string(),
            "Request additional income and employment documentation".to_string(),
        ]
    );
}

#[test]
fn income_ratio_omitted_when_unknown() {
    let mut applicant = tenant();
    applicant.monthly_income = None;

    let result = engine().screen(&applicant, &unit()).expect("screened");

    assert_eq!(result.income_to_rent_ratio, None);
    assert!(!result.ai_summary.contains("monthly rent"));
}

#[test]
fn provider_failures_surface_as_errors() {
    let engine = RiskScoringEngine::new(Arc::new(FixedClock(now())), Arc::new(OfflineProvider));

    match engine.screen(&tenant(), &unit()) {
        Err(ScreeningError::Unavailable(reason)) => assert_eq!(reason, "bureau offline"),
        other => panic!("expected unavailable provider, got {other:?}"),
    }
}

#[test]
fn mock_draws_stay_in_documented_ranges() {
    let provider = MockScreeningProvider::seeded(7);

    for _ in 0..200 {
        let checks = provider.run_checks(&tenant(), &unit()).expect("mock never fails");
        assert!((500..700).contains(&checks.credit_score));
    }
}

#[test]
fn seeded_mock_is_reproducible() {
    let first = MockScreeningProvider::seeded(2025);
    let second = MockScreeningProvider::seeded(2025);

    for _ in 0..10 {
        assert_eq!(
            first.run_checks(&tenant(), &unit()).expect("mock"),
            second.run_checks(&tenant(), &unit()).expect("mock")
        );
    }
}

#[test]
fn screening_result_serializes_with_flat_check_fields() {
    let result = engine().screen(&tenant(), &unit()).expect("screened");
    let value = serde_json::to_value(&result).expect("serializes");

    assert_eq!(value["riskLevel"], "LOW");
    assert_eq!(value["creditScore"], 690);
    assert_eq!(value["criminalRecordClear"], true);
    assert_eq!(value["tenantId"], "tenant-042");
    assert!(value["aiSummary"].is_string());
}

#[test]
fn mock_flags_follow_fixed_clean_rates() {
    const DRAWS: usize = 10_000;
    let provider = MockScreeningProvider::seeded(20_250_615);
    let mut clean = [0usize; 4];

    for _ in 0..DRAWS {
        let checks = provider.run_checks(&tenant(), &unit()).expect("mock never fails");
        let flags = [
            checks.criminal_record_clear,
            checks.eviction_history_clear,
            checks.employment_verified,
            checks.income_verified,
        ];
        for (count, flag) in clean.iter_mut().zip(flags) {
            *count += usize::from(flag);
        }
    }

    let expected = [
        ("criminal record clear", 0.90),
        ("eviction history clear", 0.95),
        ("employment verified", 0.85),
        ("income verified", 0.80),
    ];
    for ((name, rate), count) in expected.into_iter().zip(clean) {
        let observed = count as f64 / DRAWS as f64;
        assert!(
            (observed - rate).abs() <= 0.02,
            "{name}: observed {observed:.3}, expected {rate}"
        );
    }
}
