use crate::infra::{engine_at, parse_report_type, parse_timestamp, screening_provider};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use tenant_risk::config::AppConfig;
use tenant_risk::error::AppError;
use tenant_risk::telemetry;
use tenant_risk::workflows::ledger::LedgerImporter;
use tenant_risk::workflows::risk::{
    MockScreeningProvider, ReportType, RiskAssessment, ScreeningResult, TenantProfile,
    TenantReport, UnitSnapshot,
};
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Payment ledger export (Amount, Status, Timing Status, Due Date, Paid At, Updated At)
    #[arg(long)]
    pub(crate) payments_csv: Option<PathBuf>,
    /// Maintenance export (Created At, Updated At, Status, Description)
    #[arg(long)]
    pub(crate) maintenance_csv: Option<PathBuf>,
    /// Evaluate as of this date or RFC 3339 timestamp (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) as_of: Option<DateTime<Utc>>,
    /// Print the camelCase JSON payload instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    #[arg(long)]
    pub(crate) tenant_id: String,
    #[arg(long, default_value = "")]
    pub(crate) tenant_name: String,
    /// Lease export (Unit ID, Start Date, End Date, Status)
    #[arg(long)]
    pub(crate) leases_csv: Option<PathBuf>,
    #[arg(long)]
    pub(crate) payments_csv: Option<PathBuf>,
    #[arg(long)]
    pub(crate) maintenance_csv: Option<PathBuf>,
    /// comprehensive, payment-history, maintenance-history or lease-history
    #[arg(long, value_parser = parse_report_type, default_value = "comprehensive")]
    pub(crate) report_type: ReportType,
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) as_of: Option<DateTime<Utc>>,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    #[arg(long)]
    pub(crate) tenant_id: String,
    #[arg(long, default_value = "")]
    pub(crate) tenant_name: String,
    /// Declared gross monthly income
    #[arg(long)]
    pub(crate) monthly_income: Option<f64>,
    #[arg(long)]
    pub(crate) employment_status: Option<String>,
    #[arg(long)]
    pub(crate) unit_id: String,
    #[arg(long)]
    pub(crate) monthly_rent: Option<f64>,
    /// Seed the mock provider (overrides APP_SCREENING_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        payments_csv,
        maintenance_csv,
        as_of,
        json,
    } = args;
    init_command()?;

    let payments = match payments_csv {
        Some(path) => LedgerImporter::payments_from_path(path)?,
        None => Vec::new(),
    };
    let maintenance = match maintenance_csv {
        Some(path) => LedgerImporter::maintenance_from_path(path)?,
        None => Vec::new(),
    };
    debug!(
        payments = payments.len(),
        maintenance = maintenance.len(),
        "ledger loaded"
    );

    let engine = engine_at(as_of, MockScreeningProvider::default());
    let assessment = engine.assess(&payments, &maintenance);

    if json {
        print_json(&assessment)
    } else {
        print!("{}", describe_assessment(&assessment));
        Ok(())
    }
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        tenant_id,
        tenant_name,
        leases_csv,
        payments_csv,
        maintenance_csv,
        report_type,
        as_of,
        json,
    } = args;
    init_command()?;

    let leases = match leases_csv {
        Some(path) => LedgerImporter::leases_from_path(path)?,
        None => Vec::new(),
    };
    let payments = match payments_csv {
        Some(path) => LedgerImporter::payments_from_path(path)?,
        None => Vec::new(),
    };
    let maintenance = match maintenance_csv {
        Some(path) => LedgerImporter::maintenance_from_path(path)?,
        None => Vec::new(),
    };

    let tenant = TenantProfile {
        tenant_id,
        full_name: tenant_name,
        monthly_income: None,
        employment_status: None,
    };
    let engine = engine_at(as_of, MockScreeningProvider::default());
    let report = engine.report(&tenant, &leases, &payments, &maintenance, report_type);

    if json {
        print_json(&report)
    } else {
        print!("{}", describe_report(&report));
        Ok(())
    }
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let config = init_command()?;
    let mut screening = config.screening;
    if let Some(seed) = args.seed {
        screening.seed = Some(seed);
    }

    let tenant = TenantProfile {
        tenant_id: args.tenant_id,
        full_name: args.tenant_name,
        monthly_income: args.monthly_income,
        employment_status: args.employment_status,
    };
    let unit = UnitSnapshot {
        unit_id: args.unit_id,
        monthly_rent: args.monthly_rent,
    };

    let engine = engine_at(None, screening_provider(&screening));
    let result = engine.screen(&tenant, &unit)?;

    if args.json {
        print_json(&result)
    } else {
        print!("{}", describe_screening(&result));
        Ok(())
    }
}

/// Loads configuration and installs logging so engine events reach stderr.
fn init_command() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn describe_assessment(assessment: &RiskAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Risk level: {} | AI risk score {} | {}",
        assessment.risk_level.label(),
        assessment.ai_risk_score,
        assessment.category.label()
    );
    let _ = writeln!(
        out,
        "- Payments: {}% reliable ({} on time, {} late of {}) | avg delay {} days",
        assessment.payment_reliability,
        assessment.on_time_payments,
        assessment.late_payments,
        assessment.total_payments,
        assessment.average_payment_delay
    );
    let _ = writeln!(
        out,
        "- Maintenance: {} requests ({} in the last 30 days){}",
        assessment.maintenance_count,
        assessment.recent_maintenance_count,
        if assessment.frequent_complaints {
            " | frequent complaints"
        } else {
            ""
        }
    );
    let _ = writeln!(out, "Summary: {}", assessment.summary);
    let _ = writeln!(out, "Analysis: {}", assessment.ai_summary);
    out
}

pub(crate) fn describe_report(report: &TenantReport) -> String {
    let mut out = String::new();
    let name = if report.tenant_name.is_empty() {
        report.tenant_id.as_str()
    } else {
        report.tenant_name.as_str()
    };
    let _ = writeln!(
        out,
        "{} report for {} (generated {})",
        report.report_type.label(),
        name,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    out.push_str(&describe_assessment(&report.risk_assessment));

    if let Some(payments) = &report.payment_history {
        let _ = writeln!(
            out,
            "Payment history: {} pending | ${:.2} paid | ${:.2} outstanding | trend {}",
            payments.pending_payments,
            payments.total_paid,
            payments.outstanding_amount,
            payments.payment_trend.label()
        );
    }
    if let Some(maintenance) = &report.maintenance_history {
        let breakdown = &maintenance.maintenance_categorization;
        let resolution = maintenance
            .average_resolution_days
            .map(|days| format!("{days:.1} days avg resolution"))
            .unwrap_or_else(|| "no resolved requests".to_string());
        let _ = writeln!(
            out,
            "Maintenance history: {} open | {} in progress | {} resolved | {}",
            maintenance.open_requests,
            maintenance.in_progress_requests,
            maintenance.resolved_requests,
            resolution
        );
        let _ = writeln!(
            out,
            "  plumbing {} | electrical {} | hvac {} | emergency {} | general {}",
            breakdown.plumbing,
            breakdown.electrical,
            breakdown.hvac,
            breakdown.emergency,
            breakdown.general
        );
    }
    if let Some(leases) = &report.lease_history {
        let _ = writeln!(
            out,
            "Lease history: {} leases ({} active) | {:.1} months avg | {}% renewal rate",
            leases.total_leases, leases.active_leases, leases.average_lease_duration, leases.renewal_rate
        );
    }

    out.push_str("Recommendations:\n");
    for item in &report.recommendations {
        let _ = writeln!(out, "  - {item}");
    }
    out
}

pub(crate) fn describe_screening(result: &ScreeningResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Screening for {} on unit {}: {} (score {})",
        result.tenant_id,
        result.unit_id,
        result.risk_level.label(),
        result.risk_score
    );
    let _ = writeln!(out, "{}", result.ai_summary);
    out.push_str("Recommendations:\n");
    for item in &result.recommendations {
        let _ = writeln!(out, "  - {item}");
    }
    out
}
