use super::policy::{categorize_tenant, TenantCategory};

/// One sentence chosen by the tenant category bucket.
pub fn short_narrative(reliability: f64, maintenance_total: usize) -> String {
    let pct = reliability.round() as i64;
    match categorize_tenant(reliability, maintenance_total) {
        TenantCategory::Excellent => format!(
            "Excellent tenant with {pct}% on-time payments and minimal maintenance requests."
        ),
        TenantCategory::Good => format!(
            "Good tenant with {pct}% payment reliability and reasonable maintenance needs."
        ),
        TenantCategory::Average => format!(
            "Average tenant with {pct}% payment reliability. Monitor payment patterns."
        ),
        TenantCategory::HighRisk => format!(
            "High-risk tenant with {pct}% payment reliability and {maintenance_total} maintenance request{}. Requires close monitoring.",
            plural(maintenance_total)
        ),
    }
}

/// Independently chosen clauses joined into a paragraph.
pub fn detailed_narrative(
    reliability: f64,
    maintenance_total: usize,
    recent_30d: usize,
    average_delay_days: Option<u32>,
) -> String {
    let pct = reliability.round() as i64;
    let mut clauses = Vec::with_capacity(4);

    clauses.push(if reliability >= 90.0 {
        format!("Excellent payment history with {pct}% of payments made on time")
    } else if reliability >= 80.0 {
        format!("Good payment history with {pct}% on-time payments")
    } else if reliability >= 70.0 {
        format!("Fair payment history with {pct}% on-time payments")
    } else {
        format!("Poor payment history with only {pct}% on-time payments")
    });

    if let Some(delay) = average_delay_days.filter(|delay| *delay > 0) {
        clauses.push(format!(
            "Late payments average {delay} day{} past due",
            plural(delay as usize)
        ));
    }

    clauses.push(match maintenance_total {
        0 => "No maintenance requests on record".to_string(),
        1..=2 => format!(
            "Low maintenance needs with {maintenance_total} request{}",
            plural(maintenance_total)
        ),
        3..=5 => format!("Moderate maintenance needs with {maintenance_total} requests"),
        _ => format!("High maintenance volume with {maintenance_total} requests"),
    });

    if recent_30d > 2 {
        clauses.push(format!(
            "Maintenance activity has increased recently with {recent_30d} requests in the last 30 days"
        ));
    }

    format!("{}.", clauses.join(". "))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
