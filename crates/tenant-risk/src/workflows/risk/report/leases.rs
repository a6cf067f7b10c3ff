use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::super::domain::{LeaseRecord, LeaseStatus};
use super::views::LeaseSection;

const DAYS_PER_MONTH: f64 = 30.0;

/// Average length in months, one decimal. Open-ended leases run until `now`.
pub(crate) fn average_lease_duration_months(leases: &[LeaseRecord], now: DateTime<Utc>) -> f64 {
    if leases.is_empty() {
        return 0.0;
    }

    let total_days: f64 = leases
        .iter()
        .map(|lease| {
            let end = lease.end_date.unwrap_or(now);
            ((end - lease.start_date).num_seconds().max(0) as f64) / 86_400.0
        })
        .sum();

    let months = total_days / leases.len() as f64 / DAYS_PER_MONTH;
    (months * 10.0).round() / 10.0
}

/// Percentage of distinct units the tenant leased more than once.
pub(crate) fn renewal_rate(leases: &[LeaseRecord]) -> u8 {
    let mut per_unit: BTreeMap<&str, usize> = BTreeMap::new();
    for lease in leases {
        *per_unit.entry(lease.unit_id.as_str()).or_default() += 1;
    }

    if per_unit.is_empty() {
        return 0;
    }

    let renewed = per_unit.values().filter(|count| **count > 1).count();
    (renewed as f64 * 100.0 / per_unit.len() as f64).round() as u8
}

pub(crate) fn lease_section(leases: &[LeaseRecord], now: DateTime<Utc>) -> LeaseSection {
    let renewal_rate = renewal_rate(leases);
    LeaseSection {
        total_leases: leases.len(),
        active_leases: leases
            .iter()
            .filter(|lease| lease.status == LeaseStatus::Active)
            .count(),
        average_lease_duration: average_lease_duration_months(leases, now),
        renewal_rate,
        has_renewed: renewal_rate > 0,
    }
}
