use crate::workflows::risk::domain::{LeaseStatus, MaintenanceStatus, PaymentStatus, TimingStatus};

/// Uppercase and strip separators so "On Time", "on_time" and "ONTIME" compare equal.
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub(crate) fn payment_status(raw: &str) -> Option<PaymentStatus> {
    match normalize_token(raw).as_str() {
        "PAID" => Some(PaymentStatus::Paid),
        "PENDING" => Some(PaymentStatus::Pending),
        _ => None,
    }
}

pub(crate) fn timing_status(raw: &str) -> Option<TimingStatus> {
    match normalize_token(raw).as_str() {
        "ONTIME" => Some(TimingStatus::OnTime),
        "ADVANCE" => Some(TimingStatus::Advance),
        "LATE" => Some(TimingStatus::Late),
        _ => None,
    }
}

pub(crate) fn maintenance_status(raw: &str) -> Option<MaintenanceStatus> {
    match normalize_token(raw).as_str() {
        "OPEN" => Some(MaintenanceStatus::Open),
        "INPROGRESS" => Some(MaintenanceStatus::InProgress),
        "RESOLVED" => Some(MaintenanceStatus::Resolved),
        _ => None,
    }
}

pub(crate) fn lease_status(raw: &str) -> Option<LeaseStatus> {
    match normalize_token(raw).as_str() {
        "DRAFT" => Some(LeaseStatus::Draft),
        "ACTIVE" => Some(LeaseStatus::Active),
        "EXPIRED" => Some(LeaseStatus::Expired),
        "TERMINATED" => Some(LeaseStatus::Terminated),
        _ => None,
    }
}
