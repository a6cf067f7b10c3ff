use serde::{Deserialize, Serialize};

use super::domain::{PaymentRecord, TimingStatus};

const SECONDS_PER_DAY: f64 = 86_400.0;
const TREND_WINDOW: usize = 3;

/// Counts behind the reliability percentage. `reliability` is left unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaymentReliability {
    pub reliability: f64,
    pub on_time: usize,
    pub late: usize,
    pub advance: usize,
    pub total: usize,
}

impl PaymentReliability {
    /// Presentation value, 0..=100.
    pub fn rounded(&self) -> u8 {
        self.reliability.round().clamp(0.0, 100.0) as u8
    }
}

/// Share of payments made on time or in advance.
///
/// Every record counts toward the denominator, including pending installments that carry
/// no timing status yet.
pub fn compute_payment_reliability(payments: &[PaymentRecord]) -> PaymentReliability {
    let total = payments.len();
    let on_time = payments.iter().filter(|payment| payment.is_on_time()).count();
    let late = payments.iter().filter(|payment| payment.is_late()).count();
    let advance = payments
        .iter()
        .filter(|payment| payment.timing_status == Some(TimingStatus::Advance))
        .count();

    let reliability = if total > 0 {
        on_time as f64 * 100.0 / total as f64
    } else {
        0.0
    };

    PaymentReliability {
        reliability,
        on_time,
        late,
        advance,
        total,
    }
}

/// Mean days past due across late payments, rounded to whole days.
///
/// Uses `paid_at`, falling back to `updated_at`. That fallback is an approximation of the
/// settlement date. A late record with neither timestamp contributes a zero-day delay.
pub fn compute_average_payment_delay(payments: &[PaymentRecord]) -> u32 {
    let delays: Vec<f64> = payments
        .iter()
        .filter(|payment| payment.is_late())
        .map(|payment| match payment.settled_at() {
            Some(settled) => {
                let seconds = (settled - payment.due_date).num_seconds() as f64;
                (seconds / SECONDS_PER_DAY).ceil().max(0.0)
            }
            None => 0.0,
        })
        .collect();

    if delays.is_empty() {
        return 0;
    }

    let mean = delays.iter().sum::<f64>() / delays.len() as f64;
    mean.round().max(0.0) as u32
}

/// Direction of recent on-time behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentTrend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl PaymentTrend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Declining => "Declining",
            Self::Stable => "Stable",
            Self::InsufficientData => "Insufficient data",
        }
    }
}

/// Compares on-time counts of the three most recent payments with the three before them.
pub fn compute_payment_trend(payments: &[PaymentRecord]) -> PaymentTrend {
    if payments.len() < TREND_WINDOW {
        return PaymentTrend::InsufficientData;
    }

    let mut ordered: Vec<&PaymentRecord> = payments.iter().collect();
    ordered.sort_by(|a, b| b.due_date.cmp(&a.due_date));

    let recent = ordered
        .iter()
        .take(TREND_WINDOW)
        .filter(|payment| payment.is_on_time())
        .count();
    let older = ordered
        .iter()
        .skip(TREND_WINDOW)
        .take(TREND_WINDOW)
        .filter(|payment| payment.is_on_time())
        .count();

    match recent.cmp(&older) {
        std::cmp::Ordering::Greater => PaymentTrend::Improving,
        std::cmp::Ordering::Less => PaymentTrend::Declining,
        std::cmp::Ordering::Equal => PaymentTrend::Stable,
    }
}
