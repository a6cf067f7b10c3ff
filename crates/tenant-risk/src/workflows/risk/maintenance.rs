use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{MaintenanceRecord, MaintenanceStatus};

pub(crate) const RECENT_WINDOW_DAYS: i64 = 30;
const FREQUENT_COMPLAINT_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaintenanceSignal {
    pub total: usize,
    pub recent_30d: usize,
    pub frequent_complaints: bool,
}

/// Volume of requests overall and within the trailing thirty days.
pub fn compute_maintenance_signal(
    requests: &[MaintenanceRecord],
    now: DateTime<Utc>,
) -> MaintenanceSignal {
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
    let recent_30d = requests
        .iter()
        .filter(|request| request.created_at > window_start)
        .count();

    MaintenanceSignal {
        total: requests.len(),
        recent_30d,
        frequent_complaints: recent_30d > FREQUENT_COMPLAINT_THRESHOLD,
    }
}

/// Coarse trade bucket inferred from a request description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceCategory {
    Plumbing,
    Electrical,
    Hvac,
    Emergency,
    General,
}

impl MaintenanceCategory {
    /// Match priority; the first category with a keyword hit wins.
    const PRIORITY: [(Self, &'static [&'static str]); 4] = [
        (
            Self::Plumbing,
            &[
                "plumbing", "leak", "pipe", "water", "drain", "toilet", "faucet", "sink", "clog",
            ],
        ),
        (
            Self::Electrical,
            &[
                "electrical", "electric", "outlet", "power", "light", "wiring", "breaker",
                "switch",
            ],
        ),
        (
            Self::Hvac,
            &[
                "hvac", "heat", "heating", "air", "ac", "furnace", "cooling", "thermostat",
                "ventilation",
            ],
        ),
        (
            Self::Emergency,
            &["emergency", "urgent", "fire", "flood", "gas", "smoke"],
        ),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical",
            Self::Hvac => "HVAC",
            Self::Emergency => "Emergency",
            Self::General => "General",
        }
    }

    pub fn from_description(description: &str) -> Self {
        let lowered = description.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .collect();

        Self::PRIORITY
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| tokens.iter().any(|token| keyword_matches(token, keyword)))
            })
            .map(|(category, _)| *category)
            .unwrap_or(Self::General)
    }
}

/// Short keywords must match a whole word ("ac" must not hit "access"); longer ones match
/// as a stem so "leaking" counts as "leak".
fn keyword_matches(token: &str, keyword: &str) -> bool {
    if keyword.len() < 4 {
        token == keyword
    } else {
        token.starts_with(keyword)
    }
}

/// Per-category request counts in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceBreakdown {
    pub plumbing: usize,
    pub electrical: usize,
    pub hvac: usize,
    pub emergency: usize,
    pub general: usize,
}

impl MaintenanceBreakdown {
    fn record(&mut self, category: MaintenanceCategory) {
        let slot = match category {
            MaintenanceCategory::Plumbing => &mut self.plumbing,
            MaintenanceCategory::Electrical => &mut self.electrical,
            MaintenanceCategory::Hvac => &mut self.hvac,
            MaintenanceCategory::Emergency => &mut self.emergency,
            MaintenanceCategory::General => &mut self.general,
        };
        *slot += 1;
    }
}

pub fn categorize_maintenance(requests: &[MaintenanceRecord]) -> MaintenanceBreakdown {
    let mut breakdown = MaintenanceBreakdown::default();
    for request in requests {
        breakdown.record(MaintenanceCategory::from_description(&request.description));
    }
    breakdown
}

/// Mean days from filing to last update across resolved requests, one decimal place.
pub(crate) fn average_resolution_days(requests: &[MaintenanceRecord]) -> Option<f64> {
    let durations: Vec<f64> = requests
        .iter()
        .filter(|request| request.status == MaintenanceStatus::Resolved)
        .filter_map(|request| {
            request.updated_at.map(|updated| {
                ((updated - request.created_at).num_seconds().max(0) as f64) / 86_400.0
            })
        })
        .collect();

    if durations.is_empty() {
        return None;
    }

    let mean = durations.iter().sum::<f64>() / durations.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
