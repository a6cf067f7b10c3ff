use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Settlement state of a rent installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

/// When a resolved payment landed relative to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimingStatus {
    #[serde(rename = "ONTIME")]
    OnTime,
    Advance,
    Late,
}

impl TimingStatus {
    /// Advance payments count as on time for reliability purposes.
    pub const fn is_on_time(self) -> bool {
        matches!(self, Self::OnTime | Self::Advance)
    }
}

/// Snapshot of one rent payment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub timing_status: Option<TimingStatus>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PaymentRecord {
    /// Timestamp used to measure lateness; `updated_at` stands in when `paid_at` was never set.
    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at.or(self.updated_at)
    }

    pub fn is_on_time(&self) -> bool {
        self.timing_status.is_some_and(TimingStatus::is_on_time)
    }

    pub fn is_late(&self) -> bool {
        self.timing_status == Some(TimingStatus::Late)
    }
}

/// Parses a money cell such as `1200`, `1200.00` or `$1,200.00`. Non-finite values are rejected.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(['$', ','], "")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Accepts a JSON number or a decimal string, the shape ORMs emit for money columns.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(value) => Ok(value),
        Amount::Text(raw) => parse_amount(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount '{raw}'"))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Resolved,
}

impl MaintenanceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

/// Maintenance request filed by the tenant, already scoped to the landlord's properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaseStatus {
    Draft,
    Active,
    Expired,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseRecord {
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub status: LeaseStatus,
    pub unit_id: String,
}

/// Declared applicant details. Verification flags come from a screening provider, not the tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantProfile {
    pub tenant_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub monthly_income: Option<f64>,
    #[serde(default)]
    pub employment_status: Option<String>,
}

/// The unit a screening is run against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSnapshot {
    pub unit_id: String,
    #[serde(default)]
    pub monthly_rent: Option<f64>,
}
