use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::super::domain::{TenantProfile, UnitSnapshot};

/// Raw results of the credit, background, eviction, employment, and income checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalChecks {
    pub credit_score: u16,
    pub criminal_record_clear: bool,
    pub eviction_history_clear: bool,
    pub employment_verified: bool,
    pub income_verified: bool,
}

/// Integration point for a credit/background-check vendor.
pub trait ScreeningProvider: Send + Sync {
    fn run_checks(
        &self,
        tenant: &TenantProfile,
        unit: &UnitSnapshot,
    ) -> Result<ExternalChecks, ScreeningError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("screening provider unavailable: {0}")]
    Unavailable(String),
    #[error("screening provider rejected request: {0}")]
    Rejected(String),
}

const CREDIT_SCORE_RANGE: std::ops::Range<u16> = 500..700;
const CRIMINAL_CLEAR_PROBABILITY: f64 = 0.90;
const EVICTION_CLEAR_PROBABILITY: f64 = 0.95;
const EMPLOYMENT_VERIFIED_PROBABILITY: f64 = 0.85;
const INCOME_VERIFIED_PROBABILITY: f64 = 0.80;

/// Placeholder provider that draws check results at random. Not a real check.
pub struct MockScreeningProvider {
    rng: Mutex<StdRng>,
}

impl MockScreeningProvider {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible draws for demos and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockScreeningProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreeningProvider for MockScreeningProvider {
    fn run_checks(
        &self,
        _tenant: &TenantProfile,
        _unit: &UnitSnapshot,
    ) -> Result<ExternalChecks, ScreeningError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ScreeningError::Unavailable("mock rng poisoned".to_string()))?;

        Ok(ExternalChecks {
            credit_score: rng.gen_range(CREDIT_SCORE_RANGE),
            criminal_record_clear: rng.gen_bool(CRIMINAL_CLEAR_PROBABILITY),
            eviction_history_clear: rng.gen_bool(EVICTION_CLEAR_PROBABILITY),
            employment_verified: rng.gen_bool(EMPLOYMENT_VERIFIED_PROBABILITY),
            income_verified: rng.gen_bool(INCOME_VERIFIED_PROBABILITY),
        })
    }
}
