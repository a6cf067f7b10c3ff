//! CSV ledger exports into scoring records.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::workflows::risk::domain::{LeaseRecord, MaintenanceRecord, PaymentRecord};

#[derive(Debug)]
pub enum LedgerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate {
        line: usize,
        column: &'static str,
        value: String,
    },
    InvalidValue {
        line: usize,
        column: &'static str,
        value: String,
    },
}

impl std::fmt::Display for LedgerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerImportError::Io(err) => write!(f, "failed to read ledger export: {}", err),
            LedgerImportError::Csv(err) => write!(f, "invalid ledger CSV data: {}", err),
            LedgerImportError::InvalidDate {
                line,
                column,
                value,
            } => write!(
                f,
                "line {line}: '{value}' in column '{column}' is not an RFC 3339 timestamp or YYYY-MM-DD date"
            ),
            LedgerImportError::InvalidValue {
                line,
                column,
                value,
            } => write!(f, "line {line}: unrecognized value '{value}' in column '{column}'"),
        }
    }
}

impl std::error::Error for LedgerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerImportError::Io(err) => Some(err),
            LedgerImportError::Csv(err) => Some(err),
            LedgerImportError::InvalidDate { .. } | LedgerImportError::InvalidValue { .. } => None,
        }
    }
}

impl From<std::io::Error> for LedgerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LedgerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads back-office exports.
///
/// Payments: `Amount, Status, Timing Status, Due Date, Paid At, Updated At`.
/// Maintenance: `Created At, Updated At, Status, Description`.
/// Leases: `Unit ID, Start Date, End Date, Status`.
/// Blank cells are treated as absent; dates are RFC 3339 or `YYYY-MM-DD`.
pub struct LedgerImporter;

impl LedgerImporter {
    pub fn payments_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<PaymentRecord>, LedgerImportError> {
        let file = std::fs::File::open(path)?;
        Self::payments_from_reader(file)
    }

    pub fn payments_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<PaymentRecord>, LedgerImportError> {
        parser::parse_payments(reader)
    }

    pub fn maintenance_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<MaintenanceRecord>, LedgerImportError> {
        let file = std::fs::File::open(path)?;
        Self::maintenance_from_reader(file)
    }

    pub fn maintenance_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<MaintenanceRecord>, LedgerImportError> {
        parser::parse_maintenance(reader)
    }

    pub fn leases_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LeaseRecord>, LedgerImportError> {
        let file = std::fs::File::open(path)?;
        Self::leases_from_reader(file)
    }

    pub fn leases_from_reader<R: Read>(reader: R) -> Result<Vec<LeaseRecord>, LedgerImportError> {
        parser::parse_leases(reader)
    }
}
