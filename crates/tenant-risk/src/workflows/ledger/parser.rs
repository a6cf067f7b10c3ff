use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::normalizer::{lease_status, maintenance_status, payment_status, timing_status};
use super::LedgerImportError;
use crate::workflows::risk::domain::{parse_amount, LeaseRecord, MaintenanceRecord, PaymentRecord};

#[derive(Debug, Deserialize)]
struct PaymentRow {
    #[serde(rename = "Amount", default, deserialize_with = "empty_string_as_none")]
    amount: Option<String>,
    #[serde(rename = "Status")]
    status: String,
    #[serde(
        rename = "Timing Status",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    timing_status: Option<String>,
    #[serde(rename = "Due Date")]
    due_date: String,
    #[serde(rename = "Paid At", default, deserialize_with = "empty_string_as_none")]
    paid_at: Option<String>,
    #[serde(
        rename = "Updated At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MaintenanceRow {
    #[serde(rename = "Created At")]
    created_at: String,
    #[serde(
        rename = "Updated At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    updated_at: Option<String>,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Description", default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct LeaseRow {
    #[serde(rename = "Unit ID")]
    unit_id: String,
    #[serde(rename = "Start Date")]
    start_date: String,
    #[serde(rename = "End Date", default, deserialize_with = "empty_string_as_none")]
    end_date: Option<String>,
    #[serde(rename = "Status")]
    status: String,
}

pub(crate) fn parse_payments<R: Read>(reader: R) -> Result<Vec<PaymentRecord>, LedgerImportError> {
    let mut records = Vec::new();

    for (line, row) in read_rows::<_, PaymentRow>(reader)? {
        let amount = match row.amount.as_deref() {
            Some(raw) => parse_amount(raw).ok_or_else(|| invalid_value(line, "Amount", raw))?,
            None => 0.0,
        };
        let status =
            payment_status(&row.status).ok_or_else(|| invalid_value(line, "Status", &row.status))?;
        let timing = match row.timing_status.as_deref() {
            Some(raw) => {
                Some(timing_status(raw).ok_or_else(|| invalid_value(line, "Timing Status", raw))?)
            }
            None => None,
        };

        records.push(PaymentRecord {
            amount,
            status,
            timing_status: timing,
            due_date: required_date(line, "Due Date", &row.due_date)?,
            paid_at: optional_date(line, "Paid At", row.paid_at.as_deref())?,
            updated_at: optional_date(line, "Updated At", row.updated_at.as_deref())?,
        });
    }

    Ok(records)
}

pub(crate) fn parse_maintenance<R: Read>(
    reader: R,
) -> Result<Vec<MaintenanceRecord>, LedgerImportError> {
    let mut records = Vec::new();

    for (line, row) in read_rows::<_, MaintenanceRow>(reader)? {
        records.push(MaintenanceRecord {
            created_at: required_date(line, "Created At", &row.created_at)?,
            updated_at: optional_date(line, "Updated At", row.updated_at.as_deref())?,
            status: maintenance_status(&row.status)
                .ok_or_else(|| invalid_value(line, "Status", &row.status))?,
            description: row.description,
        });
    }

    Ok(records)
}

pub(crate) fn parse_leases<R: Read>(reader: R) -> Result<Vec<LeaseRecord>, LedgerImportError> {
    let mut records = Vec::new();

    for (line, row) in read_rows::<_, LeaseRow>(reader)? {
        records.push(LeaseRecord {
            start_date: required_date(line, "Start Date", &row.start_date)?,
            end_date: optional_date(line, "End Date", row.end_date.as_deref())?,
            status: lease_status(&row.status)
                .ok_or_else(|| invalid_value(line, "Status", &row.status))?,
            unit_id: row.unit_id,
        });
    }

    Ok(records)
}

/// Each data row paired with the 1-based CSV line it starts on. Quoted cells may span lines.
fn read_rows<R: Read, T: DeserializeOwned>(
    reader: R,
) -> Result<Vec<(usize, T)>, LedgerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or(index + 2);
        rows.push((line, record.deserialize(Some(&headers))?));
    }

    Ok(rows)
}

fn invalid_value(line: usize, column: &'static str, raw: &str) -> LedgerImportError {
    LedgerImportError::InvalidValue {
        line,
        column,
        value: raw.to_string(),
    }
}

fn required_date(
    line: usize,
    column: &'static str,
    raw: &str,
) -> Result<DateTime<Utc>, LedgerImportError> {
    parse_datetime(raw).ok_or_else(|| LedgerImportError::InvalidDate {
        line,
        column,
        value: raw.to_string(),
    })
}

fn optional_date(
    line: usize,
    column: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, LedgerImportError> {
    raw.map(|value| required_date(line, column, value))
        .transpose()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_and_bare_dates() {
        assert_eq!(
            parse_datetime("2025-03-01"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_datetime("2025-03-01T12:30:00-05:00"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 17, 30, 0).unwrap())
        );
        assert_eq!(parse_datetime("03/01/2025"), None);
        assert_eq!(parse_datetime("   "), None);
    }

    #[test]
    fn blank_optional_cells_become_none() {
        let csv = "Amount,Status,Timing Status,Due Date,Paid At,Updated At\n,PENDING,,2025-04-01,,\n";
        let records = parse_payments(csv.as_bytes()).expect("parses");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 0.0);
        assert!(records[0].timing_status.is_none());
        assert!(records[0].paid_at.is_none());
    }

    #[test]
    fn reports_line_of_malformed_date() {
        let csv = "Created At,Updated At,Status,Description\n2025-01-02,,OPEN,Leak\nyesterday,,OPEN,Fan\n";
        match parse_maintenance(csv.as_bytes()) {
            Err(LedgerImportError::InvalidDate { line, column, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "Created At");
            }
            other => panic!("expected invalid date, got {other:?}"),
        }
    }

    #[test]
    fn multi_line_descriptions_keep_line_numbers_accurate() {
        let csv = "Created At,Updated At,Status,Description\n\
2025-01-02,,OPEN,\"Leak under sink\nwater pooling\nnear cabinet\"\n\
yesterday,,OPEN,Fan\n";
        match parse_maintenance(csv.as_bytes()) {
            Err(LedgerImportError::InvalidDate { line, value, .. }) => {
                assert_eq!(line, 5);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected invalid date, got {other:?}"),
        }

        let valid = "Created At,Updated At,Status,Description\n\
2025-01-02,,OPEN,\"Leak under sink\nwater pooling\"\n";
        let records = parse_maintenance(valid.as_bytes()).expect("parses");
        assert_eq!(records[0].description, "Leak under sink\nwater pooling");
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        for raw in ["NaN", "inf", "-infinity"] {
            let csv = format!(
                "Amount,Status,Timing Status,Due Date,Paid At,Updated At\n{raw},PAID,ONTIME,2025-01-01,,\n"
            );
            match parse_payments(csv.as_bytes()) {
                Err(LedgerImportError::InvalidValue { line, column, value }) => {
                    assert_eq!(line, 2);
                    assert_eq!(column, "Amount");
                    assert_eq!(value, raw);
                }
                other => panic!("expected invalid amount for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn open_ended_lease_has_no_end_date() {
        let csv = "Unit ID,Start Date,End Date,Status\nB-12,2024-02-01,2025-01-31,Expired\nB-12,2025-02-01,,active\n";
        let records = parse_leases(csv.as_bytes()).expect("parses");
        assert_eq!(records.len(), 2);
        assert!(records[0].end_date.is_some());
        assert!(records[1].end_date.is_none());
        assert_eq!(records[1].unit_id, "B-12");
    }
}
