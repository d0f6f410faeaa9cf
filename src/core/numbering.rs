use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AccountingError;
use super::types::InvoiceRecord;

/// Highest sequence a two-digit invoice number can carry.
pub const MAX_SEQUENCE: u32 = 99;

/// Parsed `F<yyyy>/<nn>` invoice number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvoiceNumber {
    pub year: i32,
    pub sequence: u32,
}

impl InvoiceNumber {
    /// Parse a number matching `^F\d{4}/\d{2}$` (ASCII digits only).
    pub fn parse(value: &str) -> Result<Self, AccountingError> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 8
            && bytes[0] == b'F'
            && bytes[1..5].iter().all(u8::is_ascii_digit)
            && bytes[5] == b'/'
            && bytes[6..8].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(AccountingError::Format(value.to_string()));
        }

        // Both slices are ASCII digits at this point.
        let year = value[1..5]
            .parse()
            .map_err(|_| AccountingError::Format(value.to_string()))?;
        let sequence = value[6..8]
            .parse()
            .map_err(|_| AccountingError::Format(value.to_string()))?;
        Ok(Self { year, sequence })
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{:04}/{:02}", self.year, self.sequence)
    }
}

/// Check every number against the `F<yyyy>/<nn>` pattern.
///
/// Fails on the first offending value, naming it.
pub fn validate_invoice_format<I, S>(numbers: I) -> Result<(), AccountingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for number in numbers {
        InvoiceNumber::parse(number.as_ref())?;
    }
    Ok(())
}

/// Which gaps [`detect_missing_numbers`] reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapReport {
    /// Every absent number, ascending.
    #[default]
    All,
    /// Only the highest absent number.
    LastOnly,
}

/// Expected numbering for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Year used when rendering missing numbers.
    pub fiscal_year: i32,
    /// Number of invoices expected in the year (sequences `1..=n`).
    pub expected_per_year: u32,
    #[serde(default)]
    pub gap_report: GapReport,
}

impl SequenceConfig {
    pub fn new(fiscal_year: i32, expected_per_year: u32) -> Self {
        Self {
            fiscal_year,
            expected_per_year,
            gap_report: GapReport::All,
        }
    }

    pub fn with_gap_report(mut self, gap_report: GapReport) -> Self {
        self.gap_report = gap_report;
        self
    }

    /// Reject values that cannot be expressed as two-digit sequences.
    pub fn validate(&self) -> Result<(), AccountingError> {
        if !(1..=MAX_SEQUENCE).contains(&self.expected_per_year) {
            return Err(AccountingError::Config(format!(
                "expected invoices per year must be between 1 and {MAX_SEQUENCE}, got {}",
                self.expected_per_year
            )));
        }
        if !(0..=9999).contains(&self.fiscal_year) {
            return Err(AccountingError::Config(format!(
                "fiscal year {} does not fit a four-digit invoice number",
                self.fiscal_year
            )));
        }
        Ok(())
    }
}

/// Expected invoice numbers absent from `invoices`, ascending.
///
/// Only the sequence part of each number is compared; numbers that don't
/// parse or fall outside `1..=expected_per_year` are ignored.
pub fn detect_missing_numbers<'a, I>(invoices: I, config: &SequenceConfig) -> Vec<String>
where
    I: IntoIterator<Item = &'a InvoiceRecord>,
{
    let present: BTreeSet<u32> = invoices
        .into_iter()
        .filter_map(|inv| InvoiceNumber::parse(&inv.number).ok())
        .map(|n| n.sequence)
        .collect();

    let mut missing = (1..=config.expected_per_year)
        .filter(|seq| !present.contains(seq))
        .map(|sequence| {
            InvoiceNumber {
                year: config.fiscal_year,
                sequence,
            }
            .to_string()
        });

    match config.gap_report {
        GapReport::All => missing.collect(),
        GapReport::LastOnly => missing.next_back().into_iter().collect(),
    }
}

/// Numbers seen more than once, reported once each, in the order their
/// second occurrence appears.
pub fn detect_duplicate_numbers<'a, I>(invoices: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a InvoiceRecord>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    let mut duplicates = Vec::new();

    for inv in invoices {
        let number = inv.number.as_str();
        if !seen.insert(number) && reported.insert(number) {
            duplicates.push(number.to_string());
        }
    }
    duplicates
}
