use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::PipelineConfig;
use crate::core::{
    AccountingError, FilterChain, InvoiceRecord, detect_duplicate_numbers, detect_missing_numbers,
    validate_invoice_format,
};
use crate::grouping::{SupplierMonthGroups, group_by_supplier_and_month};
use crate::ledger::{AccountingEntry, GroupSummary, TrialBalance, generate_entries, summarize_groups};

/// Optional narrowing of a pipeline run.
///
/// The date range only applies when both bounds are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub supplier: Option<String>,
}

impl AccountingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Fresh filter chain for this query.
    pub fn filter_chain(&self) -> FilterChain {
        let mut chain = FilterChain::new();
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            chain = chain.filter_by_date_range(start, end);
        }
        if let Some(supplier) = &self.supplier {
            chain = chain.filter_by_supplier(supplier.clone());
        }
        chain
    }
}

/// Output of one [`Pipeline::create_accounting_entries`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountingRun<'a> {
    pub grouped_invoices: SupplierMonthGroups<'a>,
    pub missing_invoice_numbers: Vec<String>,
    pub duplicate_invoice_numbers: Vec<String>,
    pub accounting_entries: Vec<AccountingEntry>,
}

impl AccountingRun<'_> {
    pub fn trial_balance(&self) -> Result<TrialBalance, AccountingError> {
        TrialBalance::from_entries(&self.accounting_entries)
    }

    /// Per-bucket reporting rows for the grouped invoices.
    pub fn summaries(&self) -> Vec<GroupSummary> {
        summarize_groups(&self.grouped_invoices)
    }
}

/// Invoice accounting pipeline.
///
/// Holds only immutable configuration; every call builds its own filter
/// chain, so one pipeline can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline, validating the configuration.
    pub fn new(config: PipelineConfig) -> Result<Self, AccountingError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Derive grouped invoices, numbering gaps, duplicates, and ledger
    /// entries from `invoices`.
    ///
    /// Steps run in a fixed order: amount check over the whole input,
    /// filtering, date sort, format check, grouping, entry generation, then
    /// gap and duplicate detection over the sorted set. Any failure aborts
    /// the run, including a monetary sum that overflows `Decimal`.
    #[tracing::instrument(level = "debug", skip_all, fields(invoices = invoices.len()))]
    pub fn create_accounting_entries<'a>(
        &self,
        invoices: &'a [InvoiceRecord],
        query: &AccountingQuery,
    ) -> Result<AccountingRun<'a>, AccountingError> {
        if let Some(inv) = invoices.iter().find(|inv| inv.total_value < Decimal::ZERO) {
            return Err(AccountingError::invalid_amount(&inv.number, inv.total_value));
        }

        let chain = query.filter_chain();
        let filtered = chain.apply_filters(invoices);
        let filtered_len = filtered.len();
        let sorted = sort_by_date(filtered);
        ensure_date_ordered(&sorted, filtered_len)?;
        debug!(filters = chain.len(), kept = sorted.len(), "filtered and sorted");

        validate_invoice_format(sorted.iter().map(|inv| inv.number.as_str()))?;

        let grouped_invoices = group_by_supplier_and_month(sorted.iter().copied(), None)?;
        let accounting_entries = generate_entries(grouped_invoices.invoices())?;
        debug!(
            buckets = grouped_invoices.bucket_count(),
            entries = accounting_entries.len(),
            "entries generated"
        );

        let missing_invoice_numbers =
            detect_missing_numbers(sorted.iter().copied(), &self.config.sequence);
        let duplicate_invoice_numbers = detect_duplicate_numbers(sorted.iter().copied());
        debug!(
            missing = missing_invoice_numbers.len(),
            duplicates = duplicate_invoice_numbers.len(),
            "sequence checked"
        );

        let run = AccountingRun {
            grouped_invoices,
            missing_invoice_numbers,
            duplicate_invoice_numbers,
            accounting_entries,
        };

        if self.config.check_balance {
            let tb = run.trial_balance()?;
            if !tb.is_balanced() {
                warn!(
                    debits = %tb.total_debits,
                    credits = %tb.total_credits,
                    "generated entries do not balance; some invoices have total != base + vat"
                );
            }
        }

        Ok(run)
    }
}

/// Stable ascending sort by invoice date.
pub fn sort_by_date(mut invoices: Vec<&InvoiceRecord>) -> Vec<&InvoiceRecord> {
    invoices.sort_by_key(|inv| inv.date);
    invoices
}

/// Check the sort step's output: same length as its input and
/// non-decreasing by date.
pub fn ensure_date_ordered(
    sorted: &[&InvoiceRecord],
    expected_len: usize,
) -> Result<(), AccountingError> {
    if sorted.len() != expected_len {
        return Err(AccountingError::ContractViolation(format!(
            "sort step returned {} invoices, expected {expected_len}",
            sorted.len()
        )));
    }
    if let Some(pair) = sorted.windows(2).find(|w| w[0].date > w[1].date) {
        return Err(AccountingError::ContractViolation(format!(
            "sort step left invoice {} ({}) before {} ({})",
            pair[0].number, pair[0].date, pair[1].number, pair[1].date
        )));
    }
    Ok(())
}
