//! Reporting summaries and trial balance.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::accounts::{AccountCode, DebitCredit};
use super::entries::AccountingEntry;
use crate::core::AccountingError;
use crate::grouping::SupplierMonthGroups;

/// One reporting row per (supplier, month) bucket. Not a ledger posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub supplier: String,
    pub month: String,
    pub total_base: Decimal,
    pub total_value: Decimal,
    pub invoice_count: usize,
}

/// Summarize grouped invoices, ordered by supplier then month.
pub fn summarize_groups(groups: &SupplierMonthGroups<'_>) -> Vec<GroupSummary> {
    groups
        .buckets()
        .map(|b| GroupSummary {
            supplier: b.supplier.to_string(),
            month: b.month.to_string(),
            total_base: b.bucket.total_base,
            total_value: b.bucket.total_value,
            invoice_count: b.bucket.invoice_count(),
        })
        .collect()
}

/// Debit and credit totals for one account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccountTotals {
    pub debit: Decimal,
    pub credit: Decimal,
}

impl AccountTotals {
    /// Debit minus credit.
    pub fn net(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Per-account totals over a set of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrialBalance {
    pub accounts: BTreeMap<AccountCode, AccountTotals>,
    pub total_debits: Decimal,
    pub total_credits: Decimal,
}

impl TrialBalance {
    /// Fails with [`AccountingError::Arithmetic`] when a total overflows.
    pub fn from_entries(entries: &[AccountingEntry]) -> Result<Self, AccountingError> {
        let mut tb = Self::default();
        for entry in entries {
            let totals = tb.accounts.entry(entry.account_code()).or_default();
            let (side, grand) = match entry.debit_credit() {
                DebitCredit::Debit => (&mut totals.debit, &mut tb.total_debits),
                DebitCredit::Credit => (&mut totals.credit, &mut tb.total_credits),
            };
            *side = AccountingError::checked_add(*side, entry.amount(), "account total")?;
            *grand = AccountingError::checked_add(*grand, entry.amount(), "trial balance total")?;
        }
        Ok(tb)
    }

    pub fn is_balanced(&self) -> bool {
        self.total_debits == self.total_credits
    }

    /// Debits minus credits; zero when balanced.
    pub fn difference(&self) -> Decimal {
        self.total_debits - self.total_credits
    }

    pub fn account(&self, code: AccountCode) -> AccountTotals {
        self.accounts.get(&code).copied().unwrap_or_default()
    }
}
