//! Per-invoice ledger entries.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::accounts::{AccountCode, DebitCredit};
use crate::core::{AccountingError, InvoiceRecord, ValidationError};

/// One debit or credit line derived from an invoice.
///
/// Fields are private so that every entry goes through [`AccountingEntry::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountingEntry {
    account_code: AccountCode,
    debit_credit: DebitCredit,
    amount: Decimal,
    description: String,
    invoice_number: String,
}

impl AccountingEntry {
    /// Create an entry, rejecting a side that does not match the account's
    /// natural side and negative amounts.
    pub fn new(
        account_code: AccountCode,
        debit_credit: DebitCredit,
        amount: Decimal,
        description: impl Into<String>,
        invoice_number: impl Into<String>,
    ) -> Result<Self, AccountingError> {
        let invoice_number = invoice_number.into();
        if account_code.natural_side() != debit_credit {
            return Err(ValidationError::MismatchedSide {
                account: account_code.code(),
                side: debit_credit.code(),
            }
            .into());
        }
        if amount < Decimal::ZERO {
            return Err(AccountingError::invalid_amount(invoice_number, amount));
        }
        Ok(Self {
            account_code,
            debit_credit,
            amount,
            description: description.into(),
            invoice_number,
        })
    }

    pub fn account_code(&self) -> AccountCode {
        self.account_code
    }

    pub fn debit_credit(&self) -> DebitCredit {
        self.debit_credit
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of the invoice this entry was derived from.
    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }
}

impl fmt::Display for AccountingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} - {} ({})",
            self.debit_credit, self.account_code, self.amount, self.description, self.invoice_number
        )
    }
}

/// Generate the three ledger entries for each invoice, in input order.
///
/// Per invoice: Purchases/Debit (base), VAT Supported/Debit (vat),
/// Suppliers/Credit (total). An invoice with `total_value <= 0` fails the
/// whole batch.
pub fn generate_entries<'a, I>(invoices: I) -> Result<Vec<AccountingEntry>, AccountingError>
where
    I: IntoIterator<Item = &'a InvoiceRecord>,
{
    let invoices = invoices.into_iter();
    let mut entries = Vec::with_capacity(invoices.size_hint().0 * 3);

    for inv in invoices {
        if inv.total_value <= Decimal::ZERO {
            return Err(AccountingError::invalid_amount(&inv.number, inv.total_value));
        }

        entries.push(AccountingEntry::new(
            AccountCode::Purchases,
            DebitCredit::Debit,
            inv.base_value,
            format!("Purchases for invoice {}", inv.number),
            &inv.number,
        )?);
        entries.push(AccountingEntry::new(
            AccountCode::VatSupported,
            DebitCredit::Debit,
            inv.vat,
            format!("VAT for invoice {}", inv.number),
            &inv.number,
        )?);
        entries.push(AccountingEntry::new(
            AccountCode::Suppliers,
            DebitCredit::Credit,
            inv.total_value,
            format!("Total for invoice {}", inv.number),
            &inv.number,
        )?);
    }

    Ok(entries)
}
