use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while deriving accounting output from invoices.
///
/// Every pipeline step propagates these unchanged; a batch either fully
/// succeeds or fully fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AccountingError {
    /// An invoice amount or an entry pairing was rejected.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An invoice number does not follow the `F<yyyy>/<nn>` pattern.
    #[error("invalid invoice number format: {0}")]
    Format(String),

    /// An internal step produced a value of the wrong shape.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// A monetary sum left the representable `Decimal` range.
    #[error("arithmetic overflow: {0}")]
    Arithmetic(String),

    /// Pipeline configuration is out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A rejected amount or ledger pairing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Invoice total (or entry amount) outside the accepted range.
    #[error("invoice {number} with amount {amount} is not valid")]
    InvalidAmount {
        /// Number of the offending invoice.
        number: String,
        /// The rejected amount.
        amount: Decimal,
    },

    /// Account code posted on the side opposite to its nature.
    #[error("account {account} cannot be posted as {side}")]
    MismatchedSide {
        /// Ledger account number of the rejected entry ("6000", ...).
        account: &'static str,
        /// Requested side ("DEBIT" or "CREDIT").
        side: &'static str,
    },
}

impl AccountingError {
    /// Shorthand for an [`ValidationError::InvalidAmount`] error.
    pub fn invalid_amount(number: impl Into<String>, amount: Decimal) -> Self {
        Self::Validation(ValidationError::InvalidAmount {
            number: number.into(),
            amount,
        })
    }

    /// `a + b`, or [`AccountingError::Arithmetic`] naming `what` on overflow.
    pub fn checked_add(a: Decimal, b: Decimal, what: &str) -> Result<Decimal, Self> {
        a.checked_add(b)
            .ok_or_else(|| Self::Arithmetic(format!("{what} exceeds the decimal range")))
    }

    /// True for amount and pairing rejections.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
