use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A supplier invoice as handed over by the storage layer.
///
/// The pipeline only ever borrows records; no step mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice number in `F<yyyy>/<nn>` form (e.g. "F2023/07").
    pub number: String,
    /// Counterparty identifier, used as the grouping key.
    pub supplier: String,
    /// Free-text description.
    pub concept: String,
    /// Pre-tax amount.
    pub base_value: Decimal,
    /// Tax amount.
    pub vat: Decimal,
    /// Gross amount, expected to equal `base_value + vat`.
    pub total_value: Decimal,
    /// Invoice date.
    pub date: NaiveDate,
    /// Lifecycle state.
    pub state: InvoiceState,
}

impl InvoiceRecord {
    /// Whether `total_value == base_value + vat`. An overflowing sum is
    /// never consistent.
    pub fn is_consistent(&self) -> bool {
        self.base_value.checked_add(self.vat) == Some(self.total_value)
    }

    /// Calendar month key in `YYYY-MM` form.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Invoice lifecycle state.
///
/// Transitions between states are owned by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceState {
    Draft,
    Accounted,
    Pending,
    Paid,
    Canceled,
}

impl InvoiceState {
    /// Stored code ("DRAFT", "PAID", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Accounted => "ACCOUNTED",
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parse from the stored code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DRAFT" => Some(Self::Draft),
            "ACCOUNTED" => Some(Self::Accounted),
            "PENDING" => Some(Self::Pending),
            "PAID" => Some(Self::Paid),
            "CANCELED" => Some(Self::Canceled),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvoiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
