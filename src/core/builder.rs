use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::AccountingError;
use super::types::*;

/// Builder for [`InvoiceRecord`].
///
/// When no explicit total is given, `total_value` is derived as
/// `base_value + vat`; `build` fails only when that sum overflows.
/// Inconsistent or negative records are reported later by the pipeline.
///
/// ```
/// use asientos::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceRecordBuilder::new("F2023/01", "Telefónica", NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())
///     .concept("Fibra óptica enero")
///     .amounts(dec!(100.00), dec!(21.00))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.total_value, dec!(121.00));
/// assert_eq!(invoice.state, InvoiceState::Draft);
/// ```
pub struct InvoiceRecordBuilder {
    number: String,
    supplier: String,
    concept: String,
    base_value: Decimal,
    vat: Decimal,
    total_value: Option<Decimal>,
    date: NaiveDate,
    state: InvoiceState,
}

impl InvoiceRecordBuilder {
    pub fn new(number: impl Into<String>, supplier: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            supplier: supplier.into(),
            concept: String::new(),
            base_value: Decimal::ZERO,
            vat: Decimal::ZERO,
            total_value: None,
            date,
            state: InvoiceState::Draft,
        }
    }

    pub fn concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = concept.into();
        self
    }

    /// Set base and VAT amounts.
    pub fn amounts(mut self, base_value: Decimal, vat: Decimal) -> Self {
        self.base_value = base_value;
        self.vat = vat;
        self
    }

    /// Override the gross total instead of deriving it.
    pub fn total_value(mut self, total: Decimal) -> Self {
        self.total_value = Some(total);
        self
    }

    pub fn state(mut self, state: InvoiceState) -> Self {
        self.state = state;
        self
    }

    pub fn build(self) -> Result<InvoiceRecord, AccountingError> {
        let total_value = match self.total_value {
            Some(total) => total,
            None => self.base_value.checked_add(self.vat).ok_or_else(|| {
                AccountingError::Arithmetic(format!(
                    "total of invoice {} exceeds the decimal range",
                    self.number
                ))
            })?,
        };
        Ok(InvoiceRecord {
            total_value,
            number: self.number,
            supplier: self.supplier,
            concept: self.concept,
            base_value: self.base_value,
            vat: self.vat,
            date: self.date,
            state: self.state,
        })
    }
}
