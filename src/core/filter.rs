use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{InvoiceRecord, InvoiceState};

/// A single predicate over invoice records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceFilter {
    /// `start <= date <= end`, inclusive at both ends.
    DateRange { start: NaiveDate, end: NaiveDate },
    /// Exact match on the supplier identifier.
    Supplier(String),
    /// Exact match on the lifecycle state.
    State(InvoiceState),
}

impl InvoiceFilter {
    pub fn matches(&self, invoice: &InvoiceRecord) -> bool {
        match self {
            Self::DateRange { start, end } => *start <= invoice.date && invoice.date <= *end,
            Self::Supplier(supplier) => invoice.supplier == *supplier,
            Self::State(state) => invoice.state == *state,
        }
    }
}

/// An ordered set of predicates applied together.
///
/// Chains are values: every `filter_by_*` call consumes the chain and
/// returns a new one, so two call sites never share predicates.
///
/// ```
/// use asientos::core::*;
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2023, m, day).unwrap();
/// let invoices = vec![
///     InvoiceRecordBuilder::new("F2023/01", "Endesa", d(1, 10)).build().unwrap(),
///     InvoiceRecordBuilder::new("F2023/02", "Repsol", d(1, 20)).build().unwrap(),
///     InvoiceRecordBuilder::new("F2023/03", "Endesa", d(2, 5)).build().unwrap(),
/// ];
///
/// let chain = FilterChain::new()
///     .filter_by_date_range(d(1, 1), d(1, 31))
///     .filter_by_supplier("Endesa");
///
/// let kept = chain.apply_filters(&invoices);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].number, "F2023/01");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChain {
    filters: Vec<InvoiceFilter>,
}

impl FilterChain {
    /// An empty chain (identity transform).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_by_date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.with(InvoiceFilter::DateRange { start, end })
    }

    pub fn filter_by_supplier(self, supplier: impl Into<String>) -> Self {
        self.with(InvoiceFilter::Supplier(supplier.into()))
    }

    pub fn filter_by_state(self, state: InvoiceState) -> Self {
        self.with(InvoiceFilter::State(state))
    }

    /// Append an arbitrary predicate.
    pub fn with(mut self, filter: InvoiceFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Records satisfying every predicate, in input order.
    pub fn apply_filters<'a, I>(&self, invoices: I) -> Vec<&'a InvoiceRecord>
    where
        I: IntoIterator<Item = &'a InvoiceRecord>,
    {
        invoices
            .into_iter()
            .filter(|inv| self.matches(inv))
            .collect()
    }

    pub fn matches(&self, invoice: &InvoiceRecord) -> bool {
        self.filters.iter().all(|f| f.matches(invoice))
    }

    pub fn filters(&self) -> &[InvoiceFilter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
