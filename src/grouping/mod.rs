//! Supplier × calendar-month grouping.
//!
//! Buckets are keyed by supplier, then by `YYYY-MM`, and accumulate exact
//! decimal totals. Members are kept in ascending date order. A total that
//! overflows `Decimal` fails the grouping with
//! [`AccountingError::Arithmetic`].
//!
//! # Example
//!
//! ```
//! use asientos::core::*;
//! use asientos::grouping::group_by_supplier_and_month;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2023, 1, day).unwrap();
//! let invoices = vec![
//!     InvoiceRecordBuilder::new("F2023/02", "A", d(17)).amounts(dec!(200), dec!(42)).build().unwrap(),
//!     InvoiceRecordBuilder::new("F2023/01", "A", d(15)).amounts(dec!(100), dec!(21)).build().unwrap(),
//! ];
//!
//! let groups = group_by_supplier_and_month(&invoices, None).unwrap();
//! let bucket = groups.get("A", "2023-01").unwrap();
//! assert_eq!(bucket.total_base, dec!(300));
//! assert_eq!(bucket.invoices[0].number, "F2023/01");
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{AccountingError, FilterChain, InvoiceRecord, InvoiceState};

/// Aggregate for one (supplier, month) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupBucket<'a> {
    pub total_base: Decimal,
    pub total_vat: Decimal,
    pub total_value: Decimal,
    /// Members in ascending date order.
    pub invoices: Vec<&'a InvoiceRecord>,
}

impl<'a> GroupBucket<'a> {
    fn push(&mut self, invoice: &'a InvoiceRecord) -> Result<(), AccountingError> {
        let sums = (
            self.total_base.checked_add(invoice.base_value),
            self.total_vat.checked_add(invoice.vat),
            self.total_value.checked_add(invoice.total_value),
        );
        let (Some(base), Some(vat), Some(total)) = sums else {
            return Err(AccountingError::Arithmetic(format!(
                "{} {} bucket exceeds the decimal range",
                invoice.supplier,
                invoice.month_key()
            )));
        };
        self.total_base = base;
        self.total_vat = vat;
        self.total_value = total;
        self.invoices.push(invoice);
        Ok(())
    }

    pub fn invoice_count(&self) -> usize {
        self.invoices.len()
    }
}

/// Flattened view of one bucket with its keys.
#[derive(Debug, Clone, Copy)]
pub struct BucketRef<'g, 'a> {
    pub supplier: &'g str,
    pub month: &'g str,
    pub bucket: &'g GroupBucket<'a>,
}

/// supplier → month (`YYYY-MM`) → bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SupplierMonthGroups<'a> {
    suppliers: BTreeMap<String, BTreeMap<String, GroupBucket<'a>>>,
}

impl<'a> SupplierMonthGroups<'a> {
    pub fn get(&self, supplier: &str, month: &str) -> Option<&GroupBucket<'a>> {
        self.suppliers.get(supplier)?.get(month)
    }

    /// Months for one supplier, ascending.
    pub fn months(&self, supplier: &str) -> Option<&BTreeMap<String, GroupBucket<'a>>> {
        self.suppliers.get(supplier)
    }

    /// Supplier keys, ascending.
    pub fn suppliers(&self) -> impl Iterator<Item = &str> {
        self.suppliers.keys().map(String::as_str)
    }

    /// Every bucket, ordered by supplier then month.
    pub fn buckets(&self) -> impl Iterator<Item = BucketRef<'_, 'a>> {
        self.suppliers.iter().flat_map(|(supplier, months)| {
            months.iter().map(move |(month, bucket)| BucketRef {
                supplier: supplier.as_str(),
                month: month.as_str(),
                bucket,
            })
        })
    }

    /// Every member invoice in bucket order.
    pub fn invoices(&self) -> impl Iterator<Item = &'a InvoiceRecord> + '_ {
        self.suppliers
            .values()
            .flat_map(|months| months.values())
            .flat_map(|bucket| bucket.invoices.iter().copied())
    }

    pub fn bucket_count(&self) -> usize {
        self.suppliers.values().map(BTreeMap::len).sum()
    }

    /// Sum of every bucket's base amount.
    pub fn total_base(&self) -> Result<Decimal, AccountingError> {
        self.buckets().try_fold(Decimal::ZERO, |acc, b| {
            AccountingError::checked_add(acc, b.bucket.total_base, "grouped base total")
        })
    }

    /// Sum of every bucket's gross amount.
    pub fn total_value(&self) -> Result<Decimal, AccountingError> {
        self.buckets().try_fold(Decimal::ZERO, |acc, b| {
            AccountingError::checked_add(acc, b.bucket.total_value, "grouped total")
        })
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}

/// Partition invoices by supplier and calendar month.
///
/// With `state` set, invoices in any other lifecycle state are dropped
/// first. Within a bucket members are stably sorted by date.
pub fn group_by_supplier_and_month<'a, I>(
    invoices: I,
    state: Option<InvoiceState>,
) -> Result<SupplierMonthGroups<'a>, AccountingError>
where
    I: IntoIterator<Item = &'a InvoiceRecord>,
{
    let chain = match state {
        Some(state) => FilterChain::new().filter_by_state(state),
        None => FilterChain::new(),
    };

    let mut groups = SupplierMonthGroups::default();
    for invoice in chain.apply_filters(invoices) {
        groups
            .suppliers
            .entry(invoice.supplier.clone())
            .or_default()
            .entry(invoice.month_key())
            .or_default()
            .push(invoice)?;
    }

    for bucket in groups.suppliers.values_mut().flat_map(BTreeMap::values_mut) {
        bucket.invoices.sort_by_key(|inv| inv.date);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InvoiceRecordBuilder;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, day).unwrap()
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        let invoices: Vec<InvoiceRecord> = Vec::new();
        let groups = group_by_supplier_and_month(&invoices, None).unwrap();
        assert!(groups.is_empty());
        assert_eq!(groups.bucket_count(), 0);
        assert_eq!(groups.total_value().unwrap(), dec!(0));
    }

    #[test]
    fn members_sorted_by_date_with_exact_totals() {
        let a = InvoiceRecordBuilder::new("F2023/01", "Telefónica", d(1, 2))
            .amounts(dec!(0.10), dec!(0.02))
            .build()
            .unwrap();
        let b = InvoiceRecordBuilder::new("F2023/02", "Telefónica", d(1, 1))
            .amounts(dec!(0.20), dec!(0.04))
            .build()
            .unwrap();
        let invoices = [a, b];

        let groups = group_by_supplier_and_month(&invoices, None).unwrap();
        let bucket = groups.get("Telefónica", "2023-01").unwrap();
        assert_eq!(bucket.invoices[0].number, "F2023/02");
        assert_eq!(bucket.invoices[1].number, "F2023/01");
        assert_eq!(bucket.total_base, dec!(0.30));
        assert_eq!(bucket.total_vat, dec!(0.06));
        assert_eq!(bucket.total_value, dec!(0.36));
    }

    #[test]
    fn same_day_members_keep_input_order() {
        let invoices = [
            InvoiceRecordBuilder::new("F2023/07", "Endesa", d(3, 5)).build().unwrap(),
            InvoiceRecordBuilder::new("F2023/03", "Endesa", d(3, 5)).build().unwrap(),
            InvoiceRecordBuilder::new("F2023/05", "Endesa", d(3, 1)).build().unwrap(),
        ];
        let groups = group_by_supplier_and_month(&invoices, None).unwrap();
        let order: Vec<_> = groups
            .get("Endesa", "2023-03")
            .unwrap()
            .invoices
            .iter()
            .map(|inv| inv.number.as_str())
            .collect();
        assert_eq!(order, ["F2023/05", "F2023/07", "F2023/03"]);
    }

    #[test]
    fn splits_by_supplier_and_month() {
        let invoices = [
            InvoiceRecordBuilder::new("F2023/01", "Repsol", d(1, 31)).amounts(dec!(10), dec!(2.1)).build().unwrap(),
            InvoiceRecordBuilder::new("F2023/02", "Endesa", d(1, 15)).amounts(dec!(20), dec!(4.2)).build().unwrap(),
            InvoiceRecordBuilder::new("F2023/03", "Repsol", d(2, 1)).amounts(dec!(30), dec!(6.3)).build().unwrap(),
        ];
        let groups = group_by_supplier_and_month(&invoices, None).unwrap();
        assert_eq!(groups.bucket_count(), 3);
        assert_eq!(groups.suppliers().collect::<Vec<_>>(), ["Endesa", "Repsol"]);
        assert_eq!(
            groups.months("Repsol").unwrap().keys().collect::<Vec<_>>(),
            ["2023-01", "2023-02"]
        );
        assert_eq!(groups.total_value().unwrap(), dec!(72.6));

        let flattened: Vec<_> = groups.invoices().map(|inv| inv.number.as_str()).collect();
        assert_eq!(flattened, ["F2023/02", "F2023/01", "F2023/03"]);
    }

    #[test]
    fn state_filter_drops_other_states() {
        let invoices = [
            InvoiceRecordBuilder::new("F2023/01", "Telefónica", d(1, 15)).build().unwrap(),
            InvoiceRecordBuilder::new("F2023/02", "Telefónica", d(1, 16))
                .state(InvoiceState::Paid)
                .build()
                .unwrap(),
            InvoiceRecordBuilder::new("F2023/03", "Otro", d(1, 17))
                .state(InvoiceState::Paid)
                .build()
                .unwrap(),
        ];
        let groups = group_by_supplier_and_month(&invoices, Some(InvoiceState::Draft)).unwrap();
        assert_eq!(groups.bucket_count(), 1);
        let bucket = groups.get("Telefónica", "2023-01").unwrap();
        assert_eq!(bucket.invoice_count(), 1);
        assert!(bucket.invoices.iter().all(|inv| inv.state == InvoiceState::Draft));
        assert!(groups.get("Otro", "2023-01").is_none());
    }

    #[test]
    fn overflowing_bucket_is_an_error() {
        let huge = || {
            InvoiceRecordBuilder::new("F2023/01", "Repsol", d(4, 1))
                .amounts(Decimal::MAX, Decimal::ZERO)
                .build()
                .unwrap()
        };
        let invoices = [huge(), huge()];
        let err = group_by_supplier_and_month(&invoices, None).unwrap_err();
        assert_eq!(
            err,
            AccountingError::Arithmetic("Repsol 2023-04 bucket exceeds the decimal range".into())
        );
    }

    #[test]
    fn overflow_across_buckets_surfaces_in_totals() {
        let invoices = [
            InvoiceRecordBuilder::new("F2023/01", "Repsol", d(4, 1))
                .amounts(Decimal::MAX, Decimal::ZERO)
                .build()
                .unwrap(),
            InvoiceRecordBuilder::new("F2023/02", "Endesa", d(4, 1))
                .amounts(Decimal::MAX, Decimal::ZERO)
                .build()
                .unwrap(),
        ];
        let groups = group_by_supplier_and_month(&invoices, None).unwrap();
        assert_eq!(groups.bucket_count(), 2);
        assert!(matches!(groups.total_value(), Err(AccountingError::Arithmetic(_))));
    }
}
