use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{AccountingError, FilterChain, InvoiceRecord};

/// Invoice totals bucketed by ISO week and calendar month.
///
/// `total_balance` always equals the sum of either breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CashFlowProjection {
    pub total_balance: Decimal,
    /// Monday of the ISO week (`YYYY-MM-DD`) → summed totals.
    pub weekly_cashflow: BTreeMap<String, Decimal>,
    /// `YYYY-MM` → summed totals.
    pub monthly_cashflow: BTreeMap<String, Decimal>,
    /// Invoices inside the projected range.
    pub invoice_count: usize,
}

impl CashFlowProjection {
    /// Running total at the end of each month, ascending.
    pub fn cumulative_monthly(&self) -> Result<Vec<(String, Decimal)>, AccountingError> {
        let mut running = Decimal::ZERO;
        self.monthly_cashflow
            .iter()
            .map(|(month, amount)| -> Result<_, AccountingError> {
                running = AccountingError::checked_add(running, *amount, "running cash balance")?;
                Ok((month.clone(), running))
            })
            .collect()
    }
}

/// Monday starting the ISO week that contains `date`.
///
/// `None` only for the first days of chrono's date range, whose Monday is
/// not representable.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset))
}

fn add_to(
    breakdown: &mut BTreeMap<String, Decimal>,
    key: String,
    amount: Decimal,
) -> Result<(), AccountingError> {
    let slot = breakdown.entry(key).or_default();
    *slot = slot.checked_add(amount).ok_or_else(|| {
        AccountingError::Arithmetic("cash-flow bucket exceeds the decimal range".into())
    })?;
    Ok(())
}

/// Project invoice totals dated within `start..=end`.
///
/// A range with `start > end` projects nothing. Fails with
/// [`AccountingError::Arithmetic`] when a sum overflows or a week start
/// falls outside the representable dates.
pub fn project_cashflow<'a, I>(
    start: NaiveDate,
    end: NaiveDate,
    invoices: I,
) -> Result<CashFlowProjection, AccountingError>
where
    I: IntoIterator<Item = &'a InvoiceRecord>,
{
    let mut in_range = FilterChain::new()
        .filter_by_date_range(start, end)
        .apply_filters(invoices);
    in_range.sort_by_key(|inv| inv.date);

    let mut projection = CashFlowProjection {
        invoice_count: in_range.len(),
        ..Default::default()
    };
    for inv in in_range {
        let monday = week_start(inv.date).ok_or_else(|| {
            AccountingError::Arithmetic(format!(
                "week of {} starts before the earliest representable date",
                inv.date
            ))
        })?;
        projection.total_balance = AccountingError::checked_add(
            projection.total_balance,
            inv.total_value,
            "cash balance",
        )?;
        add_to(&mut projection.monthly_cashflow, inv.month_key(), inv.total_value)?;
        add_to(
            &mut projection.weekly_cashflow,
            monday.format("%Y-%m-%d").to_string(),
            inv.total_value,
        )?;
    }
    Ok(projection)
}
