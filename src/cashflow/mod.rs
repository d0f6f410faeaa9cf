//! Cash-flow projection by ISO week and calendar month.
//!
//! Independent of ledger posting: totals are summed straight from the
//! invoices dated inside the requested range.
//!
//! # Example
//!
//! ```
//! use asientos::cashflow::project_cashflow;
//! use asientos::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2023, m, day).unwrap();
//! let invoices = vec![
//!     InvoiceRecordBuilder::new("F2023/01", "A", d(1, 15)).amounts(dec!(100), dec!(21)).build().unwrap(),
//!     InvoiceRecordBuilder::new("F2023/02", "B", d(1, 17)).amounts(dec!(200), dec!(42)).build().unwrap(),
//! ];
//!
//! let projection = project_cashflow(d(1, 1), d(1, 31), &invoices).unwrap();
//! assert_eq!(projection.total_balance, dec!(363));
//! assert_eq!(projection.weekly_cashflow["2023-01-09"], dec!(121));
//! assert_eq!(projection.weekly_cashflow["2023-01-16"], dec!(242));
//! ```

mod projection;

pub use projection::{CashFlowProjection, project_cashflow, week_start};
