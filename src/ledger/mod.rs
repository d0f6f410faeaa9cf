//! Ledger entries derived from supplier invoices.
//!
//! Each invoice posts three lines: purchases and input VAT on the debit
//! side, the supplier balance on the credit side. Entries can only be built
//! on their account's natural side.
//!
//! # Example
//!
//! ```
//! use asientos::core::*;
//! use asientos::ledger::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let inv = InvoiceRecordBuilder::new("F2023/01", "Telefónica", NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())
//!     .amounts(dec!(100.00), dec!(21.00))
//!     .build()
//!     .unwrap();
//!
//! let entries = generate_entries([&inv]).unwrap();
//! assert_eq!(entries[0].account_code(), AccountCode::Purchases);
//! assert!(TrialBalance::from_entries(&entries).unwrap().is_balanced());
//! ```

mod accounts;
mod entries;
mod summary;

pub use accounts::{AccountCode, DebitCredit};
pub use entries::{AccountingEntry, generate_entries};
pub use summary::{AccountTotals, GroupSummary, TrialBalance, summarize_groups};
