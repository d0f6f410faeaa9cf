//! # asientos
//!
//! Derives accounting output from supplier invoices: three-line ledger
//! entries, supplier × month groupings, numbering gap and duplicate reports,
//! and weekly/monthly cash-flow projections.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Account codes follow the Spanish PGC (6000 purchases, 4720 input VAT,
//! 4000 suppliers).
//!
//! ## Quick Start
//!
//! ```rust
//! use asientos::core::*;
//! use asientos::pipeline::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2023, 1, day).unwrap();
//! let invoices = vec![
//!     InvoiceRecordBuilder::new("F2023/01", "A", d(15)).amounts(dec!(100), dec!(21)).build().unwrap(),
//!     InvoiceRecordBuilder::new("F2023/02", "A", d(17)).amounts(dec!(200), dec!(42)).build().unwrap(),
//!     InvoiceRecordBuilder::new("F2023/03", "B", d(18)).amounts(dec!(300), dec!(63)).build().unwrap(),
//! ];
//!
//! let pipeline = Pipeline::new(PipelineConfigBuilder::new(2023, 40).build().unwrap()).unwrap();
//! let run = pipeline.create_accounting_entries(&invoices, &AccountingQuery::new()).unwrap();
//!
//! assert_eq!(run.grouped_invoices.get("A", "2023-01").unwrap().total_value, dec!(363));
//! assert_eq!(run.accounting_entries.len(), 9);
//! assert_eq!(run.missing_invoice_numbers.len(), 37);
//! assert!(run.duplicate_invoice_numbers.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice records, numbering, filters, grouping, ledger, pipeline |
//! | `cashflow` (default) | Weekly/monthly cash-flow projection |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod grouping;

#[cfg(feature = "core")]
pub mod ledger;

#[cfg(feature = "core")]
pub mod pipeline;

#[cfg(feature = "cashflow")]
pub mod cashflow;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
