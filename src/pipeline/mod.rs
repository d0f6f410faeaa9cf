//! End-to-end accounting run over a batch of invoices.
//!
//! [`Pipeline::create_accounting_entries`] validates amounts, filters,
//! sorts, checks numbering format, groups by supplier and month, generates
//! ledger entries, and reports numbering gaps and duplicates. The batch
//! either succeeds as a whole or fails with the first error.
//!
//! Diagnostics are emitted through `tracing` from this module only.

mod config;
mod orchestrator;

pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use orchestrator::{
    AccountingQuery, AccountingRun, Pipeline, ensure_date_ordered, sort_by_date,
};
