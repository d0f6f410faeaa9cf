//! Invoice records, numbering rules, and filter chains.
//!
//! This module holds the input side of the pipeline: the record type as
//! supplied by the storage layer, the `F<yyyy>/<nn>` numbering checks, and
//! the composable predicates applied before aggregation.

mod builder;
mod error;
mod filter;
mod numbering;
mod types;

pub use builder::*;
pub use error::*;
pub use filter::*;
pub use numbering::*;
pub use types::*;
