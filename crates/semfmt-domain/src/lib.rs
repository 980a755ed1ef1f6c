//! Query-result domain types shared by the semfmt result-format printers
//!
//! This crate provides the data the host hands to a printer:
//! - DataValue / TimeValue: typed property values with a short text form
//! - ResultField, ResultRow, QueryResult: labeled, ordered result data
//! - QueryLink: a re-invocation link for "show results as link" output
//! - OutputMode: file vs. inline (wiki/HTML) rendering

pub mod link;
pub mod output_mode;
pub mod row;
pub mod value;

pub use link::*;
pub use output_mode::*;
pub use row::*;
pub use value::*;
