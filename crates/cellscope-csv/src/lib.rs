//! CSV import and export for cellscope workbooks
//!
//! Each CSV file maps to a single worksheet. Reading detects value types
//! (numbers, booleans, error literals, and '='-prefixed formulas) unless
//! told not to; writing renders values as display text, with formula cells
//! emitting their formula text rather than a computed result.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
