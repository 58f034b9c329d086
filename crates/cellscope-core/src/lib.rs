//! Core workbook model for the cellscope spreadsheet auditing tools
//!
//! This crate provides the in-memory representation that the analysis and
//! annotation layers work against:
//!
//! - [`Workbook`] and [`Worksheet`] containers
//! - [`CellValue`] with typed values and formula text
//! - [`CellAddress`] / [`CellRange`] A1-notation parsing and formatting
//! - Sparse cell storage with deduplicated styles
//!
//! Formulas are carried as text. Nothing in this crate evaluates them;
//! the analysis layer inspects formula text to build dependency graphs.

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{
    CellAddress, CellData, CellError, CellRange, CellRangeIterator, CellStorage, CellValue,
};
pub use error::{Error, Result};
pub use style::{Color, FillStyle, Style, StylePool};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name in characters
pub const MAX_SHEET_NAME_LEN: usize = 31;
