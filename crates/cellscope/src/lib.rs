//! # cellscope
//!
//! A Rust library for classifying the cells of a spreadsheet by their role.
//!
//! Cellscope statically analyzes the formulas of a workbook and labels every
//! non-empty cell as an input, a calculation, an output, or something else,
//! without evaluating anything. The classified workbook can then be annotated
//! in place: classification colors painted onto the cells, plus generated
//! `Documentation` and `User Guide` sheets describing the analysis.
//!
//! ## Features
//!
//! - Classify cells from formula dependencies alone (no evaluation)
//! - Distinguish hardcoded inputs from external workbook links
//! - Paint classification colors onto the analyzed sheets
//! - Generate a `Documentation` sheet with per-sheet summaries
//! - Generate a `User Guide` sheet listing every input cell
//! - Read and write CSV files
//!
//! ## Example
//!
//! ```rust
//! use cellscope::prelude::*;
//!
//! // Build a small model
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", 0.05).unwrap();
//! sheet.set_cell_value("A2", 1000.0).unwrap();
//! sheet.set_cell_formula("A3", "=A1*A2").unwrap();
//! sheet.set_cell_formula("A4", "=A3+A2").unwrap();
//!
//! // Classify every cell by its role
//! let analysis = workbook.classify();
//! let sheet = analysis.sheet("Sheet1").unwrap();
//!
//! assert_eq!(sheet.classification_of("A1"), Some(Classification::InputHardcoded));
//! assert_eq!(sheet.classification_of("A3"), Some(Classification::Calculation));
//! assert_eq!(sheet.classification_of("A4"), Some(Classification::Output));
//! ```

pub mod classification;
pub mod prelude;

#[cfg(feature = "annotate")]
pub mod annotate;

// Re-export classification types
pub use classification::{
    ClassificationOptions, ClassificationStats, WorkbookAnalysis, WorkbookClassificationExt,
};

#[cfg(feature = "annotate")]
pub use annotate::WorkbookAnnotateExt;

// Re-export core types
pub use cellscope_core::{
    CellAddress,
    CellData,
    CellError,
    CellRange,
    // Cell types
    CellValue,
    Color,
    // Error types
    Error,
    FillStyle,
    Result,
    // Style types
    Style,
    StylePool,
    // Main types
    Workbook,
    Worksheet,
    MAX_COLS,
    // Constants
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export analysis types
pub use cellscope_analysis::{
    classify_sheet, extract_references, is_external_link, render, tokenize, Classification,
    ClassificationCounts, DependencyGraph, Diagnostic, SheetAnalysis, Token, TokenKind,
    TokenSubtype, TokenizeError,
};

// Re-export annotation types
#[cfg(feature = "annotate")]
pub use cellscope_annotate::{
    build_documentation_sheet, build_user_guide_sheet, paint_sheet, AnnotateOptions, ColorScheme,
    SheetSample, SheetSummarizer, StaticSummarizer, SummaryError, UnavailableSummarizer,
    DOCUMENTATION_SHEET, SAMPLE_ROWS, USER_GUIDE_SHEET,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use cellscope_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};

#[cfg(feature = "csv")]
use std::path::Path;

/// Extension trait for Workbook to add file I/O
#[cfg(feature = "csv")]
pub trait WorkbookExt {
    /// Open a workbook from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Save the workbook to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

#[cfg(feature = "csv")]
impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => CsvReader::read_file(path, &CsvReadOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => {
                let sheet = self.worksheet(0)?;
                CsvWriter::write_file(sheet, path, &CsvWriteOptions::default())
                    .map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
