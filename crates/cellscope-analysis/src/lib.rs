//! Static analysis of spreadsheet formulas
//!
//! This crate decides what role each cell of a worksheet plays, using only
//! the text of its formulas:
//!
//! - [`tokenizer`] splits formula text into tokens
//! - [`extract`] pulls the operand tokens a formula depends on
//! - [`graph`] holds forward and reverse dependency edges per sheet
//! - [`classify`] runs the two-pass classification over a worksheet
//!
//! Formulas are never evaluated. A dependency on "A1:A10" is a dependency
//! on that exact token; ranges are not expanded. Cycles between formulas
//! are recorded like any other edge.

pub mod classify;
pub mod error;
pub mod extract;
pub mod graph;
pub mod tokenizer;

pub use classify::{
    classify_sheet, Classification, ClassificationCounts, Diagnostic, SheetAnalysis,
};
pub use error::{Result, TokenizeError};
pub use extract::{extract_references, is_external_link};
pub use graph::DependencyGraph;
pub use tokenizer::{render, tokenize, Token, TokenKind, TokenSubtype};
