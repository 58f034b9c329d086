//! Workbook annotation for classified spreadsheets
//!
//! Turns a classified workbook into a reviewable one:
//!
//! - [`paint_sheet`] color-codes cells by classification
//! - [`build_documentation_sheet`] adds an overview with per-sheet summaries
//! - [`build_user_guide_sheet`] lists every input cell a user might edit
//!
//! Sheet summaries come from a pluggable [`SheetSummarizer`]; a failing
//! summarizer degrades to placeholder text rather than failing the build.

mod colors;
mod documentation;
mod guide;
mod paint;
mod summary;

pub use colors::ColorScheme;
pub use documentation::{build_documentation_sheet, DOCUMENTATION_SHEET, USER_GUIDE_SHEET};
pub use guide::build_user_guide_sheet;
pub use paint::{paint_sheet, AnnotateOptions};
pub use summary::{
    SheetSample, SheetSummarizer, StaticSummarizer, SummaryError, UnavailableSummarizer,
    SAMPLE_ROWS,
};
