//! Sheet sampling and natural-language summaries
//!
//! The documentation sheet carries a one-line summary per sheet. Summaries
//! come from a [`SheetSummarizer`], which is handed a small sample of the
//! sheet's leading rows. This crate ships two implementations: a fixed-text
//! one and one that always fails (for when no summary service is wired up;
//! the documentation builder turns the failure into a placeholder cell).

use std::fmt;

use thiserror::Error;

use cellscope_core::Worksheet;

/// Number of leading rows sampled from each sheet
pub const SAMPLE_ROWS: u32 = 6;

/// Error from a summary provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SummaryError {
    pub message: String,
}

impl SummaryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A sample of a sheet's leading rows, rendered as display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSample {
    /// Name of the sampled sheet
    pub sheet: String,
    /// Up to [`SAMPLE_ROWS`] rows, one inner Vec per row
    pub rows: Vec<Vec<String>>,
}

impl SheetSample {
    /// Sample the first rows of a worksheet
    ///
    /// Takes at most [`SAMPLE_ROWS`] rows starting at row 1, spanning the
    /// sheet's used columns. An empty sheet yields an empty sample.
    pub fn from_worksheet(sheet: &Worksheet) -> Self {
        let mut rows = Vec::new();

        if let Some(range) = sheet.used_range() {
            let last_row = range.end.row.min(SAMPLE_ROWS - 1);
            for row in 0..=last_row {
                let mut fields = Vec::with_capacity(range.end.col as usize + 1);
                for col in 0..=range.end.col {
                    fields.push(sheet.get_value_at(row, col).to_string());
                }
                rows.push(fields);
            }
        }

        Self {
            sheet: sheet.name().to_string(),
            rows,
        }
    }

    /// Render the sampled rows, one line per row
    pub fn sample_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.join(", "));
            out.push('\n');
        }
        out
    }

    /// Build the review prompt handed to a summary provider
    pub fn prompt(&self) -> String {
        format!(
            "You are reviewing a sheet from an Excel workbook. Based on the following sample rows of data from the sheet titled '{}', summarize what the sheet is likely doing. Consider whether it contains inputs, outputs, calculations, or reference data. Keep your summary short and clear.\n\nSample data:\n{}",
            self.sheet,
            self.sample_text()
        )
    }
}

impl fmt::Display for SheetSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sample_text())
    }
}

/// Produces a short natural-language summary of a sheet sample
pub trait SheetSummarizer {
    fn summarize(&self, sample: &SheetSample) -> Result<String, SummaryError>;
}

/// Returns the same fixed text for every sheet
pub struct StaticSummarizer {
    text: String,
}

impl StaticSummarizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SheetSummarizer for StaticSummarizer {
    fn summarize(&self, _sample: &SheetSample) -> Result<String, SummaryError> {
        Ok(self.text.clone())
    }
}

/// Always fails with the same reason
///
/// Use this when no summary service is configured; the documentation
/// builder renders the failure as a placeholder in the summary column.
#[derive(Debug, Default)]
pub struct UnavailableSummarizer;

impl SheetSummarizer for UnavailableSummarizer {
    fn summarize(&self, _sample: &SheetSample) -> Result<String, SummaryError> {
        Err(SummaryError::new("summary service not configured"))
    }
}
