//! CSV writing

use std::fs::File;
use std::io::Write;
use std::path::Path;

use cellscope_core::Worksheet;

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;

/// Writes a worksheet as CSV data
pub struct CsvWriter;

impl CsvWriter {
    /// Write a worksheet to a CSV file
    pub fn write_file(
        worksheet: &Worksheet,
        path: impl AsRef<Path>,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(worksheet, file, options)
    }

    /// Write a worksheet as CSV
    ///
    /// Rows and columns start at A1 so cell addresses survive a
    /// read-back; leading empty rows and columns come out as empty
    /// fields. Formula cells write their formula text, not a result.
    pub fn write(
        worksheet: &Worksheet,
        writer: impl Write,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(options.line_terminator.into())
            .from_writer(writer);

        let Some(range) = worksheet.used_range() else {
            return Ok(());
        };

        for row in 0..=range.end.row {
            let mut record: Vec<String> = Vec::with_capacity(range.end.col as usize + 1);
            for col in 0..=range.end.col {
                record.push(worksheet.get_value_at(row, col).to_string());
            }
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
