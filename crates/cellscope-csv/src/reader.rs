//! CSV reading

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cellscope_core::{CellError, CellValue, Error, Workbook, MAX_COLS, MAX_ROWS};

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// Reads CSV data into a workbook
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a workbook with a single sheet
    ///
    /// The sheet is named after the file stem, so `revenue.csv` becomes a
    /// sheet called "revenue". The stem must form a valid sheet name;
    /// callers with arbitrary file names should sanitize first and use
    /// [`read_named`](Self::read_named).
    pub fn read_file(path: impl AsRef<Path>, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let path = path.as_ref();
        let sheet_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Sheet1");
        let file = File::open(path)?;
        Self::read_named(file, sheet_name, options)
    }

    /// Read CSV data into a workbook with a single sheet named "Sheet1"
    pub fn read(reader: impl Read, options: &CsvReadOptions) -> CsvResult<Workbook> {
        Self::read_named(reader, "Sheet1", options)
    }

    /// Read CSV data into a workbook with a single sheet of the given name
    pub fn read_named(
        reader: impl Read,
        sheet_name: &str,
        options: &CsvReadOptions,
    ) -> CsvResult<Workbook> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut workbook = Workbook::empty();
        let sheet = workbook.add_worksheet_with_name(sheet_name)?;

        for (row_idx, record) in csv_reader.records().enumerate() {
            let record = record?;

            if row_idx >= MAX_ROWS as usize {
                return Err(CsvError::Core(Error::RowOutOfBounds(
                    row_idx.min(u32::MAX as usize) as u32,
                    MAX_ROWS - 1,
                )));
            }

            for (col_idx, field) in record.iter().enumerate() {
                if col_idx >= usize::from(MAX_COLS) {
                    return Err(CsvError::Core(Error::ColumnOutOfBounds(
                        col_idx.min(u16::MAX as usize) as u16,
                        MAX_COLS - 1,
                    )));
                }

                let value = if options.detect_types {
                    Self::detect_type(field, options.parse_formulas)
                } else if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::string(field)
                };

                sheet.set_cell_value_at(row_idx as u32, col_idx as u16, value)?;
            }
        }

        Ok(workbook)
    }

    /// Detect the cell value type from field text
    fn detect_type(field: &str, parse_formulas: bool) -> CellValue {
        if field.is_empty() {
            return CellValue::Empty;
        }

        if parse_formulas && field.starts_with('=') {
            return CellValue::formula(field);
        }

        if field.eq_ignore_ascii_case("TRUE") {
            return CellValue::Boolean(true);
        }
        if field.eq_ignore_ascii_case("FALSE") {
            return CellValue::Boolean(false);
        }

        if let Some(error) = CellError::parse(field) {
            return CellValue::Error(error);
        }

        if let Ok(number) = field.parse::<f64>() {
            return CellValue::Number(number);
        }

        CellValue::string(field)
    }
}
