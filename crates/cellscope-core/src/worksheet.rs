//! Worksheet implementation

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue};
use crate::style::Style;
use crate::{Error, Result, MAX_COLS, MAX_ROWS};

/// A single worksheet in a workbook
#[derive(Debug, Default)]
pub struct Worksheet {
    /// Sheet name
    name: String,

    /// Cell storage
    cells: CellStorage,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a cell by A1-style address
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get a cell by row/column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Get a cell's value by A1-style address
    ///
    /// Returns [`CellValue::Empty`] for cells that have never been set.
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get a cell's value by row/column indices
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Get a cell's formula text by A1-style address, if it holds a formula
    pub fn get_formula(&self, address: &str) -> Result<Option<&str>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_formula_at(addr.row, addr.col))
    }

    /// Get a cell's formula text by row/column indices, if it holds a formula
    pub fn get_formula_at(&self, row: u32, col: u16) -> Option<&str> {
        self.cells.get(row, col).and_then(|c| c.value.formula_text())
    }

    /// Set a cell's value by A1-style address
    pub fn set_cell_value(&mut self, address: &str, value: impl Into<CellValue>) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell's value by row/column indices
    pub fn set_cell_value_at(
        &mut self,
        row: u32,
        col: u16,
        value: impl Into<CellValue>,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a formula in a cell by A1-style address
    ///
    /// The formula may be given with or without the leading '='.
    pub fn set_cell_formula(&mut self, address: &str, formula: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_formula_at(addr.row, addr.col, formula)
    }

    /// Set a formula in a cell by row/column indices
    pub fn set_cell_formula_at(&mut self, row: u32, col: u16, formula: &str) -> Result<()> {
        let text = if formula.starts_with('=') {
            formula.to_string()
        } else {
            format!("={formula}")
        };
        self.set_cell_value_at(row, col, CellValue::formula(text))
    }

    /// Set a cell's style by A1-style address
    pub fn set_cell_style(&mut self, address: &str, style: Style) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(addr.row, addr.col, style)
    }

    /// Set a cell's style by row/column indices
    ///
    /// The style is interned in the worksheet's style pool.
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: Style) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let index = self.cells.style_pool.get_or_insert(style);
        self.cells.set_style(row, col, index);
        Ok(())
    }

    /// Get a cell's style index by row/column indices (0 = default style)
    pub fn cell_style_index_at(&self, row: u32, col: u16) -> u32 {
        self.cells.get(row, col).map(|c| c.style_index).unwrap_or(0)
    }

    /// Get a style from the pool by index
    pub fn style_by_index(&self, index: u32) -> Option<&Style> {
        self.cells.style_pool.get(index)
    }

    /// Get a cell's resolved style by A1-style address
    pub fn cell_style(&self, address: &str) -> Result<&Style> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_style_at(addr.row, addr.col))
    }

    /// Get a cell's resolved style by row/column indices
    ///
    /// Unset cells resolve to the default style.
    pub fn cell_style_at(&self, row: u32, col: u16) -> &Style {
        let index = self.cell_style_index_at(row, col);
        self.cells
            .style_pool
            .get(index)
            .unwrap_or_else(|| self.cells.style_pool.default_style())
    }

    /// Clear a cell by A1-style address
    pub fn clear_cell(&mut self, address: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.clear_cell_at(addr.row, addr.col);
        Ok(())
    }

    /// Clear a cell by row/column indices
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        self.cells.remove(row, col);
    }

    /// Append a row of values below the last used row
    ///
    /// Values are placed starting at column A. Empty strings count as
    /// values, so a row of `[""]` still advances the used range.
    pub fn append_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let row = match self.cells.used_bounds() {
            Some((_, _, max_row, _)) => max_row + 1,
            None => 0,
        };

        for (offset, value) in values.into_iter().enumerate() {
            if offset >= usize::from(MAX_COLS) {
                return Err(Error::ColumnOutOfBounds(
                    offset.min(u16::MAX as usize) as u16,
                    MAX_COLS - 1,
                ));
            }
            self.set_cell_value_at(row, offset as u16, value)?;
        }

        Ok(())
    }

    /// Get the range of used cells, or None if the sheet is empty
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .used_bounds()
            .map(|(min_row, min_col, max_row, max_col)| {
                CellRange::from_indices(min_row, min_col, max_row, max_col)
            })
    }

    /// Get the number of populated cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the sheet has no populated cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all populated cells in row order
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellAddress, &CellData)> {
        self.cells
            .iter()
            .map(|(row, col, data)| (CellAddress::new(row, col), data))
    }

    /// Iterate over all formula cells in row order
    pub fn formula_cells(&self) -> impl Iterator<Item = (CellAddress, &str)> {
        self.cells.iter().filter_map(|(row, col, data)| {
            data.value
                .formula_text()
                .map(|text| (CellAddress::new(row, col), text))
        })
    }

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_set_and_get_values() {
        let mut sheet = Worksheet::new("Test");

        sheet.set_cell_value("A1", 42.0).unwrap();
        sheet.set_cell_value("B2", "hello").unwrap();
        sheet.set_cell_value("C3", true).unwrap();

        assert_eq!(sheet.get_value("A1").unwrap(), CellValue::Number(42.0));
        assert_eq!(sheet.get_value("B2").unwrap(), CellValue::string("hello"));
        assert_eq!(sheet.get_value("C3").unwrap(), CellValue::Boolean(true));
        assert_eq!(sheet.get_value("D4").unwrap(), CellValue::Empty);
    }

    #[test]
    fn test_formula_gets_equals_prefix() {
        let mut sheet = Worksheet::new("Test");

        sheet.set_cell_formula("A1", "B1+C1").unwrap();
        sheet.set_cell_formula("A2", "=B2+C2").unwrap();

        assert_eq!(sheet.get_formula("A1").unwrap(), Some("=B1+C1"));
        assert_eq!(sheet.get_formula("A2").unwrap(), Some("=B2+C2"));
        assert_eq!(sheet.get_formula("A3").unwrap(), None);
    }

    #[test]
    fn test_formula_cells_iterator() {
        let mut sheet = Worksheet::new("Test");

        sheet.set_cell_value("A1", 1.0).unwrap();
        sheet.set_cell_formula("B1", "A1*2").unwrap();
        sheet.set_cell_formula("B2", "B1+1").unwrap();

        let formulas: Vec<_> = sheet
            .formula_cells()
            .map(|(addr, text)| (addr.to_string(), text.to_string()))
            .collect();

        assert_eq!(
            formulas,
            vec![
                ("B1".to_string(), "=A1*2".to_string()),
                ("B2".to_string(), "=B1+1".to_string()),
            ]
        );
    }

    #[test]
    fn test_append_row() {
        let mut sheet = Worksheet::new("Test");

        sheet.append_row(["Name", "Value"]).unwrap();
        sheet.append_row(["rate", "0.05"]).unwrap();

        assert_eq!(sheet.get_value("A1").unwrap(), CellValue::string("Name"));
        assert_eq!(sheet.get_value("B1").unwrap(), CellValue::string("Value"));
        assert_eq!(sheet.get_value("A2").unwrap(), CellValue::string("rate"));
    }

    #[test]
    fn test_append_row_empty_string_advances() {
        let mut sheet = Worksheet::new("Test");

        sheet.append_row(["Title"]).unwrap();
        sheet.append_row([""]).unwrap();
        sheet.append_row(["After spacer"]).unwrap();

        assert_eq!(sheet.get_value("A2").unwrap(), CellValue::string(""));
        assert_eq!(
            sheet.get_value("A3").unwrap(),
            CellValue::string("After spacer")
        );
    }

    #[test]
    fn test_append_row_skips_gaps() {
        let mut sheet = Worksheet::new("Test");

        // Existing data at row 5
        sheet.set_cell_value("A5", "existing").unwrap();
        sheet.append_row(["appended"]).unwrap();

        assert_eq!(
            sheet.get_value("A6").unwrap(),
            CellValue::string("appended")
        );
    }

    #[test]
    fn test_styles() {
        let mut sheet = Worksheet::new("Test");

        sheet.set_cell_value("A1", "input").unwrap();
        sheet
            .set_cell_style("A1", Style::new().fill_color(Color::YELLOW))
            .unwrap();

        let style = sheet.cell_style("A1").unwrap();
        assert_eq!(style.fill.color(), Some(Color::YELLOW));

        // Unstyled cells resolve to the default style
        assert_eq!(sheet.cell_style("B1").unwrap(), &Style::default());
        assert_eq!(sheet.cell_style_index_at(0, 1), 0);
    }

    #[test]
    fn test_used_range() {
        let mut sheet = Worksheet::new("Test");
        assert!(sheet.used_range().is_none());

        sheet.set_cell_value("B2", 1.0).unwrap();
        sheet.set_cell_value("D5", 2.0).unwrap();

        let range = sheet.used_range().unwrap();
        assert_eq!(range.to_a1_string(), "B2:D5");
    }

    #[test]
    fn test_out_of_bounds() {
        let mut sheet = Worksheet::new("Test");

        assert!(sheet.set_cell_value_at(MAX_ROWS, 0, 1.0).is_err());
        assert!(sheet.set_cell_value_at(0, MAX_COLS, 1.0).is_err());
        assert!(sheet.set_cell_value_at(MAX_ROWS - 1, MAX_COLS - 1, 1.0).is_ok());
    }

    #[test]
    fn test_clear_cell() {
        let mut sheet = Worksheet::new("Test");

        sheet.set_cell_value("A1", 42.0).unwrap();
        assert_eq!(sheet.cell_count(), 1);

        sheet.clear_cell("A1").unwrap();
        assert_eq!(sheet.cell_count(), 0);
        assert_eq!(sheet.get_value("A1").unwrap(), CellValue::Empty);
    }
}
