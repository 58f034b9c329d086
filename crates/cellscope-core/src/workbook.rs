//! Workbook implementation

use crate::worksheet::Worksheet;
use crate::{Error, Result, MAX_SHEET_NAME_LEN};

/// Characters not allowed in sheet names
const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A workbook containing one or more worksheets
#[derive(Debug, Default)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create a new workbook with a single empty worksheet ("Sheet1")
    pub fn new() -> Self {
        let mut workbook = Self {
            worksheets: Vec::new(),
        };
        workbook.add_worksheet();
        workbook
    }

    /// Create a workbook with no worksheets
    pub fn empty() -> Self {
        Self {
            worksheets: Vec::new(),
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Result<&Worksheet> {
        self.worksheets
            .get(index)
            .ok_or(Error::SheetOutOfBounds(index, self.worksheets.len()))
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Result<&mut Worksheet> {
        let count = self.worksheets.len();
        self.worksheets
            .get_mut(index)
            .ok_or(Error::SheetOutOfBounds(index, count))
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name() == name)
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Get all worksheets
    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    /// Get all worksheets mutably
    pub fn worksheets_mut(&mut self) -> &mut [Worksheet] {
        &mut self.worksheets
    }

    /// Get the names of all worksheets in order
    pub fn sheet_names(&self) -> Vec<String> {
        self.worksheets
            .iter()
            .map(|ws| ws.name().to_string())
            .collect()
    }

    /// Add a new worksheet with an auto-generated name
    pub fn add_worksheet(&mut self) -> &mut Worksheet {
        let name = self.generate_sheet_name();
        self.worksheets.push(Worksheet::new(name));
        self.worksheets.last_mut().unwrap()
    }

    /// Add a new worksheet with the given name
    pub fn add_worksheet_with_name(&mut self, name: impl Into<String>) -> Result<&mut Worksheet> {
        let name = name.into();
        self.validate_sheet_name(&name)?;
        self.worksheets.push(Worksheet::new(name));
        Ok(self.worksheets.last_mut().unwrap())
    }

    /// Add an existing worksheet
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> Result<()> {
        self.validate_sheet_name(worksheet.name())?;
        self.worksheets.push(worksheet);
        Ok(())
    }

    /// Remove a worksheet by index, returning it
    pub fn remove_worksheet(&mut self, index: usize) -> Result<Worksheet> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        Ok(self.worksheets.remove(index))
    }

    /// Remove a worksheet by name, returning it if it existed
    pub fn remove_worksheet_by_name(&mut self, name: &str) -> Option<Worksheet> {
        let index = self.sheet_index(name)?;
        Some(self.worksheets.remove(index))
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("name cannot be empty".into()));
        }

        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "name '{}' exceeds {} characters",
                name, MAX_SHEET_NAME_LEN
            )));
        }

        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "name '{}' contains invalid character '{}'",
                name, c
            )));
        }

        // Sheet names are case-insensitively unique
        let lower = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == lower)
        {
            return Err(Error::DuplicateSheetName(name.to_string()));
        }

        Ok(())
    }

    fn generate_sheet_name(&self) -> String {
        let mut n = self.worksheets.len() + 1;
        loop {
            let name = format!("Sheet{n}");
            if self.validate_sheet_name(&name).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workbook_has_sheet1() {
        let workbook = Workbook::new();
        assert_eq!(workbook.sheet_count(), 1);
        assert_eq!(workbook.worksheet(0).unwrap().name(), "Sheet1");
    }

    #[test]
    fn test_empty_workbook() {
        let workbook = Workbook::empty();
        assert!(workbook.is_empty());
        assert!(workbook.worksheet(0).is_err());
    }

    #[test]
    fn test_add_worksheet_generates_names() {
        let mut workbook = Workbook::new();
        assert_eq!(workbook.add_worksheet().name(), "Sheet2");
        assert_eq!(workbook.add_worksheet().name(), "Sheet3");
    }

    #[test]
    fn test_add_worksheet_with_name() {
        let mut workbook = Workbook::empty();
        workbook.add_worksheet_with_name("Revenue").unwrap();

        assert_eq!(workbook.sheet_names(), vec!["Revenue"]);
        assert!(workbook.worksheet_by_name("Revenue").is_some());
        assert!(workbook.worksheet_by_name("revenue").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut workbook = Workbook::empty();
        workbook.add_worksheet_with_name("Data").unwrap();

        assert!(workbook.add_worksheet_with_name("Data").is_err());
        // Case-insensitive duplicate check
        assert!(workbook.add_worksheet_with_name("DATA").is_err());
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut workbook = Workbook::empty();

        assert!(workbook.add_worksheet_with_name("").is_err());
        assert!(workbook.add_worksheet_with_name("a/b").is_err());
        assert!(workbook.add_worksheet_with_name("a[b]").is_err());
        assert!(workbook
            .add_worksheet_with_name("a".repeat(32))
            .is_err());
        assert!(workbook
            .add_worksheet_with_name("a".repeat(31))
            .is_ok());
    }

    #[test]
    fn test_remove_worksheet_by_name() {
        let mut workbook = Workbook::empty();
        workbook.add_worksheet_with_name("Keep").unwrap();
        workbook.add_worksheet_with_name("Drop").unwrap();

        let removed = workbook.remove_worksheet_by_name("Drop").unwrap();
        assert_eq!(removed.name(), "Drop");
        assert_eq!(workbook.sheet_names(), vec!["Keep"]);

        assert!(workbook.remove_worksheet_by_name("Missing").is_none());
    }

    #[test]
    fn test_sheet_index() {
        let mut workbook = Workbook::empty();
        workbook.add_worksheet_with_name("First").unwrap();
        workbook.add_worksheet_with_name("Second").unwrap();

        assert_eq!(workbook.sheet_index("Second"), Some(1));
        assert_eq!(workbook.sheet_index("Third"), None);
    }
}
