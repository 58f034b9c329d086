//! Workbook-level classification

use std::time::{Duration, Instant};

use cellscope_analysis::{classify_sheet, ClassificationCounts, Diagnostic, SheetAnalysis};
use cellscope_core::Workbook;

/// Options controlling workbook classification
#[derive(Debug, Clone)]
pub struct ClassificationOptions {
    /// Sheets left out of the analysis
    ///
    /// Defaults to the generated "Documentation" and "User Guide" sheets,
    /// so re-running the pipeline on an already-annotated workbook does
    /// not classify its own output.
    pub skip_sheets: Vec<String>,
}

impl Default for ClassificationOptions {
    fn default() -> Self {
        Self {
            skip_sheets: vec!["Documentation".to_string(), "User Guide".to_string()],
        }
    }
}

/// Statistics from a classification run
#[derive(Debug, Clone)]
pub struct ClassificationStats {
    /// Number of sheets analyzed
    pub sheets_analyzed: usize,
    /// Total classified cells across all sheets
    pub cells_classified: usize,
    /// Aggregated per-classification counts
    pub counts: ClassificationCounts,
    /// Formulas that failed to tokenize, across all sheets
    pub diagnostics: Vec<Diagnostic>,
    /// Wall-clock analysis time
    pub duration: Duration,
}

/// The combined result of classifying every sheet of a workbook
#[derive(Debug, Clone)]
pub struct WorkbookAnalysis {
    /// Per-sheet analyses, in workbook sheet order
    pub sheets: Vec<SheetAnalysis>,
    /// Run statistics
    pub stats: ClassificationStats,
}

impl WorkbookAnalysis {
    /// Find the analysis for a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&SheetAnalysis> {
        self.sheets.iter().find(|a| a.sheet == name)
    }
}

/// Extension trait adding classification to [`Workbook`]
pub trait WorkbookClassificationExt {
    /// Classify every sheet with default options
    fn classify(&self) -> WorkbookAnalysis;

    /// Classify every sheet not listed in `skip_sheets`
    fn classify_with_options(&self, options: &ClassificationOptions) -> WorkbookAnalysis;
}

impl WorkbookClassificationExt for Workbook {
    fn classify(&self) -> WorkbookAnalysis {
        self.classify_with_options(&ClassificationOptions::default())
    }

    fn classify_with_options(&self, options: &ClassificationOptions) -> WorkbookAnalysis {
        let start = Instant::now();

        let mut sheets = Vec::new();
        for worksheet in self.worksheets() {
            if options.skip_sheets.iter().any(|s| s == worksheet.name()) {
                continue;
            }
            sheets.push(classify_sheet(worksheet));
        }

        let mut counts = ClassificationCounts::default();
        let mut diagnostics = Vec::new();
        for analysis in &sheets {
            counts.merge(&analysis.counts());
            diagnostics.extend(analysis.diagnostics.iter().cloned());
        }

        let stats = ClassificationStats {
            sheets_analyzed: sheets.len(),
            cells_classified: counts.total(),
            counts,
            diagnostics,
            duration: start.elapsed(),
        };

        WorkbookAnalysis { sheets, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellscope_analysis::Classification;

    fn two_sheet_workbook() -> Workbook {
        let mut workbook = Workbook::empty();

        let inputs = workbook.add_worksheet_with_name("Inputs").unwrap();
        inputs.set_cell_value("A1", 100.0).unwrap();
        inputs.set_cell_value("A2", 0.05).unwrap();

        let model = workbook.add_worksheet_with_name("Model").unwrap();
        model.set_cell_value("A1", 12.0).unwrap();
        model.set_cell_formula("B1", "A1*2").unwrap();
        model.set_cell_formula("C1", "B1+1").unwrap();

        workbook
    }

    #[test]
    fn test_classify_all_sheets() {
        let workbook = two_sheet_workbook();
        let analysis = workbook.classify();

        assert_eq!(analysis.stats.sheets_analyzed, 2);
        assert_eq!(analysis.stats.cells_classified, 5);
        assert_eq!(analysis.stats.counts.input_hardcoded, 3);
        assert_eq!(analysis.stats.counts.calculation, 1);
        assert_eq!(analysis.stats.counts.output, 1);

        let model = analysis.sheet("Model").unwrap();
        assert_eq!(
            model.classification_of("B1"),
            Some(Classification::Calculation)
        );
    }

    #[test]
    fn test_sheets_analyzed_in_workbook_order() {
        let workbook = two_sheet_workbook();
        let analysis = workbook.classify();

        let names: Vec<_> = analysis.sheets.iter().map(|a| a.sheet.as_str()).collect();
        assert_eq!(names, vec!["Inputs", "Model"]);
    }

    #[test]
    fn test_generated_sheets_skipped_by_default() {
        let mut workbook = two_sheet_workbook();
        let doc = workbook.add_worksheet_with_name("Documentation").unwrap();
        doc.set_cell_value("A1", "Overview").unwrap();

        let analysis = workbook.classify();

        assert_eq!(analysis.stats.sheets_analyzed, 2);
        assert!(analysis.sheet("Documentation").is_none());
    }

    #[test]
    fn test_custom_skip_sheets() {
        let workbook = two_sheet_workbook();
        let options = ClassificationOptions {
            skip_sheets: vec!["Inputs".to_string()],
        };

        let analysis = workbook.classify_with_options(&options);

        assert_eq!(analysis.stats.sheets_analyzed, 1);
        assert!(analysis.sheet("Inputs").is_none());
        assert!(analysis.sheet("Model").is_some());
    }

    #[test]
    fn test_diagnostics_aggregated() {
        let mut workbook = two_sheet_workbook();
        workbook
            .worksheet_by_name_mut("Model")
            .unwrap()
            .set_cell_formula("D1", "SUM(A1")
            .unwrap();

        let analysis = workbook.classify();

        assert_eq!(analysis.stats.diagnostics.len(), 1);
        assert_eq!(analysis.stats.diagnostics[0].reference, "D1");
        assert_eq!(analysis.stats.counts.other, 1);
    }

    #[test]
    fn test_empty_workbook() {
        let workbook = Workbook::empty();
        let analysis = workbook.classify();

        assert_eq!(analysis.stats.sheets_analyzed, 0);
        assert_eq!(analysis.stats.cells_classified, 0);
        assert!(analysis.sheets.is_empty());
    }
}
