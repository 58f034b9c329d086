//! End-to-end tests for the classification pipeline (build -> classify -> inspect)

use pretty_assertions::assert_eq;

use cellscope::prelude::*;

/// Test classifying a small financial model with chained formulas
#[test]
fn test_classify_financial_model() {
    let mut wb = Workbook::empty();
    let sheet = wb.add_worksheet_with_name("Model").unwrap();

    // Hardcoded inputs
    sheet.set_cell_value("A1", 1000.0).unwrap();
    sheet.set_cell_value("A2", 0.05).unwrap();

    // Chained calculations: B1 feeds C1, C1 feeds D1
    sheet.set_cell_formula("B1", "=A1*A2").unwrap();
    sheet.set_cell_formula("C1", "=B1+A1").unwrap();
    sheet.set_cell_formula("D1", "=C1").unwrap();

    let analysis = wb.classify();
    let model = analysis.sheet("Model").unwrap();

    assert_eq!(
        model.classification_of("A1"),
        Some(Classification::InputHardcoded)
    );
    assert_eq!(
        model.classification_of("A2"),
        Some(Classification::InputHardcoded)
    );
    assert_eq!(
        model.classification_of("B1"),
        Some(Classification::Calculation)
    );
    assert_eq!(
        model.classification_of("C1"),
        Some(Classification::Calculation)
    );
    assert_eq!(model.classification_of("D1"), Some(Classification::Output));

    assert_eq!(analysis.stats.sheets_analyzed, 1);
    assert_eq!(analysis.stats.cells_classified, 5);
    assert_eq!(analysis.stats.counts.input_hardcoded, 2);
    assert_eq!(analysis.stats.counts.calculation, 2);
    assert_eq!(analysis.stats.counts.output, 1);
}

/// Test that text and boolean cells classify as hardcoded inputs while
/// empty cells stay unclassified
#[test]
fn test_text_and_boolean_inputs() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    sheet.set_cell_value("A1", "Scenario").unwrap();
    sheet.set_cell_value("B1", true).unwrap();
    sheet.set_cell_value("D4", 7.0).unwrap();

    let analysis = wb.classify();
    let sheet = analysis.sheet("Sheet1").unwrap();

    assert_eq!(
        sheet.classification_of("A1"),
        Some(Classification::InputHardcoded)
    );
    assert_eq!(
        sheet.classification_of("B1"),
        Some(Classification::InputHardcoded)
    );
    // C1 sits inside the used range but holds nothing
    assert_eq!(sheet.classification_of("C1"), None);
}

/// Test that bracketed formulas classify as external links without being
/// parsed, even when the rest of the formula is malformed
#[test]
fn test_external_links_detected_before_parsing() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    sheet
        .set_cell_formula("A1", "=[FY25.xlsx]Data!$B$2")
        .unwrap();
    sheet.set_cell_formula("A2", "=SUM([broken]").unwrap();

    let analysis = wb.classify();
    let sheet = analysis.sheet("Sheet1").unwrap();

    assert_eq!(
        sheet.classification_of("A1"),
        Some(Classification::InputExternalLink)
    );
    assert_eq!(
        sheet.classification_of("A2"),
        Some(Classification::InputExternalLink)
    );
    assert!(analysis.stats.diagnostics.is_empty());
}

/// Test that a formula that fails to tokenize classifies as Other and
/// surfaces a diagnostic
#[test]
fn test_unparseable_formula_becomes_other() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    sheet.set_cell_value("A1", 5.0).unwrap();
    sheet.set_cell_formula("D1", "=SUM(A1").unwrap();

    let analysis = wb.classify();
    let sheet = analysis.sheet("Sheet1").unwrap();

    assert_eq!(sheet.classification_of("D1"), Some(Classification::Other));
    assert_eq!(analysis.stats.diagnostics.len(), 1);
    assert_eq!(analysis.stats.diagnostics[0].reference, "D1");
    assert_eq!(analysis.stats.counts.other, 1);
}

/// Test that range references stay opaque: a formula covered only by a
/// range is still an output
#[test]
fn test_range_references_are_opaque() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    sheet.set_cell_formula("A1", "=NOW()").unwrap();
    sheet.set_cell_value("A2", 10.0).unwrap();
    sheet.set_cell_value("A3", 20.0).unwrap();
    sheet.set_cell_formula("B1", "=SUM(A1:A3)").unwrap();

    let analysis = wb.classify();
    let sheet = analysis.sheet("Sheet1").unwrap();

    // "A1:A3" never matches "A1", so A1 is not treated as referenced
    assert_eq!(sheet.classification_of("A1"), Some(Classification::Output));
    assert_eq!(sheet.classification_of("B1"), Some(Classification::Output));
}

/// Test every classification label as it appears in generated output
#[test]
fn test_classification_labels() {
    assert_eq!(Classification::InputHardcoded.label(), "Input (hardcoded)");
    assert_eq!(
        Classification::InputExternalLink.label(),
        "Input (external link)"
    );
    assert_eq!(Classification::Calculation.label(), "Calculation");
    assert_eq!(Classification::Output.label(), "Output");
    assert_eq!(Classification::Other.label(), "Other");
}

/// Test reading a CSV model from disk, classifying it, and saving it back
#[cfg(feature = "csv")]
#[test]
fn test_csv_file_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forecast.csv");
    std::fs::write(&path, "100,=A1*2\n=B1+A1,\n").unwrap();

    // The sheet takes its name from the file stem
    let wb = Workbook::open(&path).unwrap();
    assert_eq!(wb.sheet_names(), vec!["forecast"]);

    let analysis = wb.classify();
    let sheet = analysis.sheet("forecast").unwrap();
    assert_eq!(
        sheet.classification_of("A1"),
        Some(Classification::InputHardcoded)
    );
    assert_eq!(
        sheet.classification_of("B1"),
        Some(Classification::Calculation)
    );
    assert_eq!(sheet.classification_of("A2"), Some(Classification::Output));

    // Save and reload; formulas survive as text
    let out = dir.path().join("forecast-out.csv");
    wb.save(&out).unwrap();
    let reloaded = Workbook::open(&out).unwrap();
    assert_eq!(
        reloaded.worksheet(0).unwrap().get_formula("B1").unwrap(),
        Some("=A1*2")
    );
}
