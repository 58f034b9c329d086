//! User guide sheet generation

use cellscope_analysis::SheetAnalysis;
use cellscope_core::{Result, Style, Workbook};

use crate::documentation::{DOCUMENTATION_SHEET, USER_GUIDE_SHEET};

/// Build the User Guide sheet listing every input cell
///
/// One row per input-classified cell: cell reference, input type label,
/// and sheet name. Sheets appear in the order given; within a sheet,
/// references are ordered lexicographically. An existing "User Guide"
/// sheet is replaced, and analyses of the generated sheets are ignored.
pub fn build_user_guide_sheet(
    workbook: &mut Workbook,
    analyses: &[SheetAnalysis],
) -> Result<()> {
    if workbook.remove_worksheet_by_name(USER_GUIDE_SHEET).is_some() {
        log::debug!("replacing existing {USER_GUIDE_SHEET} sheet");
    }

    let guide = workbook.add_worksheet_with_name(USER_GUIDE_SHEET)?;
    guide.append_row(["User Guide"])?;
    guide.append_row([
        "This sheet lists cells identified as inputs that may need to be updated manually.",
    ])?;
    guide.append_row([""])?;
    guide.append_row(["Cell Reference", "Input Type", "Sheet"])?;

    for analysis in analyses {
        if analysis.sheet == DOCUMENTATION_SHEET || analysis.sheet == USER_GUIDE_SHEET {
            continue;
        }
        for (reference, classification) in &analysis.classifications {
            if classification.is_input() {
                guide.append_row([
                    reference.as_str(),
                    classification.label(),
                    analysis.sheet.as_str(),
                ])?;
            }
        }
    }

    guide.set_cell_style("A1", Style::new().bold(true))?;
    guide.set_cell_style("A4", Style::new().bold(true))?;
    guide.set_cell_style("B4", Style::new().bold(true))?;
    guide.set_cell_style("C4", Style::new().bold(true))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellscope_analysis::classify_sheet;
    use pretty_assertions::assert_eq;
    use cellscope_core::CellValue;

    fn guide_value(workbook: &Workbook, address: &str) -> CellValue {
        workbook
            .worksheet_by_name(USER_GUIDE_SHEET)
            .unwrap()
            .get_value(address)
            .unwrap()
    }

    #[test]
    fn test_guide_layout() {
        let mut workbook = Workbook::empty();
        let sheet = workbook.add_worksheet_with_name("Model").unwrap();
        sheet.set_cell_value("A1", 5.0).unwrap();
        sheet.set_cell_formula("B1", "A1*2").unwrap();

        let analyses = vec![classify_sheet(workbook.worksheet(0).unwrap())];
        build_user_guide_sheet(&mut workbook, &analyses).unwrap();

        assert_eq!(guide_value(&workbook, "A1"), CellValue::string("User Guide"));
        assert_eq!(
            guide_value(&workbook, "A2"),
            CellValue::string(
                "This sheet lists cells identified as inputs that may need to be updated manually."
            )
        );
        assert_eq!(
            guide_value(&workbook, "A4"),
            CellValue::string("Cell Reference")
        );
        assert_eq!(guide_value(&workbook, "B4"), CellValue::string("Input Type"));
        assert_eq!(guide_value(&workbook, "C4"), CellValue::string("Sheet"));

        // The single input cell
        assert_eq!(guide_value(&workbook, "A5"), CellValue::string("A1"));
        assert_eq!(
            guide_value(&workbook, "B5"),
            CellValue::string("Input (hardcoded)")
        );
        assert_eq!(guide_value(&workbook, "C5"), CellValue::string("Model"));
    }

    #[test]
    fn test_only_inputs_listed() {
        let mut workbook = Workbook::empty();
        let sheet = workbook.add_worksheet_with_name("Calc").unwrap();
        sheet.set_cell_value("A1", 1.0).unwrap();
        sheet.set_cell_formula("B1", "A1+1").unwrap();
        sheet.set_cell_formula("C1", "B1+1").unwrap();
        sheet
            .set_cell_formula("D1", "[Ext.xlsx]Sheet1!A1")
            .unwrap();

        let analyses = vec![classify_sheet(workbook.worksheet(0).unwrap())];
        build_user_guide_sheet(&mut workbook, &analyses).unwrap();

        // A1 (hardcoded) and D1 (external link), in reference order
        assert_eq!(guide_value(&workbook, "A5"), CellValue::string("A1"));
        assert_eq!(guide_value(&workbook, "A6"), CellValue::string("D1"));
        assert_eq!(
            guide_value(&workbook, "B6"),
            CellValue::string("Input (external link)")
        );

        // No further rows
        let guide = workbook.worksheet_by_name(USER_GUIDE_SHEET).unwrap();
        assert_eq!(guide.used_range().unwrap().end.row, 5);
    }

    #[test]
    fn test_multiple_sheets_in_order() {
        let mut workbook = Workbook::empty();
        let first = workbook.add_worksheet_with_name("First").unwrap();
        first.set_cell_value("A1", 1.0).unwrap();
        let second = workbook.add_worksheet_with_name("Second").unwrap();
        second.set_cell_value("B2", 2.0).unwrap();

        let analyses = vec![
            classify_sheet(workbook.worksheet(0).unwrap()),
            classify_sheet(workbook.worksheet(1).unwrap()),
        ];
        build_user_guide_sheet(&mut workbook, &analyses).unwrap();

        assert_eq!(guide_value(&workbook, "C5"), CellValue::string("First"));
        assert_eq!(guide_value(&workbook, "A6"), CellValue::string("B2"));
        assert_eq!(guide_value(&workbook, "C6"), CellValue::string("Second"));
    }

    #[test]
    fn test_existing_guide_replaced() {
        let mut workbook = Workbook::empty();
        workbook.add_worksheet_with_name("Data").unwrap();
        workbook
            .add_worksheet_with_name(USER_GUIDE_SHEET)
            .unwrap();

        build_user_guide_sheet(&mut workbook, &[]).unwrap();

        assert_eq!(workbook.sheet_count(), 2);
        assert_eq!(guide_value(&workbook, "A1"), CellValue::string("User Guide"));
    }
}
