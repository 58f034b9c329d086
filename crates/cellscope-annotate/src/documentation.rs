//! Documentation sheet generation

use cellscope_core::{Result, Style, Workbook};

use crate::summary::{SheetSample, SheetSummarizer};

/// Name of the generated documentation sheet
pub const DOCUMENTATION_SHEET: &str = "Documentation";

/// Name of the generated user guide sheet
pub const USER_GUIDE_SHEET: &str = "User Guide";

/// Build the Documentation sheet: an overview plus a per-sheet summary table
///
/// Each data sheet gets one summary row. A summarizer failure does not fail
/// the build; the failure text lands in the summary column instead.
/// Existing "Documentation" and "User Guide" sheets are treated as
/// generated artifacts: neither is summarized, and a previous Documentation
/// sheet is replaced in place.
pub fn build_documentation_sheet(
    workbook: &mut Workbook,
    summarizer: &dyn SheetSummarizer,
) -> Result<()> {
    // Collect samples and summaries before touching the workbook
    let mut summaries: Vec<(String, String)> = Vec::new();
    for sheet in workbook.worksheets() {
        if sheet.name() == DOCUMENTATION_SHEET || sheet.name() == USER_GUIDE_SHEET {
            continue;
        }
        let sample = SheetSample::from_worksheet(sheet);
        let summary = match summarizer.summarize(&sample) {
            Ok(text) => text,
            Err(e) => format!("Error generating summary: {e}"),
        };
        summaries.push((sheet.name().to_string(), summary));
    }

    if workbook.remove_worksheet_by_name(DOCUMENTATION_SHEET).is_some() {
        log::debug!("replacing existing {DOCUMENTATION_SHEET} sheet");
    }

    let doc = workbook.add_worksheet_with_name(DOCUMENTATION_SHEET)?;
    doc.append_row(["Overview"])?;
    doc.append_row([
        "This spreadsheet has been automatically analyzed to classify cells as inputs, calculations, and outputs.",
    ])?;
    doc.append_row([""])?;
    doc.append_row(["Tab Summary"])?;
    doc.append_row(["Sheet Name", "Summary"])?;

    for (sheet_name, summary) in summaries {
        doc.append_row([sheet_name, summary])?;
    }

    doc.set_cell_style("A1", Style::new().bold(true))?;
    doc.set_cell_style("A5", Style::new().bold(true))?;
    doc.set_cell_style("B5", Style::new().bold(true))?;

    Ok(())
}
