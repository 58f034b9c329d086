//! Applying classification colors to cells

use cellscope_analysis::SheetAnalysis;
use cellscope_core::{CellAddress, Color, FillStyle, Result, Worksheet};

use crate::colors::ColorScheme;

/// Options for annotating a workbook
#[derive(Debug, Clone, Default)]
pub struct AnnotateOptions {
    /// Colors applied per classification
    pub colors: ColorScheme,
    /// Also fill unclassified cells in the used range with the default
    /// color (default: false, leaving them unpainted)
    pub paint_empty_cells: bool,
}

/// Apply classification fill colors to a sheet's cells
///
/// Only the fill changes; other style attributes on a cell survive.
/// Returns the number of cells painted. Painting is idempotent: repainting
/// with the same analysis and options changes nothing.
pub fn paint_sheet(
    sheet: &mut Worksheet,
    analysis: &SheetAnalysis,
    options: &AnnotateOptions,
) -> Result<usize> {
    let mut painted = 0;

    if options.paint_empty_cells {
        let Some(range) = sheet.used_range() else {
            return Ok(0);
        };
        for addr in range.cells() {
            let reference = addr.to_a1_string();
            let color = match analysis.classification_of(&reference) {
                Some(classification) => options.colors.color_for(classification),
                None => options.colors.default,
            };
            set_fill(sheet, addr.row, addr.col, color)?;
            painted += 1;
        }
    } else {
        for (reference, classification) in &analysis.classifications {
            let color = options.colors.color_for(*classification);
            let addr = CellAddress::parse(reference)?;
            set_fill(sheet, addr.row, addr.col, color)?;
            painted += 1;
        }
    }

    Ok(painted)
}

fn set_fill(sheet: &mut Worksheet, row: u32, col: u16, color: Color) -> Result<()> {
    let mut style = sheet.cell_style_at(row, col).clone();
    style.fill = FillStyle::solid(color);
    sheet.set_cell_style_at(row, col, style)
}
