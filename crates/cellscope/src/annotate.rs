//! Workbook-level annotation

use cellscope_annotate::{
    build_documentation_sheet, build_user_guide_sheet, paint_sheet, AnnotateOptions,
    SheetSummarizer,
};
use cellscope_core::{Error, Result, Workbook};

use crate::classification::WorkbookAnalysis;

/// Extension trait adding annotation to [`Workbook`]
pub trait WorkbookAnnotateExt {
    /// Annotate with default options
    fn annotate(
        &mut self,
        analysis: &WorkbookAnalysis,
        summarizer: &dyn SheetSummarizer,
    ) -> Result<()>;

    /// Paint classification colors on every analyzed sheet, then add the
    /// Documentation and User Guide sheets
    ///
    /// The analysis must come from this workbook: an analysis naming a
    /// sheet the workbook does not have fails with
    /// [`Error::SheetNotFound`].
    fn annotate_with_options(
        &mut self,
        analysis: &WorkbookAnalysis,
        summarizer: &dyn SheetSummarizer,
        options: &AnnotateOptions,
    ) -> Result<()>;
}

impl WorkbookAnnotateExt for Workbook {
    fn annotate(
        &mut self,
        analysis: &WorkbookAnalysis,
        summarizer: &dyn SheetSummarizer,
    ) -> Result<()> {
        self.annotate_with_options(analysis, summarizer, &AnnotateOptions::default())
    }

    fn annotate_with_options(
        &mut self,
        analysis: &WorkbookAnalysis,
        summarizer: &dyn SheetSummarizer,
        options: &AnnotateOptions,
    ) -> Result<()> {
        for sheet_analysis in &analysis.sheets {
            let sheet = self
                .worksheet_by_name_mut(&sheet_analysis.sheet)
                .ok_or_else(|| Error::SheetNotFound(sheet_analysis.sheet.clone()))?;
            paint_sheet(sheet, sheet_analysis, options)?;
        }

        build_documentation_sheet(self, summarizer)?;
        build_user_guide_sheet(self, &analysis.sheets)?;

        Ok(())
    }
}
