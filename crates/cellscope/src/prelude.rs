//! Prelude module - common imports for cellscope users
//!
//! ```rust
//! use cellscope::prelude::*;
//! ```

pub use crate::{
    CellAddress,
    CellError,
    CellRange,
    // Cell types
    CellValue,
    // Analysis types
    Classification,
    ClassificationCounts,
    // Classification types
    ClassificationOptions,
    ClassificationStats,

    Color,
    DependencyGraph,

    // Error types
    Error,
    FillStyle,
    Result,
    SheetAnalysis,

    // Style types
    Style,
    // Main types
    Workbook,
    WorkbookAnalysis,
    // Extension traits
    WorkbookClassificationExt,
    Worksheet,
};

// Annotation types
#[cfg(feature = "annotate")]
pub use crate::{
    AnnotateOptions, ColorScheme, SheetSummarizer, StaticSummarizer, UnavailableSummarizer,
    WorkbookAnnotateExt,
};

// I/O types
#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, WorkbookExt};
