//! Cell classification
//!
//! Classifies every populated cell of a worksheet by its role in the
//! calculation flow, using only the structure of formula text. Nothing is
//! evaluated, so classification works the same on a workbook with stale or
//! missing results.

use std::collections::BTreeMap;
use std::fmt;

use cellscope_core::Worksheet;

use crate::extract::{extract_references, is_external_link};
use crate::graph::DependencyGraph;

/// The role a cell plays in a sheet's calculation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Classification {
    /// A literal value typed into the cell
    #[cfg_attr(feature = "serde", serde(rename = "Input (hardcoded)"))]
    InputHardcoded,
    /// A formula pulling data from another workbook
    #[cfg_attr(feature = "serde", serde(rename = "Input (external link)"))]
    InputExternalLink,
    /// A formula whose result other formulas consume
    Calculation,
    /// A formula no other cell depends on
    Output,
    /// Anything else, including formulas that failed to tokenize
    Other,
}

impl Classification {
    /// Human-readable label, as used in reports and the user guide
    pub fn label(&self) -> &'static str {
        match self {
            Classification::InputHardcoded => "Input (hardcoded)",
            Classification::InputExternalLink => "Input (external link)",
            Classification::Calculation => "Calculation",
            Classification::Output => "Output",
            Classification::Other => "Other",
        }
    }

    /// Check if this is one of the two input classifications
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Classification::InputHardcoded | Classification::InputExternalLink
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A formula the tokenizer could not make sense of
///
/// The cell still gets classified (as [`Classification::Other`]); the
/// diagnostic records why.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// A1 reference of the offending cell
    pub reference: String,
    /// What went wrong
    pub message: String,
}

/// Cell counts per classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassificationCounts {
    pub input_hardcoded: usize,
    pub input_external_link: usize,
    pub calculation: usize,
    pub output: usize,
    pub other: usize,
}

impl ClassificationCounts {
    fn record(&mut self, classification: Classification) {
        match classification {
            Classification::InputHardcoded => self.input_hardcoded += 1,
            Classification::InputExternalLink => self.input_external_link += 1,
            Classification::Calculation => self.calculation += 1,
            Classification::Output => self.output += 1,
            Classification::Other => self.other += 1,
        }
    }

    /// Total number of classified cells
    pub fn total(&self) -> usize {
        self.input_hardcoded + self.input_external_link + self.calculation + self.output + self.other
    }

    /// Merge another set of counts into this one
    pub fn merge(&mut self, other: &ClassificationCounts) {
        self.input_hardcoded += other.input_hardcoded;
        self.input_external_link += other.input_external_link;
        self.calculation += other.calculation;
        self.output += other.output;
        self.other += other.other;
    }
}

/// The result of classifying one worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetAnalysis {
    /// Name of the analyzed sheet
    pub sheet: String,
    /// Classification per A1 cell reference, ordered by reference
    pub classifications: BTreeMap<String, Classification>,
    /// Dependency graph built from the sheet's formulas
    #[cfg_attr(feature = "serde", serde(skip))]
    pub graph: DependencyGraph,
    /// Formulas that failed to tokenize
    pub diagnostics: Vec<Diagnostic>,
}

impl SheetAnalysis {
    /// Look up the classification of a cell by A1 reference
    pub fn classification_of(&self, reference: &str) -> Option<Classification> {
        self.classifications.get(reference).copied()
    }

    /// Count classified cells per classification
    pub fn counts(&self) -> ClassificationCounts {
        let mut counts = ClassificationCounts::default();
        for classification in self.classifications.values() {
            counts.record(*classification);
        }
        counts
    }
}

/// Classify every populated cell of a worksheet
///
/// The first pass classifies hardcoded values and external-link formulas
/// directly, and collects dependency edges from every other formula. The
/// second pass splits the remaining formulas: a formula some other formula
/// depends on is a [`Classification::Calculation`], one nothing depends on
/// is a [`Classification::Output`].
///
/// Empty cells are never classified. The result is deterministic for a
/// given sheet, and re-running it on the same sheet changes nothing.
pub fn classify_sheet(sheet: &Worksheet) -> SheetAnalysis {
    let mut classifications = BTreeMap::new();
    let mut graph = DependencyGraph::new();
    let mut diagnostics = Vec::new();

    // First pass: hardcoded inputs, external links, dependency edges
    for (addr, cell) in sheet.iter_cells() {
        let reference = addr.to_a1_string();

        if let Some(formula) = cell.value.formula_text() {
            if is_external_link(formula) {
                classifications.insert(reference, Classification::InputExternalLink);
            } else {
                match extract_references(formula) {
                    Ok(references) => graph.add_references(&reference, references),
                    Err(err) => {
                        log::warn!("{}!{}: {}", sheet.name(), reference, err);
                        diagnostics.push(Diagnostic {
                            reference: reference.clone(),
                            message: err.to_string(),
                        });
                        classifications.insert(reference, Classification::Other);
                    }
                }
            }
        } else if !cell.value.is_empty() {
            classifications.insert(reference, Classification::InputHardcoded);
        }
    }

    // Second pass: formulas someone depends on are calculations, the rest
    // are outputs
    for (addr, cell) in sheet.iter_cells() {
        let reference = addr.to_a1_string();
        if classifications.contains_key(&reference) {
            continue;
        }

        if cell.value.is_formula() {
            let classification = if graph.is_referenced(&reference) {
                Classification::Calculation
            } else {
                Classification::Output
            };
            classifications.insert(reference, classification);
        } else if !cell.value.is_empty() {
            classifications.insert(reference, Classification::Other);
        }
    }

    log::debug!(
        "{}: classified {} cells, {} dependency edges",
        sheet.name(),
        classifications.len(),
        graph.edge_count()
    );

    SheetAnalysis {
        sheet: sheet.name().to_string(),
        classifications,
        graph,
        diagnostics,
    }
}
