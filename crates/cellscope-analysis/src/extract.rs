//! Reference extraction from formula text

use std::collections::HashSet;

use crate::error::Result;
use crate::tokenizer::tokenize;

/// Check whether a formula references an external workbook
///
/// External references embed the source workbook in square brackets, as in
/// `=[Budget.xlsx]Sheet1!A1`. This is a plain character scan; external-link
/// formulas are classified directly and never tokenized.
pub fn is_external_link(formula: &str) -> bool {
    formula.contains('[') && formula.contains(']')
}

/// Extract the set of operand tokens a formula depends on
///
/// Operands come back as raw token text: cell references ("B2"), ranges
/// ("A1:A10"), sheet-qualified references, defined names, and literals
/// alike. Ranges stay whole, one entry per range, never expanded into
/// member cells. Duplicates collapse, so `=A1+A1` yields one entry.
pub fn extract_references(formula: &str) -> Result<HashSet<String>> {
    let tokens = tokenize(formula)?;
    Ok(tokens
        .into_iter()
        .filter(|t| t.is_operand())
        .map(|t| t.value)
        .collect())
}
