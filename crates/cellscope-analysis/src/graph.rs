//! Cell dependency graph

use std::collections::{HashMap, HashSet};

/// Forward and reverse dependency edges between cells of one sheet
///
/// Nodes are plain strings: formula cells are keyed by their A1 reference,
/// and the tokens they depend on are stored as-is. A range token like
/// "A1:A10" is a single node; no attempt is made to relate it to the cells
/// it covers. The graph never evaluates anything and cycles are allowed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Formula cell reference → tokens it depends on
    forward: HashMap<String, HashSet<String>>,
    /// Token → formula cells that depend on it
    reverse: HashMap<String, HashSet<String>>,
}

impl DependencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `cell` depends on `token`
    pub fn add_dependency(&mut self, cell: &str, token: &str) {
        self.forward
            .entry(cell.to_string())
            .or_default()
            .insert(token.to_string());
        self.reverse
            .entry(token.to_string())
            .or_default()
            .insert(cell.to_string());
    }

    /// Record all of a formula cell's extracted references at once
    ///
    /// An empty set still registers `cell` as a formula node, so a formula
    /// with no operands (like `=NOW()`) can later be found in
    /// [`formula_cells`](Self::formula_cells).
    pub fn add_references(&mut self, cell: &str, references: HashSet<String>) {
        for token in &references {
            self.reverse
                .entry(token.clone())
                .or_default()
                .insert(cell.to_string());
        }
        self.forward.entry(cell.to_string()).or_default().extend(references);
    }

    /// Check whether any formula depends on this token
    ///
    /// This is an exact string lookup. A cell referenced only through a
    /// range token ("A1:A10") is not individually referenced.
    pub fn is_referenced(&self, token: &str) -> bool {
        self.reverse.contains_key(token)
    }

    /// Tokens the given formula cell depends on
    pub fn precedents_of(&self, cell: &str) -> impl Iterator<Item = &str> {
        self.forward
            .get(cell)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Formula cells that depend on the given token
    pub fn dependents_of(&self, token: &str) -> impl Iterator<Item = &str> {
        self.reverse
            .get(token)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// All formula cells recorded in the graph
    pub fn formula_cells(&self) -> impl Iterator<Item = &str> {
        self.forward.keys().map(String::as_str)
    }

    /// All tokens some formula depends on
    pub fn referenced_tokens(&self) -> impl Iterator<Item = &str> {
        self.reverse.keys().map(String::as_str)
    }

    /// Total number of forward edges
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(|set| set.len()).sum()
    }

    /// Check if the graph has no nodes at all
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_dependency() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("B1", "A1");

        assert!(graph.is_referenced("A1"));
        assert!(!graph.is_referenced("B1"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_references() {
        let mut graph = DependencyGraph::new();
        let refs: HashSet<String> = ["A1".to_string(), "A2".to_string()].into();
        graph.add_references("B1", refs);

        let mut precedents: Vec<_> = graph.precedents_of("B1").collect();
        precedents.sort();
        assert_eq!(precedents, vec!["A1", "A2"]);

        let dependents: Vec<_> = graph.dependents_of("A1").collect();
        assert_eq!(dependents, vec!["B1"]);
    }

    #[test]
    fn test_empty_references_still_registers_formula() {
        let mut graph = DependencyGraph::new();
        graph.add_references("C3", HashSet::new());

        let cells: Vec<_> = graph.formula_cells().collect();
        assert_eq!(cells, vec!["C3"]);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_range_tokens_are_opaque() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("B1", "A1:A10");

        assert!(graph.is_referenced("A1:A10"));
        // Member cells of the range are not individually referenced
        assert!(!graph.is_referenced("A1"));
        assert!(!graph.is_referenced("A5"));
    }

    #[test]
    fn test_cycles_are_allowed() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("A1", "B1");
        graph.add_dependency("B1", "A1");

        assert!(graph.is_referenced("A1"));
        assert!(graph.is_referenced("B1"));
    }

    #[test]
    fn test_shared_precedent() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("B1", "A1");
        graph.add_dependency("C1", "A1");

        let mut dependents: Vec<_> = graph.dependents_of("A1").collect();
        dependents.sort();
        assert_eq!(dependents, vec!["B1", "C1"]);
    }
}
