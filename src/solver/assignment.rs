//! Region label to color index mappings produced by the solvers

use crate::graph::RegionGraph;
use std::collections::BTreeMap;

/// Mapping from region label to a color index in `0..4`
///
/// Total over a graph's vertex set once a solver reports success. Owned by
/// the caller after solving; the downstream painter reads it to map indices
/// onto the fixed palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    colors: BTreeMap<i32, u8>,
}

impl ColorAssignment {
    /// Create an empty assignment
    pub const fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Record a region's color, replacing any previous entry
    pub fn insert(&mut self, label: i32, color: u8) {
        self.colors.insert(label, color);
    }

    /// Color assigned to a region, if any
    pub fn color_of(&self, label: i32) -> Option<u8> {
        self.colors.get(&label).copied()
    }

    /// Number of colored regions
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no region has a color
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate `(label, color)` pairs in ascending label order
    pub fn iter(&self) -> impl Iterator<Item = (i32, u8)> + '_ {
        self.colors.iter().map(|(&label, &color)| (label, color))
    }

    /// Whether every vertex of the graph has a color
    pub fn is_total_for(&self, graph: &RegionGraph) -> bool {
        graph.labels().all(|label| self.colors.contains_key(&label))
    }

    /// Whether the assignment is a proper coloring of the graph
    ///
    /// Total over the vertex set and no edge joins two same-colored regions.
    pub fn is_proper_for(&self, graph: &RegionGraph) -> bool {
        if !self.is_total_for(graph) {
            return false;
        }

        graph.iter().all(|(label, neighbors)| {
            let own = self.color_of(label);
            neighbors.iter().all(|&n| self.color_of(n) != own)
        })
    }
}
