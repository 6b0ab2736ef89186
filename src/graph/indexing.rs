//! Label to dense-index translation built once per solver invocation
//!
//! Region labels are sparse, non-contiguous positive integers. Solvers
//! translate them into dense indices up front so their inner loops run over
//! plain vectors instead of associative lookups, and translate back to
//! labels only at the result boundary.

use crate::graph::RegionGraph;
use std::collections::HashMap;

/// Bidirectional label↔index table over a graph's vertex set
#[derive(Debug, Clone)]
pub struct DenseLabels {
    labels: Vec<i32>,
    indices: HashMap<i32, usize>,
}

impl DenseLabels {
    /// Build the table from a graph, assigning indices in ascending label order
    pub fn from_graph(graph: &RegionGraph) -> Self {
        let labels: Vec<i32> = graph.labels().collect();
        let indices = labels
            .iter()
            .enumerate()
            .map(|(index, &label)| (label, index))
            .collect();

        Self { labels, indices }
    }

    /// Number of tracked labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Dense index of a label, if tracked
    pub fn index_of(&self, label: i32) -> Option<usize> {
        self.indices.get(&label).copied()
    }

    /// Label at a dense index, if in range
    pub fn label_of(&self, index: usize) -> Option<i32> {
        self.labels.get(index).copied()
    }

    /// Translate a graph's adjacency into index-based neighbor vectors
    ///
    /// Neighbor references to labels missing from the table are dropped, so
    /// the output is always self-consistent.
    pub fn dense_adjacency(&self, graph: &RegionGraph) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.len()];

        for (label, neighbors) in graph.iter() {
            let Some(index) = self.index_of(label) else {
                continue;
            };
            let dense: Vec<usize> = neighbors
                .iter()
                .filter_map(|&n| self.index_of(n))
                .collect();
            if let Some(slot) = adjacency.get_mut(index) {
                *slot = dense;
            }
        }

        adjacency
    }
}
