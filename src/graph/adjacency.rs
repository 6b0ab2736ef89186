//! Region-adjacency graph derived from a segmented label raster
//!
//! Vertices are region labels, edges connect regions whose pixels touch under
//! 8-connectivity. Ordered containers keep construction deterministic for a
//! given raster.

use ndarray::Array2;
use num_traits::PrimInt;
use std::collections::{BTreeMap, BTreeSet};

/// Pixel offsets for the 8-connected neighborhood
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

/// Adjacency graph over segmented-region labels
///
/// Invariants maintained by every mutating operation:
/// - symmetric: `b ∈ neighbors(a)` iff `a ∈ neighbors(b)`
/// - irreflexive: no label neighbors itself
/// - every tracked label has an entry, even with no neighbors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionGraph {
    adjacency: BTreeMap<i32, BTreeSet<i32>>,
}

impl RegionGraph {
    /// Create an empty graph
    pub const fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Build the adjacency graph from a labeled raster
    ///
    /// Every pixel with a valid label (positive and not the boundary
    /// sentinel) contributes an edge to each 8-connected neighbor pixel
    /// carrying a different valid label. Labels that never touch another
    /// region still appear as isolated vertices. A final pass drops any
    /// neighbor reference that is not itself a tracked vertex.
    pub fn from_labels<T: PrimInt>(markers: &Array2<T>, boundary: T) -> Self {
        let mut graph = Self::new();
        let boundary = boundary.to_i32().unwrap_or(0);
        let (rows, cols) = markers.dim();

        for ((row, col), &value) in markers.indexed_iter() {
            let Some(label) = valid_label(value, boundary) else {
                continue;
            };

            // Isolated regions must still become vertices
            graph.adjacency.entry(label).or_default();

            for (dr, dc) in NEIGHBOR_OFFSETS {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                    continue;
                }

                let neighbor = markers
                    .get((nr as usize, nc as usize))
                    .copied()
                    .and_then(|v| valid_label(v, boundary));

                if let Some(other) = neighbor {
                    if other != label {
                        graph.insert_edge(label, other);
                    }
                }
            }
        }

        graph.drop_untracked_neighbors();
        graph
    }

    /// Insert a symmetric edge, creating vertex entries as needed
    ///
    /// Self-loops are ignored to preserve irreflexivity.
    pub fn insert_edge(&mut self, a: i32, b: i32) {
        if a == b {
            return;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Remove a symmetric edge if present
    pub fn remove_edge(&mut self, a: i32, b: i32) {
        if let Some(set) = self.adjacency.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
    }

    /// Insert an isolated vertex, keeping any existing neighbor set
    pub fn insert_vertex(&mut self, label: i32) {
        self.adjacency.entry(label).or_default();
    }

    /// Neighbor set of a label, if the label is a tracked vertex
    pub fn neighbors(&self, label: i32) -> Option<&BTreeSet<i32>> {
        self.adjacency.get(&label)
    }

    /// Iterate over tracked labels in ascending order
    pub fn labels(&self) -> impl Iterator<Item = i32> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterate over `(label, neighbor set)` pairs in ascending label order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &BTreeSet<i32>)> {
        self.adjacency.iter().map(|(&label, set)| (label, set))
    }

    /// Number of tracked vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        let endpoint_sum: usize = self.adjacency.values().map(BTreeSet::len).sum();
        endpoint_sum / 2
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // Defensive consistency filter: an edge endpoint that never became a
    // vertex would otherwise leak an untracked label into solver state.
    fn drop_untracked_neighbors(&mut self) {
        let tracked: BTreeSet<i32> = self.adjacency.keys().copied().collect();
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| tracked.contains(n));
        }
    }
}

// A label is a vertex only when positive and distinct from the sentinel
fn valid_label<T: PrimInt>(value: T, boundary: i32) -> Option<i32> {
    let label = value.to_i32()?;
    (label > 0 && label != boundary).then_some(label)
}
