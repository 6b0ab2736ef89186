//! Randomized BFS four-coloring with in-place graph relaxation
//!
//! The primary, fast path: seed at the highest-degree region, propagate
//! colors breadth-first with a shuffled palette, and when a region runs out
//! of allowed colors, remove one edge to a colored neighbor and retry. A
//! repair pass sweeps up regions the BFS never reached. Because relaxation
//! permanently alters the working copy's topology, a returned assignment is
//! only guaranteed proper for a subgraph of the original; callers needing a
//! strict guarantee use [`crate::solver::exact`]. The caller's graph is
//! never touched: all mutation happens on a [`WorkingGraph`].

use crate::graph::RegionGraph;
use crate::graph::indexing::DenseLabels;
use crate::io::configuration::{COLOR_COUNT, REPAIR_RETRY_LIMIT};
use crate::solver::assignment::ColorAssignment;
use crate::solver::colorset::ColorSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Private, mutable working copy of a region graph
///
/// Owns a dense-index rendition of the adjacency so relaxation can edit
/// topology without the caller's [`RegionGraph`] ever entering a mutating
/// code path. Created fresh per attempt and discarded afterwards.
#[derive(Debug, Clone)]
pub struct WorkingGraph {
    labels: DenseLabels,
    adjacency: Vec<Vec<usize>>,
}

impl WorkingGraph {
    /// Clone a graph into a dense working copy
    pub fn from_graph(graph: &RegionGraph) -> Self {
        let labels = DenseLabels::from_graph(graph);
        let adjacency = labels.dense_adjacency(graph);
        Self { labels, adjacency }
    }

    /// Number of regions in the copy
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the copy has no regions
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges currently in the copy
    pub fn edge_count(&self) -> usize {
        let endpoint_sum: usize = self.adjacency.iter().map(Vec::len).sum();
        endpoint_sum / 2
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    // Symmetric removal in the working copy only
    fn remove_edge(&mut self, a: usize, b: usize) {
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.retain(|&n| n != b);
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.retain(|&n| n != a);
        }
    }

    // Seed selection: first vertex of maximum degree
    fn max_degree_vertex(&self) -> Option<usize> {
        let mut selected = None;
        let mut max_degree = 0;
        for (vertex, neighbors) in self.adjacency.iter().enumerate() {
            if selected.is_none() || neighbors.len() > max_degree {
                max_degree = neighbors.len();
                selected = Some(vertex);
            }
        }
        selected
    }
}

/// Attempt a four-coloring of the working copy, relaxing edges when stuck
///
/// Returns the assignment only if every region ended up colored; a `None`
/// means the attempt failed and the working copy should be discarded.
pub fn color_with_relaxation(
    working: &mut WorkingGraph,
    rng: &mut StdRng,
) -> Option<ColorAssignment> {
    let vertex_count = working.len();
    let mut colors: Vec<Option<u8>> = vec![None; vertex_count];
    let mut frequency = [0usize; COLOR_COUNT];

    // An empty map has nothing to violate
    let Some(root) = working.max_degree_vertex() else {
        return Some(ColorAssignment::new());
    };

    let mut visited = vec![false; vertex_count];
    let mut queue = VecDeque::new();

    assign(&mut colors, &mut frequency, root, 0);
    if let Some(flag) = visited.get_mut(root) {
        *flag = true;
    }
    queue.push_back(root);

    // Breadth-first propagation with randomized tie-breaking
    while let Some(current) = queue.pop_front() {
        if colors.get(current).copied().flatten().is_none() {
            let used = excluded_colors(working, &colors, current);

            let mut palette: [u8; COLOR_COUNT] = [0, 1, 2, 3];
            palette.shuffle(rng);

            match palette.iter().copied().find(|&c| !used.contains(c)) {
                Some(color) => assign(&mut colors, &mut frequency, current, color),
                None => {
                    // All four colors excluded: relax one conflicting edge
                    // and re-process this region
                    relax_one_edge(working, &colors, current);
                    queue.push_back(current);
                    continue;
                }
            }
        }

        for &neighbor in working.neighbors(current) {
            if let Some(flag) = visited.get_mut(neighbor) {
                if !*flag {
                    *flag = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }

    repair_pass(working, &mut colors, &mut frequency);

    // The attempt succeeds only with a total coloring
    if colors.iter().any(Option::is_none) {
        return None;
    }

    let mut assignment = ColorAssignment::new();
    for (vertex, slot) in colors.iter().enumerate() {
        if let (Some(label), Some(color)) = (working.labels.label_of(vertex), *slot) {
            assignment.insert(label, color);
        }
    }
    Some(assignment)
}

// Worklist sweep for regions the BFS never reached, e.g. ones only
// reachable through a removed edge. Each entry carries a color cursor so a
// re-pushed region resumes at the next candidate color.
fn repair_pass(working: &mut WorkingGraph, colors: &mut [Option<u8>], frequency: &mut [usize]) {
    let mut worklist: Vec<(usize, u8)> = colors
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_none())
        .map(|(vertex, _)| (vertex, 0))
        .collect();
    let mut retries = vec![0u8; colors.len()];

    while let Some((current, cursor)) = worklist.pop() {
        if colors.get(current).copied().flatten().is_some() {
            continue;
        }

        let used = excluded_colors(working, colors, current);

        if !used.contains(cursor) {
            assign(colors, frequency, current, cursor);
            for &neighbor in working.neighbors(current) {
                if colors.get(neighbor).copied().flatten().is_none() {
                    worklist.push((neighbor, 0));
                }
            }
        } else if usize::from(cursor) + 1 < COLOR_COUNT {
            worklist.push((current, cursor + 1));
        } else {
            let attempts = retries.get_mut(current).map_or(0, |count| {
                *count += 1;
                *count
            });

            if attempts > REPAIR_RETRY_LIMIT {
                // Persistent conflict: relax an edge and start the cursor over
                relax_one_edge(working, colors, current);
                worklist.push((current, 0));
            } else {
                // Load-balancing fallback: least-used color not excluded now
                let fallback = (0..COLOR_COUNT as u8)
                    .filter(|&c| !used.contains(c))
                    .min_by_key(|&c| frequency.get(usize::from(c)).copied().unwrap_or(0));
                if let Some(color) = fallback {
                    assign(colors, frequency, current, color);
                } else {
                    worklist.push((current, 0));
                }
            }
        }
    }
}

fn excluded_colors(working: &WorkingGraph, colors: &[Option<u8>], vertex: usize) -> ColorSet {
    let mut used = ColorSet::empty();
    for &neighbor in working.neighbors(vertex) {
        if let Some(color) = colors.get(neighbor).copied().flatten() {
            used.insert(color);
        }
    }
    used
}

// Remove one edge between the vertex and its first colored neighbor
fn relax_one_edge(working: &mut WorkingGraph, colors: &[Option<u8>], vertex: usize) {
    let conflicting = working
        .neighbors(vertex)
        .iter()
        .copied()
        .find(|&n| colors.get(n).copied().flatten().is_some());

    if let Some(neighbor) = conflicting {
        working.remove_edge(vertex, neighbor);
    }
}

fn assign(colors: &mut [Option<u8>], frequency: &mut [usize], vertex: usize, color: u8) {
    if let Some(slot) = colors.get_mut(vertex) {
        *slot = Some(color);
    }
    if let Some(count) = frequency.get_mut(usize::from(color)) {
        *count += 1;
    }
}
