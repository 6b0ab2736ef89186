//! Exact four-coloring by backtracking search with forward checking
//!
//! Always finds a valid coloring when one exists. Variable selection follows
//! minimum-remaining-values with a most-constraining-variable tie-break;
//! values are tried in ascending numeric order for determinism. The search
//! runs over an explicit stack of decision frames instead of recursion, so
//! region count never threatens stack depth. The input graph is never
//! mutated; all search state is private to the call.

use crate::graph::RegionGraph;
use crate::graph::indexing::DenseLabels;
use crate::io::error::{MapError, Result};
use crate::solver::assignment::ColorAssignment;
use crate::solver::colorset::ColorSet;

/// One tentative decision in the backtracking search
///
/// `undo` records the `(neighbor, color)` domain removals performed for the
/// currently active color so they can be reversed on backtrack.
#[derive(Debug)]
struct Frame {
    vertex: usize,
    untried: ColorSet,
    active: Option<u8>,
    undo: Vec<(usize, u8)>,
}

/// Find a proper four-coloring of the graph
///
/// # Errors
///
/// Returns [`MapError::ColoringInfeasible`] when the search space is
/// exhausted without a valid assignment. The four-color theorem rules this
/// out for genuinely planar inputs, but upstream data quality is not
/// assumed here.
pub fn solve(graph: &RegionGraph) -> Result<ColorAssignment> {
    let labels = DenseLabels::from_graph(graph);
    let adjacency = labels.dense_adjacency(graph);
    let vertex_count = labels.len();

    let mut domains = vec![ColorSet::full(); vertex_count];
    let mut colors: Vec<Option<u8>> = vec![None; vertex_count];
    let mut stack: Vec<Frame> = Vec::with_capacity(vertex_count);

    loop {
        let Some(vertex) = select_vertex(&adjacency, &domains, &colors) else {
            // No uncolored vertex remains
            return Ok(collect_assignment(&labels, &colors));
        };

        let untried = domains.get(vertex).copied().unwrap_or_else(ColorSet::empty);
        stack.push(Frame {
            vertex,
            untried,
            active: None,
            undo: Vec::new(),
        });

        // Advance the deepest frame until some color survives forward
        // checking, popping exhausted frames along the way.
        loop {
            let Some(frame) = stack.last_mut() else {
                return Err(MapError::ColoringInfeasible {
                    regions: vertex_count,
                });
            };

            // Roll back the previous tentative color before trying the next
            if frame.active.take().is_some() {
                for &(neighbor, color) in &frame.undo {
                    if let Some(domain) = domains.get_mut(neighbor) {
                        domain.insert(color);
                    }
                }
                frame.undo.clear();
                if let Some(slot) = colors.get_mut(frame.vertex) {
                    *slot = None;
                }
            }

            let Some(color) = frame.untried.pop_first() else {
                // All colors failed for this vertex: propagate failure up
                stack.pop();
                continue;
            };

            frame.active = Some(color);
            if let Some(slot) = colors.get_mut(frame.vertex) {
                *slot = Some(color);
            }

            let mut dead_end = false;
            let neighbors = adjacency.get(frame.vertex).map_or(&[][..], Vec::as_slice);
            for &neighbor in neighbors {
                let uncolored = colors.get(neighbor).copied().flatten().is_none();
                if !uncolored {
                    continue;
                }
                if let Some(domain) = domains.get_mut(neighbor) {
                    if domain.contains(color) {
                        domain.remove(color);
                        frame.undo.push((neighbor, color));
                        if domain.is_empty() {
                            // Some neighbor just lost its last candidate
                            dead_end = true;
                        }
                    }
                }
            }

            if !dead_end {
                break;
            }
            // Dead end: stay in this frame, the loop head undoes the removals
        }
    }
}

// MRV selection with most-constraining-variable tie-break: fewest remaining
// candidates first, then highest degree among uncolored neighbors.
fn select_vertex(
    adjacency: &[Vec<usize>],
    domains: &[ColorSet],
    colors: &[Option<u8>],
) -> Option<usize> {
    let mut selected = None;
    let mut best_choices = usize::MAX;
    let mut best_degree = 0;

    for (vertex, slot) in colors.iter().enumerate() {
        if slot.is_some() {
            continue;
        }

        let choices = domains.get(vertex).map_or(0, ColorSet::count);
        let degree = adjacency.get(vertex).map_or(0, |neighbors| {
            neighbors
                .iter()
                .filter(|&&n| colors.get(n).copied().flatten().is_none())
                .count()
        });

        if choices < best_choices || (choices == best_choices && degree > best_degree) {
            best_choices = choices;
            best_degree = degree;
            selected = Some(vertex);
        }
    }

    selected
}

fn collect_assignment(labels: &DenseLabels, colors: &[Option<u8>]) -> ColorAssignment {
    let mut assignment = ColorAssignment::new();
    for (vertex, slot) in colors.iter().enumerate() {
        if let (Some(label), Some(color)) = (labels.label_of(vertex), *slot) {
            assignment.insert(label, color);
        }
    }
    assignment
}
