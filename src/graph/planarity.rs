//! Advisory planarity checks applied before coloring is attempted
//!
//! The primary check is the Euler-characteristic formula carried over from
//! the original pipeline. Deriving the face count from the same formula it
//! is then substituted into makes the check an algebraic identity: it
//! accepts every graph, including deliberately non-planar ones. The behavior
//! is kept for compatibility and documented here rather than silently fixed;
//! [`exceeds_edge_bound`] offers a genuine (necessary, not sufficient)
//! rejection test for callers that want one.

use crate::graph::RegionGraph;

/// Euler-characteristic planarity check
///
/// Computes `V`, `E`, derives `F = 2 − V + E` assuming a connected
/// embedding, and verifies `V − E + F = 2`. Because `F` is derived from the
/// identity being checked, this returns `true` for every input; it exists
/// as an "always trust upstream" placeholder and is advisory only.
pub fn satisfies_euler_formula(graph: &RegionGraph) -> bool {
    let vertices = graph.vertex_count() as i64;
    let edges = graph.edge_count() as i64;
    let faces = 2 - vertices + edges;

    vertices - edges + faces == 2
}

/// Edge-density planarity bound
///
/// A simple planar graph on `V ≥ 3` vertices has at most `3V − 6` edges.
/// Returns `true` when the graph violates that bound and therefore cannot
/// be planar. A `false` result proves nothing: sparse non-planar graphs
/// pass. Used only to warn; the coloring pipeline never gates on it.
pub fn exceeds_edge_bound(graph: &RegionGraph) -> bool {
    let vertices = graph.vertex_count();
    if vertices < 3 {
        return false;
    }

    graph.edge_count() > 3 * vertices - 6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_graph(n: i32) -> RegionGraph {
        let mut graph = RegionGraph::new();
        for a in 1..=n {
            graph.insert_vertex(a);
            for b in (a + 1)..=n {
                graph.insert_edge(a, b);
            }
        }
        graph
    }

    #[test]
    fn euler_check_accepts_everything() {
        // Documented tautology: even K5 passes
        assert!(satisfies_euler_formula(&RegionGraph::new()));
        assert!(satisfies_euler_formula(&complete_graph(4)));
        assert!(satisfies_euler_formula(&complete_graph(5)));
    }

    #[test]
    fn edge_bound_flags_dense_graphs() {
        // K4 has 6 edges = 3*4-6, right at the bound; K5 has 10 > 9
        assert!(!exceeds_edge_bound(&complete_graph(4)));
        assert!(exceeds_edge_bound(&complete_graph(5)));
    }
}
