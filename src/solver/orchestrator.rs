//! Bounded-retry driver for the heuristic solver
//!
//! The heuristic solver's correctness is not provable once relaxation has
//! fired, so reliability is approximated empirically: independent attempts
//! from a pristine working copy with fresh randomness, up to a fixed bound.
//! There is no automatic escalation to the exact solver; composing the two
//! is a caller-level decision.

use crate::graph::RegionGraph;
use crate::io::error::{MapError, Result};
use crate::solver::assignment::ColorAssignment;
use crate::solver::heuristic::{self, WorkingGraph};
use rand::rngs::StdRng;

/// Successful coloring plus the number of attempts it took
#[derive(Debug, Clone)]
pub struct ColoringOutcome {
    /// The total color assignment produced by the winning attempt
    pub assignment: ColorAssignment,
    /// 1-based attempt count at which the heuristic succeeded
    pub attempts: usize,
}

/// Run the heuristic solver over fresh working copies until one succeeds
///
/// Each attempt clones `graph` into a private [`WorkingGraph`]; the caller's
/// graph is never mutated, and failed attempts leave no partial state
/// behind. An attempt only counts as a success when its assignment is a
/// proper coloring of the original graph: a coloring that depended on
/// relaxed edges is valid for a subgraph only and is discarded here, so the
/// orchestrator never commits a coloring the caller's graph would violate.
///
/// # Errors
///
/// Returns [`MapError::AttemptsExhausted`] after `max_attempts` consecutive
/// failures. The caller is expected to abort the coloring stage rather than
/// proceed with a partial result.
pub fn repeat_until_success(
    graph: &RegionGraph,
    max_attempts: usize,
    rng: &mut StdRng,
) -> Result<ColoringOutcome> {
    for attempt in 1..=max_attempts {
        let mut working = WorkingGraph::from_graph(graph);
        if let Some(assignment) = heuristic::color_with_relaxation(&mut working, rng) {
            if assignment.is_proper_for(graph) {
                return Ok(ColoringOutcome {
                    assignment,
                    attempts: attempt,
                });
            }
        }
        // Failed attempt: the relaxed working copy is dropped here
    }

    Err(MapError::AttemptsExhausted {
        attempts: max_attempts,
    })
}
