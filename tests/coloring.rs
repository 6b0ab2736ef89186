//! End-to-end solver scenarios: exact search, heuristic relaxation, retries

use fourmap::MapError;
use fourmap::graph::adjacency::RegionGraph;
use fourmap::io::configuration::DEFAULT_MAX_ATTEMPTS;
use fourmap::solver::heuristic::{self, WorkingGraph};
use fourmap::solver::{exact, orchestrator};
use rand::SeedableRng;
use rand::rngs::StdRng;

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

fn triangle() -> RegionGraph {
    let mut graph = RegionGraph::new();
    graph.insert_edge(1, 2);
    graph.insert_edge(2, 3);
    graph.insert_edge(1, 3);
    graph
}

#[test]
fn exact_solver_colors_a_triangle_with_distinct_colors() {
    let graph = triangle();
    let assignment = match exact::solve(&graph) {
        Ok(assignment) => assignment,
        Err(error) => unreachable!("triangle must be colorable: {error}"),
    };

    assert!(assignment.is_proper_for(&graph));
    let colors: Vec<u8> = (1..=3).filter_map(|label| assignment.color_of(label)).collect();
    assert_eq!(colors.len(), 3);
    assert!(colors.iter().all(|&c| c < 4));
    // Pairwise distinct
    assert_ne!(colors.first(), colors.get(1));
    assert_ne!(colors.get(1), colors.get(2));
    assert_ne!(colors.first(), colors.get(2));
}

#[test]
fn orchestrator_colors_a_triangle_within_the_attempt_bound() {
    let graph = triangle();
    let mut rng = StdRng::seed_from_u64(7);

    let outcome = match orchestrator::repeat_until_success(&graph, DEFAULT_MAX_ATTEMPTS, &mut rng)
    {
        Ok(outcome) => outcome,
        Err(error) => unreachable!("triangle must color within 100 attempts: {error}"),
    };

    assert!(outcome.attempts >= 1 && outcome.attempts <= DEFAULT_MAX_ATTEMPTS);
    assert!(outcome.assignment.is_proper_for(&graph));
}

#[test]
fn isolated_vertex_is_colored_by_both_solvers() {
    let mut graph = RegionGraph::new();
    graph.insert_vertex(42);

    let exact_assignment = match exact::solve(&graph) {
        Ok(assignment) => assignment,
        Err(error) => unreachable!("single vertex must be colorable: {error}"),
    };
    assert!(exact_assignment.color_of(42).is_some_and(|c| c < 4));

    let mut rng = StdRng::seed_from_u64(1);
    let outcome = match orchestrator::repeat_until_success(&graph, DEFAULT_MAX_ATTEMPTS, &mut rng)
    {
        Ok(outcome) => outcome,
        Err(error) => unreachable!("single vertex must be colorable: {error}"),
    };
    assert!(outcome.assignment.color_of(42).is_some_and(|c| c < 4));
}

#[test]
fn five_clique_is_infeasible_for_the_exact_solver() {
    let result = exact::solve(&complete_graph(5));
    assert!(matches!(
        result,
        Err(MapError::ColoringInfeasible { regions: 5 })
    ));
}

#[test]
fn five_clique_exhausts_the_orchestrator() {
    let graph = complete_graph(5);
    let mut rng = StdRng::seed_from_u64(3);

    let result = orchestrator::repeat_until_success(&graph, DEFAULT_MAX_ATTEMPTS, &mut rng);
    assert!(matches!(
        result,
        Err(MapError::AttemptsExhausted { attempts }) if attempts == DEFAULT_MAX_ATTEMPTS
    ));
}

#[test]
fn four_clique_is_colored_by_both_solvers() {
    let graph = complete_graph(4);

    let assignment = match exact::solve(&graph) {
        Ok(assignment) => assignment,
        Err(error) => unreachable!("K4 must be colorable: {error}"),
    };
    assert!(assignment.is_proper_for(&graph));

    let mut rng = StdRng::seed_from_u64(11);
    let outcome = match orchestrator::repeat_until_success(&graph, DEFAULT_MAX_ATTEMPTS, &mut rng)
    {
        Ok(outcome) => outcome,
        Err(error) => unreachable!("K4 must color within 100 attempts: {error}"),
    };
    assert!(outcome.assignment.is_proper_for(&graph));
}

#[test]
fn relaxation_never_touches_the_original_graph() {
    // K5 forces the heuristic into edge-removal repair on every attempt
    let graph = complete_graph(5);
    let snapshot = graph.clone();

    let mut rng = StdRng::seed_from_u64(5);
    let mut working = WorkingGraph::from_graph(&graph);
    let attempt = heuristic::color_with_relaxation(&mut working, &mut rng);

    // The attempt completes by relaxing the working copy's topology
    assert!(attempt.is_some());
    assert!(working.edge_count() < snapshot.edge_count());

    // The caller's graph is byte-for-byte what it was before the attempt
    assert_eq!(graph, snapshot);

    // And it still behaves like K5 when handed to the exact solver
    assert!(matches!(
        exact::solve(&graph),
        Err(MapError::ColoringInfeasible { .. })
    ));
}

#[test]
fn relaxed_attempt_coloring_is_proper_for_the_relaxed_subgraph_only() {
    let graph = complete_graph(5);
    let mut rng = StdRng::seed_from_u64(9);
    let mut working = WorkingGraph::from_graph(&graph);

    let Some(assignment) = heuristic::color_with_relaxation(&mut working, &mut rng) else {
        unreachable!("the relaxing heuristic always completes on K5");
    };

    // Total over the vertex set, yet improper for the original five-clique:
    // five regions share four colors, and every pair is adjacent in K5
    assert_eq!(assignment.len(), 5);
    assert!(!assignment.is_proper_for(&graph));
}

#[test]
fn empty_graph_colors_trivially() {
    let graph = RegionGraph::new();

    let assignment = match exact::solve(&graph) {
        Ok(assignment) => assignment,
        Err(error) => unreachable!("empty graph must succeed: {error}"),
    };
    assert!(assignment.is_empty());

    let mut rng = StdRng::seed_from_u64(2);
    let outcome = match orchestrator::repeat_until_success(&graph, DEFAULT_MAX_ATTEMPTS, &mut rng)
    {
        Ok(outcome) => outcome,
        Err(error) => unreachable!("empty graph must succeed: {error}"),
    };
    assert_eq!(outcome.attempts, 1);
}
