/// Color assignments produced by the solvers
pub mod assignment;
/// Fixed four-slot color sets for domains and exclusions
pub mod colorset;
/// Backtracking solver with forward checking
pub mod exact;
/// Randomized BFS solver with in-place graph relaxation
pub mod heuristic;
/// Bounded-retry driver over the heuristic solver
pub mod orchestrator;

pub use assignment::ColorAssignment;
