//! Four-color map coloring over segmented label rasters
//!
//! The system derives a region-adjacency graph from a labeled raster and
//! assigns each region one of four colors so that no two touching regions
//! share a color, using either an exact backtracking solver or a fast
//! randomized heuristic with bounded retries.

#![forbid(unsafe_code)]

/// Region-area statistics and Huffman prefix codes over segmented rasters
pub mod analysis;
/// Adjacency-graph construction, planarity checks, and dense label indexing
pub mod graph;
/// Input/output operations and error handling
pub mod io;
/// Exact and heuristic four-color solvers with the retry orchestrator
pub mod solver;

pub use io::error::{MapError, Result};
