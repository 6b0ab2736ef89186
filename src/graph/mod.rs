//! Region-adjacency graph construction and validation
//!
//! This module contains graph-related functionality including:
//! - Adjacency-graph construction from labeled rasters
//! - Euler-characteristic and edge-density planarity checks
//! - Dense label indexing for solver hot paths

/// Region-adjacency graph built from a labeled raster
pub mod adjacency;
/// Label to dense-index translation for solver inner loops
pub mod indexing;
/// Planarity sanity checks applied before coloring
pub mod planarity;

pub use adjacency::RegionGraph;
