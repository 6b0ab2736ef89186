//! Region statistics derived from the labeled raster
//!
//! This stage consumes the raw label raster independently of the coloring
//! result: per-region pixel areas, range queries over them, and Huffman
//! prefix codes weighted by area.

/// Per-region area tallies and range queries
pub mod areas;
/// Huffman prefix codes over region areas
pub mod huffman;
