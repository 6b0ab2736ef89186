//! Algorithm constants and runtime configuration defaults

/// Number of colors in the map palette
pub const COLOR_COUNT: usize = 4;

/// Fixed palette painted onto exported maps (red, green, blue, yellow)
pub const PALETTE: [[u8; 4]; COLOR_COUNT] = [
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 0, 255],
];

/// Bound on consecutive heuristic attempts before terminal failure
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Per-region retry budget in the repair pass before an edge is relaxed
pub const REPAIR_RETRY_LIMIT: u8 = 3;

/// Fixed seed for reproducible coloring
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to colored output filenames
pub const OUTPUT_SUFFIX: &str = "_colored";
/// Suffix added to area/Huffman report filenames
pub const REPORT_SUFFIX: &str = "_areas.txt";
