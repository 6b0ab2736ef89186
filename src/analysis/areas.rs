//! Per-region pixel-area tallies and area-range queries

use ndarray::Array2;
use std::collections::{BTreeMap, BTreeSet};

/// One region's label paired with its pixel area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaEntry {
    /// Region label
    pub label: i32,
    /// Number of pixels carrying the label
    pub area: usize,
}

/// Count the pixels of every valid region in the raster
///
/// Boundary and non-positive labels are excluded, matching the vertex set
/// of the adjacency graph built from the same raster.
pub fn compute_region_areas(markers: &Array2<i32>, boundary: i32) -> BTreeMap<i32, usize> {
    let mut areas = BTreeMap::new();
    for &label in markers {
        if label > 0 && label != boundary {
            *areas.entry(label).or_insert(0) += 1;
        }
    }
    areas
}

/// Flatten an area map into entries sorted by ascending area
///
/// Ties keep ascending label order, so the result is deterministic.
pub fn sorted_by_area(areas: &BTreeMap<i32, usize>) -> Vec<AreaEntry> {
    let mut entries: Vec<AreaEntry> = areas
        .iter()
        .map(|(&label, &area)| AreaEntry { label, area })
        .collect();
    entries.sort_by_key(|entry| (entry.area, entry.label));
    entries
}

/// Labels whose area lies within `[low, high]`, via binary search
///
/// Expects `entries` sorted ascending by area, as produced by
/// [`sorted_by_area`]. An inverted range yields the empty set.
pub fn labels_in_area_range(entries: &[AreaEntry], low: usize, high: usize) -> BTreeSet<i32> {
    if low > high {
        return BTreeSet::new();
    }

    let start = entries.partition_point(|entry| entry.area < low);
    let end = entries.partition_point(|entry| entry.area <= high);

    entries
        .get(start..end)
        .unwrap_or(&[])
        .iter()
        .map(|entry| entry.label)
        .collect()
}
