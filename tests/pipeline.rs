//! Label-map import, coloring, and colored export over real PNG files

use fourmap::analysis::areas::{compute_region_areas, labels_in_area_range, sorted_by_area};
use fourmap::graph::adjacency::RegionGraph;
use fourmap::io::configuration::PALETTE;
use fourmap::io::image::{export_colored_map, load_label_map};
use fourmap::solver::exact;
use image::{ImageBuffer, Rgba, RgbaImage};

// Four quadrants in distinct colors with a transparent cross between them
fn quadrant_image() -> RgbaImage {
    let colors = [
        Rgba([200, 0, 0, 255]),
        Rgba([0, 200, 0, 255]),
        Rgba([0, 0, 200, 255]),
        Rgba([200, 200, 0, 255]),
    ];

    ImageBuffer::from_fn(9, 9, |x, y| {
        if x == 4 || y == 4 {
            Rgba([0, 0, 0, 0])
        } else {
            let quadrant = usize::from(x > 4) + 2 * usize::from(y > 4);
            colors.get(quadrant).copied().unwrap_or(Rgba([0, 0, 0, 0]))
        }
    })
}

#[test]
fn label_map_roundtrip_through_the_full_pipeline() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(error) => unreachable!("tempdir creation failed: {error}"),
    };
    let input_path = dir.path().join("quadrants.png");
    if let Err(error) = quadrant_image().save(&input_path) {
        unreachable!("fixture save failed: {error}");
    }

    let (markers, boundary) = match load_label_map(&input_path) {
        Ok(loaded) => loaded,
        Err(error) => unreachable!("label map load failed: {error}"),
    };

    // Four opaque colors, scanned row-major, become labels 1..=4
    assert_eq!(boundary, 5);
    assert_eq!(markers.dim(), (9, 9));
    assert_eq!(markers.get((0, 0)).copied(), Some(1));
    assert_eq!(markers.get((0, 8)).copied(), Some(2));
    assert_eq!(markers.get((8, 0)).copied(), Some(3));
    assert_eq!(markers.get((8, 8)).copied(), Some(4));
    assert_eq!(markers.get((4, 4)).copied(), Some(boundary));

    let graph = RegionGraph::from_labels(&markers, boundary);
    assert_eq!(graph.vertex_count(), 4);
    // The transparent cross separates the quadrants entirely
    assert_eq!(graph.edge_count(), 0);

    let assignment = match exact::solve(&graph) {
        Ok(assignment) => assignment,
        Err(error) => unreachable!("edgeless graph must color: {error}"),
    };

    let output_path = dir.path().join("quadrants_colored.png");
    if let Err(error) = export_colored_map(&markers, boundary, &assignment, &output_path) {
        unreachable!("export failed: {error}");
    }

    let exported = match image::open(&output_path) {
        Ok(img) => img.to_rgba8(),
        Err(error) => unreachable!("exported image unreadable: {error}"),
    };

    // Painted pixels carry palette entries; the cross stays transparent
    let corner = exported.get_pixel(0, 0).0;
    assert!(PALETTE.contains(&corner));
    assert_eq!(exported.get_pixel(4, 4).0, [0, 0, 0, 0]);
}

#[test]
fn areas_reflect_pixel_counts_after_import() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(error) => unreachable!("tempdir creation failed: {error}"),
    };
    let input_path = dir.path().join("quadrants.png");
    if let Err(error) = quadrant_image().save(&input_path) {
        unreachable!("fixture save failed: {error}");
    }

    let (markers, boundary) = match load_label_map(&input_path) {
        Ok(loaded) => loaded,
        Err(error) => unreachable!("label map load failed: {error}"),
    };

    let areas = compute_region_areas(&markers, boundary);
    assert_eq!(areas.len(), 4);
    // Each quadrant is a 4x4 block
    assert!(areas.values().all(|&area| area == 16));

    let entries = sorted_by_area(&areas);
    let all = labels_in_area_range(&entries, 16, 16);
    assert_eq!(all.len(), 4);
    assert!(labels_in_area_range(&entries, 17, 100).is_empty());
}
