//! PNG label-map import and colored-map export
//!
//! Import stands in for the upstream segmentation stage: each distinct
//! opaque color in the input becomes one region label, assigned in
//! first-seen scan order so construction is deterministic. Fully
//! transparent pixels become the boundary sentinel, which follows the
//! original convention of `max label + 1`.

use crate::io::configuration::PALETTE;
use crate::io::error::{MapError, Result};
use crate::solver::assignment::ColorAssignment;
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::collections::HashMap;
use std::path::Path;

/// Load a PNG as a labeled raster
///
/// Returns the label raster and the boundary sentinel value. Labels start
/// at 1; the sentinel is one past the highest label.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or decoded, or if the
/// image has zero pixels.
pub fn load_label_map(path: &Path) -> Result<(Array2<i32>, i32)> {
    let img = image::open(path)
        .map_err(|e| MapError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(MapError::InvalidSourceData {
            reason: format!("image '{}' has zero pixels", path.display()),
        });
    }

    let mut color_labels: HashMap<[u8; 4], i32> = HashMap::new();
    let mut next_label = 1;

    // First pass assigns labels so the sentinel can sit above them all
    for pixel in img.pixels() {
        let rgba = pixel.0;
        if rgba[3] == 0 {
            continue;
        }
        color_labels.entry(rgba).or_insert_with(|| {
            let label = next_label;
            next_label += 1;
            label
        });
    }

    let boundary = next_label;
    let mut markers = Array2::from_elem((height as usize, width as usize), boundary);

    for (x, y, pixel) in img.enumerate_pixels() {
        let rgba = pixel.0;
        if rgba[3] == 0 {
            continue;
        }
        let label = color_labels.get(&rgba).copied().unwrap_or(boundary);
        if let Some(cell) = markers.get_mut((y as usize, x as usize)) {
            *cell = label;
        }
    }

    Ok((markers, boundary))
}

/// Paint the raster with the four-color palette and save it as a PNG
///
/// Each pixel takes the palette entry for its region's assigned color.
/// Boundary pixels and regions without an assignment stay transparent.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved.
pub fn export_colored_map(
    markers: &Array2<i32>,
    boundary: i32,
    assignment: &ColorAssignment,
    output_path: &Path,
) -> Result<()> {
    let (rows, cols) = markers.dim();
    let mut img = ImageBuffer::new(cols as u32, rows as u32);

    for ((row, col), &label) in markers.indexed_iter() {
        let color = if label > 0 && label != boundary {
            assignment
                .color_of(label)
                .and_then(|c| PALETTE.get(usize::from(c)).copied())
                .map_or(Rgba([0, 0, 0, 0]), Rgba)
        } else {
            Rgba([0, 0, 0, 0])
        };
        img.put_pixel(col as u32, row as u32, color);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| MapError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
