//! Command-line interface for batch coloring of PNG label maps

use crate::analysis::areas::{compute_region_areas, labels_in_area_range, sorted_by_area};
use crate::analysis::huffman::HuffmanTree;
use crate::graph::RegionGraph;
use crate::graph::planarity;
use crate::io::configuration::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, OUTPUT_SUFFIX, REPORT_SUFFIX};
use crate::io::error::{MapError, Result};
use crate::io::image::{export_colored_map, load_label_map};
use crate::io::progress::ProgressManager;
use crate::solver::assignment::ColorAssignment;
use crate::solver::{exact, orchestrator};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fourmap")]
#[command(
    author,
    version,
    about = "Assign four map colors to segmented label rasters"
)]
/// Command-line arguments for the coloring tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG label map or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for the heuristic solver
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum heuristic attempts before terminal failure
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Use the exact backtracking solver instead of the heuristic
    #[arg(short, long)]
    pub exact: bool,

    /// Write an area/Huffman report next to each output
    #[arg(short, long)]
    pub report: bool,

    /// Lower bound for the report's area filter
    #[arg(long, default_value_t = 0)]
    pub area_min: usize,

    /// Upper bound for the report's area filter
    #[arg(long, default_value_t = usize::MAX)]
    pub area_max: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch coloring of PNG label maps with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    rng: StdRng,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let rng = StdRng::seed_from_u64(cli.seed);

        Self {
            cli,
            progress_manager,
            rng,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, coloring, or file output
    /// fails. A single infeasible or exhausted file aborts the batch.
    pub fn process(&mut self) -> Result<()> {
        if self.cli.area_min > self.cli.area_max {
            return Err(crate::io::error::invalid_parameter(
                "area_min",
                &self.cli.area_min,
                &"lower bound exceeds area_max",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG label map",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for advisory planarity feedback
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let (markers, boundary) = load_label_map(input_path)?;
        let graph = RegionGraph::from_labels(&markers, boundary);

        // Advisory only: the pipeline never gates on planarity
        if !self.cli.quiet && planarity::exceeds_edge_bound(&graph) {
            eprintln!(
                "Warning: {} induces a graph too dense to be planar; coloring may fail",
                input_path.display()
            );
        }

        let (assignment, attempts) = self.solve(&graph)?;

        export_colored_map(&markers, boundary, &assignment, &output_path)?;

        if self.cli.report {
            let areas = compute_region_areas(&markers, boundary);
            let report = build_area_report(&areas, self.cli.area_min, self.cli.area_max);
            let report_path = Self::get_report_path(input_path);
            std::fs::write(&report_path, report).map_err(|e| MapError::FileSystem {
                path: report_path.clone(),
                operation: "write report",
                source: e,
            })?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(attempts);
        }

        Ok(())
    }

    fn solve(&mut self, graph: &RegionGraph) -> Result<(ColorAssignment, usize)> {
        if self.cli.exact {
            Ok((exact::solve(graph)?, 1))
        } else {
            let outcome = orchestrator::repeat_until_success(graph, self.cli.attempts, &mut self.rng)?;
            Ok((outcome.assignment, outcome.attempts))
        }
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn get_report_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let report_name = format!("{}{}", stem.to_string_lossy(), REPORT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(report_name)
        } else {
            PathBuf::from(report_name)
        }
    }
}

// One line per region within the filter: label, pixel area, Huffman code
fn build_area_report(areas: &BTreeMap<i32, usize>, low: usize, high: usize) -> String {
    let entries = sorted_by_area(areas);
    let selected = labels_in_area_range(&entries, low, high);

    let filtered: BTreeMap<i32, usize> = areas
        .iter()
        .filter(|(label, _)| selected.contains(label))
        .map(|(&label, &area)| (label, area))
        .collect();

    let codes = HuffmanTree::from_weights(&filtered).codes();

    let mut report = format!("label\tarea\tcode\t({} regions)\n", filtered.len());
    for entry in entries {
        if let Some(code) = codes.get(&entry.label) {
            report.push_str(&format!("{}\t{}\t{}\n", entry.label, entry.area, code));
        }
    }
    report
}
