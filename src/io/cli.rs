//! Command-line interface for batch mosaic rendering of image files

use crate::io::configuration::{
    DEFAULT_CROP_MARGIN, DEFAULT_TILE_SIZE, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::pipeline::{MosaicPipeline, OutputPaths, PipelineConfig};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hexmosaic")]
#[command(
    author,
    version,
    about = "Render raster images as hexagonal mosaic vector art"
)]
/// Command-line arguments for the mosaic renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Hexagon size (center-to-corner radius) in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub size: f64,

    /// Also rasterize the vector document to PNG
    #[arg(short, long)]
    pub raster: bool,

    /// Produce a cropped and sharpened PNG derivative (implies --raster)
    #[arg(short, long)]
    pub crop: bool,

    /// Pixels to trim from the bottom edge of the cropped derivative
    #[arg(long, default_value_t = DEFAULT_CROP_MARGIN)]
    pub crop_margin: u32,

    /// Write an HTML preview page alongside the vector document
    #[arg(long)]
    pub html: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Write the vector document to this path (single-file targets only)
    #[arg(long, value_name = "PATH")]
    pub vector_out: Option<PathBuf>,

    /// Write the rasterized PNG to this path (single-file targets only)
    #[arg(long, value_name = "PATH")]
    pub raster_out: Option<PathBuf>,

    /// Write the cropped derivative to this path (single-file targets only)
    #[arg(long, value_name = "PATH")]
    pub cropped_out: Option<PathBuf>,
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

    /// Check if a raster artifact is requested (directly or via --crop)
    pub const fn wants_raster(&self) -> bool {
        self.raster || self.crop
    }

    const fn has_explicit_outputs(&self) -> bool {
        self.vector_out.is_some() || self.raster_out.is_some() || self.cropped_out.is_some()
    }
}

/// Derive an output path from an input path by suffixing the file stem and
/// swapping the extension
pub fn derive_output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let pipeline = MosaicPipeline::new(PipelineConfig {
            tile_size: self.cli.size,
            crop_margin: self.cli.crop_margin,
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(file);
            }

            let outputs = self.output_paths(file);
            pipeline.process(file, &outputs)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if !is_supported_image(&self.cli.target) {
                return Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a supported raster image",
                ));
            }
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            if self.cli.has_explicit_outputs() {
                return Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"explicit output paths require a single input file",
                ));
            }

            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.is_file() && is_supported_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let vector_path = self
            .cli
            .vector_out
            .clone()
            .unwrap_or_else(|| derive_output_path(input_path, "svg"));
        if vector_path.exists() {
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

    fn output_paths(&self, input_path: &Path) -> OutputPaths {
        let vector = self
            .cli
            .vector_out
            .clone()
            .unwrap_or_else(|| derive_output_path(input_path, "svg"));

        let raster = self.cli.wants_raster().then(|| {
            self.cli
                .raster_out
                .clone()
                .unwrap_or_else(|| derive_output_path(input_path, "png"))
        });

        let cropped = self.cli.crop.then(|| {
            self.cli.cropped_out.clone().unwrap_or_else(|| {
                let stem = input_path.file_stem().unwrap_or_default();
                let name = format!("{}{OUTPUT_SUFFIX}_crop.png", stem.to_string_lossy());
                input_path.parent().map_or_else(|| PathBuf::from(&name), |p| p.join(&name))
            })
        });

        let preview = self
            .cli
            .html
            .then(|| derive_output_path(input_path, "html"));

        OutputPaths {
            vector,
            raster,
            cropped,
            preview,
        }
    }
}
