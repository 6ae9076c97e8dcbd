//! Core extraction pipeline.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::{debug, error, info};

use crate::crop::{self, Region};
use crate::error::{Error, Result};
use crate::filter;
use crate::segmentation::{self, Segment};

/// Where the extracted text is written when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "src/renderer/assets/logo_text.png";

/// Intermediate and final products of [`extract_text`].
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The cropped, background-free image.
    pub image: RgbaImage,
    /// Number of pixels cleared by the background filter.
    pub cleared_pixels: usize,
    /// Column segments before merging.
    pub raw_segments: Vec<Segment>,
    /// Column segments after merging nearby runs.
    pub merged_segments: Vec<Segment>,
    /// The segment taken as text, if any.
    pub selected: Option<Segment>,
    /// Final tight crop relative to the segment crop, if anything was visible.
    pub bounding_box: Option<Region>,
}

/// Result of processing a single image file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Path of the input file.
    pub path: PathBuf,
    /// Path the PNG was (or would have been) written to.
    pub output: PathBuf,
    /// Whether processing succeeded.
    pub success: bool,
    /// The segment taken as text.
    pub selected: Option<Segment>,
    /// Width and height of the saved image.
    pub dimensions: Option<(u32, u32)>,
    /// Human-readable status message.
    pub message: String,
}

/// Isolate the text band of a logo held in memory.
///
/// Filters out low-saturation pixels, splits the remainder into vertical
/// bands, crops to the selected band and finally to the bounding box of the
/// visible pixels. When no band is found, or nothing is visible, the filtered
/// image is returned uncropped.
#[must_use]
pub fn extract_text(image: DynamicImage) -> Extraction {
    let mut rgba = image.into_rgba8();
    let cleared_pixels = filter::filter_background(&mut rgba);
    debug!(
        "Cleared {cleared_pixels} of {} pixels",
        u64::from(rgba.width()) * u64::from(rgba.height())
    );

    let occupancy = segmentation::column_occupancy(&rgba);
    let raw_segments = segmentation::find_segments(&occupancy);
    debug!("Raw segments: {raw_segments:?}");

    let merged_segments = segmentation::merge_segments(&raw_segments, segmentation::MERGE_GAP);
    debug!("Merged segments: {merged_segments:?}");

    let selected = segmentation::select_text_segment(&merged_segments);
    let mut cropped = match selected {
        Some(segment) => {
            info!(
                "Selecting segment {}-{} (width {})",
                segment.start,
                segment.end,
                segment.width()
            );
            crop::crop(&rgba, crop::segment_region(segment, rgba.height()))
        }
        None => {
            info!("No segments found, keeping full image");
            rgba
        }
    };

    let bounding_box = crop::alpha_bounding_box(&cropped);
    if let Some(region) = bounding_box {
        cropped = crop::crop(&cropped, region);
    }

    Extraction {
        image: cropped,
        cleared_pixels,
        raw_segments,
        merged_segments,
        selected,
        bounding_box,
    }
}

/// Save an RGBA image as PNG, whatever the extension of `path`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or encoding fails.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn run(input: &Path, output: &Path) -> Result<Extraction> {
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let extraction = extract_text(image::open(input)?);

    info!("Saving to {}", output.display());
    save_png(&extraction.image, output)?;
    Ok(extraction)
}

/// Process a single logo file: load, filter, segment, crop, save.
///
/// Never fails outright: any error is logged and reported through
/// [`ProcessResult::success`] and [`ProcessResult::message`].
#[must_use]
pub fn process_file(input: &Path, output: &Path) -> ProcessResult {
    info!("Processing {}", input.display());

    let mut result = ProcessResult {
        path: input.to_path_buf(),
        output: output.to_path_buf(),
        success: false,
        selected: None,
        dimensions: None,
        message: String::new(),
    };

    match run(input, output) {
        Ok(extraction) => {
            result.success = true;
            result.selected = extraction.selected;
            result.dimensions = Some(extraction.image.dimensions());
            result.message = match extraction.selected {
                Some(segment) => format!(
                    "Text extracted from columns {}-{}",
                    segment.start, segment.end
                ),
                None => "No content segments found".to_string(),
            };
        }
        Err(e) => {
            error!("Error: {e}");
            result.message = e.to_string();
        }
    }

    result
}
