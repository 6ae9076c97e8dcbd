//! Crop regions and alpha bounding boxes.

use image::{imageops, RgbaImage};

use crate::segmentation::Segment;

/// A rectangular crop region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Full-height region spanning the columns of `segment`.
#[must_use]
pub const fn segment_region(segment: Segment, height: u32) -> Region {
    Region {
        x: segment.start,
        y: 0,
        width: segment.width(),
        height,
    }
}

/// Copy `region` out of `image`.
#[must_use]
pub fn crop(image: &RgbaImage, region: Region) -> RgbaImage {
    imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image()
}

/// Smallest region containing every pixel with non-zero alpha.
///
/// Returns `None` when the image is fully transparent.
#[must_use]
pub fn alpha_bounding_box(image: &RgbaImage) -> Option<Region> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, px) in image.enumerate_pixels() {
        if px[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    bounds.map(|(x0, y0, x1, y1)| Region {
        x: x0,
        y: y0,
        width: x1 - x0 + 1,
        height: y1 - y0 + 1,
    })
}
