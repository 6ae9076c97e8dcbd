//! Vertical-band segmentation of a filtered logo.
//!
//! After the background filter, the logo is expected to read left to right as
//! a shield graphic followed by the word mark. Columns holding any visible
//! pixel are grouped into runs, nearby runs are merged (letters are separated
//! by narrow gaps), and the second band is taken as the text.

use image::RgbaImage;
use tracing::info;

/// Segments separated by fewer empty columns than this are merged.
pub const MERGE_GAP: u32 = 25;

/// A lone segment starting past this column is assumed to be text only.
pub const LATE_START_COLUMN: u32 = 200;

/// A half-open range `[start, end)` of contiguous occupied columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// First occupied column (inclusive).
    pub start: u32,
    /// One past the last occupied column (exclusive).
    pub end: u32,
}

impl Segment {
    /// Create a segment covering `[start, end)`.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of columns covered.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.end - self.start
    }
}

/// Flag each column that contains at least one pixel with non-zero alpha.
///
/// Each column scan stops at its first visible pixel.
#[must_use]
pub fn column_occupancy(image: &RgbaImage) -> Vec<bool> {
    (0..image.width())
        .map(|x| (0..image.height()).any(|y| image.get_pixel(x, y)[3] > 0))
        .collect()
}

/// Run-length encode occupancy flags into segments.
///
/// A run still open at the last column is closed at `occupancy.len()`.
#[must_use]
pub fn find_segments(occupancy: &[bool]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut open: Option<u32> = None;

    // Trailing `false` closes a run that touches the right edge.
    let flags = occupancy.iter().copied().chain(std::iter::once(false));
    for (x, occupied) in (0u32..).zip(flags) {
        match (occupied, open) {
            (true, None) => open = Some(x),
            (false, Some(start)) => {
                segments.push(Segment::new(start, x));
                open = None;
            }
            _ => {}
        }
    }

    segments
}

/// Merge left-to-right segments whose gap is smaller than `max_gap`.
///
/// The gap is measured from the end of the running merged segment to the
/// start of the next raw one.
#[must_use]
pub fn merge_segments(segments: &[Segment], max_gap: u32) -> Vec<Segment> {
    let Some((&first, rest)) = segments.split_first() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut current = first;
    for &next in rest {
        if next.start - current.end < max_gap {
            current.end = next.end;
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);
    merged
}

/// Pick the segment holding the text.
///
/// With two or more segments the layout is taken to be `[shield][text]` and
/// the second one is returned. A single segment is returned as is.
#[must_use]
pub fn select_text_segment(merged: &[Segment]) -> Option<Segment> {
    match merged {
        [] => None,
        [only] => {
            if only.start > LATE_START_COLUMN {
                info!(
                    "Single segment starts at column {}, assuming shield is already absent",
                    only.start
                );
            }
            Some(*only)
        }
        [_, text, ..] => Some(*text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn occupancy_from_runs(runs: &[(bool, usize)]) -> Vec<bool> {
        runs.iter()
            .flat_map(|&(flag, n)| std::iter::repeat_n(flag, n))
            .collect()
    }

    #[test]
    fn occupancy_marks_columns_with_visible_pixels() {
        let mut img = RgbaImage::from_pixel(6, 4, Rgba([255, 255, 255, 0]));
        img.put_pixel(1, 3, Rgba([0, 0, 255, 255]));
        img.put_pixel(4, 0, Rgba([0, 255, 0, 1]));

        assert_eq!(
            column_occupancy(&img),
            vec![false, true, false, false, true, false]
        );
    }

    #[test]
    fn segments_from_known_pattern() {
        let occ = occupancy_from_runs(&[(true, 5), (false, 5), (true, 5)]);
        assert_eq!(
            find_segments(&occ),
            vec![Segment::new(0, 5), Segment::new(10, 15)]
        );
    }

    #[test]
    fn segments_from_single_row_image() {
        let mut img = RgbaImage::from_pixel(15, 1, Rgba([255, 255, 255, 0]));
        for x in (0..5).chain(10..15) {
            img.put_pixel(x, 0, Rgba([20, 90, 200, 255]));
        }
        let segments = find_segments(&column_occupancy(&img));
        assert_eq!(segments, vec![Segment::new(0, 5), Segment::new(10, 15)]);
    }

    #[test]
    fn trailing_run_is_closed_at_boundary() {
        let occ = occupancy_from_runs(&[(false, 3), (true, 4)]);
        assert_eq!(find_segments(&occ), vec![Segment::new(3, 7)]);
    }

    #[test]
    fn empty_occupancy_has_no_segments() {
        assert!(find_segments(&[]).is_empty());
        assert!(find_segments(&[false; 10]).is_empty());
    }

    #[test]
    fn small_gap_merges() {
        let raw = [Segment::new(0, 10), Segment::new(34, 50)];
        assert_eq!(merge_segments(&raw, MERGE_GAP), vec![Segment::new(0, 50)]);
    }

    #[test]
    fn gap_at_threshold_stays_separate() {
        let raw = [Segment::new(0, 10), Segment::new(35, 50)];
        assert_eq!(merge_segments(&raw, MERGE_GAP), raw.to_vec());
    }

    #[test]
    fn merging_chains_letters_then_splits_at_wide_gap() {
        let raw = [
            Segment::new(0, 60),
            Segment::new(95, 110),
            Segment::new(115, 130),
            Segment::new(138, 150),
        ];
        assert_eq!(
            merge_segments(&raw, MERGE_GAP),
            vec![Segment::new(0, 60), Segment::new(95, 150)]
        );
    }

    #[test]
    fn merge_of_nothing_is_nothing() {
        assert!(merge_segments(&[], MERGE_GAP).is_empty());
    }

    #[test]
    fn selects_second_of_many() {
        let merged = [Segment::new(0, 50), Segment::new(80, 150)];
        assert_eq!(select_text_segment(&merged), Some(Segment::new(80, 150)));

        let three = [
            Segment::new(0, 50),
            Segment::new(80, 150),
            Segment::new(200, 260),
        ];
        assert_eq!(select_text_segment(&three), Some(Segment::new(80, 150)));
    }

    #[test]
    fn single_segment_selected_regardless_of_start() {
        assert_eq!(
            select_text_segment(&[Segment::new(250, 300)]),
            Some(Segment::new(250, 300))
        );
        assert_eq!(
            select_text_segment(&[Segment::new(10, 60)]),
            Some(Segment::new(10, 60))
        );
    }

    #[test]
    fn nothing_selected_without_segments() {
        assert_eq!(select_text_segment(&[]), None);
    }

    #[test]
    fn segment_width() {
        assert_eq!(Segment::new(80, 150).width(), 70);
    }
}
