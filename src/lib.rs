//! Isolate the text region of a raster logo as a cropped, background-free PNG.
//!
//! The logo is expected to be a colourful shield on the left followed by a
//! colourful word mark, on a white or grey background. Low-saturation pixels
//! are keyed out, the rest is split into vertical bands of occupied columns,
//! and the second band (the text) is cropped tightly and saved.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let result = logo_text_crop::process_file(
//!     Path::new("logo.png"),
//!     Path::new(logo_text_crop::DEFAULT_OUTPUT_PATH),
//! );
//! println!("{}: {}", result.success, result.message);
//! ```
//!
//! # In Memory
//!
//! ```no_run
//! let img = image::open("logo.png").unwrap();
//! let extraction = logo_text_crop::extract_text(img);
//! println!("segments: {:?}", extraction.merged_segments);
//! extraction.image.save("text.png").unwrap();
//! ```

#![deny(missing_docs)]

pub mod crop;
mod engine;
pub mod error;
pub mod filter;
pub mod segmentation;

pub use crop::Region;
pub use engine::{
    extract_text, process_file, save_png, Extraction, ProcessResult, DEFAULT_OUTPUT_PATH,
};
pub use error::{Error, Result};
pub use segmentation::Segment;
