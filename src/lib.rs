//! A library to extract the dominant colors from an image.
//!
//! The image is downsampled to a small fixed-size grid, every sampled pixel is tallied into a color
//! frequency table, and the most frequent colors are returned in descending order of occurrence.
//! Downsampling bounds the amount of work per image and intentionally loses fine detail in favor of
//! speed.
//!
//! ```no_run
//! let colors = dominance::dominant_colors("photo.jpg", 5)?;
//!
//! for hex in colors {
//!     println!("{hex}");
//! }
//! # Ok::<(), dominance::Error>(())
//! ```

mod color;
mod error;
mod histogram;

pub const DEFAULT_NUM_COLORS: usize = 5;
pub const DEFAULT_SAMPLE_WIDTH: u32 = 50;
pub const DEFAULT_SAMPLE_HEIGHT: u32 = 50;

pub use crate::{
    color::DominantColor,
    error::{Error, Result},
};
pub use image;

use histogram::Histogram;
use image::{
    imageops::{self, FilterType},
    DynamicImage,
};
use std::path::Path;

/// Extracts the most frequent colors from an image.
///
/// The extractor downsamples the image to a fixed sample grid, tallies every sampled pixel into a
/// frequency table and selects the most frequent colors. Colors with equal frequency end up in no
/// particular order relative to each other.
#[derive(Debug, Clone)]
pub struct Extractor {
    num_colors: usize,
    sample_dimensions: (u32, u32),
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            num_colors: DEFAULT_NUM_COLORS,
            sample_dimensions: (DEFAULT_SAMPLE_WIDTH, DEFAULT_SAMPLE_HEIGHT),
        }
    }

    /// Set how many of the most frequent colors to return. Fewer are returned if the sampled image
    /// doesn't contain that many distinct colors.
    pub fn num_colors(self, num_colors: usize) -> Self {
        Self { num_colors, ..self }
    }

    /// Set the dimensions of the sample grid the image is downsampled to before tallying.
    pub fn sample_dimensions(self, width: u32, height: u32) -> Self {
        Self {
            sample_dimensions: (width, height),
            ..self
        }
    }

    /// Load the image at the given path and extract its dominant colors.
    pub fn extract<P>(&self, path: P) -> Result<Vec<DominantColor>>
    where
        P: AsRef<Path>,
    {
        let image = load_image(path.as_ref())?;
        Ok(self.extract_from_image(&image))
    }

    /// Extract the dominant colors from an already-decoded image.
    pub fn extract_from_image(&self, image: &DynamicImage) -> Vec<DominantColor> {
        let (width, height) = self.sample_dimensions;

        tracing::debug!(
            source_width = image.width(),
            source_height = image.height(),
            sample_width = width,
            sample_height = height,
            "downsampling image"
        );

        // downsample to the sample grid, ignoring aspect ratio, and discard any alpha channel so
        // every sampled pixel maps to exactly one (r, g, b) triple
        let sampled = imageops::resize(&image.to_rgb8(), width, height, FilterType::Nearest);

        let histogram = Histogram::from_pixels(sampled.pixels().copied());
        tracing::debug!(distinct_colors = histogram.len(), "tallied sampled pixels");

        histogram.dominant_colors(self.num_colors)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the `num_colors` most frequent colors from the image at the given path, rendered as
/// lowercase `#rrggbb` hex strings in descending order of frequency.
///
/// This is a convenience over [`Extractor`] with the default sample grid.
pub fn dominant_colors<P>(path: P, num_colors: usize) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let colors = Extractor::new().num_colors(num_colors).extract(path)?;
    Ok(colors.iter().map(|color| color.to_hex()).collect())
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    tracing::debug!(path = %path.display(), "loading image");

    image::open(path).map_err(|source| match source {
        image::ImageError::Unsupported(source) => Error::CapabilityUnavailable(source),
        source => Error::Load {
            path: path.to_path_buf(),
            source,
        },
    })
}
