use crate::color::DominantColor;
use std::collections::HashMap;

/// A frequency table over the sampled pixel colors of an image.
pub struct Histogram {
    counts: HashMap<(u8, u8, u8), u32>,
}

impl Histogram {
    pub fn from_pixels<P, I>(pixels: I) -> Self
    where
        P: image::Pixel<Subpixel = u8>,
        I: IntoIterator<Item = P>,
    {
        // tally every pixel by its (r, g, b) triple
        let mut counts = HashMap::new();
        for pixel in pixels {
            *counts.entry(pixel_to_rgb(&pixel)).or_insert(0) += 1;
        }

        Self { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Return the number of sampled pixels that had exactly this `(r, g, b)` color.
    pub fn count(&self, rgb: (u8, u8, u8)) -> u32 {
        self.counts.get(&rgb).copied().unwrap_or(0)
    }

    /// Return the `num_colors` most frequent colors in descending order of population. Colors with
    /// equal population end up in no particular order relative to each other.
    pub fn dominant_colors(&self, num_colors: usize) -> Vec<DominantColor> {
        let mut colors = self
            .counts
            .iter()
            .map(|(&rgb, &count)| DominantColor::new(rgb, count))
            .collect::<Vec<_>>();

        colors.sort_unstable_by(|lhs, rhs| rhs.population().cmp(&lhs.population()));
        colors.truncate(num_colors);

        colors
    }
}

fn pixel_to_rgb<P>(pixel: &P) -> (u8, u8, u8)
where
    P: image::Pixel<Subpixel = u8>,
{
    let rgb = pixel.to_rgb();
    (rgb.0[0], rgb.0[1], rgb.0[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn sample_histogram() -> Histogram {
        // three reds, two greens, one blue
        let pixels = vec![
            Rgb([255u8, 0, 0]),
            Rgb([255, 0, 0]),
            Rgb([255, 0, 0]),
            Rgb([0, 255, 0]),
            Rgb([0, 255, 0]),
            Rgb([0, 0, 255]),
        ];

        Histogram::from_pixels(pixels)
    }

    #[test]
    fn counts_occurrences_per_color() {
        let histogram = sample_histogram();
        let colors = histogram.dominant_colors(3);

        assert_eq!(histogram.len(), 3);
        assert_eq!(colors[0].population(), 3);
        assert_eq!(colors[1].population(), 2);
        assert_eq!(colors[2].population(), 1);
    }

    #[test]
    fn dominant_colors_are_ordered_by_descending_population() {
        let histogram = sample_histogram();
        let colors = histogram.dominant_colors(3);

        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0].rgb(), (255, 0, 0));
        assert_eq!(colors[1].rgb(), (0, 255, 0));
        assert_eq!(colors[2].rgb(), (0, 0, 255));

        for pair in colors.windows(2) {
            assert!(pair[0].population() >= pair[1].population());
        }
    }

    #[test]
    fn dominant_colors_truncates_to_requested_count() {
        let histogram = sample_histogram();

        assert_eq!(histogram.dominant_colors(2).len(), 2);
        assert_eq!(histogram.dominant_colors(0).len(), 0);
    }

    #[test]
    fn fewer_distinct_colors_than_requested_returns_them_all() {
        let histogram = sample_histogram();
        let colors = histogram.dominant_colors(10);

        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn alpha_channel_is_discarded() {
        let pixels = vec![image::Rgba([10u8, 20, 30, 0]), image::Rgba([10, 20, 30, 255])];
        let histogram = Histogram::from_pixels(pixels);

        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count((10, 20, 30)), 2);
    }
}
