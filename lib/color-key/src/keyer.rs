use crate::Result;
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
use std::path::Path;

// Matched pixels are rewritten wholesale, color channels included
const REPLACEMENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Color keying configuration.
///
/// The background color is sampled from the top-left pixel of each image.
/// A pixel matches the background when every one of its red, green and blue
/// channels is within `tolerance` of the sampled color; the alpha channel
/// plays no part in the decision.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct KeyerConfig {
    /// Exclusive bound: a channel difference equal to the tolerance
    /// does not match.
    #[derivative(Default(value = "5"))]
    tolerance: u8,
}

impl KeyerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    /// Replace every background pixel with transparent white. Returns a new
    /// image with the same dimensions; the input is left untouched.
    pub fn key(&self, image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let mut output = RgbaImage::new(width, height);
        if width == 0 || height == 0 {
            return output;
        }

        let background = *image.get_pixel(0, 0);
        for (x, y, pixel) in image.enumerate_pixels() {
            if self.matches(pixel, &background) {
                output.put_pixel(x, y, REPLACEMENT);
            } else {
                output.put_pixel(x, y, *pixel);
            }
        }

        output
    }

    /// Binary background mask (0 = background, 255 = foreground).
    pub fn mask(&self, image: &RgbaImage) -> GrayImage {
        let (width, height) = image.dimensions();
        let mut mask = GrayImage::new(width, height);
        if width == 0 || height == 0 {
            return mask;
        }

        let background = *image.get_pixel(0, 0);
        for (x, y, pixel) in image.enumerate_pixels() {
            let value = if self.matches(pixel, &background) {
                0
            } else {
                255
            };
            mask.put_pixel(x, y, Luma([value]));
        }

        mask
    }

    /// Key the image file at `path` and overwrite it in place.
    ///
    /// The source may be any decodable raster format; a missing alpha
    /// channel becomes fully opaque on load. The result is always written
    /// as PNG, converting the file if it was not one already.
    pub fn key_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();
        log::debug!(
            "Keying {} ({}x{}, tolerance {})",
            path.display(),
            image.width(),
            image.height(),
            self.tolerance
        );

        let keyed = self.key(&image);
        keyed.save_with_format(path, ImageFormat::Png)?;

        Ok(())
    }

    fn matches(&self, pixel: &Rgba<u8>, background: &Rgba<u8>) -> bool {
        pixel[0].abs_diff(background[0]) < self.tolerance
            && pixel[1].abs_diff(background[1]) < self.tolerance
            && pixel[2].abs_diff(background[2]) < self.tolerance
    }
}
