//! Core types for pixel cropping.

use thiserror::Error;

/// Error types for pixel cropping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropError {
    /// The source image has no pixels.
    #[error("Source image is empty")]
    EmptyImage,

    /// The pixel buffer does not match the declared dimensions.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The crop rect has a NaN or infinite component.
    #[error("Crop rect has non-finite coordinates")]
    NonFiniteRect,

    /// The crop rect covers no whole pixel after rounding.
    #[error("Crop region is empty after rounding to pixels")]
    EmptyRegion,
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Width divided by height, as the crop engine expects it.
    ///
    /// Returns `None` for an empty image.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }

    /// Expected pixel buffer length for the declared dimensions.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Check that the buffer can be cropped.
    pub fn validate(&self) -> Result<(), CropError> {
        if self.is_empty() {
            return Err(CropError::EmptyImage);
        }
        let expected = self.expected_len();
        if self.pixels.len() != expected {
            return Err(CropError::BufferSizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

impl From<image::RgbImage> for DecodedImage {
    fn from(img: image::RgbImage) -> Self {
        Self::from_rgb_image(img)
    }
}
