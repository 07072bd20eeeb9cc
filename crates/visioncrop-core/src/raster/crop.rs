//! Cropping pixel buffers by a normalized rect.
//!
//! The crop rect comes straight from [`crate::engine::CropEngine`] as
//! fractions of the image, so the same rect crops the full-resolution source
//! no matter what size the image was displayed at.
//!
//! # Coordinate System
//!
//! - (0.0, 0.0) = top-left corner
//! - (1.0, 1.0) = bottom-right corner
//! - the pixel region is `[x*W, y*H, width*W, height*H]`, with edges rounded
//!   to the nearest pixel and clamped to the image
//!
//! # Failure
//!
//! [`try_crop`] reports why a crop could not be made. The `*_or_original`
//! variants never fail: they log the reason and hand back the source image
//! unchanged, which is what the crop overlay does when the user confirms.

use image::DynamicImage;

use super::{CropError, DecodedImage};
use crate::geometry::{NormalizedRect, PixelRect};

/// Crop an RGB image to the pixel region described by `rect`.
///
/// # Errors
///
/// - [`CropError::EmptyImage`] / [`CropError::BufferSizeMismatch`] if the
///   source buffer is unusable
/// - [`CropError::NonFiniteRect`] if `rect` contains NaN or infinity
/// - [`CropError::EmptyRegion`] if the region rounds to zero pixels
///
/// # Example
///
/// ```
/// use visioncrop_core::geometry::NormalizedRect;
/// use visioncrop_core::raster::{try_crop, DecodedImage};
///
/// let image = DecodedImage::new(100, 100, vec![128u8; 100 * 100 * 3]);
/// let cropped = try_crop(&image, NormalizedRect::new(0.25, 0.25, 0.5, 0.5)).unwrap();
/// assert_eq!((cropped.width, cropped.height), (50, 50));
/// ```
pub fn try_crop(image: &DecodedImage, rect: NormalizedRect) -> Result<DecodedImage, CropError> {
    image.validate()?;
    let region = pixel_region(rect, image.width, image.height)?;

    // Fast path: full crop returns a clone
    let full = PixelRect {
        x: 0,
        y: 0,
        width: image.width,
        height: image.height,
    };
    if region == full {
        return Ok(image.clone());
    }

    let src_stride = image.width as usize * 3;
    let row_len = region.width as usize * 3;
    let mut output = Vec::with_capacity(row_len * region.height as usize);

    // Copy pixel data row by row
    for y in region.y..region.y + region.height {
        let start = y as usize * src_stride + region.x as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    Ok(DecodedImage {
        width: region.width,
        height: region.height,
        pixels: output,
    })
}

/// Crop `image` to `rect`, or return a copy of it if that is not possible.
pub fn crop_or_original(image: &DecodedImage, rect: NormalizedRect) -> DecodedImage {
    match try_crop(image, rect) {
        Ok(cropped) => cropped,
        Err(err) => {
            tracing::warn!(%err, ?rect, "crop failed, keeping original image");
            image.clone()
        }
    }
}

/// Crop any `image` crate image to `rect`, or return a copy of it if the
/// region is empty.
pub fn crop_dynamic_image(image: &DynamicImage, rect: NormalizedRect) -> DynamicImage {
    let result = if image.width() == 0 || image.height() == 0 {
        Err(CropError::EmptyImage)
    } else {
        pixel_region(rect, image.width(), image.height())
    };

    match result {
        Ok(region) => image.crop_imm(region.x, region.y, region.width, region.height),
        Err(err) => {
            tracing::warn!(%err, ?rect, "crop failed, keeping original image");
            image.clone()
        }
    }
}

fn pixel_region(rect: NormalizedRect, width: u32, height: u32) -> Result<PixelRect, CropError> {
    if !rect.is_finite() {
        return Err(CropError::NonFiniteRect);
    }
    let region = rect.to_pixel_rect(width, height);
    if region.is_empty() {
        return Err(CropError::EmptyRegion);
    }
    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v); // R
                pixels.push(v); // G
                pixels.push(v); // B
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> NormalizedRect {
        NormalizedRect::new(x, y, w, h)
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = test_image(50, 40);
        let result = try_crop(&img, NormalizedRect::FULL).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_center_crop() {
        let img = test_image(10, 10);
        let result = try_crop(&img, rect(0.2, 0.2, 0.6, 0.6)).unwrap();

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 6);
        // Value at (2, 2) = 2 * 10 + 2 = 22
        assert_eq!(result.pixels[0], 22);
        // Last pixel comes from (7, 7) = 77
        assert_eq!(result.pixels[result.pixels.len() - 1], 77);
    }

    #[test]
    fn test_rectangular_crop() {
        let img = test_image(200, 100);
        let result = try_crop(&img, rect(0.0, 0.0, 0.25, 1.0)).unwrap();
        assert_eq!(result.width, 50);
        assert_eq!(result.height, 100);
        assert_eq!(result.pixels.len(), 50 * 100 * 3);
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let img = test_image(10, 10);
        let result = try_crop(&img, rect(0.8, 0.8, 0.5, 0.5)).unwrap();
        assert_eq!(result.width, 2);
        assert_eq!(result.height, 2);
        assert_eq!(result.pixels[0], 88);
    }

    #[test]
    fn test_crop_tolerates_float_drift() {
        let img = test_image(30, 20);
        let result = try_crop(&img, rect(-1e-12, 0.0, 1.0 + 1e-12, 1.0)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_zero_area_is_error() {
        let img = test_image(100, 100);
        assert_eq!(
            try_crop(&img, rect(0.5, 0.5, 0.001, 0.001)),
            Err(CropError::EmptyRegion)
        );
    }

    #[test]
    fn test_non_finite_is_error() {
        let img = test_image(10, 10);
        assert_eq!(
            try_crop(&img, rect(0.0, f64::NAN, 0.5, 0.5)),
            Err(CropError::NonFiniteRect)
        );
    }

    #[test]
    fn test_bad_buffer_is_error() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 5],
        };
        assert!(matches!(
            try_crop(&img, rect(0.0, 0.0, 0.5, 0.5)),
            Err(CropError::BufferSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_crop_or_original_falls_back() {
        let img = test_image(20, 20);
        let result = crop_or_original(&img, rect(0.9, 0.9, 0.0, 0.0));
        assert_eq!(result, img);
    }

    #[test]
    fn test_crop_or_original_crops() {
        let img = test_image(20, 20);
        let result = crop_or_original(&img, rect(0.0, 0.0, 0.5, 0.5));
        assert_eq!((result.width, result.height), (10, 10));
    }

    #[test]
    fn test_crop_dynamic_image() {
        let rgb = image::RgbImage::from_fn(40, 20, |x, y| image::Rgb([x as u8, y as u8, 0]));
        let img = DynamicImage::ImageRgb8(rgb);

        let cropped = crop_dynamic_image(&img, rect(0.5, 0.5, 0.25, 0.5));
        assert_eq!((cropped.width(), cropped.height()), (10, 10));

        let px = cropped.to_rgb8().get_pixel(0, 0).0;
        assert_eq!(px, [20, 10, 0]);
    }

    #[test]
    fn test_crop_dynamic_image_falls_back() {
        let img = DynamicImage::new_rgb8(16, 16);
        let cropped = crop_dynamic_image(&img, rect(0.0, 0.0, 0.0, 1.0));
        assert_eq!((cropped.width(), cropped.height()), (16, 16));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (4u32..=100, 4u32..=100)
    }

    /// Strategy for crop rects that stay inside the unit square.
    fn inside_rect_strategy() -> impl Strategy<Value = NormalizedRect> {
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(fx, fy, w, h)| {
            NormalizedRect::new(fx * (1.0 - w), fy * (1.0 - h), w, h)
        })
    }

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v);
                pixels.push(v);
                pixels.push(v);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: successful crops are well-formed and bounded by the input.
        #[test]
        fn prop_output_well_formed(
            (width, height) in dimensions_strategy(),
            rect in inside_rect_strategy(),
        ) {
            let img = create_test_image(width, height);
            if let Ok(result) = try_crop(&img, rect) {
                prop_assert!(result.width >= 1 && result.width <= width);
                prop_assert!(result.height >= 1 && result.height <= height);
                prop_assert_eq!(result.pixels.len(), result.expected_len());
            }
        }

        /// Property: the output matches the projected pixel region exactly.
        #[test]
        fn prop_output_matches_region(
            (width, height) in dimensions_strategy(),
            rect in inside_rect_strategy(),
        ) {
            let img = create_test_image(width, height);
            let region = rect.to_pixel_rect(width, height);
            prop_assume!(!region.is_empty());

            let result = try_crop(&img, rect).unwrap();
            prop_assert_eq!((result.width, result.height), (region.width, region.height));

            let expected_first = ((region.y * width + region.x) % 256) as u8;
            prop_assert_eq!(result.pixels[0], expected_first);
        }

        /// Property: the fallback never fails and never grows the image.
        #[test]
        fn prop_fallback_bounded(
            (width, height) in dimensions_strategy(),
            x in -2.0f64..=2.0,
            y in -2.0f64..=2.0,
            w in -1.0f64..=2.0,
            h in -1.0f64..=2.0,
        ) {
            let img = create_test_image(width, height);
            let result = crop_or_original(&img, NormalizedRect::new(x, y, w, h));
            prop_assert!(result.width <= width && result.height <= height);
            prop_assert_eq!(result.pixels.len(), result.expected_len());
        }

        /// Property: cropping is deterministic.
        #[test]
        fn prop_crop_is_deterministic(
            (width, height) in dimensions_strategy(),
            rect in inside_rect_strategy(),
        ) {
            let img = create_test_image(width, height);
            prop_assert_eq!(try_crop(&img, rect), try_crop(&img, rect));
        }
    }
}
