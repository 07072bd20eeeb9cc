//! WASM bindings for pixel cropping.
//!
//! This module provides JavaScript bindings for cutting the confirmed crop
//! region out of the source image.

use crate::types::JsDecodedImage;
use visioncrop_core::geometry::NormalizedRect;
use visioncrop_core::raster::{crop_or_original, try_crop};
use wasm_bindgen::prelude::*;

/// Crop an image using normalized coordinates.
///
/// Crops a region from the image using coordinates in the range [0, 1],
/// where (0, 0) is the top-left corner and (1, 1) is the bottom-right corner.
/// Pass the values reported by `JsCropEngine`'s change callback.
///
/// If the region cannot be cropped (it rounds to zero pixels, contains NaN,
/// or the pixel buffer is malformed) a copy of the original image is returned.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = engine.normalized_rect();
/// const cropped = crop_image(sourceImage, rect.x, rect.y, rect.width, rect.height);
/// ```
#[wasm_bindgen]
pub fn crop_image(
    image: &JsDecodedImage,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> JsDecodedImage {
    let src = image.to_decoded();
    let result = crop_or_original(&src, NormalizedRect::new(x, y, width, height));
    JsDecodedImage::from_decoded(result)
}

/// Crop an image using normalized coordinates, failing instead of falling
/// back to the original.
///
/// # Errors
///
/// Returns an error describing why the region could not be cropped.
#[wasm_bindgen]
pub fn try_crop_image(
    image: &JsDecodedImage,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<JsDecodedImage, JsValue> {
    let src = image.to_decoded();
    try_crop(&src, NormalizedRect::new(x, y, width, height))
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_try_crop_image_ok() {
        let img = JsDecodedImage::new(10, 10, vec![0u8; 300]);
        let result = try_crop_image(&img, 0.0, 0.0, 0.5, 0.5);
        assert!(result.is_ok());
    }

    #[wasm_bindgen_test]
    fn test_try_crop_image_empty_region() {
        let img = JsDecodedImage::new(10, 10, vec![0u8; 300]);
        let result = try_crop_image(&img, 0.5, 0.5, 0.0, 0.0);
        assert!(result.is_err());
    }
}
