//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core VisionCrop
//! types, handling the conversion between Rust and JavaScript representations.

use visioncrop_core::raster::DecodedImage;
use wasm_bindgen::prelude::*;

/// A decoded RGB image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height, ready to pass to `JsCropEngine`.
    ///
    /// Returns 0 for an empty image, which the engine rejects.
    #[wasm_bindgen(getter)]
    pub fn aspect_ratio(&self) -> f64 {
        if self.width == 0 || self.height == 0 {
            return 0.0;
        }
        self.width as f64 / self.height as f64
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsDecodedImage {
    /// Create a JsDecodedImage from a core DecodedImage.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
