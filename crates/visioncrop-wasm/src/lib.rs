//! VisionCrop WASM - WebAssembly bindings for VisionCrop
//!
//! This crate provides WASM bindings to expose the visioncrop-core crop
//! overlay to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `engine` - Crop engine handle with drag/pinch input and change callback
//! - `presets` - Aspect ratio preset table for the ratio menu
//! - `crop` - Pixel cropping of the confirmed region
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropEngine, JsDecodedImage, crop_image } from '@visioncrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsDecodedImage(width, height, rgbPixels);
//! let rect = { x: 0, y: 0, width: 1, height: 1 };
//! const engine = new JsCropEngine(800, 600, image.aspect_ratio, 1, 1, undefined, (r) => {
//!   rect = r;
//! });
//!
//! // ...user drags and pinches...
//!
//! const cropped = crop_image(image, rect.x, rect.y, rect.width, rect.height);
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod engine;
mod presets;
mod types;

// Re-export public types
pub use crop::{crop_image, try_crop_image};
pub use engine::JsCropEngine;
pub use presets::{aspect_ratio_presets, preset_label};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
