//! Pixel cropping for the final "Crop" step.
//!
//! The engine only ever deals in container space and normalized rects. Once
//! the user confirms, the host hands the source image and the latest
//! [`crate::geometry::NormalizedRect`] to this module.

mod crop;
mod types;

pub use crop::{crop_dynamic_image, crop_or_original, try_crop};
pub use types::{CropError, DecodedImage};
