//! VisionCrop Core - Crop overlay geometry
//!
//! This crate provides the geometry behind an interactive crop overlay: the
//! user drags and pinch-resizes a crop frame over a displayed image, the
//! frame stays inside the image and optionally keeps a preset aspect ratio,
//! and the confirmed selection is cut out of the source pixels.
//!
//! # Modules
//!
//! - `geometry` - Rectangles, image fitting and normalization
//! - `engine` - The stateful [`CropEngine`] and its events
//! - `ratio` - Aspect ratios and the preset table
//! - `gesture` - Drag/pinch trackers producing engine events
//! - `overlay` - Dimming bands and rule-of-thirds grid for rendering
//! - `raster` - Cropping RGB buffers by a normalized rect

pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod overlay;
pub mod raster;
pub mod ratio;

pub use engine::{CropConfig, CropEngine, CropEvent, MoveEvent, ResizeEvent};
pub use geometry::{GeometryError, NormalizedRect, Point, Rect, Size};
pub use ratio::{CropAspectRatio, Ratio};
pub use raster::{crop_or_original, try_crop, CropError, DecodedImage};
