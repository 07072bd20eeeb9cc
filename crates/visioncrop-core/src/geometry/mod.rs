//! Crop geometry: rectangles, image fitting and normalization.
//!
//! # Coordinate Spaces
//!
//! - **Container space**: floating-point display units. The image rect and
//!   the crop rect both live here.
//! - **Normalized space**: fractions of the image rect, `(0, 0)` top-left to
//!   `(1, 1)` bottom-right. Independent of the container size, so it survives
//!   container resizes and re-renders.
//! - **Pixel space**: integer pixels of a concrete source image, produced by
//!   [`NormalizedRect::to_pixel_rect`] when cropping.

mod layout;
mod types;

pub use layout::{clamp_origin, denormalize, fit_rect, make_crop_frame, normalize};
pub use types::{GeometryError, NormalizedRect, PixelRect, Point, Rect, Size};
