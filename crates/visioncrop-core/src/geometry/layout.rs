//! Pure layout math for the crop overlay.
//!
//! Everything here is stateless: the functions take rectangles in container
//! space and return new ones. [`crate::engine::CropEngine`] composes them and
//! owns the live crop rect.

use super::{NormalizedRect, Point, Rect, Size};
use crate::ratio::Ratio;

/// Fit an image of the given aspect ratio into `container`, centered.
///
/// If the container is relatively wider than the image, the image fills the
/// container height and is centered horizontally. Otherwise it fills the
/// width and is centered vertically.
///
/// # Example
///
/// ```
/// use visioncrop_core::geometry::{fit_rect, Rect, Size};
///
/// let fitted = fit_rect(1.0, Size::new(200.0, 100.0));
/// assert_eq!(fitted, Rect::new(50.0, 0.0, 100.0, 100.0));
/// ```
pub fn fit_rect(aspect: f64, container: Size) -> Rect {
    if container.aspect() > aspect {
        let height = container.height;
        let width = height * aspect;
        Rect::new((container.width - width) / 2.0, 0.0, width, height)
    } else {
        let width = container.width;
        let height = width / aspect;
        Rect::new(0.0, (container.height - height) / 2.0, width, height)
    }
}

/// Build the largest `ratio`-shaped frame that fits inside `image_rect`.
///
/// The frame is centered on `center` (default: the image center) and then
/// shifted, never shrunk, so that it stays inside the image.
pub fn make_crop_frame(image_rect: Rect, ratio: Ratio, center: Option<Point>) -> Rect {
    let target = ratio.value();

    let (width, height) = if target > image_rect.aspect() {
        (image_rect.width, image_rect.width / target)
    } else {
        (image_rect.height * target, image_rect.height)
    };

    let center = center.unwrap_or_else(|| image_rect.center());
    let frame = Rect::from_center(center, Size::new(width, height));
    let origin = clamp_origin(image_rect, frame.origin(), frame.size());

    Rect::new(origin.x, origin.y, width, height)
}

/// Clamp the origin of a `size`-sized rect so it stays inside `bounds`.
///
/// Uses `max(lo, min(v, hi))` per axis, so when the rect is larger than the
/// bounds the origin collapses to the bounds' minimum edge.
pub fn clamp_origin(bounds: Rect, origin: Point, size: Size) -> Point {
    Point::new(
        clamp_axis(origin.x, bounds.min_x(), bounds.max_x() - size.width),
        clamp_axis(origin.y, bounds.min_y(), bounds.max_y() - size.height),
    )
}

#[inline]
fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    // Not f64::clamp: an inverted range must resolve to `lo`, not panic.
    lo.max(value.min(hi))
}

/// Express `crop_rect` as fractions of `image_rect`.
pub fn normalize(crop_rect: Rect, image_rect: Rect) -> NormalizedRect {
    NormalizedRect::new(
        (crop_rect.min_x() - image_rect.min_x()) / image_rect.width,
        (crop_rect.min_y() - image_rect.min_y()) / image_rect.height,
        crop_rect.width / image_rect.width,
        crop_rect.height / image_rect.height,
    )
}

/// Inverse of [`normalize`]: map a normalized rect back into container space.
pub fn denormalize(rect: NormalizedRect, image_rect: Rect) -> Rect {
    Rect::new(
        image_rect.min_x() + rect.x * image_rect.width,
        image_rect.min_y() + rect.y * image_rect.height,
        rect.width * image_rect.width,
        rect.height * image_rect.height,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
