//! Core types for crop geometry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for crop geometry construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The container has a zero, negative or non-finite dimension.
    #[error("Invalid container size: {width}x{height}")]
    InvalidContainerSize { width: f64, height: f64 },

    /// The image aspect ratio is not a positive finite number.
    #[error("Invalid image aspect ratio: {0}")]
    InvalidImageAspect(f64),

    /// A ratio component is not a positive finite number.
    #[error("Invalid aspect ratio: {width}:{height}")]
    InvalidRatio { width: f64, height: f64 },

    /// The configured minimum crop size is not a positive finite number.
    #[error("Invalid minimum crop size: {0}")]
    InvalidMinSize(f64),
}

/// A point in container space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A size in container space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect(self) -> f64 {
        self.width / self.height
    }

    /// Check that both dimensions are positive and finite.
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle in container space.
///
/// The origin is the top-left corner; y grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle of `size` centered on `center`.
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Check whether `other` lies entirely inside this rectangle.
    ///
    /// `tolerance` absorbs floating-point drift at the edges.
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.min_x() >= self.min_x() - tolerance
            && other.min_y() >= self.min_y() - tolerance
            && other.max_x() <= self.max_x() + tolerance
            && other.max_y() <= self.max_y() + tolerance
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle expressed as fractions of the image rect.
///
/// `(0, 0)` is the top-left corner of the image, `(1, 1)` the bottom-right.
/// This is the container-independent form exchanged with callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for NormalizedRect {
    fn default() -> Self {
        Self::FULL
    }
}

impl NormalizedRect {
    /// The whole image.
    pub const FULL: NormalizedRect = NormalizedRect::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check that all four components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Project onto an image of `width` x `height` pixels.
    ///
    /// Edges are rounded to the nearest pixel and clamped to the image, so the
    /// result may have zero width or height for degenerate input. Non-finite
    /// components yield an empty rect.
    pub fn to_pixel_rect(&self, width: u32, height: u32) -> PixelRect {
        if !self.is_finite() {
            return PixelRect::default();
        }

        let w = width as f64;
        let h = height as f64;

        let left = (self.x * w).round().clamp(0.0, w);
        let top = (self.y * h).round().clamp(0.0, h);
        let right = ((self.x + self.width) * w).round().clamp(left, w);
        let bottom = ((self.y + self.height) * h).round().clamp(top, h);

        PixelRect {
            x: left as u32,
            y: top as u32,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        }
    }
}

/// An integer pixel region inside a concrete image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
