//! The crop geometry engine.
//!
//! [`CropEngine`] owns the fitted image rect and the live crop rect, both in
//! container space. Every state change goes through [`CropEngine::move_to`],
//! [`CropEngine::resize`] or [`CropEngine::apply_ratio`] (or
//! [`CropEngine::handle`] with an event), and each one reports the new
//! [`NormalizedRect`] through the callback injected at construction.
//!
//! # Invariants
//!
//! - The image rect is computed once and never changes.
//! - The crop rect always lies inside the image rect.
//! - `resize` never produces a width narrower than the configured minimum
//!   size unless the image itself is too small to hold it.
//!
//! # Example
//!
//! ```ignore
//! use visioncrop_core::engine::CropEngine;
//! use visioncrop_core::geometry::{Point, Size};
//! use visioncrop_core::ratio::CropAspectRatio;
//!
//! let mut engine = CropEngine::new(
//!     Size::new(800.0, 600.0),
//!     4000.0 / 3000.0,
//!     CropAspectRatio::Square.ratio(),
//!     None,
//!     |rect| println!("crop is now {:?}", rect),
//! )?;
//! engine.move_to(Point::new(100.0, 100.0));
//! ```

mod config;
mod event;

pub use config::{CropConfig, DEFAULT_MIN_SIZE};
pub use event::{CropEvent, MoveEvent, ResizeEvent};

use std::fmt;

use crate::geometry::{
    clamp_origin, denormalize, fit_rect, make_crop_frame, normalize, GeometryError, NormalizedRect,
    Point, Rect, Size,
};
use crate::ratio::Ratio;

/// Callback receiving the normalized crop rect after every change.
pub type RectChangeCallback = Box<dyn FnMut(NormalizedRect)>;

/// Interactive crop state for one displayed image.
pub struct CropEngine {
    image_rect: Rect,
    crop_rect: Rect,
    config: CropConfig,
    on_rect_change: RectChangeCallback,
}

impl fmt::Debug for CropEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropEngine")
            .field("image_rect", &self.image_rect)
            .field("crop_rect", &self.crop_rect)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CropEngine {
    /// Create an engine with the default [`CropConfig`].
    ///
    /// See [`CropEngine::with_config`].
    pub fn new<F>(
        container: Size,
        image_aspect: f64,
        ratio: Ratio,
        initial: Option<NormalizedRect>,
        on_rect_change: F,
    ) -> Result<Self, GeometryError>
    where
        F: FnMut(NormalizedRect) + 'static,
    {
        Self::with_config(
            container,
            image_aspect,
            ratio,
            initial,
            CropConfig::default(),
            on_rect_change,
        )
    }

    /// Create an engine.
    ///
    /// The image is fitted into `container` preserving `image_aspect`. The
    /// crop rect is restored from `initial` when given, otherwise it is the
    /// largest `ratio`-shaped frame centered in the image. The callback is
    /// invoked once before this returns.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidContainerSize`] if either container
    ///   dimension is zero, negative or non-finite
    /// - [`GeometryError::InvalidImageAspect`] if `image_aspect` is not a
    ///   positive finite number
    /// - [`GeometryError::InvalidMinSize`] if the config is invalid
    pub fn with_config<F>(
        container: Size,
        image_aspect: f64,
        ratio: Ratio,
        initial: Option<NormalizedRect>,
        config: CropConfig,
        on_rect_change: F,
    ) -> Result<Self, GeometryError>
    where
        F: FnMut(NormalizedRect) + 'static,
    {
        if !container.is_valid() {
            return Err(GeometryError::InvalidContainerSize {
                width: container.width,
                height: container.height,
            });
        }
        if !image_aspect.is_finite() || image_aspect <= 0.0 {
            return Err(GeometryError::InvalidImageAspect(image_aspect));
        }
        config.validate()?;

        let image_rect = fit_rect(image_aspect, container);
        let crop_rect = match initial {
            Some(rect) if rect.is_finite() => restore_crop_rect(rect, image_rect),
            Some(rect) => {
                tracing::warn!(?rect, "ignoring non-finite initial crop rect");
                make_crop_frame(image_rect, ratio, None)
            }
            None => make_crop_frame(image_rect, ratio, None),
        };

        tracing::debug!(?image_rect, ?crop_rect, %ratio, "crop engine created");

        let mut engine = Self {
            image_rect,
            crop_rect,
            config,
            on_rect_change: Box::new(on_rect_change),
        };
        engine.notify();
        Ok(engine)
    }

    /// Region the image occupies inside the container.
    pub fn image_rect(&self) -> Rect {
        self.image_rect
    }

    /// Current crop selection in container space.
    pub fn crop_rect(&self) -> Rect {
        self.crop_rect
    }

    /// Settings the engine was created with.
    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Current crop selection as fractions of the image rect.
    pub fn normalized_rect(&self) -> NormalizedRect {
        normalize(self.crop_rect, self.image_rect)
    }

    /// Move the crop rect so its center is `center`, keeping its size.
    ///
    /// The origin is clamped so the rect stays inside the image. Always
    /// notifies, even if the rect did not move.
    pub fn move_to(&mut self, center: Point) {
        let size = self.crop_rect.size();
        let target = Rect::from_center(center, size);
        let origin = clamp_origin(self.image_rect, target.origin(), size);

        self.crop_rect = Rect::new(origin.x, origin.y, size.width, size.height);
        tracing::debug!(crop_rect = ?self.crop_rect, "crop moved");
        self.notify();
    }

    /// Scale `base_rect` by `scale` about its own center, keeping its aspect
    /// ratio.
    ///
    /// `base_rect` should be the crop rect captured when the gesture started,
    /// not the live one: every call recomputes from the same anchor, so
    /// `resize(b, s1); resize(b, s2)` ends where `resize(b, s2)` alone does.
    ///
    /// Width is floored at the minimum size and clamped to the image; if the
    /// resulting height overflows the image it is clamped and the width
    /// re-derived from the ratio. Only the width is floored, so a landscape
    /// crop can end up shorter than the minimum size. Non-positive or
    /// NaN scales saturate through these clamps. A degenerate `base_rect`
    /// (non-positive or non-finite size) is replaced by the live crop rect.
    pub fn resize(&mut self, base_rect: Rect, scale: f64) {
        let base = if is_usable_base(&base_rect) {
            base_rect
        } else {
            tracing::debug!(?base_rect, "degenerate resize base, using live crop rect");
            self.crop_rect
        };

        let ratio = base.aspect();

        // Image bounds win over the minimum size so the rect always fits.
        let mut width = self
            .config
            .min_size
            .max(base.width * scale)
            .min(self.image_rect.width);
        let mut height = width / ratio;

        if height > self.image_rect.height {
            height = self.image_rect.height;
            width = height * ratio;
        }

        let size = Size::new(width, height);
        let target = Rect::from_center(base.center(), size);
        let origin = clamp_origin(self.image_rect, target.origin(), size);

        self.crop_rect = Rect::new(origin.x, origin.y, width, height);
        tracing::debug!(scale, crop_rect = ?self.crop_rect, "crop resized");
        self.notify();
    }

    /// Replace the crop rect with the largest `ratio`-shaped frame centered
    /// on the current crop center.
    ///
    /// Only the center survives; the previous size and shape are discarded.
    pub fn apply_ratio(&mut self, ratio: Ratio) {
        let center = self.crop_rect.center();
        self.crop_rect = make_crop_frame(self.image_rect, ratio, Some(center));
        tracing::debug!(%ratio, crop_rect = ?self.crop_rect, "crop ratio applied");
        self.notify();
    }

    /// Apply a gesture or menu event.
    pub fn handle(&mut self, event: impl Into<CropEvent>) {
        match event.into() {
            CropEvent::Move(MoveEvent { center }) => self.move_to(center),
            CropEvent::Resize(ResizeEvent { base_rect, scale }) => self.resize(base_rect, scale),
            CropEvent::ApplyRatio(ratio) => self.apply_ratio(ratio),
        }
    }

    fn notify(&mut self) {
        let rect = self.normalized_rect();
        (self.on_rect_change)(rect);
    }
}

fn is_usable_base(rect: &Rect) -> bool {
    rect.size().is_valid() && rect.x.is_finite() && rect.y.is_finite()
}

/// Map a caller-supplied normalized rect into the image, shrinking and
/// shifting it only as far as needed to keep it inside.
fn restore_crop_rect(rect: NormalizedRect, image_rect: Rect) -> Rect {
    let raw = denormalize(rect, image_rect);
    let size = Size::new(
        raw.width.clamp(0.0, image_rect.width),
        raw.height.clamp(0.0, image_rect.height),
    );
    let origin = clamp_origin(image_rect, raw.origin(), size);
    Rect::new(origin.x, origin.y, size.width, size.height)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
