//! Gesture adapters turning raw pointer input into engine events.
//!
//! Platform gesture recognition is out of scope. A host feeds these trackers
//! with the values its recognizer already reports (pointer locations for a
//! drag, a cumulative magnification for a pinch) and forwards the produced
//! events to [`crate::engine::CropEngine::handle`].

use crate::engine::{MoveEvent, ResizeEvent};
use crate::geometry::{Point, Rect};

/// Translates a drag into crop-center updates.
///
/// The crop follows the pointer delta rather than snapping its center to the
/// pointer, so grabbing the frame near an edge does not make it jump.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    anchor: Option<DragAnchor>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    start_center: Point,
    start_touch: Point,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `touch` while the crop rect is `crop_rect`.
    pub fn begin(&mut self, crop_rect: Rect, touch: Point) {
        self.anchor = Some(DragAnchor {
            start_center: crop_rect.center(),
            start_touch: touch,
        });
    }

    /// Pointer moved to `location`. Returns `None` if no drag is active.
    pub fn update(&self, location: Point) -> Option<MoveEvent> {
        let anchor = self.anchor?;
        Some(MoveEvent {
            center: Point::new(
                anchor.start_center.x + location.x - anchor.start_touch.x,
                anchor.start_center.y + location.y - anchor.start_touch.y,
            ),
        })
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }
}

/// Translates a pinch into resize events anchored on the gesture's start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchTracker {
    base_rect: Option<Rect>,
}

impl PinchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pinch changed to cumulative `scale`.
    ///
    /// The first update of a pinch captures `live_crop_rect` as the base;
    /// later updates ignore it and reuse the captured base until [`end`].
    ///
    /// [`end`]: PinchTracker::end
    pub fn update(&mut self, live_crop_rect: Rect, scale: f64) -> ResizeEvent {
        let base_rect = *self.base_rect.get_or_insert(live_crop_rect);
        ResizeEvent { base_rect, scale }
    }

    pub fn end(&mut self) {
        self.base_rect = None;
    }

    /// The base captured for the current pinch, if any.
    pub fn base_rect(&self) -> Option<Rect> {
        self.base_rect
    }
}
