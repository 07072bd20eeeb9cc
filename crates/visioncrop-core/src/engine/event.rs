//! Discrete messages consumed by the engine.
//!
//! The gesture layer never touches engine fields directly. It produces these
//! events and the engine applies them through its public mutators.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::ratio::Ratio;

/// Drag update: move the crop rect so its center lands on `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub center: Point,
}

/// Pinch update: scale `base_rect` (captured at gesture start) by `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub base_rect: Rect,
    pub scale: f64,
}

/// Any state transition the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CropEvent {
    Move(MoveEvent),
    Resize(ResizeEvent),
    /// The user picked another aspect ratio preset.
    ApplyRatio(Ratio),
}

impl From<MoveEvent> for CropEvent {
    fn from(event: MoveEvent) -> Self {
        CropEvent::Move(event)
    }
}

impl From<ResizeEvent> for CropEvent {
    fn from(event: ResizeEvent) -> Self {
        CropEvent::Resize(event)
    }
}

impl From<Ratio> for CropEvent {
    fn from(ratio: Ratio) -> Self {
        CropEvent::ApplyRatio(ratio)
    }
}
