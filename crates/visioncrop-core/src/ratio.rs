//! Aspect ratios and the crop preset table.
//!
//! [`Ratio`] is the only thing the geometry engine consumes. The preset
//! table in [`CropAspectRatio`] maps a menu entry to a ratio and a display
//! label, and is kept out of the engine entirely.
//!
//! # Freeform
//!
//! `Freeform` is a placeholder: it has no fixed ratio and currently crops as
//! 1:1, the same as `Square`. Hosts that need to tell the two apart should use
//! [`CropAspectRatio::fixed_ratio`], which returns `None` for freeform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;

/// A target width:height proportion.
///
/// Components are positive and finite but not necessarily reduced, so
/// `Ratio::new(16.0, 9.0)` and `Ratio::new(32.0, 18.0)` describe the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RatioParts", into = "RatioParts")]
pub struct Ratio {
    width: f64,
    height: f64,
}

/// Unvalidated wire form of a [`Ratio`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RatioParts {
    width: f64,
    height: f64,
}

impl Ratio {
    /// 1:1
    pub const SQUARE: Ratio = Ratio::from_parts(1.0, 1.0);

    /// Create a ratio, rejecting zero, negative and non-finite components.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        let valid = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !valid {
            return Err(GeometryError::InvalidRatio { width, height });
        }
        Ok(Self::from_parts(width, height))
    }

    const fn from_parts(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width divided by height.
    #[inline]
    pub fn value(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl TryFrom<RatioParts> for Ratio {
    type Error = GeometryError;

    fn try_from(parts: RatioParts) -> Result<Self, Self::Error> {
        Ratio::new(parts.width, parts.height)
    }
}

impl From<Ratio> for RatioParts {
    fn from(ratio: Ratio) -> Self {
        RatioParts {
            width: ratio.width,
            height: ratio.height,
        }
    }
}

/// Crop aspect ratio presets offered in the ratio menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CropAspectRatio {
    /// 1:1
    #[default]
    Square,
    /// 1:2
    Portrait1x2,
    /// 2:1
    Landscape2x1,
    /// 3:4
    Portrait3x4,
    /// 4:3
    Landscape4x3,
    /// 9:16
    Portrait9x16,
    /// 16:9
    Landscape16x9,
    /// Unconstrained placeholder, crops as 1:1 for now.
    Freeform,
}

/// Error returned when a preset label or id is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown aspect ratio preset: {0}")]
pub struct UnknownPreset(pub String);

impl CropAspectRatio {
    /// All presets, in menu order.
    pub const ALL: [CropAspectRatio; 8] = [
        CropAspectRatio::Square,
        CropAspectRatio::Portrait1x2,
        CropAspectRatio::Landscape2x1,
        CropAspectRatio::Portrait3x4,
        CropAspectRatio::Landscape4x3,
        CropAspectRatio::Portrait9x16,
        CropAspectRatio::Landscape16x9,
        CropAspectRatio::Freeform,
    ];

    /// Iterate over all presets in menu order.
    pub fn all() -> impl Iterator<Item = CropAspectRatio> {
        Self::ALL.into_iter()
    }

    /// The preset's fixed ratio, or `None` for freeform.
    pub fn fixed_ratio(self) -> Option<Ratio> {
        let (w, h) = match self {
            CropAspectRatio::Square => (1.0, 1.0),
            CropAspectRatio::Portrait1x2 => (1.0, 2.0),
            CropAspectRatio::Landscape2x1 => (2.0, 1.0),
            CropAspectRatio::Portrait3x4 => (3.0, 4.0),
            CropAspectRatio::Landscape4x3 => (4.0, 3.0),
            CropAspectRatio::Portrait9x16 => (9.0, 16.0),
            CropAspectRatio::Landscape16x9 => (16.0, 9.0),
            CropAspectRatio::Freeform => return None,
        };
        Some(Ratio::from_parts(w, h))
    }

    /// The ratio the engine should use for this preset.
    ///
    /// Freeform falls back to [`Ratio::SQUARE`].
    pub fn ratio(self) -> Ratio {
        self.fixed_ratio().unwrap_or(Ratio::SQUARE)
    }

    pub fn is_freeform(self) -> bool {
        self == CropAspectRatio::Freeform
    }

    /// Menu label, e.g. `"16:9"`.
    pub fn label(self) -> &'static str {
        match self {
            CropAspectRatio::Square => "1:1",
            CropAspectRatio::Portrait1x2 => "1:2",
            CropAspectRatio::Landscape2x1 => "2:1",
            CropAspectRatio::Portrait3x4 => "3:4",
            CropAspectRatio::Landscape4x3 => "4:3",
            CropAspectRatio::Portrait9x16 => "9:16",
            CropAspectRatio::Landscape16x9 => "16:9",
            CropAspectRatio::Freeform => "Freeform",
        }
    }

    /// Stable numeric id (index in [`CropAspectRatio::ALL`]).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a preset by its numeric id.
    pub fn from_id(id: u8) -> Option<CropAspectRatio> {
        Self::ALL.get(id as usize).copied()
    }
}

impl fmt::Display for CropAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CropAspectRatio {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .find(|preset| preset.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
