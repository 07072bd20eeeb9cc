//! Crop engine WASM bindings.
//!
//! Wraps the core `CropEngine` together with drag and pinch trackers, so the
//! web UI only forwards raw pointer values and renders the rects it reads back.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const engine = new JsCropEngine(
//!   container.clientWidth, container.clientHeight,
//!   image.aspect_ratio,
//!   16, 9,
//!   undefined,                       // or a saved { x, y, width, height }
//!   (rect) => { latestRect = rect; },
//! );
//!
//! canvas.onpointerdown = (e) => engine.begin_drag(e.offsetX, e.offsetY);
//! canvas.onpointermove = (e) => engine.drag_to(e.offsetX, e.offsetY);
//! canvas.onpointerup = () => engine.end_drag();
//! ```

use visioncrop_core::engine::CropEngine;
use visioncrop_core::geometry::{NormalizedRect, Point, Rect, Size};
use visioncrop_core::gesture::{DragTracker, PinchTracker};
use visioncrop_core::overlay;
use visioncrop_core::ratio::Ratio;
use wasm_bindgen::prelude::*;

use crate::presets::preset_from_id;

/// JavaScript handle to a crop engine.
///
/// All rects crossing the boundary are `{ x, y, width, height }` objects.
/// Container-space rects are in the same units as the constructor's
/// container size; normalized rects are fractions of the image.
#[wasm_bindgen]
pub struct JsCropEngine {
    inner: CropEngine,
    drag: DragTracker,
    pinch: PinchTracker,
}

#[wasm_bindgen]
impl JsCropEngine {
    /// Create an engine for one displayed image.
    ///
    /// # Arguments
    /// * `container_width`, `container_height` - Display area size
    /// * `image_aspect` - Source image width / height
    /// * `ratio_width`, `ratio_height` - Initial crop aspect ratio
    /// * `initial_rect` - Optional saved normalized rect (`undefined` or `null` for none)
    /// * `on_rect_change` - Called with the normalized rect now and after every change
    ///
    /// # Errors
    /// Returns an error if the container, aspect, ratio or initial rect is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_width: f64,
        container_height: f64,
        image_aspect: f64,
        ratio_width: f64,
        ratio_height: f64,
        initial_rect: JsValue,
        on_rect_change: js_sys::Function,
    ) -> Result<JsCropEngine, JsValue> {
        let ratio = Ratio::new(ratio_width, ratio_height).map_err(to_js_error)?;
        let initial: Option<NormalizedRect> = serde_wasm_bindgen::from_value(initial_rect)
            .map_err(|e| JsValue::from_str(&format!("Invalid initial rect: {}", e)))?;

        let inner = CropEngine::new(
            Size::new(container_width, container_height),
            image_aspect,
            ratio,
            initial,
            move |rect| emit(&on_rect_change, rect),
        )
        .map_err(to_js_error)?;

        Ok(JsCropEngine {
            inner,
            drag: DragTracker::new(),
            pinch: PinchTracker::new(),
        })
    }

    /// Move the crop so its center is at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.inner.move_to(Point::new(x, y));
    }

    /// Scale the given base rect by `scale` about its center.
    pub fn resize(
        &mut self,
        base_x: f64,
        base_y: f64,
        base_width: f64,
        base_height: f64,
        scale: f64,
    ) {
        let base = Rect::new(base_x, base_y, base_width, base_height);
        self.inner.resize(base, scale);
    }

    /// Switch to a custom aspect ratio, keeping the crop center.
    ///
    /// # Errors
    /// Returns an error if either component is not a positive number.
    pub fn apply_ratio(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        let ratio = Ratio::new(width, height).map_err(to_js_error)?;
        self.inner.apply_ratio(ratio);
        Ok(())
    }

    /// Switch to a preset from `aspect_ratio_presets()`, keeping the crop center.
    ///
    /// # Errors
    /// Returns an error if the id is unknown.
    pub fn apply_preset(&mut self, id: u8) -> Result<(), JsValue> {
        let preset = preset_from_id(id).map_err(|e| JsValue::from_str(&e))?;
        self.inner.apply_ratio(preset.ratio());
        Ok(())
    }

    /// Pointer went down at `(x, y)`.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag.begin(self.inner.crop_rect(), Point::new(x, y));
    }

    /// Pointer moved to `(x, y)`. Ignored if no drag is active.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Some(event) = self.drag.update(Point::new(x, y)) {
            self.inner.handle(event);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Pinch magnification changed to `scale` (cumulative since the pinch began).
    pub fn pinch(&mut self, scale: f64) {
        let event = self.pinch.update(self.inner.crop_rect(), scale);
        self.inner.handle(event);
    }

    pub fn end_pinch(&mut self) {
        self.pinch.end();
    }

    /// Region the image occupies inside the container.
    pub fn image_rect(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.image_rect())
    }

    /// Current crop rect in container space.
    pub fn crop_rect(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.crop_rect())
    }

    /// Current crop rect as fractions of the image.
    pub fn normalized_rect(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.normalized_rect())
    }

    /// Rectangles to shade outside the crop, in container space.
    pub fn dimming_regions(&self) -> Result<JsValue, JsValue> {
        to_js(&overlay::dimming_regions(
            self.inner.image_rect(),
            self.inner.crop_rect(),
        ))
    }

    /// Rule-of-thirds lines as a flat `[x1, y1, x2, y2, ...]` array (4 lines).
    pub fn grid_lines(&self) -> Vec<f64> {
        overlay::grid_lines(self.inner.crop_rect())
            .iter()
            .flat_map(|line| [line.start.x, line.start.y, line.end.x, line.end.y])
            .collect()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Forward a rect change to JavaScript.
///
/// The engine callback cannot fail, so exceptions thrown by the JS handler
/// are reported on the console instead of propagated.
fn emit(callback: &js_sys::Function, rect: NormalizedRect) {
    let value = match serde_wasm_bindgen::to_value(&rect) {
        Ok(value) => value,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "Failed to serialize crop rect: {}",
                e
            )));
            return;
        }
    };

    if let Err(err) = callback.call1(&JsValue::NULL, &value) {
        web_sys::console::error_2(&JsValue::from_str("on_rect_change threw:"), &err);
    }
}
