//! Aspect ratio preset bindings.
//!
//! Exposes the preset table so the ratio menu can be built in JavaScript.

use serde::Serialize;
use visioncrop_core::ratio::CropAspectRatio;
use wasm_bindgen::prelude::*;

/// One entry of the ratio menu, as seen from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PresetInfo {
    id: u8,
    label: &'static str,
    width: f64,
    height: f64,
    freeform: bool,
}

impl From<CropAspectRatio> for PresetInfo {
    fn from(preset: CropAspectRatio) -> Self {
        let ratio = preset.ratio();
        Self {
            id: preset.id(),
            label: preset.label(),
            width: ratio.width(),
            height: ratio.height(),
            freeform: preset.is_freeform(),
        }
    }
}

pub(crate) fn preset_infos() -> Vec<PresetInfo> {
    CropAspectRatio::all().map(PresetInfo::from).collect()
}

/// Look up a preset id, with an error message suitable for JavaScript.
pub(crate) fn preset_from_id(id: u8) -> Result<CropAspectRatio, String> {
    CropAspectRatio::from_id(id).ok_or_else(|| format!("Unknown aspect ratio preset id: {}", id))
}

/// List all aspect ratio presets in menu order.
///
/// Each entry is `{ id, label, width, height, freeform }`. Freeform reports
/// the 1:1 ratio it currently crops with.
///
/// # Example (TypeScript)
///
/// ```typescript
/// for (const preset of aspect_ratio_presets()) {
///   menu.add(preset.label, () => engine.apply_preset(preset.id));
/// }
/// ```
#[wasm_bindgen]
pub fn aspect_ratio_presets() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&preset_infos())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize presets: {}", e)))
}

/// Get the menu label for a preset id, or `undefined` if unknown.
#[wasm_bindgen]
pub fn preset_label(id: u8) -> Option<String> {
    CropAspectRatio::from_id(id).map(|preset| preset.label().to_string())
}
