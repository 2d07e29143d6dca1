//! `wasm-bindgen` exports for the grid controller.

use wasm_bindgen::prelude::*;

use crate::controller::{GridController, GridLayoutSpec};

fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let global = js_sys::global();
            if let Ok(console) = js_sys::Reflect::get(&global, &"console".into()) {
                if let Ok(error) = js_sys::Reflect::get(&console, &"error".into()) {
                    if let Ok(f) = error.dyn_into::<js_sys::Function>() {
                        let _ = f.call1(&console, &JsValue::from_str(&format!("{info}")));
                    }
                }
            }
        }));
    });
}

/// Browser-facing grid reorder runner.
///
/// Host-driven: JavaScript owns pointer capture and layout measurement,
/// forwarding both here; an order change is signalled through the return
/// value of `pointerMove`, after which the host re-renders from `order()`
/// and reports fresh measurements.
#[wasm_bindgen]
pub struct GridRunner {
    inner: GridController,
}

#[wasm_bindgen]
impl GridRunner {
    /// Create an empty runner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        install_panic_hook();
        Self {
            inner: GridController::new(),
        }
    }

    /// Configure the grid layout from a JSON string.
    ///
    /// Expected format:
    /// ```json
    /// { "columns": 3, "tile_width": 160, "tile_height": 120,
    ///   "column_gap": 16, "row_gap": 16,
    ///   "origin_x": 0, "origin_y": 0 }
    /// ```
    ///
    /// `row_gap` becomes the engine's row margin. Returns `false` on a
    /// malformed spec.
    pub fn configure(&mut self, json: &str) -> bool {
        match serde_json::from_str::<GridLayoutSpec>(json) {
            Ok(spec) => {
                self.inner.apply_layout_spec(&spec);
                true
            }
            Err(_) => false,
        }
    }

    /// Replace the set of tile ids, in display order.
    #[wasm_bindgen(js_name = setItems)]
    pub fn set_items(&mut self, ids: &[u32]) {
        self.inner.set_items(ids);
    }

    /// Record one measured tile box (call per tile, each layout pass).
    pub fn measure(&mut self, index: u32, left: f64, top: f64, width: f64, height: f64) {
        self.inner.measure(index as usize, left, top, width, height);
    }

    /// Start a new measure pass; prior measurements become stale.
    #[wasm_bindgen(js_name = beginLayoutPass)]
    pub fn begin_layout_pass(&mut self) {
        self.inner.begin_layout_pass();
    }

    /// Pointer pressed. Returns whether a tile was hit.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, pointer_id: u32, x: f64, y: f64) -> bool {
        self.inner.pointer_down(pointer_id, x, y)
    }

    /// Pointer moved. Returns whether the display order changed.
    ///
    /// Throws when the host queries a drag source it never measured.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, pointer_id: u32, x: f64, y: f64) -> Result<bool, JsValue> {
        self.inner
            .pointer_move(pointer_id, x, y)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Pointer released.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, pointer_id: u32, x: f64, y: f64) {
        self.inner.pointer_up(pointer_id, x, y);
    }

    /// Pointer capture lost.
    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self, pointer_id: u32) {
        self.inner.pointer_cancel(pointer_id);
    }

    /// Current display order of tile ids.
    pub fn order(&self) -> Vec<u32> {
        self.inner.order().to_vec()
    }

    /// Whether a drag is in progress.
    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }
}

impl Default for GridRunner {
    fn default() -> Self {
        Self::new()
    }
}
