#![forbid(unsafe_code)]

//! Platform-independent grid controller.
//!
//! Adapts raw pointer input to the reorder engine: hit-tests the press
//! against measured tiles, tracks the grab offset inside the grabbed tile,
//! derives the live drag box on every move, and routes the decision's
//! outcome back to the host.
//!
//! # Failure Modes
//! - Press outside every measured tile → drag not initiated.
//! - Tick against a stale registry → decision skipped for that tick; the
//!   next measure pass heals it.
//! - Tick for a source the host never measured → surfaced as an error
//!   (host programming bug; guessing would corrupt the order).

use serde::Deserialize;
use web_time::Instant;

#[cfg(feature = "tracing")]
use tracing::trace;

use tilegrid_core::drag::DragRecognizer;
use tilegrid_core::event::{DragEvent, PointerEvent};
use tilegrid_core::geometry::{DragRect, Point, Span, TileRect};
use tilegrid_reorder::{GridTemplate, ReorderConfig, ReorderError, TileBoard};

/// Grid layout parameters as the host configures them.
///
/// Mirrors the CSS grid the host renders: fixed columns, uniform tile
/// size, uniform gaps. The `row_gap` doubles as the engine's row margin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GridLayoutSpec {
    pub columns: usize,
    pub tile_width: f64,
    pub tile_height: f64,
    pub column_gap: f64,
    pub row_gap: f64,
    #[serde(default)]
    pub origin_x: f64,
    #[serde(default)]
    pub origin_y: f64,
}

impl GridLayoutSpec {
    fn template(&self) -> GridTemplate {
        GridTemplate::new(self.columns)
            .origin(self.origin_x, self.origin_y)
            .tile_size(self.tile_width, self.tile_height)
            .gaps(self.column_gap, self.row_gap)
    }
}

/// The drag in progress: which tile, and where inside it the grab landed.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    source: usize,
    grab_dx: f64,
    grab_dy: f64,
    width: f64,
    height: f64,
}

/// Host-facing controller: pointer events in, order mutations out.
#[derive(Debug)]
pub struct GridController {
    board: TileBoard<u32>,
    template: Option<GridTemplate>,
    recognizer: DragRecognizer,
    active: Option<ActiveDrag>,
}

impl Default for GridController {
    fn default() -> Self {
        Self::new()
    }
}

impl GridController {
    /// Create an empty controller with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: TileBoard::new(Vec::new(), ReorderConfig::default()),
            template: None,
            recognizer: DragRecognizer::default(),
            active: None,
        }
    }

    /// Apply a layout spec: engine margin from the row gap, plus a
    /// template the controller uses to self-measure after each applied
    /// move (a browser host that measures real boxes may skip this and
    /// feed [`measure`](Self::measure) instead).
    pub fn apply_layout_spec(&mut self, spec: &GridLayoutSpec) {
        let template = spec.template();
        let items = self.board.order().to_vec();
        self.board = TileBoard::new(items, ReorderConfig::from_template(&template));
        self.board.remeasure(&template);
        self.template = Some(template);
        self.active = None;
        self.recognizer.reset();
    }

    /// Replace the item set. Any drag in progress is abandoned.
    pub fn set_items(&mut self, ids: &[u32]) {
        let config = *self.board.config();
        self.board = TileBoard::new(ids.to_vec(), config);
        if let Some(template) = self.template {
            self.board.remeasure(&template);
        }
        self.active = None;
        self.recognizer.reset();
    }

    /// Record one measured tile box (host measure pass).
    pub fn measure(&mut self, index: usize, left: f64, top: f64, width: f64, height: f64) {
        self.board
            .update_position(index, TileRect::new(left, top, width, height));
    }

    /// Start a new measure pass; all prior measurements become stale.
    pub fn begin_layout_pass(&mut self) {
        self.board.begin_layout_pass();
    }

    /// Read-only snapshot of the display order.
    #[must_use]
    pub fn order(&self) -> &[u32] {
        self.board.order()
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.recognizer.is_dragging()
    }

    /// Pointer pressed. Returns whether a measured tile was hit (and a
    /// potential drag armed).
    pub fn pointer_down(&mut self, pointer_id: u32, x: f64, y: f64) -> bool {
        if self.active.is_some() {
            // A second pointer pressing mid-gesture is ignored.
            return false;
        }
        let pos = Point::new(x, y);
        let Some((index, rect)) = self.hit_test(pos) else {
            return false;
        };
        self.recognizer
            .process(&PointerEvent::Down { pointer_id, pos }, Instant::now());
        self.active = Some(ActiveDrag {
            source: index,
            grab_dx: x - rect.left,
            grab_dy: y - rect.top,
            width: rect.width,
            height: rect.height,
        });
        true
    }

    /// Pointer moved. Returns whether the order changed this tick.
    ///
    /// A stale registry skips the tick; an unmeasured drag source is
    /// surfaced as the error it is.
    pub fn pointer_move(
        &mut self,
        pointer_id: u32,
        x: f64,
        y: f64,
    ) -> Result<bool, ReorderError> {
        let pos = Point::new(x, y);
        let events = self
            .recognizer
            .process(&PointerEvent::Move { pointer_id, pos }, Instant::now());

        let mut changed = false;
        for event in events {
            let DragEvent::Move { current, .. } = event else {
                continue;
            };
            changed |= self.drag_tick(current)?;
        }
        Ok(changed)
    }

    /// Pointer released; the drag (if any) ends.
    pub fn pointer_up(&mut self, pointer_id: u32, x: f64, y: f64) {
        let pos = Point::new(x, y);
        let events = self
            .recognizer
            .process(&PointerEvent::Up { pointer_id, pos }, Instant::now());
        if events.iter().any(DragEvent::is_terminal) || !self.recognizer.is_dragging() {
            self.active = None;
        }
    }

    /// Pointer capture lost; the drag (if any) is abandoned.
    pub fn pointer_cancel(&mut self, pointer_id: u32) {
        self.recognizer
            .process(&PointerEvent::Cancel { pointer_id }, Instant::now());
        self.active = None;
    }

    fn hit_test(&self, pos: Point) -> Option<(usize, TileRect)> {
        self.board
            .registry()
            .iter_fresh()
            .find(|(_, rect)| rect.contains(pos))
    }

    fn drag_tick(&mut self, pointer: Point) -> Result<bool, ReorderError> {
        let Some(ref mut active) = self.active else {
            return Ok(false);
        };
        let tile = TileRect::new(
            pointer.x - active.grab_dx,
            pointer.y - active.grab_dy,
            active.width,
            active.height,
        );
        let drag = DragRect::new(
            Span::new(tile.left, tile.right()),
            Span::new(tile.top, tile.bottom()),
        );
        match self.board.update_order(active.source, drag) {
            Ok(Some(applied)) => {
                active.source = applied.to;
                if let Some(template) = self.template {
                    self.board.remeasure(&template);
                }
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(ReorderError::StaleSource { .. }) => {
                // Transient measurement gap; the next layout pass heals it.
                #[cfg(feature = "tracing")]
                trace!(source = active.source, "skipped reorder tick on stale registry");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> GridLayoutSpec {
        GridLayoutSpec {
            columns: 3,
            tile_width: 90.0,
            tile_height: 100.0,
            column_gap: 10.0,
            row_gap: 20.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    fn controller_with_items(n: u32) -> GridController {
        let mut controller = GridController::new();
        controller.set_items(&(0..n).collect::<Vec<_>>());
        controller.apply_layout_spec(&spec());
        controller
    }

    #[test]
    fn layout_spec_parses_with_optional_origin() {
        let parsed: GridLayoutSpec = serde_json::from_str(
            r#"{"columns":3,"tile_width":90,"tile_height":100,"column_gap":10,"row_gap":20}"#,
        )
        .unwrap();
        assert_eq!(parsed.columns, 3);
        assert_eq!(parsed.origin_x, 0.0);
    }

    #[test]
    fn press_outside_tiles_does_not_arm() {
        let mut controller = controller_with_items(6);
        // Inside the column gap between tiles 0 and 1.
        assert!(!controller.pointer_down(1, 95.0, 50.0));
        assert!(!controller.pointer_move(1, 300.0, 50.0).unwrap());
    }

    #[test]
    fn sub_threshold_wiggle_changes_nothing() {
        let mut controller = controller_with_items(6);
        assert!(controller.pointer_down(1, 45.0, 50.0));
        assert!(!controller.pointer_move(1, 46.0, 50.0).unwrap());
        controller.pointer_up(1, 46.0, 50.0);
        assert_eq!(controller.order(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn drag_right_swaps_and_tracks_the_moved_tile() {
        let mut controller = controller_with_items(6);
        // Grab tile 0 at its center, drag past tile 1's midpoint (145).
        assert!(controller.pointer_down(1, 45.0, 50.0));
        assert!(controller.pointer_move(1, 150.0, 50.0).unwrap());
        assert_eq!(controller.order(), &[1, 0, 2, 3, 4, 5]);
        assert!(controller.is_dragging());

        // Keep going: the controller now tracks the tile at its new index.
        assert!(controller.pointer_move(1, 250.0, 50.0).unwrap());
        assert_eq!(controller.order(), &[1, 2, 0, 3, 4, 5]);
        controller.pointer_up(1, 250.0, 50.0);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn drag_down_a_row_via_grab_offset() {
        let mut controller = controller_with_items(6);
        // Grab tile 1 near its top-left corner rather than the center; the
        // drag box must follow the grab offset, not the pointer alone.
        assert!(controller.pointer_down(1, 105.0, 5.0));
        // Pointer at (105, 125) puts the tile box at (100, 120): squarely
        // on tile 4's slot.
        assert!(controller.pointer_move(1, 105.0, 125.0).unwrap());
        assert_eq!(controller.order(), &[0, 2, 3, 4, 1, 5]);
        controller.pointer_up(1, 105.0, 125.0);
    }

    #[test]
    fn stale_registry_skips_ticks_until_measured() {
        let mut controller = controller_with_items(6);
        assert!(controller.pointer_down(1, 45.0, 50.0));
        assert!(controller.pointer_move(1, 150.0, 50.0).unwrap());

        // Host invalidates mid-drag and hasn't re-measured yet.
        controller.begin_layout_pass();
        assert!(!controller.pointer_move(1, 250.0, 50.0).unwrap());

        // The measure pass arrives; the next tick works again.
        for (i, rect) in spec().template().layout(6).into_iter().enumerate() {
            controller.measure(i, rect.left, rect.top, rect.width, rect.height);
        }
        assert!(controller.pointer_move(1, 250.0, 50.0).unwrap());
        assert_eq!(controller.order(), &[1, 2, 0, 3, 4, 5]);
    }

    #[test]
    fn cancel_abandons_the_drag() {
        let mut controller = controller_with_items(6);
        assert!(controller.pointer_down(1, 45.0, 50.0));
        assert!(controller.pointer_move(1, 150.0, 50.0).unwrap());
        controller.pointer_cancel(1);
        assert!(!controller.is_dragging());
        // Further moves are inert.
        assert!(!controller.pointer_move(1, 250.0, 50.0).unwrap());
        assert_eq!(controller.order(), &[1, 0, 2, 3, 4, 5]);
    }
}
