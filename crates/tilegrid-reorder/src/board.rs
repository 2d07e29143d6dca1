#![forbid(unsafe_code)]

//! The coordinator the host UI talks to.
//!
//! [`TileBoard`] owns the display [`Order`], the [`PositionRegistry`], and
//! the [`ReorderEngine`] as one explicitly owned object, so the mutable
//! registry is passed into both the measurement and reorder entry points
//! instead of floating as ambient state.
//!
//! # Control flow
//! 1. The host measures every tile and calls
//!    [`update_position`](TileBoard::update_position) (or
//!    [`remeasure`](TileBoard::remeasure) with a template).
//! 2. On every drag-move tick it calls
//!    [`update_order`](TileBoard::update_order) with the dragged tile's
//!    index and live box.
//! 3. An applied move mutates the order, bumps the layout generation, and
//!    is reported as a [`SlotMove`]; the host re-renders from
//!    [`order`](TileBoard::order) and measures again.
//!
//! Single-threaded: the registry is written only by the measure pass, the
//! order only by the reorder decision. Ending a drag is simply ceasing to
//! call `update_order`; the board holds no per-drag resources.

use tilegrid_core::geometry::{DragRect, TileRect};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::engine::{ReorderConfig, ReorderEngine, ReorderError};
use crate::grid::GridTemplate;
use crate::order::Order;
use crate::registry::{LayoutGeneration, PositionRegistry};

/// An applied reorder: the dragged tile left `from` and now rests at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotMove {
    /// Display index the tile occupied when the decision ran.
    pub from: usize,
    /// Display index the tile rests at after the move.
    pub to: usize,
    /// The layout generation opened by this move; every measurement is
    /// stale until the host re-measures under it.
    pub generation: LayoutGeneration,
}

/// Owns the order, the registry, and the engine for one grid.
#[derive(Debug, Clone)]
pub struct TileBoard<T> {
    order: Order<T>,
    registry: PositionRegistry,
    engine: ReorderEngine,
}

impl<T> TileBoard<T> {
    /// Create a board over the given items.
    #[must_use]
    pub fn new(items: Vec<T>, config: ReorderConfig) -> Self {
        let registry = PositionRegistry::with_capacity(items.len());
        Self {
            order: Order::new(items),
            registry,
            engine: ReorderEngine::new(config),
        }
    }

    /// Read-only snapshot of the display order.
    #[must_use]
    pub fn order(&self) -> &[T] {
        self.order.as_slice()
    }

    /// Number of items on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the board holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The measurement registry.
    #[must_use]
    pub const fn registry(&self) -> &PositionRegistry {
        &self.registry
    }

    /// The engine's tolerances.
    #[must_use]
    pub const fn config(&self) -> &ReorderConfig {
        self.engine.config()
    }

    /// Start a new measurement pass; all prior measurements become stale.
    pub fn begin_layout_pass(&mut self) -> LayoutGeneration {
        self.registry.begin_layout_pass()
    }

    /// Record the measured box for one display index.
    pub fn update_position(&mut self, index: usize, rect: TileRect) {
        self.registry.update_position(index, rect);
    }

    /// Measure every tile from a grid template in one pass.
    pub fn remeasure(&mut self, template: &GridTemplate) -> LayoutGeneration {
        template.measure_into(&mut self.registry, self.order.len())
    }

    /// Decide and, if needed, apply a reorder for one drag-move tick.
    ///
    /// Computes the target slot for the tile at `source`; when it differs,
    /// moves the order entry (single remove-then-insert) and opens a new
    /// layout generation. Returns the applied move, or `None` when the
    /// tile stays put. On error the order is untouched.
    pub fn update_order(
        &mut self,
        source: usize,
        drag: DragRect,
    ) -> Result<Option<SlotMove>, ReorderError> {
        let target = self.engine.compute_target_index(source, drag, &self.registry)?;
        if target == source {
            return Ok(None);
        }
        if !self.order.move_item(source, target) {
            // Insert-at-end resolved to the slot the tile already holds.
            #[cfg(feature = "tracing")]
            trace!(source, target, "reorder resolved to a no-op");
            return Ok(None);
        }
        let to = target.min(self.order.len() - 1);
        let generation = self.registry.begin_layout_pass();
        #[cfg(feature = "tracing")]
        debug!(
            from = source,
            to,
            generation = generation.value(),
            "slot move applied"
        );
        Ok(Some(SlotMove {
            from: source,
            to,
            generation,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::geometry::Span;

    fn board_3x2() -> (TileBoard<char>, GridTemplate) {
        // 90x60 tiles, gap 10/20: lefts 0/100/200, row tops 0/80.
        let template = GridTemplate::new(3).tile_size(90.0, 60.0).gaps(10.0, 20.0);
        let mut board = TileBoard::new(
            vec!['A', 'B', 'C', 'D', 'E', 'F'],
            ReorderConfig::from_template(&template),
        );
        board.remeasure(&template);
        (board, template)
    }

    fn drag_at(cx: f64, cy: f64) -> DragRect {
        DragRect::new(Span::new(cx - 45.0, cx + 45.0), Span::new(cy - 30.0, cy + 30.0))
    }

    #[test]
    fn config_margin_comes_from_template_gap() {
        let (board, template) = board_3x2();
        assert_eq!(board.config().row_margin, template.row_gap());
    }

    #[test]
    fn unmoved_drag_applies_nothing() {
        let (mut board, _) = board_3x2();
        let moved = board.update_order(1, drag_at(145.0, 30.0)).unwrap();
        assert_eq!(moved, None);
        assert_eq!(board.order(), &['A', 'B', 'C', 'D', 'E', 'F']);
        // No move, no invalidation: the same tick can run again.
        assert!(board.update_order(1, drag_at(145.0, 30.0)).is_ok());
    }

    #[test]
    fn applied_move_mutates_order_and_invalidates() {
        let (mut board, _) = board_3x2();
        // Drag 'B' (index 1) past 'C''s midpoint (245).
        let moved = board.update_order(1, drag_at(250.0, 30.0)).unwrap().unwrap();
        assert_eq!((moved.from, moved.to), (1, 2));
        assert_eq!(board.order(), &['A', 'C', 'B', 'D', 'E', 'F']);
        assert_eq!(board.registry().iter_fresh().count(), 0);

        // Next tick hits the stale guard until the host re-measures.
        let err = board.update_order(2, drag_at(250.0, 30.0)).unwrap_err();
        assert!(matches!(err, ReorderError::StaleSource { index: 2, .. }));
    }

    #[test]
    fn continued_drag_walks_one_slot_per_measured_tick() {
        let (mut board, template) = board_3x2();
        // Drag 'A' rightwards across the whole top row, re-measuring after
        // each applied move as the host would.
        let mut source = 0;
        for _ in 0..2 {
            if let Some(mv) = board.update_order(source, drag_at(260.0, 30.0)).unwrap() {
                source = mv.to;
                board.remeasure(&template);
            }
        }
        assert_eq!(board.order(), &['B', 'C', 'A', 'D', 'E', 'F']);
        assert_eq!(source, 2);
    }

    #[test]
    fn error_leaves_order_untouched() {
        let (mut board, _) = board_3x2();
        let err = board.update_order(17, drag_at(0.0, 0.0)).unwrap_err();
        assert_eq!(err, ReorderError::UnregisteredSource { index: 17 });
        assert_eq!(board.order(), &['A', 'B', 'C', 'D', 'E', 'F']);
    }

    #[test]
    fn row_below_move_lands_in_lower_row() {
        let (mut board, _) = board_3x2();
        // Drag 'B' (index 1) straight down into row 1; below-neighbor is
        // index 4 ('E', midpoint 145).
        let moved = board.update_order(1, drag_at(145.0, 110.0)).unwrap().unwrap();
        assert_eq!((moved.from, moved.to), (1, 4));
        assert_eq!(board.order(), &['A', 'C', 'D', 'E', 'B', 'F']);
    }
}
