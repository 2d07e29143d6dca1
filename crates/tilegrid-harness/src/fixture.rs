#![forbid(unsafe_code)]

//! A measured board over a known grid template.

use tilegrid_core::geometry::{DragRect, Point, Span};
use tilegrid_reorder::{GridTemplate, ReorderConfig, TileBoard};

/// A [`TileBoard`] over items `0..count`, laid out and measured from a
/// [`GridTemplate`], with the engine margin derived from the template gap.
#[derive(Debug, Clone)]
pub struct GridFixture {
    template: GridTemplate,
    board: TileBoard<u32>,
}

impl GridFixture {
    /// Build and measure a fixture with `count` tiles.
    #[must_use]
    pub fn new(count: usize, template: GridTemplate) -> Self {
        let items = (0..count as u32).collect();
        let mut board = TileBoard::new(items, ReorderConfig::from_template(&template));
        board.remeasure(&template);
        Self { template, board }
    }

    /// The template the fixture measures from.
    #[must_use]
    pub const fn template(&self) -> &GridTemplate {
        &self.template
    }

    /// The board under test.
    #[must_use]
    pub const fn board(&self) -> &TileBoard<u32> {
        &self.board
    }

    /// Mutable access to the board under test.
    pub fn board_mut(&mut self) -> &mut TileBoard<u32> {
        &mut self.board
    }

    /// Re-run the host measure pass (after an applied move).
    pub fn remeasure(&mut self) {
        let template = self.template;
        self.board.remeasure(&template);
    }

    /// The center of a display slot.
    #[must_use]
    pub fn slot_center(&self, index: usize) -> Point {
        self.template.slot(index).center()
    }

    /// A tile-sized drag box centered at `(cx, cy)`.
    #[must_use]
    pub fn drag_centered_at(&self, cx: f64, cy: f64) -> DragRect {
        let slot = self.template.slot(0);
        DragRect::new(
            Span::new(cx - slot.width / 2.0, cx + slot.width / 2.0),
            Span::new(cy - slot.height / 2.0, cy + slot.height / 2.0),
        )
    }

    /// Current display order.
    #[must_use]
    pub fn order(&self) -> &[u32] {
        self.board.order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_starts_measured_and_ordered() {
        let fixture = GridFixture::new(6, GridTemplate::new(3));
        assert_eq!(fixture.order(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(fixture.board().registry().iter_fresh().count(), 6);
    }

    #[test]
    fn drag_centered_matches_slot_when_aligned() {
        let fixture = GridFixture::new(4, GridTemplate::new(2));
        let c = fixture.slot_center(3);
        let drag = fixture.drag_centered_at(c.x, c.y);
        assert_eq!(drag.center(), c);
    }
}
