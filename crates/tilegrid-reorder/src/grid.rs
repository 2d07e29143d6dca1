#![forbid(unsafe_code)]

//! Fixed-column wrapping grid geometry.
//!
//! [`GridTemplate`] maps a display index to the slot rectangle the host
//! layout would give it: row-major, a fixed number of columns, uniform tile
//! size, uniform gaps. It is the canonical source of the inter-row gap the
//! reorder margin must match, and the way native hosts and tests produce
//! the measurements a real browser host would report per layout pass.

use tilegrid_core::geometry::{Point, TileRect};

use crate::registry::{LayoutGeneration, PositionRegistry};

/// Slot geometry for a fixed-column, row-major wrapping grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTemplate {
    origin: Point,
    columns: usize,
    tile_width: f64,
    tile_height: f64,
    column_gap: f64,
    row_gap: f64,
}

impl GridTemplate {
    /// Default gap between rows, in layout pixels.
    pub const DEFAULT_ROW_GAP: f64 = 16.0;
    /// Default gap between columns, in layout pixels.
    pub const DEFAULT_COLUMN_GAP: f64 = 16.0;
    /// Default tile extent, in layout pixels.
    pub const DEFAULT_TILE_SIZE: (f64, f64) = (160.0, 120.0);

    /// Create a template with `columns` columns and default metrics.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            origin: Point::default(),
            columns: columns.max(1),
            tile_width: Self::DEFAULT_TILE_SIZE.0,
            tile_height: Self::DEFAULT_TILE_SIZE.1,
            column_gap: Self::DEFAULT_COLUMN_GAP,
            row_gap: Self::DEFAULT_ROW_GAP,
        }
    }

    /// Set the top-left corner of slot 0.
    #[must_use]
    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    /// Set the tile extent.
    #[must_use]
    pub fn tile_size(mut self, width: f64, height: f64) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    /// Set the inter-column and inter-row gaps.
    #[must_use]
    pub fn gaps(mut self, column_gap: f64, row_gap: f64) -> Self {
        self.column_gap = column_gap;
        self.row_gap = row_gap;
        self
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The inter-row gap, which the engine's row margin must equal.
    #[must_use]
    pub const fn row_gap(&self) -> f64 {
        self.row_gap
    }

    /// The slot rectangle for a display index.
    #[must_use]
    pub fn slot(&self, index: usize) -> TileRect {
        let col = index % self.columns;
        let row = index / self.columns;
        TileRect::new(
            self.origin.x + col as f64 * (self.tile_width + self.column_gap),
            self.origin.y + row as f64 * (self.tile_height + self.row_gap),
            self.tile_width,
            self.tile_height,
        )
    }

    /// Slot rectangles for `count` tiles in display order.
    #[must_use]
    pub fn layout(&self, count: usize) -> Vec<TileRect> {
        (0..count).map(|i| self.slot(i)).collect()
    }

    /// Run one full measurement pass over `registry` for `count` tiles.
    ///
    /// Equivalent to the host re-measuring every tile after a re-render:
    /// bumps the layout generation, then records every slot.
    pub fn measure_into(&self, registry: &mut PositionRegistry, count: usize) -> LayoutGeneration {
        let generation = registry.begin_layout_pass();
        for index in 0..count {
            registry.update_position(index, self.slot(index));
        }
        generation
    }
}

impl Default for GridTemplate {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_wrap_row_major() {
        let template = GridTemplate::new(3).tile_size(90.0, 60.0).gaps(10.0, 20.0);
        assert_eq!(template.slot(0), TileRect::new(0.0, 0.0, 90.0, 60.0));
        assert_eq!(template.slot(2), TileRect::new(200.0, 0.0, 90.0, 60.0));
        // Index 3 wraps to the second row, first column.
        assert_eq!(template.slot(3), TileRect::new(0.0, 80.0, 90.0, 60.0));
        assert_eq!(template.slot(4).left, template.slot(1).left);
    }

    #[test]
    fn origin_offsets_every_slot() {
        let template = GridTemplate::new(2)
            .origin(50.0, 25.0)
            .tile_size(100.0, 100.0)
            .gaps(0.0, 0.0);
        assert_eq!(template.slot(0).left, 50.0);
        assert_eq!(template.slot(0).top, 25.0);
        assert_eq!(template.slot(3), TileRect::new(150.0, 125.0, 100.0, 100.0));
    }

    #[test]
    fn measure_into_refreshes_the_registry() {
        let template = GridTemplate::new(2);
        let mut registry = PositionRegistry::new();
        template.measure_into(&mut registry, 4);
        assert_eq!(registry.iter_fresh().count(), 4);
        assert_eq!(registry.rect_at(3), Some(template.slot(3)));

        // A later pass supersedes earlier measurements wholesale.
        let generation = template.measure_into(&mut registry, 2);
        assert_eq!(registry.generation(), generation);
        assert_eq!(registry.iter_fresh().count(), 2);
        assert_eq!(registry.rect_at(3), None);
    }

    #[test]
    fn zero_columns_clamps_to_one() {
        let template = GridTemplate::new(0);
        assert_eq!(template.columns(), 1);
        assert_eq!(template.slot(1).left, template.slot(0).left);
        assert!(template.slot(1).top > template.slot(0).top);
    }
}
