#![forbid(unsafe_code)]

//! The reorder decision: given a live drag box, which slot should the
//! dragged tile occupy?
//!
//! [`ReorderEngine::compute_target_index`] is a pure function of its inputs
//! (no hidden counters, no per-drag state), so repeated calls with an
//! unchanged drag box return the same target. The cases run in priority
//! order and the first match wins:
//!
//! 1. **Same row**: the drag's vertical center is still inside the source
//!    tile's row band (`top - margin` to `bottom + margin`, exclusive).
//!    At most one slot transition per call, decided by whether the drag's
//!    horizontal center has crossed the adjacent neighbor's midpoint.
//! 2. **Row above**: the nearest tile above in the same column decides the
//!    insertion point: after it if its midpoint is left of the drag
//!    center, at it otherwise.
//! 3. **Row below**: symmetric to 2.
//! 4. **Fallback**: clamp (only reachable with a NaN drag center).
//!
//! # Assumptions
//! The same-column test compares `left` by exact equality, which is valid
//! for fixed-column grids where every slot in a column shares one
//! template-computed `left`. Masonry or variable-width layouts are out of
//! scope. The row-neighbor search is a linear filter-then-extremum scan,
//! O(n) per call; fine for the tens of tiles a dashboard holds.

use std::fmt;

use tilegrid_core::geometry::{DragRect, TileRect};

use crate::grid::GridTemplate;
use crate::registry::{LayoutGeneration, PositionRegistry, SlotState};

/// Tolerances for the reorder decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderConfig {
    /// How far the drag's vertical center may leave the source tile's own
    /// row band before it counts as a row change.
    ///
    /// Must match the host layout's inter-row gap; a mismatch makes
    /// row-detection misfire. Default: [`GridTemplate::DEFAULT_ROW_GAP`].
    pub row_margin: f64,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            row_margin: GridTemplate::DEFAULT_ROW_GAP,
        }
    }
}

impl ReorderConfig {
    /// Derive the margin from the template that lays the grid out, keeping
    /// the margin/gap matching rule structural instead of conventional.
    #[must_use]
    pub fn from_template(template: &GridTemplate) -> Self {
        Self {
            row_margin: template.row_gap(),
        }
    }
}

/// Hard failures of the reorder decision.
///
/// Missing *neighbors* are normal control flow ("no change"), never
/// errors; only a missing or stale measurement for the drag source itself
/// is surfaced, because silently guessing a target would corrupt the
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    /// The drag source index was never measured.
    UnregisteredSource { index: usize },
    /// The drag source was measured under an older layout generation; the
    /// host must finish its measure pass before querying again.
    StaleSource {
        index: usize,
        measured: LayoutGeneration,
        current: LayoutGeneration,
    },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnregisteredSource { index } => {
                write!(f, "drag source index {index} was never measured")
            }
            Self::StaleSource {
                index,
                measured,
                current,
            } => write!(
                f,
                "drag source index {index} measured at generation {} but layout is at {}",
                measured.value(),
                current.value()
            ),
        }
    }
}

impl std::error::Error for ReorderError {}

/// The reorder decision function, carrying only its configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReorderEngine {
    config: ReorderConfig,
}

impl ReorderEngine {
    /// Create an engine with the given tolerances.
    #[must_use]
    pub const fn new(config: ReorderConfig) -> Self {
        Self { config }
    }

    /// The engine's tolerances.
    #[must_use]
    pub const fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Compute the slot the dragged tile should occupy this tick.
    ///
    /// `source` is the tile's display index at the start of this decision
    /// and must have a current-generation measurement. The result is always
    /// within `[0, registry.len()]`; `len` means insert-at-end. Pure:
    /// no side effects, deterministic for fixed inputs.
    pub fn compute_target_index(
        &self,
        source: usize,
        drag: DragRect,
        registry: &PositionRegistry,
    ) -> Result<usize, ReorderError> {
        let own = match registry.lookup(source) {
            SlotState::Fresh(rect) => rect,
            SlotState::Empty => return Err(ReorderError::UnregisteredSource { index: source }),
            SlotState::Stale { measured_at } => {
                return Err(ReorderError::StaleSource {
                    index: source,
                    measured: measured_at,
                    current: registry.generation(),
                });
            }
        };

        let margin = self.config.row_margin;
        let cx = drag.center_x();
        let cy = drag.center_y();

        let target = if cy > own.top - margin && cy < own.bottom() + margin {
            self.same_row_target(source, cx, own, registry)
        } else if cy <= own.top - margin {
            self.row_above_target(source, cx, own, registry)
        } else if cy >= own.bottom() + margin {
            self.row_below_target(source, cx, own, registry)
        } else {
            // NaN drag center; keep the tile where it is.
            source.min(registry.len())
        };
        Ok(target)
    }

    /// Same-row case: step at most one slot toward the drag's horizontal
    /// center, and only once the center has crossed the neighbor's own
    /// midpoint.
    fn same_row_target(
        &self,
        source: usize,
        cx: f64,
        own: TileRect,
        registry: &PositionRegistry,
    ) -> usize {
        let own_mid = own.mid_x();
        if cx > own_mid {
            let Some(next) = registry.rect_at(source + 1) else {
                return source;
            };
            if next.top != own.top {
                // The next index wrapped to the following row.
                return source;
            }
            if cx > next.mid_x() { source + 1 } else { source }
        } else if cx < own_mid {
            let Some(prev) = source.checked_sub(1).and_then(|i| registry.rect_at(i)) else {
                return source;
            };
            if prev.top != own.top {
                return source;
            }
            if cx < prev.mid_x() { source - 1 } else { source }
        } else {
            // Dead center over its own slot: no swap.
            source
        }
    }

    /// Row-above case: the nearest tile above in the same column anchors
    /// the insertion, just after it when its midpoint is strictly left of
    /// the drag center, at it otherwise.
    fn row_above_target(
        &self,
        source: usize,
        cx: f64,
        own: TileRect,
        registry: &PositionRegistry,
    ) -> usize {
        let mut nearest: Option<(usize, TileRect)> = None;
        for (i, rect) in registry.iter_fresh() {
            if rect.left == own.left && rect.top < own.top {
                let closer = match nearest {
                    None => true,
                    Some((_, best)) => rect.top > best.top,
                };
                if closer {
                    nearest = Some((i, rect));
                }
            }
        }
        match nearest {
            // Already at the top of this column.
            None => source,
            Some((i, neighbor)) => {
                if neighbor.mid_x() < cx {
                    i + 1
                } else {
                    i
                }
            }
        }
    }

    /// Row-below case: symmetric to row-above, with the comparison and
    /// offset mirrored (`<=` and `-1`).
    fn row_below_target(
        &self,
        source: usize,
        cx: f64,
        own: TileRect,
        registry: &PositionRegistry,
    ) -> usize {
        let mut nearest: Option<(usize, TileRect)> = None;
        for (i, rect) in registry.iter_fresh() {
            if rect.left == own.left && rect.top > own.top {
                let closer = match nearest {
                    None => true,
                    Some((_, best)) => rect.top < best.top,
                };
                if closer {
                    nearest = Some((i, rect));
                }
            }
        }
        match nearest {
            // Already at the bottom of this column.
            None => source,
            Some((i, neighbor)) => {
                if neighbor.mid_x() <= cx {
                    i
                } else {
                    i.saturating_sub(1)
                }
            }
        }
    }
}
