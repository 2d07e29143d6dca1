#![forbid(unsafe_code)]

//! Positional store of last-measured tile boxes.
//!
//! The registry is keyed by *current display index*, not by stable tile
//! identity. That makes every entry stale the moment the order changes:
//! index 3's box describes whatever tile sat at slot 3 when the host last
//! measured. To keep that staleness out of the "remember to call things in
//! the right order" category, each entry is stamped with the
//! [`LayoutGeneration`] current at measurement time, and readers only see
//! entries from the live generation.
//!
//! # Invariants
//! 1. `update_position` stamps the entry with the registry's current
//!    generation; `begin_layout_pass` bumps it, so all prior entries read
//!    as absent until re-measured.
//! 2. Lookups never fault: out-of-range and stale indices are `None`.
//! 3. Overwriting a slot is idempotent and does not allocate once the slot
//!    vector has grown to cover the index.

use tilegrid_core::geometry::TileRect;

/// Monotonic token identifying one measurement pass.
///
/// Produced by [`PositionRegistry::begin_layout_pass`]; compared to decide
/// whether a measured box still describes the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LayoutGeneration(u64);

impl LayoutGeneration {
    /// The raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy)]
struct MeasuredBox {
    rect: TileRect,
    measured_at: LayoutGeneration,
}

/// How a slot lookup resolved, for callers that must distinguish "never
/// measured" from "measured under an older layout".
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SlotState {
    /// No measurement was ever recorded for this index.
    Empty,
    /// A measurement exists but predates the current generation.
    Stale { measured_at: LayoutGeneration },
    /// A current-generation measurement.
    Fresh(TileRect),
}

/// Mutable store of the last-measured bounding box for every tile in the
/// grid, keyed by display index.
///
/// Written by exactly one actor (the host's measure pass); read by the
/// reorder engine. Single-threaded, no interior locking.
#[derive(Debug, Clone, Default)]
pub struct PositionRegistry {
    slots: Vec<Option<MeasuredBox>>,
    generation: LayoutGeneration,
}

impl PositionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with room for `n` slots.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            slots: Vec::with_capacity(n),
            generation: LayoutGeneration::default(),
        }
    }

    /// The current layout generation.
    #[must_use]
    pub const fn generation(&self) -> LayoutGeneration {
        self.generation
    }

    /// Start a new measurement pass.
    ///
    /// Every previously recorded box becomes stale; returns the new
    /// generation that subsequent [`update_position`](Self::update_position)
    /// calls will stamp.
    pub fn begin_layout_pass(&mut self) -> LayoutGeneration {
        self.generation = self.generation.next();
        self.generation
    }

    /// Record or overwrite the measured box for `index`.
    ///
    /// Callable at measure-pass frequency; grows the slot vector on first
    /// sight of an index and overwrites in place afterwards.
    pub fn update_position(&mut self, index: usize, rect: TileRect) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(MeasuredBox {
            rect,
            measured_at: self.generation,
        });
    }

    /// The current-generation box for `index`, if one exists.
    ///
    /// Out-of-range, never-measured, and stale indices all read as `None`:
    /// "edge of the collection", not an error.
    #[must_use]
    pub fn rect_at(&self, index: usize) -> Option<TileRect> {
        match self.lookup(index) {
            SlotState::Fresh(rect) => Some(rect),
            SlotState::Empty | SlotState::Stale { .. } => None,
        }
    }

    pub(crate) fn lookup(&self, index: usize) -> SlotState {
        match self.slots.get(index).copied().flatten() {
            None => SlotState::Empty,
            Some(slot) if slot.measured_at == self.generation => SlotState::Fresh(slot.rect),
            Some(slot) => SlotState::Stale {
                measured_at: slot.measured_at,
            },
        }
    }

    /// Number of slots ever registered (including stale ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot was ever registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over current-generation boxes with their display indices.
    pub fn iter_fresh(&self) -> impl Iterator<Item = (usize, TileRect)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.filter(|s| s.measured_at == self.generation)
                .map(|s| (i, s.rect))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_reads_are_none() {
        let reg = PositionRegistry::new();
        assert_eq!(reg.rect_at(0), None);
        assert_eq!(reg.rect_at(100), None);
    }

    #[test]
    fn overwrite_is_idempotent() {
        let mut reg = PositionRegistry::new();
        let r = TileRect::new(0.0, 0.0, 90.0, 60.0);
        reg.update_position(2, r);
        reg.update_position(2, r);
        assert_eq!(reg.rect_at(2), Some(r));
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.rect_at(0), None);
    }

    #[test]
    fn layout_pass_invalidates_all() {
        let mut reg = PositionRegistry::new();
        reg.update_position(0, TileRect::new(0.0, 0.0, 90.0, 60.0));
        reg.update_position(1, TileRect::new(100.0, 0.0, 90.0, 60.0));
        assert_eq!(reg.iter_fresh().count(), 2);

        let generation = reg.begin_layout_pass();
        assert_eq!(reg.generation(), generation);
        assert_eq!(reg.rect_at(0), None);
        assert_eq!(reg.iter_fresh().count(), 0);
        assert_eq!(
            reg.lookup(0),
            SlotState::Stale {
                measured_at: LayoutGeneration::default()
            }
        );

        // Re-measuring under the new generation makes the slot visible again.
        reg.update_position(0, TileRect::new(0.0, 0.0, 90.0, 60.0));
        assert!(reg.rect_at(0).is_some());
        assert_eq!(reg.rect_at(1), None);
    }

    #[test]
    fn iter_fresh_skips_holes() {
        let mut reg = PositionRegistry::new();
        reg.update_position(3, TileRect::new(0.0, 120.0, 90.0, 60.0));
        let fresh: Vec<usize> = reg.iter_fresh().map(|(i, _)| i).collect();
        assert_eq!(fresh, vec![3]);
    }
}
