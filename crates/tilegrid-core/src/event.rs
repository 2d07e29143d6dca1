#![forbid(unsafe_code)]

//! Pointer input and the semantic drag events derived from it.
//!
//! [`PointerEvent`] is the raw input delivered by the host on every pointer
//! callback. [`DragEvent`] is what the recognizer emits once the input
//! resolves into an actual drag.
//!
//! # Invariants
//! 1. Every drag sequence is well-formed: `Start` → zero or more `Move` →
//!    exactly one of `End` or `Cancel`.
//! 2. `Move` deltas are relative to the previous `Move` (or to `Start` for
//!    the first one), never to the gesture origin.
//! 3. A press that never crosses the start threshold emits nothing; the
//!    host is free to treat it as a click.

use web_time::Duration;

use crate::geometry::Point;

/// Raw pointer input from the host, one per pointer callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed.
    Down { pointer_id: u32, pos: Point },
    /// Pointer moved while pressed (or hovering; non-pressed moves are
    /// ignored by the recognizer).
    Move { pointer_id: u32, pos: Point },
    /// Pointer released.
    Up { pointer_id: u32, pos: Point },
    /// Pointer capture lost (browser `pointercancel`, focus loss).
    Cancel { pointer_id: u32 },
}

impl PointerEvent {
    /// The pointer id the event belongs to.
    #[must_use]
    pub const fn pointer_id(&self) -> u32 {
        match self {
            Self::Down { pointer_id, .. }
            | Self::Move { pointer_id, .. }
            | Self::Up { pointer_id, .. }
            | Self::Cancel { pointer_id } => *pointer_id,
        }
    }

    /// The position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Down { pos, .. } | Self::Move { pos, .. } | Self::Up { pos, .. } => Some(*pos),
            Self::Cancel { .. } => None,
        }
    }
}

/// Semantic drag lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The press crossed the start threshold; a drag is now in progress.
    Start {
        /// Where the pointer was pressed (not where the threshold was crossed).
        origin: Point,
    },
    /// The pointer moved during an active drag.
    Move {
        current: Point,
        /// Movement since the last `Move` (dx, dy).
        delta: (f64, f64),
    },
    /// The drag finished with a release.
    End {
        origin: Point,
        end: Point,
        /// Time from press to release.
        duration: Duration,
    },
    /// The drag was abandoned (capture loss, programmatic cancel).
    Cancel,
}

impl DragEvent {
    /// Whether this event terminates the drag.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::End { .. } | Self::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_id_accessor() {
        let ev = PointerEvent::Move {
            pointer_id: 7,
            pos: Point::new(1.0, 2.0),
        };
        assert_eq!(ev.pointer_id(), 7);
        assert_eq!(ev.position(), Some(Point::new(1.0, 2.0)));
        assert_eq!(PointerEvent::Cancel { pointer_id: 7 }.position(), None);
    }

    #[test]
    fn terminal_events() {
        assert!(DragEvent::Cancel.is_terminal());
        assert!(
            DragEvent::End {
                origin: Point::default(),
                end: Point::default(),
                duration: Duration::ZERO,
            }
            .is_terminal()
        );
        assert!(!DragEvent::Start {
            origin: Point::default()
        }
        .is_terminal());
    }
}
